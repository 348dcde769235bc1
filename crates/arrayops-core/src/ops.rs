//! The array operations — Sort, Maximum, Sum
//!
//! A closed set of variants implementing the three-operation protocol:
//! check preconditions, execute, get contract. Operations are stateless
//! and take their input by reference; `None` models an absent array
//! (the original UI could hand the model a null reference, which only Sum
//! distinguishes from an empty one).
//!
//! # Guarantees
//!
//! - `check_preconditions` is a pure predicate: never fails, never mutates
//! - `execute` re-validates the precondition through [`guard::require`] and
//!   returns a freshly allocated result; the input is never modified
//! - every `execute` verifies its postcondition before returning, on every
//!   build profile

use crate::contract::OperationContract;
use crate::guard;
use crate::{Error, Result};

// ── Operation Variants ────────────────────────────────────

/// One of the available array operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayOp {
    /// Order the elements by non-decreasing value
    Sort,
    /// Find the maximum element
    Maximum,
    /// Sum all elements (0 for an empty array)
    Sum,
}

impl ArrayOp {
    /// The fixed ordered list of available operations, exposed once to the
    /// presentation layer at startup.
    pub const ALL: [ArrayOp; 3] = [ArrayOp::Sort, ArrayOp::Maximum, ArrayOp::Sum];

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            ArrayOp::Sort => "Sort",
            ArrayOp::Maximum => "Maximum",
            ArrayOp::Sum => "Sum",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            ArrayOp::Sort => "Sort the array in ascending order",
            ArrayOp::Maximum => "Find the maximum element",
            ArrayOp::Sum => "Compute the sum of the elements",
        }
    }

    /// Pure pre-flight predicate. Sort and Maximum need a present,
    /// non-empty array; Sum accepts an empty array but not an absent one.
    pub fn check_preconditions(&self, array: Option<&[i64]>) -> bool {
        match self {
            ArrayOp::Sort | ArrayOp::Maximum => array.is_some_and(|a| !a.is_empty()),
            ArrayOp::Sum => array.is_some(),
        }
    }

    /// Execute the operation, returning a newly allocated result sequence.
    ///
    /// Re-validates the precondition internally and fails fast with a
    /// `PreconditionViolation` naming the failed condition, even if the
    /// caller never queried `check_preconditions`.
    ///
    /// # Errors
    /// - `PreconditionViolation` on empty (Sort, Maximum) or absent (Sum)
    ///   input
    /// - `Overflow` when Sum exceeds the i64 range
    /// - `PostconditionViolation` if the internal consistency check fails
    pub fn execute(&self, array: Option<&[i64]>) -> Result<Vec<i64>> {
        match self {
            ArrayOp::Sort => execute_sort(array),
            ArrayOp::Maximum => execute_maximum(array),
            ArrayOp::Sum => execute_sum(array),
        }
    }

    /// The fixed textual contract for this variant. Freshly constructed on
    /// each request; every field is non-empty.
    pub fn contract(&self) -> OperationContract {
        match self {
            ArrayOp::Sort => OperationContract {
                precondition: "Array is not empty".into(),
                postcondition: "Array is ordered by non-decreasing value, \
                                the multiset of elements is preserved"
                    .into(),
                effects: "The input array is not modified, a new sorted array is returned".into(),
                valid_example: "Input: [3, 1, 2] -> Output: [1, 2, 3]".into(),
                invalid_example: "Input: [] -> Error: array must not be empty".into(),
            },
            ArrayOp::Maximum => OperationContract {
                precondition: "Array is not empty".into(),
                postcondition: "The maximum element of the array is returned".into(),
                effects: "The input array is not modified".into(),
                valid_example: "Input: [3, 1, 5, 2] -> Output: [5]".into(),
                invalid_example: "Input: [] -> Error: array must not be empty".into(),
            },
            ArrayOp::Sum => OperationContract {
                precondition: "Array is present".into(),
                postcondition: "The sum of all elements is returned (0 for an empty array)".into(),
                effects: "The input array is not modified".into(),
                valid_example: "Input: [1, 2, 3] -> Output: [6]".into(),
                invalid_example: "Input: absent -> Error: array must not be absent".into(),
            },
        }
    }
}

impl std::fmt::Display for ArrayOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Execution ─────────────────────────────────────────────

fn execute_sort(array: Option<&[i64]>) -> Result<Vec<i64>> {
    guard::require(
        ArrayOp::Sort.check_preconditions(array),
        "array must not be empty",
    )?;
    let input = array.unwrap_or_default();

    let mut result = input.to_vec();
    result.sort_unstable();

    verify(is_non_decreasing(&result), "result must be sorted")?;
    verify(
        is_same_multiset(input, &result),
        "result must preserve the multiset of elements",
    )?;
    Ok(result)
}

fn execute_maximum(array: Option<&[i64]>) -> Result<Vec<i64>> {
    guard::require(
        ArrayOp::Maximum.check_preconditions(array),
        "array must not be empty",
    )?;
    let input = array.unwrap_or_default();

    let max = input.iter().copied().max().unwrap_or(i64::MIN);
    let result = vec![max];

    verify(result.len() == 1, "result must hold exactly one element")?;
    verify(
        input.iter().all(|&v| v <= result[0]) && input.contains(&result[0]),
        "result must be the maximum element",
    )?;
    Ok(result)
}

fn execute_sum(array: Option<&[i64]>) -> Result<Vec<i64>> {
    guard::require(
        ArrayOp::Sum.check_preconditions(array),
        "array must not be absent",
    )?;
    let input = array.unwrap_or_default();

    // Overflow policy: checked 64-bit addition, fail loudly instead of
    // wrapping or saturating
    let sum = input.iter().try_fold(0i64, |acc, &v| {
        acc.checked_add(v)
            .ok_or_else(|| Error::Overflow("sum exceeds the 64-bit integer range".into()))
    })?;
    let result = vec![sum];

    verify(result.len() == 1, "result must hold exactly one element")?;
    Ok(result)
}

/// Always-active postcondition check, active in every build profile
fn verify(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::PostconditionViolation(message.to_string()))
    }
}

// ── Invariant Predicates ──────────────────────────────────

/// True when every element is less than or equal to its successor
pub fn is_non_decreasing(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// True when both slices contain the same elements with the same
/// multiplicities, regardless of order
pub fn is_same_multiset(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
