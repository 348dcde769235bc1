//! Operation contract — human-readable description of one operation
//!
//! An immutable value object with five text fields: precondition,
//! postcondition, side effects, and one valid/invalid example pair.
//! Produced on demand by an operation; every field is non-empty.

/// The textual contract of a single array operation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OperationContract {
    /// What must hold before the operation runs meaningfully
    pub precondition: String,
    /// What the result is guaranteed to satisfy when the precondition held
    pub postcondition: String,
    /// Side effects on the input (none of the operations mutate it)
    pub effects: String,
    /// One valid usage example
    pub valid_example: String,
    /// One invalid usage example
    pub invalid_example: String,
}
