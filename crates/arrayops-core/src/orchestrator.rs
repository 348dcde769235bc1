//! Operation orchestrator — the display-technology-free view-model core
//!
//! Holds the currently selected operation, the raw input text, and the
//! derived display state (result string, precondition/postcondition flags,
//! status message). Every mutation is an explicit transition function that
//! deterministically recomputes the derived fields before returning, so the
//! precondition flag never goes stale relative to the input/operation pair.
//!
//! The orchestrator is also the single recovery boundary: parse and
//! execution failures are caught here and translated into the
//! result-marker/flag/status triple, never propagated to the caller.

use crate::ops::ArrayOp;
use crate::parser;
use crate::OperationContract;

/// Fixed display value shown in place of a result when execution failed.
/// Distinct from any valid bracketed result.
pub const RESULT_ERROR_MARKER: &str = "error";

// ── Orchestrator State ────────────────────────────────────

/// Stateful coordinator driving operation selection, validation, and
/// execution for one presentation front end
#[derive(Debug, Clone)]
pub struct Orchestrator {
    current_op: Option<ArrayOp>,
    input_text: String,
    result: String,
    precondition_met: bool,
    postcondition_met: bool,
    status: String,
}

impl Orchestrator {
    /// Neutral starting state: no operation selected, empty input
    pub fn new() -> Self {
        let mut orch = Orchestrator {
            current_op: None,
            input_text: String::new(),
            result: String::new(),
            precondition_met: false,
            postcondition_met: false,
            status: String::new(),
        };
        orch.validate_preconditions();
        orch
    }

    // ── Transitions ───────────────────────────────────────

    /// Select an operation and re-validate preconditions against the
    /// current input text
    pub fn select_operation(&mut self, op: ArrayOp) {
        self.current_op = Some(op);
        self.validate_preconditions();
    }

    /// Clear the current-operation slot and re-validate
    pub fn clear_operation(&mut self) {
        self.current_op = None;
        self.validate_preconditions();
    }

    /// Replace the input text and re-validate preconditions against the
    /// currently selected operation
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.validate_preconditions();
    }

    /// Run the selected operation on the current input.
    ///
    /// No-op when no operation is selected. Any parse or execution failure
    /// is absorbed here: the result becomes [`RESULT_ERROR_MARKER`], the
    /// postcondition flag goes false, and the status carries the error
    /// detail. On success the result is the bracketed display form of the
    /// output sequence.
    pub fn execute(&mut self) {
        let Some(op) = self.current_op else {
            return;
        };

        let outcome = parser::parse_array(&self.input_text)
            .and_then(|array| op.execute(Some(array.as_slice())));

        match outcome {
            Ok(result) => {
                self.result = parser::format_array(&result);
                self.postcondition_met = true;
                self.status = "operation completed successfully".into();
            }
            Err(err) => {
                self.result = RESULT_ERROR_MARKER.into();
                self.postcondition_met = false;
                self.status = err.to_string();
            }
        }
    }

    /// The selected operation's contract, if one is selected
    pub fn contract(&self) -> Option<OperationContract> {
        self.current_op.map(|op| op.contract())
    }

    // ── Derived-State Recomputation ───────────────────────

    /// Recompute the precondition flag and status from the current
    /// input/operation pair. Called by every mutating transition.
    fn validate_preconditions(&mut self) {
        let Some(op) = self.current_op else {
            self.precondition_met = false;
            self.status = "no operation selected".into();
            return;
        };

        match parser::parse_array(&self.input_text) {
            Ok(array) => {
                self.precondition_met = op.check_preconditions(Some(&array));
                self.status = if self.precondition_met {
                    "preconditions met".into()
                } else {
                    "preconditions not met".into()
                };
            }
            Err(_) => {
                self.precondition_met = false;
                self.status = "invalid array format".into();
            }
        }
    }

    // ── Read Accessors ────────────────────────────────────

    pub fn current_operation(&self) -> Option<ArrayOp> {
        self.current_op
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn precondition_met(&self) -> bool {
        self.precondition_met
    }

    pub fn postcondition_met(&self) -> bool {
        self.postcondition_met
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Serializable view of the full display state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            operation: self.current_op,
            input: self.input_text.clone(),
            result: self.result.clone(),
            precondition_met: self.precondition_met,
            postcondition_met: self.postcondition_met,
            status: self.status.clone(),
        }
    }
}

/// Startup state of the original application: Sort selected, input
/// `"1, 2, 3"`
impl Default for Orchestrator {
    fn default() -> Self {
        let mut orch = Orchestrator::new();
        orch.set_input("1, 2, 3");
        orch.select_operation(ArrayOp::Sort);
        orch
    }
}

// ── Snapshot ──────────────────────────────────────────────

/// Everything a presentation layer reads after a change, as one value
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub operation: Option<ArrayOp>,
    pub input: String,
    pub result: String,
    pub precondition_met: bool,
    pub postcondition_met: bool,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_without_operation() {
        let orch = Orchestrator::new();
        assert_eq!(orch.current_operation(), None);
        assert!(!orch.precondition_met());
        assert_eq!(orch.status(), "no operation selected");
    }

    #[test]
    fn test_default_matches_original_startup_state() {
        let orch = Orchestrator::default();
        assert_eq!(orch.current_operation(), Some(ArrayOp::Sort));
        assert_eq!(orch.input_text(), "1, 2, 3");
        assert!(orch.precondition_met());
    }

    #[test]
    fn test_sort_scenario() {
        let mut orch = Orchestrator::new();
        orch.select_operation(ArrayOp::Sort);
        orch.set_input("3,1,2");
        assert!(orch.precondition_met());

        orch.execute();
        assert_eq!(orch.result(), "[1, 2, 3]");
        assert!(orch.postcondition_met());
        assert!(orch.status().contains("success"));
    }

    #[test]
    fn test_sum_scenario() {
        let mut orch = Orchestrator::new();
        orch.select_operation(ArrayOp::Sum);
        orch.set_input("1, 2, 3");
        orch.execute();
        assert_eq!(orch.result(), "[6]");
        assert!(orch.postcondition_met());
    }

    #[test]
    fn test_sum_of_empty_input_succeeds_with_zero() {
        let mut orch = Orchestrator::new();
        orch.select_operation(ArrayOp::Sum);
        orch.set_input("");
        assert!(orch.precondition_met());

        orch.execute();
        assert_eq!(orch.result(), "[0]");
        assert!(orch.postcondition_met());
    }

    #[test]
    fn test_sort_of_empty_input_fails() {
        let mut orch = Orchestrator::new();
        orch.select_operation(ArrayOp::Sort);
        orch.set_input("");
        assert!(!orch.precondition_met());
        assert_eq!(orch.status(), "preconditions not met");

        orch.execute();
        assert_eq!(orch.result(), RESULT_ERROR_MARKER);
        assert!(!orch.postcondition_met());
        assert!(orch.status().contains("array must not be empty"));
    }

    #[test]
    fn test_invalid_format_is_flagged_on_input_change() {
        let mut orch = Orchestrator::new();
        orch.select_operation(ArrayOp::Maximum);
        orch.set_input("1, abc, 3");
        // Proactive validation, before any execute request
        assert!(!orch.precondition_met());
        assert_eq!(orch.status(), "invalid array format");

        orch.execute();
        assert_eq!(orch.result(), RESULT_ERROR_MARKER);
        assert!(!orch.postcondition_met());
    }

    #[test]
    fn test_no_operation_means_precondition_unmet_regardless_of_input() {
        let mut orch = Orchestrator::new();
        orch.set_input("1, 2, 3");
        assert!(!orch.precondition_met());
        assert_eq!(orch.status(), "no operation selected");
    }

    #[test]
    fn test_execute_without_operation_is_a_noop() {
        let mut orch = Orchestrator::new();
        orch.set_input("1, 2, 3");
        orch.execute();
        assert_eq!(orch.result(), "");
        assert!(!orch.postcondition_met());
    }

    #[test]
    fn test_reselection_revalidates_against_current_input() {
        let mut orch = Orchestrator::new();
        orch.set_input("");
        orch.select_operation(ArrayOp::Sort);
        assert!(!orch.precondition_met());

        // Sum accepts the empty array the moment it is selected
        orch.select_operation(ArrayOp::Sum);
        assert_eq!(orch.current_operation(), Some(ArrayOp::Sum));
        assert!(orch.precondition_met());

        orch.select_operation(ArrayOp::Maximum);
        assert_eq!(orch.current_operation(), Some(ArrayOp::Maximum));
        assert!(!orch.precondition_met());
    }

    #[test]
    fn test_clear_operation_resets_precondition() {
        let mut orch = Orchestrator::default();
        assert!(orch.precondition_met());
        orch.clear_operation();
        assert!(!orch.precondition_met());
        assert_eq!(orch.status(), "no operation selected");
    }

    #[test]
    fn test_repeated_execution_with_new_input() {
        let mut orch = Orchestrator::new();
        orch.select_operation(ArrayOp::Sum);
        orch.set_input("1,2,3");
        orch.execute();
        assert_eq!(orch.result(), "[6]");

        orch.set_input("4,5,6");
        orch.execute();
        assert_eq!(orch.result(), "[15]");
        assert!(orch.postcondition_met());
    }

    #[test]
    fn test_contract_follows_selection() {
        let mut orch = Orchestrator::new();
        assert!(orch.contract().is_none());

        orch.select_operation(ArrayOp::Maximum);
        let contract = orch.contract().unwrap();
        assert_eq!(contract, ArrayOp::Maximum.contract());
    }

    #[test]
    fn test_snapshot_serializes_full_state() {
        let mut orch = Orchestrator::new();
        orch.select_operation(ArrayOp::Sort);
        orch.set_input("2,1");
        orch.execute();

        let snapshot = orch.snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["operation"], "sort");
        assert_eq!(json["result"], "[1, 2]");
        assert_eq!(json["precondition_met"], true);
        assert_eq!(json["postcondition_met"], true);
    }
}
