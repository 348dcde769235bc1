//! Guard primitive — the single precondition enforcement point
//!
//! Every operation's `execute` calls [`require`] on its own precondition,
//! so execution fails fast even when the caller skipped the separate
//! `check_preconditions` pre-flight query.

use crate::{Error, Result};

/// Fail with a `PreconditionViolation` carrying `message` when `condition`
/// is false; no-op otherwise.
pub fn require(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::PreconditionViolation(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_true_is_noop() {
        assert!(require(true, "unused").is_ok());
    }

    #[test]
    fn test_require_false_carries_message() {
        let err = require(false, "array must not be empty").unwrap_err();
        assert_eq!(
            err,
            Error::PreconditionViolation("array must not be empty".into())
        );
    }
}
