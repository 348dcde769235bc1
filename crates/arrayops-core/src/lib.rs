//! ArrayOps Core - Contract-checked operations over integer arrays
//!
//! This is the single source of truth for the operation semantics.
//! Presentation front ends (the CLI, or any GUI shell) drive this core.
//!
//! # Architecture
//!
//! ```text
//! Input Text → Parser → Integer Array
//!                          ↓
//!                  Precondition Check (gate)
//!                          ↓
//!                  Execute → Result Array + Postcondition Check
//!                          ↓
//!                  Orchestrator → Display String + Status Flags
//! ```
//!
//! # Guarantees
//!
//! - **Value semantics**: operations never mutate their input; every
//!   execution returns a freshly allocated result
//! - **Fail fast**: `execute` re-validates its own precondition and never
//!   silently proceeds on invalid input
//! - **Checked results**: postconditions are verified on every build, not
//!   only in debug builds

pub mod contract;
pub mod error;
pub mod guard;
pub mod ops;
pub mod orchestrator;
pub mod parser;

pub use contract::OperationContract;
pub use error::{Error, Result};
pub use ops::ArrayOp;
pub use orchestrator::Orchestrator;
