//! # Stage Execution Contract
//!
//! The contract between this core and the host pipeline engine: the
//! per-invocation [`StageExecution`] context, the [`TaskOutcome`] record a
//! task reports back, and the [`StageTask`] trait the orchestrators
//! implement.

pub mod context;
pub mod outcome;
pub mod task;

pub use context::{ExecutionMetadata, StageExecution};
pub use outcome::{OperationOutcome, TaskOutcome, TaskStatus};
pub use task::StageTask;
