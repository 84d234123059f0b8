//! # Lifecycle Tasks
//!
//! The two orchestrators the host engine invokes: function creation
//! (check-then-create) and function deletion (resolve-then-fan-out).

pub mod create;
pub mod delete;

pub use create::CreateFunctionTask;
pub use delete::DeleteFunctionTask;
