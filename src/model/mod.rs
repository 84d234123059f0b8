//! # Data Model
//!
//! Wire-facing types exchanged with the control plane and the function
//! cache: desired-state inputs for the create and delete tasks, the cache
//! lookup key, and the observed function definition.

pub mod function;
pub mod inputs;

pub use function::{FunctionDefinition, FunctionVersion};
pub use inputs::{LambdaDeleteInput, LambdaDeploymentInput, LambdaGetInput};
