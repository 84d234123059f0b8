//! # Lambda Tasks Core
//!
//! Rust core for AWS Lambda function lifecycle tasks, designed to plug into
//! a host pipeline-execution engine.
//!
//! ## Overview
//!
//! Given a declarative desired state and the current observed state of a
//! remote function, this crate decides whether to create, skip, or delete
//! the resource. Deletes accept symbolic version specifiers (`$ALL`,
//! `$PROVIDED`, `$RETAIN`, ...) that are resolved against cached function
//! state into concrete versions, then fanned out into one control-plane call
//! per version with the results rolled up into a single task outcome.
//!
//! ## Architecture
//!
//! The host engine drives implementations of [`stage::StageTask`], handing
//! each invocation a [`stage::StageExecution`] whose context and output maps
//! are persisted for downstream stages. Remote mutations go through the
//! [`clouddriver::CloudDriverClient`] seam; observed function state comes
//! from the [`cache::FunctionCache`] seam. Both are collaborator contracts:
//! transport, credentials, and retry policy belong to the host.
//!
//! ## Module Organization
//!
//! - [`stage`] - Task contract: execution context, outcomes, the task trait
//! - [`model`] - Wire-facing inputs and observed function definitions
//! - [`version`] - Symbolic version specifier resolution
//! - [`tasks`] - The create and delete orchestrators
//! - [`clouddriver`] - Control-plane client seam
//! - [`cache`] - Function observation cache seam
//! - [`validation`] - Desired-state precondition checks
//! - [`config`] - Control-plane client configuration
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lambda_tasks::cache::MemoryFunctionCache;
//! use lambda_tasks::stage::{StageExecution, StageTask};
//! use lambda_tasks::tasks::DeleteFunctionTask;
//! use std::sync::Arc;
//!
//! # async fn example(client: Arc<dyn lambda_tasks::clouddriver::CloudDriverClient>)
//! # -> lambda_tasks::error::Result<()> {
//! let cache = Arc::new(MemoryFunctionCache::new());
//! let task = DeleteFunctionTask::new(client, cache);
//!
//! let mut stage = StageExecution::new(
//!     "checkout",
//!     serde_json::json!({
//!         "functionName": "signup-handler",
//!         "region": "us-west-2",
//!         "account": "prod",
//!         "version": "$RETAIN",
//!         "retentionNumber": 2,
//!     }),
//! );
//! let outcome = task.execute(&mut stage).await?;
//! assert!(outcome.is_success());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod clouddriver;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod model;
pub mod stage;
pub mod tasks;
pub mod validation;
pub mod version;

pub use cache::{FunctionCache, MemoryFunctionCache};
pub use clouddriver::{CloudDriverClient, CloudDriverResponse};
pub use config::CloudDriverConfig;
pub use error::{LambdaTaskError, Result};
pub use model::{FunctionDefinition, FunctionVersion, LambdaDeleteInput, LambdaDeploymentInput, LambdaGetInput};
pub use stage::{OperationOutcome, StageExecution, StageTask, TaskOutcome, TaskStatus};
pub use tasks::{CreateFunctionTask, DeleteFunctionTask};
pub use version::{ResolvedVersions, VersionSpecifier};
