//! # Task Outcomes
//!
//! Aggregate results reported back to the host engine. Outcomes are plain
//! immutable records assembled through the constructor functions below; one
//! orchestrator invocation produces exactly one [`TaskOutcome`], rolling up
//! every [`OperationOutcome`] from its remote calls.

use crate::constants::context_keys;
use crate::stage::context::StageExecution;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Terminal status of one task invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task finished its work (including benign no-ops)
    Complete,
    /// Task neither completed nor failed (e.g. host-signalled timeout)
    Skipped,
    /// Task failed; errors carry the reasons
    Failed,
}

/// Result of one remote create or delete call
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutcome {
    /// Resource identifier returned by the control plane, when present
    pub resource_id: Option<String>,

    /// Absolute URL of the submitted operation
    pub url: String,
}

/// Aggregate result of one task invocation
#[derive(Debug, Clone)]
pub struct TaskOutcome {
    pub status: TaskStatus,

    /// Snapshot of the execution context to persist downstream
    pub context: HashMap<String, Value>,

    /// Snapshot of the stage outputs
    pub outputs: HashMap<String, Value>,

    /// Error messages; empty on success
    pub errors: Vec<String>,

    /// Operation URLs in the order the calls were issued
    pub operation_urls: Vec<String>,
}

impl TaskOutcome {
    /// Completed task with no remote operation to report
    pub fn complete(stage: &StageExecution) -> Self {
        Self {
            status: TaskStatus::Complete,
            context: stage.context.clone(),
            outputs: stage.outputs.clone(),
            errors: Vec::new(),
            operation_urls: Vec::new(),
        }
    }

    /// Completed task reporting a single remote operation
    pub fn complete_with_operation(stage: &StageExecution, operation: &OperationOutcome) -> Self {
        Self {
            operation_urls: vec![operation.url.clone()],
            ..Self::complete(stage)
        }
    }

    /// Completed task reporting one operation per resolved version
    pub fn complete_with_urls(stage: &StageExecution, urls: Vec<String>) -> Self {
        Self {
            operation_urls: urls,
            ..Self::complete(stage)
        }
    }

    /// Successful no-op carrying a human-readable message (e.g. deleting a
    /// version that is already absent)
    pub fn success_with_message(stage: &StageExecution, message: &str) -> Self {
        let mut outcome = Self::complete(stage);
        outcome
            .context
            .insert(context_keys::MESSAGE.to_string(), Value::String(message.to_string()));
        outcome
    }

    /// Skipped task; reported when the host signals a timeout and the remote
    /// outcome is unknown
    pub fn skipped() -> Self {
        Self {
            status: TaskStatus::Skipped,
            context: HashMap::new(),
            outputs: HashMap::new(),
            errors: Vec::new(),
            operation_urls: Vec::new(),
        }
    }

    /// Failed task carrying every error encountered
    pub fn failed(stage: &StageExecution, errors: Vec<String>) -> Self {
        Self {
            status: TaskStatus::Failed,
            context: stage.context.clone(),
            outputs: stage.outputs.clone(),
            errors,
            operation_urls: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TaskStatus::Complete
    }

    pub fn is_skipped(&self) -> bool {
        self.status == TaskStatus::Skipped
    }

    pub fn is_failure(&self) -> bool {
        self.status == TaskStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_snapshots_context_and_outputs() {
        let mut stage = StageExecution::new("checkout", json!({}));
        stage.put_context("key", json!("value"));
        stage.put_output("out", json!(7));

        let outcome = TaskOutcome::complete(&stage);
        assert!(outcome.is_success());
        assert_eq!(outcome.context.get("key"), Some(&json!("value")));
        assert_eq!(outcome.outputs.get("out"), Some(&json!(7)));
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn success_with_message_is_complete_not_failed() {
        let stage = StageExecution::new("checkout", json!({}));
        let outcome = TaskOutcome::success_with_message(&stage, "nothing to delete");
        assert!(outcome.is_success());
        assert_eq!(
            outcome.context.get(crate::constants::context_keys::MESSAGE),
            Some(&json!("nothing to delete"))
        );
    }

    #[test]
    fn failed_carries_every_error() {
        let stage = StageExecution::new("checkout", json!({}));
        let outcome =
            TaskOutcome::failed(&stage, vec!["first".to_string(), "second".to_string()]);
        assert!(outcome.is_failure());
        assert_eq!(outcome.errors.len(), 2);
    }

    #[test]
    fn operation_urls_preserve_call_order() {
        let stage = StageExecution::new("checkout", json!({}));
        let outcome = TaskOutcome::complete_with_urls(
            &stage,
            vec!["http://cd/task/1".to_string(), "http://cd/task/2".to_string()],
        );
        assert_eq!(outcome.operation_urls[0], "http://cd/task/1");
        assert_eq!(outcome.operation_urls[1], "http://cd/task/2");
    }
}
