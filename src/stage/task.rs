//! # Stage Task Trait
//!
//! The execution contract the host engine drives. Implementations receive a
//! mutable [`StageExecution`] so that context written before a failure (for
//! example, URLs collected partway through a multi-version delete) survives
//! for the host to persist.

use crate::error::Result;
use crate::stage::context::StageExecution;
use crate::stage::outcome::TaskOutcome;
use async_trait::async_trait;

/// A task invoked by the host pipeline engine
#[async_trait]
pub trait StageTask: Send + Sync {
    /// Stable task name for logging and host registration
    fn task_name(&self) -> &'static str;

    /// Execute the task against the given stage.
    ///
    /// Validation and resolution problems resolve locally into the returned
    /// [`TaskOutcome`]; remote operation errors propagate as `Err`, which the
    /// host surfaces as a task failure.
    async fn execute(&self, stage: &mut StageExecution) -> Result<TaskOutcome>;

    /// Called when the host signals a timeout before completion. The remote
    /// operation may or may not have happened, so the default reports the
    /// task as skipped rather than failed or retried.
    async fn on_timeout(&self, stage: &mut StageExecution) -> TaskOutcome {
        let _ = stage;
        TaskOutcome::skipped()
    }

    /// Called on cancellation. No compensating action is taken at this
    /// layer; compensation, if any, belongs to an external collaborator.
    fn on_cancel(&self, stage: &mut StageExecution) {
        let _ = stage;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NoopTask;

    #[async_trait]
    impl StageTask for NoopTask {
        fn task_name(&self) -> &'static str {
            "noop"
        }

        async fn execute(&self, stage: &mut StageExecution) -> Result<TaskOutcome> {
            Ok(TaskOutcome::complete(stage))
        }
    }

    #[test]
    fn default_timeout_hook_reports_skipped() {
        let mut stage = StageExecution::new("checkout", json!({}));
        let outcome = tokio_test::block_on(NoopTask.on_timeout(&mut stage));
        assert!(outcome.is_skipped());
    }

    #[test]
    fn default_cancel_hook_leaves_context_untouched() {
        let mut stage = StageExecution::new("checkout", json!({}));
        NoopTask.on_cancel(&mut stage);
        assert!(stage.context.is_empty());
        assert!(stage.outputs.is_empty());
    }
}
