//! # Create Orchestrator
//!
//! Check-then-create: validates the desired state, looks the function up in
//! the observation cache, and only issues a control-plane create when the
//! function is absent. An existing function is a skip, recorded for
//! downstream stages together with its current revision id.

use crate::cache::FunctionCache;
use crate::clouddriver::{operation_url, CloudDriverClient};
use crate::constants::{context_keys, endpoints};
use crate::error::Result;
use crate::model::{LambdaDeploymentInput, LambdaGetInput};
use crate::stage::{OperationOutcome, StageExecution, StageTask, TaskOutcome};
use crate::validation::validate_deployment;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// Creates a function when it does not already exist
pub struct CreateFunctionTask {
    client: Arc<dyn CloudDriverClient>,
    cache: Arc<dyn FunctionCache>,
}

impl CreateFunctionTask {
    pub fn new(client: Arc<dyn CloudDriverClient>, cache: Arc<dyn FunctionCache>) -> Self {
        Self { client, cache }
    }

    async fn create_function(&self, input: &mut LambdaDeploymentInput) -> Result<OperationOutcome> {
        input.credentials = Some(input.account.clone());
        let payload = serde_json::to_value(&*input)?;
        let response = self.client.operate(endpoints::CREATE_FUNCTION, &payload).await?;
        let url = operation_url(self.client.base_url(), &response.resource_uri);
        debug!(url = %url, "posted create to control plane");
        Ok(OperationOutcome {
            resource_id: response.id,
            url,
        })
    }
}

#[async_trait]
impl StageTask for CreateFunctionTask {
    fn task_name(&self) -> &'static str {
        "create_function"
    }

    async fn execute(&self, stage: &mut StageExecution) -> Result<TaskOutcome> {
        debug!(application = %stage.application, "executing create function task");
        let mut input: LambdaDeploymentInput = stage.parse_input()?;

        // Fail fast with the full error list; no remote call, no partial
        // mutation.
        let errors = validate_deployment(&input);
        if !errors.is_empty() {
            warn!(
                function = %input.function_name,
                error_count = errors.len(),
                "deployment input failed validation"
            );
            return Ok(TaskOutcome::failed(stage, errors));
        }
        input.app_name = Some(stage.application.clone());

        // One boolean existence check; a stale observation is tolerated.
        let existing = self
            .cache
            .lookup_cached(&LambdaGetInput::from(&input))
            .await?;

        if let Some(definition) = existing {
            debug!(function = %input.function_name, "function already exists; skipping create");
            stage.put_context(context_keys::LAMBDA_CREATED, json!(false));
            stage.put_context(
                context_keys::ORIGINAL_REVISION_ID,
                json!(definition.revision_id),
            );
            stage.put_output(context_keys::LAMBDA_CREATED, json!(false));
            stage.put_output(
                context_keys::ORIGINAL_REVISION_ID,
                json!(definition.revision_id),
            );
            return Ok(TaskOutcome::complete(stage));
        }

        stage.put_context(context_keys::LAMBDA_CREATED, json!(true));
        stage.put_output(context_keys::LAMBDA_CREATED, json!(true));
        let operation = self.create_function(&mut input).await?;
        stage.put_context(context_keys::CREATED_URL, json!(operation.url));
        Ok(TaskOutcome::complete_with_operation(stage, &operation))
    }
}
