//! # Delete Orchestrator
//!
//! Resolves the stage's symbolic version specifier into concrete versions
//! and issues one control-plane delete per version, sequentially, recording
//! operation URLs in resolution order.
//!
//! Partial-failure policy: the loop aborts on the first failed delete. URLs
//! collected before the failure stay recorded in the stage context, and the
//! remote error propagates to the host as the task failure. Completed
//! deletions are not rolled back.

use crate::cache::FunctionCache;
use crate::clouddriver::{operation_url, CloudDriverClient};
use crate::constants::{context_keys, endpoints, markers};
use crate::error::Result;
use crate::model::{LambdaDeleteInput, LambdaGetInput};
use crate::stage::{OperationOutcome, StageExecution, StageTask, TaskOutcome};
use crate::version::{self, ResolvedVersions, VersionSpecifier};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Deletes a function, one or more of its versions, or everything older
/// than a retention window
pub struct DeleteFunctionTask {
    client: Arc<dyn CloudDriverClient>,
    cache: Arc<dyn FunctionCache>,
}

impl DeleteFunctionTask {
    pub fn new(client: Arc<dyn CloudDriverClient>, cache: Arc<dyn FunctionCache>) -> Self {
        Self { client, cache }
    }

    /// Issue one delete call. Credentials are derived from the account field
    /// immediately before every call, never stored.
    async fn delete_function(&self, input: &mut LambdaDeleteInput) -> Result<OperationOutcome> {
        input.credentials = Some(input.account.clone());
        let payload = serde_json::to_value(&*input)?;
        let response = self.client.operate(endpoints::DELETE_FUNCTION, &payload).await?;
        let url = operation_url(self.client.base_url(), &response.resource_uri);
        debug!(url = %url, qualifier = ?input.qualifier, "posted delete to control plane");
        Ok(OperationOutcome {
            resource_id: response.id,
            url,
        })
    }

    /// Whether the raw version field names a cache-backed marker
    fn needs_cache(input: &LambdaDeleteInput) -> bool {
        input
            .version
            .as_deref()
            .and_then(VersionSpecifier::parse)
            .is_some_and(|s| s.requires_cache())
    }
}

#[async_trait]
impl StageTask for DeleteFunctionTask {
    fn task_name(&self) -> &'static str {
        "delete_function"
    }

    async fn execute(&self, stage: &mut StageExecution) -> Result<TaskOutcome> {
        debug!(application = %stage.application, "executing delete function task");
        let mut input: LambdaDeleteInput = stage.parse_input()?;
        input.app_name = Some(stage.application.clone());

        // $ALL deletes the base function resource itself, not an alias of a
        // numbered version; no resolution and no qualifier.
        if input.version.as_deref() == Some(markers::ALL) {
            stage.put_context(context_keys::DELETE_VERSION, json!(markers::ALL));
            let operation = self.delete_function(&mut input).await?;
            return Ok(TaskOutcome::complete_with_operation(stage, &operation));
        }

        // Version math needs a current observation; a just-published
        // version must be visible.
        let cached = if Self::needs_cache(&input) {
            self.cache
                .lookup_fresh(&LambdaGetInput::from(&input))
                .await?
        } else {
            None
        };

        match version::resolve(&input, cached.as_ref())? {
            ResolvedVersions::NotFound => {
                stage.add_error(
                    "No version found for Lambda function. Unable to perform delete operation.",
                );
                info!(function = %input.function_name, "no version to delete; reporting no-op success");
                Ok(TaskOutcome::success_with_message(
                    stage,
                    "Found no version of function to delete",
                ))
            }
            ResolvedVersions::Single(resolved) => {
                stage.put_context(context_keys::DELETE_VERSION, json!(resolved));
                input.qualifier = Some(resolved);
                let operation = self.delete_function(&mut input).await?;
                Ok(TaskOutcome::complete_with_operation(stage, &operation))
            }
            ResolvedVersions::Multiple(versions) => {
                stage.put_context(
                    context_keys::DELETE_VERSION,
                    json!(version::join_versions(&versions)),
                );
                let mut urls: Vec<String> = Vec::with_capacity(versions.len());
                for concrete in &versions {
                    input.qualifier = Some(concrete.clone());
                    match self.delete_function(&mut input).await {
                        Ok(operation) => urls.push(operation.url),
                        Err(err) => {
                            // Abort on first failure; keep what completed.
                            stage.put_context(context_keys::URL_LIST, json!(urls));
                            return Err(err);
                        }
                    }
                }
                stage.put_context(context_keys::URL_LIST, json!(urls));
                Ok(TaskOutcome::complete_with_urls(stage, urls))
            }
        }
    }
}
