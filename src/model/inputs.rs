//! Stage input types for the create and delete tasks.
//!
//! All fields default on deserialization so that a sparse stage
//! configuration parses cleanly and validation can report every missing
//! field together rather than failing on the first absent key.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Desired state for a function deployment (create task input)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaDeploymentInput {
    /// Owning application; set by the task from the stage execution, not by
    /// the stage configuration
    #[serde(default)]
    pub app_name: Option<String>,

    #[serde(default)]
    pub function_name: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub account: String,

    /// Runtime identifier, e.g. "python3.12"
    #[serde(default)]
    pub runtime: String,

    /// Entry point, e.g. "app.handler"
    #[serde(default)]
    pub handler: String,

    /// Execution role ARN
    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub memory_size: Option<u32>,

    /// Function timeout in seconds
    #[serde(default)]
    pub timeout: Option<u32>,

    /// Whether to publish a new version on create
    #[serde(default)]
    pub publish: bool,

    #[serde(default)]
    pub env_variables: HashMap<String, String>,

    /// Derived from `account` immediately before each remote call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

/// Desired state for a function delete (delete task input)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaDeleteInput {
    /// Owning application; set by the task from the stage execution
    #[serde(default)]
    pub app_name: Option<String>,

    #[serde(default)]
    pub function_name: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub account: String,

    /// Symbolic marker or literal version string; always present before
    /// resolution begins in a well-formed delete stage
    #[serde(default)]
    pub version: Option<String>,

    /// Explicit version used by the `$PROVIDED` marker
    #[serde(default)]
    pub version_number: Option<String>,

    /// How many most-recently-published versions `$RETAIN` keeps
    #[serde(default)]
    pub retention_number: Option<usize>,

    /// Concrete version attached to a single delete call; unset until a
    /// version has been resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,

    /// Derived from `account` immediately before each remote call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

/// Cache lookup key for an observed function
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaGetInput {
    #[serde(default)]
    pub app_name: Option<String>,

    #[serde(default)]
    pub function_name: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub account: String,
}

impl LambdaGetInput {
    /// Cache key identifying one function within one account and region
    pub fn cache_key(&self) -> String {
        format!("{}:{}:{}", self.account, self.region, self.function_name)
    }
}

impl From<&LambdaDeploymentInput> for LambdaGetInput {
    fn from(input: &LambdaDeploymentInput) -> Self {
        Self {
            app_name: input.app_name.clone(),
            function_name: input.function_name.clone(),
            region: input.region.clone(),
            account: input.account.clone(),
        }
    }
}

impl From<&LambdaDeleteInput> for LambdaGetInput {
    fn from(input: &LambdaDeleteInput) -> Self {
        Self {
            app_name: input.app_name.clone(),
            function_name: input.function_name.clone(),
            region: input.region.clone(),
            account: input.account.clone(),
        }
    }
}
