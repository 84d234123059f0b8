//! # Stage Execution Context
//!
//! Per-invocation context owned by the host engine. The host guarantees the
//! context and output maps are exclusively owned by the current invocation
//! for its duration, so no synchronization is needed here.

use crate::constants::context_keys;
use crate::error::{LambdaTaskError, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Metadata describing one stage invocation
#[derive(Debug, Clone)]
pub struct ExecutionMetadata {
    /// Unique identifier for tracking this invocation in logs
    pub execution_id: String,

    /// When this invocation started
    pub started_at: DateTime<Utc>,
}

impl Default for ExecutionMetadata {
    fn default() -> Self {
        Self {
            execution_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
        }
    }
}

/// Host-owned execution context for one stage invocation
///
/// Carries the stage configuration the task parses its typed input from,
/// plus the context and output maps whose entries are visible to later
/// stages in the same pipeline execution.
#[derive(Debug, Clone)]
pub struct StageExecution {
    /// Application the pipeline execution belongs to
    pub application: String,

    /// Raw stage configuration as supplied by the host
    pub stage_config: Value,

    /// Values persisted for downstream stages of this execution
    pub context: HashMap<String, Value>,

    /// Values surfaced as stage outputs
    pub outputs: HashMap<String, Value>,

    pub metadata: ExecutionMetadata,
}

impl StageExecution {
    pub fn new(application: impl Into<String>, stage_config: Value) -> Self {
        Self {
            application: application.into(),
            stage_config,
            context: HashMap::new(),
            outputs: HashMap::new(),
            metadata: ExecutionMetadata::default(),
        }
    }

    /// Parse the stage configuration into a typed task input
    pub fn parse_input<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.stage_config.clone()).map_err(|e| {
            LambdaTaskError::Serialization {
                message: format!("Invalid stage configuration: {e}"),
            }
        })
    }

    /// Record a value in the execution context for downstream stages
    pub fn put_context(&mut self, key: &str, value: Value) {
        self.context.insert(key.to_string(), value);
    }

    /// Record a value in the stage outputs
    pub fn put_output(&mut self, key: &str, value: Value) {
        self.outputs.insert(key.to_string(), value);
    }

    /// Append an error message to the context error list
    pub fn add_error(&mut self, message: &str) {
        let errors = self
            .context
            .entry(context_keys::ERRORS.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(list) = errors {
            list.push(Value::String(message.to_string()));
        }
    }

    /// Error messages accumulated in the context so far
    pub fn context_errors(&self) -> Vec<String> {
        match self.context.get(context_keys::ERRORS) {
            Some(Value::Array(list)) => list
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}
