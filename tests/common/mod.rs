//! Shared fixtures and mock collaborators for integration tests.

// Each integration test binary compiles its own copy of this module and
// uses a subset of it.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lambda_tasks::cache::FunctionCache;
use lambda_tasks::clouddriver::{CloudDriverClient, CloudDriverResponse};
use lambda_tasks::error::{LambdaTaskError, Result};
use lambda_tasks::model::{FunctionDefinition, FunctionVersion, LambdaGetInput};
use lambda_tasks::stage::StageExecution;
use serde_json::Value;
use std::sync::Mutex;

pub const BASE_URL: &str = "http://clouddriver:7002";

/// Control-plane client that records every call and can be scripted to fail
/// from a given call index onward.
pub struct RecordingClient {
    calls: Mutex<Vec<(String, Value)>>,
    fail_from_call: Option<usize>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_from_call: None,
        }
    }

    /// Fail every call at or after the given zero-based index
    pub fn failing_from(call_index: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_from_call: Some(call_index),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Qualifiers from recorded payloads, in call order; `None` entries are
    /// calls issued without a qualifier.
    pub fn qualifiers(&self) -> Vec<Option<String>> {
        self.calls()
            .iter()
            .map(|(_, payload)| {
                payload
                    .get("qualifier")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .collect()
    }
}

#[async_trait]
impl CloudDriverClient for RecordingClient {
    fn base_url(&self) -> &str {
        BASE_URL
    }

    async fn operate(&self, path: &str, payload: &Value) -> Result<CloudDriverResponse> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push((path.to_string(), payload.clone()));

        if self.fail_from_call.is_some_and(|from| index >= from) {
            return Err(LambdaTaskError::RemoteOperation {
                endpoint: path.to_string(),
                message: "control plane returned 500".to_string(),
            });
        }

        Ok(CloudDriverResponse {
            id: Some(format!("op-{index}")),
            resource_uri: format!("/task/{index}"),
        })
    }
}

/// Cache scripted with a fixed observation (or a fixed miss)
pub struct StaticCache {
    definition: Option<FunctionDefinition>,
}

impl StaticCache {
    pub fn with(definition: FunctionDefinition) -> Self {
        Self {
            definition: Some(definition),
        }
    }

    pub fn empty() -> Self {
        Self { definition: None }
    }
}

#[async_trait]
impl FunctionCache for StaticCache {
    async fn lookup_cached(&self, _key: &LambdaGetInput) -> Result<Option<FunctionDefinition>> {
        Ok(self.definition.clone())
    }

    async fn lookup_fresh(&self, _key: &LambdaGetInput) -> Result<Option<FunctionDefinition>> {
        Ok(self.definition.clone())
    }
}

/// Cache that fails the test if any lookup happens at all
pub struct UnreachableCache;

#[async_trait]
impl FunctionCache for UnreachableCache {
    async fn lookup_cached(&self, key: &LambdaGetInput) -> Result<Option<FunctionDefinition>> {
        panic!("unexpected cache lookup for {}", key.cache_key());
    }

    async fn lookup_fresh(&self, key: &LambdaGetInput) -> Result<Option<FunctionDefinition>> {
        panic!("unexpected fresh cache lookup for {}", key.cache_key());
    }
}

/// A cached function with the given versions, publish order oldest first
pub fn function_with_versions(versions: &[&str]) -> FunctionDefinition {
    FunctionDefinition {
        function_name: "signup-handler".to_string(),
        function_arn: Some(
            "arn:aws:lambda:us-west-2:123456789012:function:signup-handler".to_string(),
        ),
        revision_id: "rev-abc".to_string(),
        versions: versions
            .iter()
            .enumerate()
            .map(|(i, v)| FunctionVersion {
                version: (*v).to_string(),
                last_modified: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, i as u32).unwrap(),
            })
            .collect(),
    }
}

pub fn delete_stage(config: Value) -> StageExecution {
    StageExecution::new("checkout", config)
}

pub fn create_stage(config: Value) -> StageExecution {
    StageExecution::new("checkout", config)
}
