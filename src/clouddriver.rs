//! # Control-Plane Client Seam
//!
//! Interface to the remote control-plane service that owns the actual
//! function mutations. Transport, authentication, and retry/backoff live in
//! the implementing collaborator; this core only depends on the operation
//! contract below.

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Response from a control-plane operation submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudDriverResponse {
    /// Identifier of the created or mutated resource, when the operation
    /// reports one
    #[serde(default)]
    pub id: Option<String>,

    /// Relative URI of the submitted operation, joined to the client's base
    /// URL to form the absolute operation URL
    pub resource_uri: String,
}

/// Client for the remote control-plane service.
///
/// Implementations are constructed from an immutable
/// [`CloudDriverConfig`](crate::config::CloudDriverConfig); the base URL is
/// never mutated between invocations.
#[async_trait]
pub trait CloudDriverClient: Send + Sync {
    /// Base URL this client was constructed with
    fn base_url(&self) -> &str;

    /// Submit one operation, synchronously from the task's point of view.
    /// Fails with [`LambdaTaskError::RemoteOperation`] on a non-success
    /// response or transport failure.
    ///
    /// [`LambdaTaskError::RemoteOperation`]: crate::error::LambdaTaskError::RemoteOperation
    async fn operate(&self, path: &str, payload: &Value) -> Result<CloudDriverResponse>;
}

/// Absolute URL of a submitted operation
pub fn operation_url(base_url: &str, resource_uri: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), resource_uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_url_joins_base_and_resource_uri() {
        assert_eq!(
            operation_url("http://clouddriver:7002", "/task/42"),
            "http://clouddriver:7002/task/42"
        );
    }

    #[test]
    fn operation_url_tolerates_trailing_slash_on_base() {
        assert_eq!(
            operation_url("http://clouddriver:7002/", "/task/42"),
            "http://clouddriver:7002/task/42"
        );
    }

    #[test]
    fn response_parses_without_id() {
        let response: CloudDriverResponse =
            serde_json::from_value(serde_json::json!({"resourceUri": "/task/42"})).unwrap();
        assert!(response.id.is_none());
        assert_eq!(response.resource_uri, "/task/42");
    }
}
