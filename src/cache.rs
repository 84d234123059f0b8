//! # Function Cache Seam
//!
//! Lookup of previously observed function definitions. Call sites document
//! their staleness tolerance by choosing between the two named operations:
//! `lookup_cached` accepts whatever the cache last observed, `lookup_fresh`
//! asks the collaborator to consult the source of truth first.

use crate::error::Result;
use crate::model::{FunctionDefinition, LambdaGetInput};
use async_trait::async_trait;
use dashmap::DashMap;

/// Cache of observed function definitions
#[async_trait]
pub trait FunctionCache: Send + Sync {
    /// Look up a function, tolerating a stale observation
    async fn lookup_cached(&self, key: &LambdaGetInput) -> Result<Option<FunctionDefinition>>;

    /// Look up a function after refreshing from the source of truth
    async fn lookup_fresh(&self, key: &LambdaGetInput) -> Result<Option<FunctionDefinition>>;
}

/// In-process cache backed by a concurrent map.
///
/// Has no upstream to refresh from, so `lookup_fresh` serves the stored
/// entry; hosts with a real control-plane cache wrap or replace this.
#[derive(Debug, Default)]
pub struct MemoryFunctionCache {
    entries: DashMap<String, FunctionDefinition>,
}

impl MemoryFunctionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observed definition under the given key
    pub fn insert(&self, key: &LambdaGetInput, definition: FunctionDefinition) {
        self.entries.insert(key.cache_key(), definition);
    }

    /// Drop the observation for the given key
    pub fn remove(&self, key: &LambdaGetInput) {
        self.entries.remove(&key.cache_key());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl FunctionCache for MemoryFunctionCache {
    async fn lookup_cached(&self, key: &LambdaGetInput) -> Result<Option<FunctionDefinition>> {
        Ok(self.entries.get(&key.cache_key()).map(|e| e.value().clone()))
    }

    async fn lookup_fresh(&self, key: &LambdaGetInput) -> Result<Option<FunctionDefinition>> {
        self.lookup_cached(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(function: &str) -> LambdaGetInput {
        LambdaGetInput {
            app_name: Some("checkout".to_string()),
            function_name: function.to_string(),
            region: "us-west-2".to_string(),
            account: "prod".to_string(),
        }
    }

    fn definition(function: &str) -> FunctionDefinition {
        FunctionDefinition {
            function_name: function.to_string(),
            function_arn: None,
            revision_id: "rev-1".to_string(),
            versions: Vec::new(),
        }
    }

    #[tokio::test]
    async fn lookup_misses_return_none_not_error() {
        let cache = MemoryFunctionCache::new();
        assert!(cache.lookup_cached(&key("fn")).await.unwrap().is_none());
        assert!(cache.lookup_fresh(&key("fn")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_then_lookup_round_trips() {
        let cache = MemoryFunctionCache::new();
        cache.insert(&key("fn"), definition("fn"));

        let found = cache.lookup_cached(&key("fn")).await.unwrap().unwrap();
        assert_eq!(found.function_name, "fn");
    }

    #[tokio::test]
    async fn remove_evicts_the_observation() {
        let cache = MemoryFunctionCache::new();
        cache.insert(&key("fn"), definition("fn"));
        cache.remove(&key("fn"));
        assert!(cache.lookup_cached(&key("fn")).await.unwrap().is_none());
        assert!(cache.is_empty());
    }
}
