//! Canned JSON source for testing without API access.
//!
//! Responses are registered per path and page start token, and every
//! request is recorded so tests can inspect the parameters sent.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::request::QueryParams;

use super::error::ClientError;
use super::http::JsonSource;

type Key = (String, Option<String>);

/// [`JsonSource`] that serves registered documents.
///
/// Unregistered paths answer with [`ClientError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    responses: Arc<RwLock<HashMap<Key, Value>>>,
    requests: Arc<RwLock<Vec<(String, QueryParams)>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path` whatever the parameters.
    pub async fn insert(&self, path: impl Into<String>, body: Value) {
        self.responses.write().await.insert((path.into(), None), body);
    }

    /// Serve `body` for `path` when the request carries `start`.
    pub async fn insert_page(&self, path: impl Into<String>, start: &str, body: Value) {
        self.responses
            .write()
            .await
            .insert((path.into(), Some(start.to_string())), body);
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<(String, QueryParams)> {
        self.requests.read().await.clone()
    }
}

impl JsonSource for MockSource {
    async fn get_json(&self, path: &str, params: &QueryParams) -> Result<Value, ClientError> {
        self.requests
            .write()
            .await
            .push((path.to_string(), params.clone()));

        let key = (path.to_string(), params.get_first("start").map(str::to_string));
        self.responses
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or(ClientError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn serves_registered_paths() {
        let source = MockSource::new();
        source.insert("/data-catalog/data-types", json!([])).await;

        let body = source
            .get_json("/data-catalog/data-types", &QueryParams::new())
            .await
            .unwrap();
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let source = MockSource::new();
        let err = source.get_json("/nowhere", &QueryParams::new()).await;
        assert!(matches!(err, Err(ClientError::NotFound)));
    }

    #[tokio::test]
    async fn pages_are_keyed_by_start_token() {
        let source = MockSource::new();
        source.insert("/p", json!({"page": 1})).await;
        source.insert_page("/p", "abc", json!({"page": 2})).await;

        let mut params = QueryParams::new();
        params.put_single("start", "abc");

        assert_eq!(source.get_json("/p", &params).await.unwrap()["page"], 2);
        assert_eq!(
            source.get_json("/p", &QueryParams::new()).await.unwrap()["page"],
            1
        );
        assert_eq!(source.requests().await.len(), 2);
    }
}
