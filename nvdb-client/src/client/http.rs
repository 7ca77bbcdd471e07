//! JSON over HTTP GET.
//!
//! [`JsonSource`] is the seam between the endpoint clients and the
//! network: [`HttpSource`] talks to the API, tests substitute a canned
//! source.

use serde_json::Value;
use tracing::debug;

use crate::request::QueryParams;

use super::error::ClientError;

/// Bodies longer than this are truncated before landing in an error.
const ERROR_BODY_LIMIT: usize = 500;

/// Something that answers `GET path?params` with a JSON document.
pub trait JsonSource {
    fn get_json(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;
}

/// [`JsonSource`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl JsonSource for HttpSource {
    async fn get_json(&self, path: &str, params: &QueryParams) -> Result<Value, ClientError> {
        let url = self.url(path);
        debug!(%url, params = params.len(), "GET");

        let response = self.http.get(&url).query(&params.pairs()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: truncate(&body),
            });
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}

/// Parse a JSON array with `parser`, skipping entries it rejects.
pub(crate) fn parse_array<T>(
    body: &Value,
    parser: fn(&Value) -> Option<T>,
    expected: &'static str,
) -> Result<Vec<T>, ClientError> {
    let entries = body
        .as_array()
        .ok_or(ClientError::UnexpectedShape(expected))?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let item = parser(entry);
            if item.is_none() {
                debug!("skipping malformed entry");
            }
            item
        })
        .collect())
}

fn parse_body(body: &str) -> Result<Value, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Json {
        message: e.to_string(),
        body: Some(truncate(body)),
    })
}

fn truncate(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let source = HttpSource::new(reqwest::Client::new(), "http://localhost:8080");
        assert_eq!(
            source.url("/road-net/links/42"),
            "http://localhost:8080/road-net/links/42"
        );
    }

    #[test]
    fn parse_array_skips_rejected_entries() {
        let body = serde_json::json!([1, "two", 3]);
        let items = parse_array(&body, Value::as_i64, "expected numbers").unwrap();
        assert_eq!(items, vec![1, 3]);
    }

    #[test]
    fn parse_array_rejects_non_arrays() {
        let body = serde_json::json!({"objects": []});
        let err = parse_array(&body, Value::as_i64, "expected numbers").unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedShape("expected numbers")));
    }

    #[test]
    fn parse_body_accepts_json() {
        let value = parse_body(r#"{"objects": []}"#).unwrap();
        assert!(value["objects"].is_array());
    }

    #[test]
    fn parse_body_keeps_truncated_body() {
        let body = format!("<html>{}</html>", "x".repeat(1000));
        let err = parse_body(&body).unwrap_err();

        match err {
            ClientError::Json { body: Some(kept), .. } => {
                assert_eq!(kept.chars().count(), ERROR_BODY_LIMIT);
                assert!(kept.starts_with("<html>"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
