//! Lazily fetched, paged query results.
//!
//! A paged endpoint answers with a batch of objects plus a start token for
//! the following page:
//!
//! ```json
//! {"objects": [...], "metadata": {"returned": 2, "next": {"start": "abc"}}}
//! ```
//!
//! [`ResultSet`] follows those tokens until a page comes back empty or
//! without a new token.

use futures::stream::{self, Stream, TryStreamExt};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::request::{Page, QueryParams};

use super::error::ClientError;
use super::http::JsonSource;

#[derive(Debug, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    objects: Vec<Value>,
    #[serde(default)]
    metadata: PageMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct PageMetadata {
    returned: Option<u32>,
    next: Option<NextPage>,
}

#[derive(Debug, Deserialize)]
struct NextPage {
    start: Option<String>,
}

/// A paged query, fetched one page at a time.
///
/// Owned by a single consumer; pages are requested in order.
pub struct ResultSet<T, S> {
    source: S,
    path: String,
    params: QueryParams,
    page: Page,
    parser: fn(&Value) -> Option<T>,
    exhausted: bool,
}

impl<T, S: JsonSource> ResultSet<T, S> {
    pub fn new(
        source: S,
        path: impl Into<String>,
        params: QueryParams,
        page: Page,
        parser: fn(&Value) -> Option<T>,
    ) -> Self {
        Self {
            source,
            path: path.into(),
            params,
            page,
            parser,
            exhausted: false,
        }
    }

    /// The page the next call to [`next_page`](Self::next_page) requests.
    pub fn current_page(&self) -> &Page {
        &self.page
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetch the next page.
    ///
    /// Returns `None` once the results are exhausted. Objects the parser
    /// rejects are skipped.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, ClientError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut params = self.params.clone();
        params.put_page(&self.page);
        let body = self.source.get_json(&self.path, &params).await?;

        let envelope: PageEnvelope =
            serde_json::from_value(body).map_err(|e| ClientError::Json {
                message: e.to_string(),
                body: None,
            })?;

        match envelope.metadata.next.and_then(|next| next.start) {
            Some(start) if self.page.start.as_deref() != Some(start.as_str()) => {
                self.page.start = Some(start);
            }
            _ => self.exhausted = true,
        }

        if envelope.objects.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }

        debug!(
            path = %self.path,
            returned = envelope.metadata.returned.unwrap_or(0),
            objects = envelope.objects.len(),
            "fetched page"
        );

        let items = envelope
            .objects
            .iter()
            .filter_map(|object| {
                let item = (self.parser)(object);
                if item.is_none() {
                    debug!(path = %self.path, "skipping malformed object");
                }
                item
            })
            .collect();

        Ok(Some(items))
    }

    /// Fetch every remaining page.
    pub async fn collect_all(mut self) -> Result<Vec<T>, ClientError> {
        let mut all = Vec::new();
        while let Some(items) = self.next_page().await? {
            all.extend(items);
        }
        Ok(all)
    }

    /// The remaining items as a stream, fetching pages on demand.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, ClientError>> {
        stream::try_unfold(self, |mut set| async move {
            let page = set.next_page().await?;
            Ok::<_, ClientError>(page.map(|items| (items, set)))
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
        .try_flatten()
    }
}

impl<T, S> std::fmt::Debug for ResultSet<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultSet")
            .field("path", &self.path)
            .field("params", &self.params)
            .field("page", &self.page)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
