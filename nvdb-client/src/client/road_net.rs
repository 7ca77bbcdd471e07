//! Road network endpoints.

use crate::domain::Link;
use crate::parse::parse_link;
use crate::request::{QueryParams, RoadNetRequest, road_net_params};

use super::error::ClientError;
use super::http::{HttpSource, JsonSource, parse_array};
use super::result_set::ResultSet;

const LINKS: &str = "/road-net/links";

/// Client for road network links.
#[derive(Debug, Clone)]
pub struct RoadNetClient<S = HttpSource> {
    source: S,
}

impl<S: JsonSource + Clone> RoadNetClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get every link of the link sequence `id`.
    pub async fn get_links_in_sequence(&self, id: i64) -> Result<Vec<Link>, ClientError> {
        let body = self
            .source
            .get_json(&format!("{LINKS}/{id}"), &QueryParams::new())
            .await?;
        parse_array(&body, parse_link, "expected an array of links")
    }

    /// Query links matching `request`, one page at a time.
    pub fn get_links(&self, request: &RoadNetRequest) -> ResultSet<Link, S> {
        ResultSet::new(
            self.source.clone(),
            LINKS,
            road_net_params(request),
            request.page().cloned().unwrap_or_default(),
            parse_link,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockSource;
    use crate::request::Page;
    use serde_json::json;

    #[tokio::test]
    async fn links_in_sequence() {
        let source = MockSource::new();
        source
            .insert(
                "/road-net/links/319527",
                json!([
                    {"id": 319527, "start-position": 0.0, "end-position": 0.5},
                    {"start-position": 0.5},
                    {"id": 319527, "start-position": 0.5, "end-position": 1.0}
                ]),
            )
            .await;

        let links = RoadNetClient::new(source)
            .get_links_in_sequence(319_527)
            .await
            .unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[1].start_position, Some(0.5));
    }

    #[tokio::test]
    async fn links_in_sequence_requires_array() {
        let source = MockSource::new();
        source.insert("/road-net/links/1", json!({"id": 1})).await;

        let err = RoadNetClient::new(source)
            .get_links_in_sequence(1)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedShape(_)));
    }

    #[tokio::test]
    async fn unknown_sequence_is_not_found() {
        let err = RoadNetClient::new(MockSource::new())
            .get_links_in_sequence(404)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound));
    }

    #[tokio::test]
    async fn link_query_sends_filters_and_page() {
        let source = MockSource::new();
        source
            .insert(
                "/road-net/links",
                json!({"objects": [{"id": 1}, {"id": 2}], "metadata": {"returned": 2}}),
            )
            .await;

        let request = RoadNetRequest::default()
            .with_counties([3, 50])
            .with_page(Page::count(2));
        let links = RoadNetClient::new(source.clone())
            .get_links(&request)
            .collect_all()
            .await
            .unwrap();

        assert_eq!(links.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);

        let requests = source.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1.get_first("county"), Some("3,50"));
        assert_eq!(requests[0].1.get_first("count"), Some("2"));
    }

    #[tokio::test]
    async fn link_query_defaults_page_size() {
        let source = MockSource::new();
        source
            .insert("/road-net/links", json!({"objects": []}))
            .await;

        let links = RoadNetClient::new(source.clone())
            .get_links(&RoadNetRequest::default())
            .collect_all()
            .await
            .unwrap();

        assert!(links.is_empty());
        let requests = source.requests().await;
        assert_eq!(requests[0].1.get_first("count"), Some("1000"));
    }
}
