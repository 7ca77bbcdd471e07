//! Road object endpoints.

use crate::domain::RoadObject;
use crate::parse::parse_road_object;
use crate::request::{RoadObjectRequest, road_object_params, road_object_shaping_params};

use super::error::ClientError;
use super::http::{HttpSource, JsonSource};
use super::result_set::ResultSet;

fn objects_path(type_id: i32) -> String {
    format!("/road-objects/{type_id}")
}

/// Client for road objects of a given feature type.
#[derive(Debug, Clone)]
pub struct RoadObjectClient<S = HttpSource> {
    source: S,
}

impl<S: JsonSource + Clone> RoadObjectClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Query objects of feature type `type_id` matching `request`.
    pub fn get_road_objects(
        &self,
        type_id: i32,
        request: &RoadObjectRequest,
    ) -> ResultSet<RoadObject, S> {
        ResultSet::new(
            self.source.clone(),
            objects_path(type_id),
            road_object_params(request),
            request.page().cloned().unwrap_or_default(),
            parse_road_object,
        )
    }

    /// Get a single object with the server's default includes.
    pub async fn get_road_object(&self, type_id: i32, id: i64) -> Result<RoadObject, ClientError> {
        self.get_road_object_with(type_id, id, &RoadObjectRequest::default())
            .await
    }

    /// Get a single object, shaping the response with `request`.
    ///
    /// Only the response-shaping options (includes, include-geometry,
    /// projection, geometry tolerance) are sent; filters are ignored.
    pub async fn get_road_object_with(
        &self,
        type_id: i32,
        id: i64,
        request: &RoadObjectRequest,
    ) -> Result<RoadObject, ClientError> {
        let path = format!("{}/{id}", objects_path(type_id));
        let body = self
            .source
            .get_json(&path, &road_object_shaping_params(request))
            .await?;
        parse_road_object(&body).ok_or(ClientError::UnexpectedShape("expected a road object"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockSource;
    use crate::request::{Include, OverlapFilter, Page};
    use serde_json::json;

    fn speed_limit(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "href": format!("https://example.test/road-objects/105/{id}"),
            "metadata": {"type": {"id": 105}, "version": 2, "start-date": "2019-05-01"},
            "attributes": [{"id": 2021, "name": "Speed limit", "data-type": "Integer", "value": 80}]
        })
    }

    #[tokio::test]
    async fn single_object() {
        let source = MockSource::new();
        source
            .insert("/road-objects/105/85288328", speed_limit(85_288_328))
            .await;

        let object = RoadObjectClient::new(source)
            .get_road_object(105, 85_288_328)
            .await
            .unwrap();

        assert_eq!(object.id, 85_288_328);
        assert_eq!(object.type_id, Some(105));
        assert_eq!(object.version, Some(2));
        assert!(object.attribute(2021).is_some());
    }

    #[tokio::test]
    async fn single_object_sends_includes() {
        let source = MockSource::new();
        source.insert("/road-objects/105/7", speed_limit(7)).await;

        let request = RoadObjectRequest::default().with_include(Include::Geometry);
        RoadObjectClient::new(source.clone())
            .get_road_object_with(105, 7, &request)
            .await
            .unwrap();

        let requests = source.requests().await;
        assert_eq!(requests[0].1.get_first("include"), Some("geometry"));
    }

    #[tokio::test]
    async fn single_object_ignores_filters() {
        let source = MockSource::new();
        source.insert("/road-objects/105/7", speed_limit(7)).await;

        let request = RoadObjectRequest::default()
            .with_include(Include::Attributes)
            .with_municipalities([5001])
            .with_overlap_filter(OverlapFilter::new(532));
        RoadObjectClient::new(source.clone())
            .get_road_object_with(105, 7, &request)
            .await
            .unwrap();

        let requests = source.requests().await;
        let (_, params) = &requests[0];
        assert_eq!(params.get_first("include"), Some("attributes"));
        assert!(!params.contains_key("municipality"));
        assert!(!params.contains_key("overlap"));
    }

    #[tokio::test]
    async fn object_without_id_is_unexpected() {
        let source = MockSource::new();
        source.insert("/road-objects/105/7", json!({"href": "x"})).await;

        let err = RoadObjectClient::new(source)
            .get_road_object(105, 7)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedShape(_)));
    }

    #[tokio::test]
    async fn object_query_pages_through_results() {
        let source = MockSource::new();
        source
            .insert(
                "/road-objects/105",
                json!({
                    "objects": [speed_limit(1), speed_limit(2)],
                    "metadata": {"returned": 2, "next": {"start": "next-token"}}
                }),
            )
            .await;
        source
            .insert_page(
                "/road-objects/105",
                "next-token",
                json!({"objects": [speed_limit(3)], "metadata": {"returned": 1}}),
            )
            .await;

        let request = RoadObjectRequest::default()
            .with_municipalities([5001])
            .with_overlap_filter(OverlapFilter::new(532))
            .with_overlap_filter(OverlapFilter::with_filter(105, "2021=80"))
            .with_page(Page::count(2));

        let objects = RoadObjectClient::new(source.clone())
            .get_road_objects(105, &request)
            .collect_all()
            .await
            .unwrap();

        assert_eq!(
            objects.iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        let requests = source.requests().await;
        assert_eq!(requests.len(), 2);
        for (_, params) in &requests {
            assert_eq!(params.get_first("municipality"), Some("5001"));
            assert_eq!(params.get_all("overlap"), ["532", "105(2021=80)"]);
        }
        assert_eq!(requests[1].1.get_first("start"), Some("next-token"));
    }
}
