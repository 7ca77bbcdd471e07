//! Datakatalog endpoints.

use crate::domain::{DataType, FeatureType};
use crate::parse::{parse_data_type, parse_feature_type};
use crate::request::QueryParams;

use super::error::ClientError;
use super::http::{HttpSource, JsonSource, parse_array};

const DATA_CATALOG: &str = "/data-catalog";

/// Client for the data catalogue describing feature types.
#[derive(Debug, Clone)]
pub struct DatakatalogClient<S = HttpSource> {
    source: S,
}

impl<S: JsonSource> DatakatalogClient<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn get_data_types(&self) -> Result<Vec<DataType>, ClientError> {
        let body = self
            .source
            .get_json(&format!("{DATA_CATALOG}/data-types"), &QueryParams::new())
            .await?;
        parse_array(&body, parse_data_type, "expected an array of data types")
    }

    /// Get every feature type, with attribute types.
    pub async fn get_feature_types(&self) -> Result<Vec<FeatureType>, ClientError> {
        let mut params = QueryParams::new();
        params.put_single("include", "attribute-types");

        let body = self
            .source
            .get_json(&format!("{DATA_CATALOG}/feature-types"), &params)
            .await?;
        parse_array(&body, parse_feature_type, "expected an array of feature types")
    }

    pub async fn get_feature_type(&self, id: i32) -> Result<FeatureType, ClientError> {
        let body = self
            .source
            .get_json(
                &format!("{DATA_CATALOG}/feature-types/{id}"),
                &QueryParams::new(),
            )
            .await?;
        parse_feature_type(&body).ok_or(ClientError::UnexpectedShape("expected a feature type"))
    }
}
