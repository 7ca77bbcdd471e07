//! Async HTTP client for the road network API.
//!
//! [`NvdbClient`] owns one `reqwest::Client` carrying the header policy
//! and hands out cheap endpoint clients that share it.

mod config;
mod datakatalog;
mod error;
mod headers;
mod http;
mod mock;
mod result_set;
mod road_net;
mod road_object;

pub use config::{ClientConfig, DEFAULT_API_REVISION, DEFAULT_BASE_URL};
pub use datakatalog::DatakatalogClient;
pub use error::ClientError;
pub use headers::{RequestHeaders, X_CLIENT, X_DATAKATALOG_VERSION};
pub use http::{HttpSource, JsonSource};
pub use mock::MockSource;
pub use result_set::ResultSet;
pub use road_net::RoadNetClient;
pub use road_object::RoadObjectClient;

/// Entry point to the API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NvdbClient {
    source: HttpSource,
}

impl NvdbClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let headers = RequestHeaders::from_config(&config)?;

        let http = reqwest::Client::builder()
            .default_headers(headers.to_header_map())
            .timeout(config.timeout())
            .gzip(config.enable_compression)
            .deflate(config.enable_compression)
            .build()?;

        Ok(Self {
            source: HttpSource::new(http, config.base_url),
        })
    }

    pub fn road_net(&self) -> RoadNetClient {
        RoadNetClient::new(self.source.clone())
    }

    pub fn road_objects(&self) -> RoadObjectClient {
        RoadObjectClient::new(self.source.clone())
    }

    pub fn datakatalog(&self) -> DatakatalogClient {
        DatakatalogClient::new(self.source.clone())
    }
}
