//! Headers sent with every request.

use reqwest::header::{ACCEPT, ACCEPT_ENCODING, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use super::config::ClientConfig;
use super::error::ClientError;

/// Identifies the calling application.
pub const X_CLIENT: &str = "x-client";

/// Pins responses to a datakatalog version.
pub const X_DATAKATALOG_VERSION: &str = "x-data-catalog-version";

/// The outbound header policy derived from a [`ClientConfig`].
///
/// Header values are validated once, when the policy is built.
#[derive(Debug, Clone)]
pub struct RequestHeaders {
    accept: HeaderValue,
    user_agent: HeaderValue,
    client_name: HeaderValue,
    datakatalog_version: Option<HeaderValue>,
    enable_compression: bool,
}

impl RequestHeaders {
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            accept: header_value("Accept", &config.api_revision)?,
            user_agent: header_value("User-Agent", &config.user_agent)?,
            client_name: header_value("X-Client", &config.client_name)?,
            datakatalog_version: config
                .datakatalog_version
                .as_deref()
                .map(|v| header_value("X-Data-Catalog-Version", v))
                .transpose()?,
            enable_compression: config.enable_compression,
        })
    }

    /// Write the policy into `headers`, replacing any values it sets.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCEPT, self.accept.clone());
        headers.insert(USER_AGENT, self.user_agent.clone());
        if self.enable_compression {
            headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate"));
        }
        headers.insert(HeaderName::from_static(X_CLIENT), self.client_name.clone());
        if let Some(version) = &self.datakatalog_version {
            headers.insert(HeaderName::from_static(X_DATAKATALOG_VERSION), version.clone());
        }
    }

    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.apply(&mut headers);
        headers
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader { name })
}
