//! Reverse-geocoding HTTP client.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::extract::{extract_component, NameForm};
use crate::config::GeocodeConfig;
use crate::error::{ConfigError, ResolveError};
use crate::models::{AddressType, Coordinate, GeocodeResponse};

const USER_AGENT: &str = concat!("locstate/", env!("CARGO_PKG_VERSION"));
const REDACTED: &str = "REDACTED";

/// Resolves coordinates through a reverse-geocoding endpoint
pub struct GeocodeResolver {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
    language: Option<String>,
    name_form: NameForm,
}

impl GeocodeResolver {
    pub fn new(config: &GeocodeConfig) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            url: config.endpoint.clone(),
            source,
        })?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            name_form: if config.short_name {
                NameForm::Short
            } else {
                NameForm::Long
            },
        })
    }

    /// Full request URL for a coordinate
    pub fn request_url(&self, coordinate: Coordinate) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("latlng", &coordinate.latlng());
            if let Some(language) = &self.language {
                pairs.append_pair("language", language);
            }
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        url
    }

    /// Send the request and decode the response document.
    ///
    /// Anything other than 200 is an error; the body is not inspected then.
    pub async fn fetch(&self, coordinate: Coordinate) -> Result<GeocodeResponse, ResolveError> {
        let url = self.request_url(coordinate);
        let query = describe_query(&url);

        info!("Reverse geocoding {}", query);

        // without_url: the URL may carry the API key
        let response = self.client.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!("Geocode request failed: {}", e);
            e
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Geocode request returned status {}", status);
            return Err(ResolveError::Status {
                status: status.as_u16(),
                query,
            });
        }

        let body = response.bytes().await.map_err(|e| e.without_url())?;
        let document: GeocodeResponse = serde_json::from_slice(&body)?;

        debug!(
            "Decoded geocode response: status={:?}, {} results",
            document.status,
            document.results.len()
        );

        Ok(document)
    }

    /// Name of the state/province containing `coordinate`.
    ///
    /// Zero results is an error here, unlike the spatial resolver's empty match.
    pub async fn resolve(&self, coordinate: Coordinate) -> Result<String, ResolveError> {
        let document = self.fetch(coordinate).await?;
        let query = describe_query(&self.request_url(coordinate));

        extract_component(
            &document,
            &AddressType::AdministrativeAreaLevel1,
            self.name_form,
            &query,
        )
    }
}

/// Decoded query string with the API key masked, for logs and error messages
fn describe_query(url: &Url) -> String {
    url.query_pairs()
        .map(|(k, v)| {
            if k == "key" {
                format!("{}={}", k, REDACTED)
            } else {
                format!("{}={}", k, v)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
