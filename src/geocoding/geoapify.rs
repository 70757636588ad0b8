use futures::FutureExt;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{parse_features, AutocompleteProvider, GeocoderConfig, Place, ProviderFuture};
use crate::contexts::{SearchError, SearchResult};

/// Autocomplete backed by `GET /v1/geocode/autocomplete` on Geoapify
pub struct GeoapifyProvider {
    client: Client,
    config: GeocoderConfig,
}

/// Error body Geoapify sends with non-success statuses
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl GeoapifyProvider {
    pub fn new(config: GeocoderConfig) -> SearchResult<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Request URL for `text`; both parameters are percent-encoded
    pub fn request_url(&self, text: &str) -> SearchResult<Url> {
        Url::parse_with_params(
            &self.config.autocomplete_endpoint(),
            &[("text", text), ("apiKey", self.config.api_key.as_str())],
        )
        .map_err(|e| SearchError::Network(format!("invalid geocoder URL: {}", e)))
    }

    async fn fetch(&self, text: &str) -> SearchResult<Vec<Place>> {
        let url = self.request_url(text)?;
        log::debug!("Requesting autocomplete for {:?}", text);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_features(&body)
    }
}

impl AutocompleteProvider for GeoapifyProvider {
    fn autocomplete<'a>(&'a self, text: &'a str) -> ProviderFuture<'a, SearchResult<Vec<Place>>> {
        #[cfg(not(target_arch = "wasm32"))]
        let future = self.fetch(text).boxed();
        #[cfg(target_arch = "wasm32")]
        let future = self.fetch(text).boxed_local();
        future
    }
}

/// Best human-readable message from an error body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        Ok(ErrorBody {
            error: Some(error), ..
        }) => error,
        _ => body.trim().to_string(),
    }
}
