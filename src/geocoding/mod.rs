//! Geocoding autocomplete: the place model, the provider seam and the search
//! state driven by the location search widget.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::contexts::SearchResult;

pub mod config;
pub mod geoapify;
pub mod state;

pub use config::GeocoderConfig;
pub use geoapify::GeoapifyProvider;
pub use state::{ResponseOutcome, SearchState};

/// One suggestion from the autocomplete endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub properties: PlaceProperties,
    pub geometry: PlaceGeometry,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceProperties {
    #[serde(default)]
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceGeometry {
    /// `[longitude, latitude]`, GeoJSON order
    pub coordinates: [f64; 2],
}

/// Body of an autocomplete response
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    pub features: Vec<Place>,
}

/// The place handed to the widget's owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl Place {
    #[cfg(test)]
    pub fn new(formatted: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            properties: PlaceProperties {
                formatted: formatted.into(),
            },
            geometry: PlaceGeometry {
                coordinates: [longitude, latitude],
            },
        }
    }

    pub fn address(&self) -> &str {
        &self.properties.formatted
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.coordinates[1]
    }

    /// Swap GeoJSON `(lon, lat)` order into the latitude-first selection
    pub fn to_selection(&self) -> SelectedLocation {
        SelectedLocation {
            latitude: self.latitude(),
            longitude: self.longitude(),
            address: self.properties.formatted.clone(),
        }
    }
}

/// Parse an autocomplete body into its features, in response order
pub fn parse_features(body: &str) -> SearchResult<Vec<Place>> {
    let response: AutocompleteResponse = serde_json::from_str(body)?;
    Ok(response.features)
}

/// Future returned by providers; reqwest futures are not `Send` on wasm32
#[cfg(not(target_arch = "wasm32"))]
pub type ProviderFuture<'a, T> = futures::future::BoxFuture<'a, T>;
#[cfg(target_arch = "wasm32")]
pub type ProviderFuture<'a, T> = futures::future::LocalBoxFuture<'a, T>;

/// Backend able to turn partial text into place suggestions
pub trait AutocompleteProvider {
    fn autocomplete<'a>(&'a self, text: &'a str) -> ProviderFuture<'a, SearchResult<Vec<Place>>>;
}

/// Cloneable handle to an autocomplete backend, passed to the widget as a prop
#[derive(Clone)]
pub struct Geocoder {
    provider: Arc<dyn AutocompleteProvider>,
}

impl Geocoder {
    pub fn new(provider: impl AutocompleteProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Geocoder backed by the Geoapify HTTP API
    pub fn geoapify(config: GeocoderConfig) -> SearchResult<Self> {
        Ok(Self::new(GeoapifyProvider::new(config)?))
    }

    pub async fn autocomplete(&self, text: &str) -> SearchResult<Vec<Place>> {
        self.provider.autocomplete(text).await
    }
}

impl PartialEq for Geocoder {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.provider, &other.provider)
    }
}
