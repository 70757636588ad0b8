use dioxus::prelude::*;

use super::error::SearchError;
use crate::geocoding::SelectedLocation;

/// Context for sharing the chosen destination across the application
#[derive(Clone, Copy)]
pub struct TripContext {
    pub destination: Signal<Option<SelectedLocation>>,
    pub last_error: Signal<Option<SearchError>>,
}

impl TripContext {
    /// Record a place the user picked and forget any earlier search failure
    pub fn choose(&mut self, location: SelectedLocation) {
        log::info!("Destination set to {}", location.address);
        self.destination.set(Some(location));
        self.last_error.set(None);
    }

    /// Record the latest autocomplete failure, or clear it with `None`
    pub fn report(&mut self, err: Option<SearchError>) {
        self.last_error.set(err);
    }

    pub fn clear(&mut self) {
        self.destination.set(None);
        self.last_error.set(None);
    }
}
