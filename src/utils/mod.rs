/// Configuration constants for the application
pub mod config {
    /// Environment variable holding the Geoapify API key
    pub const API_KEY_ENV: &str = "GEOAPIFY_API_KEY";

    /// Environment variable overriding the geocoder host
    pub const BASE_URL_ENV: &str = "GEOAPIFY_BASE_URL";

    /// Default geocoder host
    pub const DEFAULT_BASE_URL: &str = "https://api.geoapify.com";

    /// Path of the autocomplete endpoint below the host
    pub const AUTOCOMPLETE_PATH: &str = "/v1/geocode/autocomplete";

    /// Default HTTP timeout for autocomplete requests
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Directory (below the home directory) holding the settings file
    pub const SETTINGS_DIR: &str = ".wayfinder";

    /// Settings file name
    pub const SETTINGS_FILE: &str = "geocoder.json";

    /// Placeholder shown in an empty search field
    pub const DEFAULT_PLACEHOLDER: &str = "Where do you want to go?";
}

/// Utility functions for file operations
pub mod file_utils {
    use super::config::*;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    /// Get the settings file path, if a home directory exists
    pub fn get_settings_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    /// Read a settings file, treating a missing file as absent
    pub fn read_optional(path: &Path) -> Result<Option<String>, std::io::Error> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Utility functions for presenting coordinates
pub mod format_utils {
    /// Format a latitude like "48.856610° N"
    pub fn format_latitude(latitude: f64) -> String {
        let hemisphere = if latitude < 0.0 { 'S' } else { 'N' };
        format!("{:.6}° {}", latitude.abs(), hemisphere)
    }

    /// Format a longitude like "2.352220° E"
    pub fn format_longitude(longitude: f64) -> String {
        let hemisphere = if longitude < 0.0 { 'W' } else { 'E' };
        format!("{:.6}° {}", longitude.abs(), hemisphere)
    }

    /// OpenStreetMap link centred on a point
    pub fn map_url(latitude: f64, longitude: f64) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={:.6}&mlon={:.6}#map=16/{:.6}/{:.6}",
            latitude, longitude, latitude, longitude
        )
    }
}
