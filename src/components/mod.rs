//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! The location search widget lives here together with the card that presents a chosen place.

mod location_search;
pub use location_search::LocationSearch;

mod location_card;
pub use location_card::LocationCard;
