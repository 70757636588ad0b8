use dioxus::prelude::*;

use crate::components::{LocationCard, LocationSearch};
use crate::contexts::TripContext;
use crate::geocoding::Geocoder;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

/// The Home page: search for a destination and show what was picked
#[component]
pub fn Home() -> Element {
    let geocoder = use_context::<Geocoder>();
    let mut trip = use_context::<TripContext>();

    let destination = (trip.destination)();
    let last_error = (trip.last_error)();

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        div { class: "home-container",
            div { class: "home-header",
                h1 { "Plan a trip" }
                p { class: "home-subtext", "Start typing an address, city or landmark." }
            }

            LocationSearch {
                geocoder,
                container_style: "margin-bottom: 20px; width: 100%;",
                on_select: move |location| trip.choose(location),
                on_error: move |err| trip.report(err),
            }

            if let Some(err) = last_error {
                div {
                    class: "error-banner",
                    style: "background-color: #fef2f2; border: 1px solid #fecaca; color: #dc2626; padding: 1rem; border-radius: 0.5rem;",
                    "⚠️ Suggestions unavailable: {err}"
                }
            }

            match destination {
                Some(location) => rsx! {
                    LocationCard {
                        location,
                        on_clear: move |_| trip.clear(),
                    }
                },
                None => rsx! {
                    p { class: "home-empty", "No destination selected yet." }
                },
            }
        }
    }
}
