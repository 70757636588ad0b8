use dioxus::prelude::*;

use crate::geocoding::SelectedLocation;
use crate::utils::format_utils::{format_latitude, format_longitude, map_url};

#[derive(Props, PartialEq, Clone)]
pub struct LocationCardProps {
    location: SelectedLocation,
    on_clear: EventHandler<()>,
}

/// Summary of a chosen place with a link to the map
#[component]
pub fn LocationCard(props: LocationCardProps) -> Element {
    let location = &props.location;
    let latitude = format_latitude(location.latitude);
    let longitude = format_longitude(location.longitude);
    let map_link = map_url(location.latitude, location.longitude);

    rsx! {
        div { class: "location-card",
            div { class: "location-card-header",
                h3 { class: "location-card-title", "{location.address}" }
                button {
                    class: "location-card-clear",
                    onclick: move |_| props.on_clear.call(()),
                    "Clear"
                }
            }
            div { class: "location-card-coords",
                div { class: "stat-item",
                    span { class: "stat-value", "{latitude}" }
                    span { class: "stat-label", "Latitude" }
                }
                div { class: "stat-item",
                    span { class: "stat-value", "{longitude}" }
                    span { class: "stat-label", "Longitude" }
                }
            }
            a { class: "location-card-link", href: "{map_link}", target: "_blank", "Open in OpenStreetMap" }
        }
    }
}
