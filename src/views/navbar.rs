use crate::contexts::TripContext;
use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let trip = use_context::<TripContext>();
    let destination = (trip.destination)();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            header {
                id: "topbar",
                class: "app-topbar",
                Link {
                    to: Route::Home {},
                    class: "app-title",
                    "Wayfinder"
                }
                span { class: "app-destination",
                    match destination {
                        Some(location) => rsx! { "Heading to {location.address}" },
                        None => rsx! { "No destination" },
                    }
                }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}
