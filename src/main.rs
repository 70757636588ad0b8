use dioxus::prelude::*;
#[cfg(feature = "desktop")]
use dioxus_desktop::{Config, WindowBuilder};
use views::{Home, Navbar};

mod components;
mod contexts;
mod geocoding;
mod utils;
mod views;

use contexts::TripContext;
use geocoding::{Geocoder, GeocoderConfig};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    pretty_env_logger::init();

    let config = GeocoderConfig::load().unwrap_or_else(|err| {
        log::error!("Failed to load geocoder settings, using defaults: {}", err);
        GeocoderConfig::default()
    });

    #[cfg(feature = "desktop")]
    let builder = LaunchBuilder::desktop().with_cfg(
        Config::new().with_window(
            WindowBuilder::new().with_title("Wayfinder")
        ),
    );
    #[cfg(not(feature = "desktop"))]
    let builder = LaunchBuilder::new();

    builder.with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<GeocoderConfig>();

    // Build the geocoder once from the loaded settings
    let geocoder = use_hook(move || Geocoder::geoapify(config));

    let destination = use_signal(|| None);
    let last_error = use_signal(|| None);
    use_context_provider(|| TripContext {
        destination,
        last_error,
    });

    match geocoder {
        Err(err) => {
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                div { class: "error-container",
                    div {
                        class: "error-banner",
                        style: "background-color: #fef2f2; border: 1px solid #fecaca; color: #dc2626; padding: 1rem; margin: 1rem; border-radius: 0.5rem;",
                        "⚠️ Failed to set up the geocoder: {err}"
                    }
                }
            }
        }
        Ok(geocoder) => {
            use_context_provider(|| geocoder);

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                Router::<Route> {}
            }
        }
    }
}
