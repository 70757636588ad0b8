use dioxus::prelude::*;

use crate::contexts::SearchError;
use crate::geocoding::{Geocoder, ResponseOutcome, SearchState, SelectedLocation};
use crate::utils::config::DEFAULT_PLACEHOLDER;

const LOCATION_SEARCH_CSS: Asset = asset!("/assets/styling/location_search.css");
const SEARCH_ICON: Asset = asset!("/assets/icons/search.svg");

#[derive(Props, PartialEq, Clone)]
pub struct LocationSearchProps {
    /// Backend queried on every non-empty keystroke
    geocoder: Geocoder,
    /// Image source shown left of the field; the bundled search glyph otherwise
    #[props(into)]
    icon: Option<String>,
    #[props(into)]
    placeholder: Option<String>,
    /// Inline style for the outer wrapper
    #[props(into)]
    container_style: Option<String>,
    /// Background color of the text field only
    #[props(into)]
    input_background: Option<String>,
    on_select: EventHandler<SelectedLocation>,
    /// Called with the failure of the latest request, and with `None` once a
    /// later request succeeds again
    on_error: Option<EventHandler<Option<SearchError>>>,
}

/// Text field with a dropdown of geocoder suggestions.
///
/// Each non-empty keystroke spawns one autocomplete request on a task owned by
/// this component, so pending requests die with it. Replies for anything but
/// the latest query are dropped by [`SearchState`].
#[component]
pub fn LocationSearch(props: LocationSearchProps) -> Element {
    let mut state = use_signal(SearchState::new);

    let icon = props.icon.clone().unwrap_or_else(|| SEARCH_ICON.to_string());
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());
    let container_style = props.container_style.clone().unwrap_or_default();
    let input_style = props
        .input_background
        .as_ref()
        .map(|color| format!("background-color: {};", color))
        .unwrap_or_default();

    let geocoder = props.geocoder.clone();
    let on_error = props.on_error;
    let on_select = props.on_select;

    let on_input = move |evt: FormEvent| {
        let Some(ticket) = state.write().set_query(evt.value()) else {
            return;
        };
        let geocoder = geocoder.clone();

        spawn(async move {
            let result = geocoder.autocomplete(&ticket.text).await;

            // Signal is gone once the widget unmounts
            let outcome = match state.try_write() {
                Ok(mut current) => current.apply_response(&ticket, result),
                Err(_) => return,
            };

            match &outcome {
                ResponseOutcome::Updated(count) | ResponseOutcome::Recovered(count) => {
                    log::debug!("{} suggestions for {:?}", count, ticket.text);
                }
                ResponseOutcome::Stale => {
                    log::debug!("Discarding stale suggestions for {:?}", ticket.text);
                }
                ResponseOutcome::Failed(err) => {
                    log::error!("Error fetching autocomplete results: {}", err);
                }
            }

            if let (Some(change), Some(handler)) = (outcome.error_change(), on_error) {
                handler.call(change);
            }
        });
    };

    let current = state();
    let bar_class = if current.last_error().is_some() {
        "location-search-bar location-search-bar-error"
    } else {
        "location-search-bar"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LOCATION_SEARCH_CSS }
        div { class: "location-search", style: "{container_style}",
            div { class: "{bar_class}",
                img { class: "location-search-icon", src: "{icon}", alt: "" }
                input {
                    class: "location-search-input",
                    r#type: "text",
                    style: "{input_style}",
                    placeholder: "{placeholder}",
                    value: "{current.query()}",
                    oninput: on_input
                }
            }

            if current.is_suggesting() {
                ul { class: "location-search-list",
                    {current.candidates().iter().enumerate().map(|(index, place)| {
                        rsx! {
                            li {
                                key: "{index}",
                                class: "location-search-item",
                                onclick: move |_| {
                                    let selection = state.write().select(index);
                                    if let Some(selection) = selection {
                                        log::info!("Selected {}", selection.address);
                                        on_select.call(selection);
                                    }
                                },
                                "{place.address()}"
                            }
                        }
                    })}
                }
            }
        }
    }
}
