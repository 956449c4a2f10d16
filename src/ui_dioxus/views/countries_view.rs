use dioxus::prelude::*;
use std::rc::Rc;
use std::sync::Arc;

use crate::config::BrowserConfig;
use crate::domain::Country;
use crate::repository::DatasetSource;
use crate::services::{BrowserState, ProximityZone, RenderState};
use crate::ui_dioxus::components::{
    CountryCard, LoadMoreSentinel, RegionDropdown, ScrollViewport, SearchInput, SharedObserver,
};

/// Searchable, region-filtered country grid that reveals one page at a time
/// as the user scrolls.
#[component]
pub fn CountriesView() -> Element {
    let config = use_context::<BrowserConfig>();
    let source = use_context::<Arc<dyn DatasetSource<Country>>>();

    let mut browser = use_signal(|| BrowserState::<Country>::from_config(&config));
    let mut viewport_element = use_signal(|| None::<Rc<MountedData>>);
    let mut scroll_tick = use_signal(|| 0u64);

    use_context_provider(|| ScrollViewport {
        element: viewport_element,
        scroll_tick,
    });
    let margin_px = config.proximity_margin_px;
    use_context_provider(|| SharedObserver::new(ProximityZone::below(margin_px)));

    // One fetch per session
    let _ = use_resource(move || {
        let source = source.clone();
        async move {
            let result = source.fetch().await;
            browser.write().load(result);
        }
    });

    let (filters, revision, render) = {
        let state = browser.read();
        (state.filters().clone(), state.revision(), state.render())
    };

    let content = match render {
        RenderState::Error(message) => rsx! {
            p { style: "font-size: 14px; color: #f87171;", "{message}" }
        },
        RenderState::Loading => rsx! {
            p { style: "font-size: 14px;", "Loading..." }
        },
        RenderState::Empty => rsx! {
            p { style: "font-size: 14px;", "No countries found." }
        },
        RenderState::Populated { visible, has_sentinel } => rsx! {
            div {
                class: "country-grid",
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                       column-gap: 48px; row-gap: 64px;",
                for country in visible {
                    CountryCard { key: "{country.cca3}", country: country.clone() }
                }
            }

            if has_sentinel {
                LoadMoreSentinel {
                    key: "{revision}",
                    on_near_bottom: move |_| {
                        // avoid dirtying the signal when there is nothing left to reveal
                        if browser.peek().has_more() {
                            browser.write().grow();
                        }
                    },
                }
            }
        },
    };

    rsx! {
        div {
            class: "countries-view",
            style: "height: 100%; overflow-y: auto; padding: 48px 80px; box-sizing: border-box;",
            onmounted: move |e| viewport_element.set(Some(e.data())),
            onscroll: move |_| {
                *scroll_tick.write() += 1;
            },

            // Filters
            div {
                style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;
                       justify-content: space-between; margin-bottom: 40px;",

                SearchInput {
                    query: filters.query.clone(),
                    on_change: move |query: String| {
                        browser.write().set_query(query);
                    },
                }

                RegionDropdown {
                    region: filters.facet.clone(),
                    on_change: move |region: String| {
                        browser.write().set_facet(region);
                    },
                }
            }

            {content}
        }
    }
}
