use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::use_wry_event_handler;
use dioxus::prelude::*;

use crate::config::BrowserConfig;
use crate::ui_dioxus::components::LayoutTick;
use crate::ui_dioxus::views::CountriesView;

/// Root component. Expects `BrowserConfig` and an
/// `Arc<dyn DatasetSource<Country>>` in the root context.
#[component]
pub fn App() -> Element {
    let config = use_context::<BrowserConfig>();
    let mut resized = use_signal(|| 0u64);
    use_context_provider(|| LayoutTick(resized));

    // A taller window can pull the sentinel into the zone without any scroll
    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(_),
            ..
        } = event
        {
            *resized.write() += 1;
        }
    });

    rsx! {
        div {
            class: "app-container",
            style: "display: flex; flex-direction: column; height: 100vh; margin: 0;
                   font-family: 'Nunito Sans', system-ui, sans-serif; background: #fafafa; color: #111517;",

            // Navigation bar
            nav {
                class: "navbar",
                style: "flex: none; padding: 24px 80px; background: white;
                       box-shadow: 0 2px 4px rgba(0, 0, 0, 0.06);",
                div {
                    class: "nav-brand",
                    style: "font-size: 1.4rem; font-weight: 800;",
                    "{config.window_title}"
                }
            }

            // Main content area
            main {
                class: "main-content",
                style: "flex: 1; min-height: 0;",
                CountriesView {}
            }
        }
    }
}
