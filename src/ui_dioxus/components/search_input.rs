use dioxus::prelude::*;

#[component]
pub fn SearchInput(query: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; width: 100%; max-width: 480px;
                   padding: 14px 24px; background: white; border-radius: 6px;
                   box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);",

            span { style: "color: #9ca3af;", "🔍" }

            input {
                r#type: "search",
                style: "flex: 1; border: none; outline: none; font-size: 14px; background: transparent;",
                placeholder: "Search for a country...",
                value: "{query}",
                oninput: move |e| on_change.call(e.value()),
            }
        }
    }
}
