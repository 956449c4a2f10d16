use dioxus::prelude::*;
use crate::domain::Region;

/// Anything other than a known region clears the facet.
fn facet_from_value(value: &str) -> String {
    Region::parse(value).map(|region| region.as_str().to_string()).unwrap_or_default()
}

/// Facet selector. The empty value means "any region".
#[component]
pub fn RegionDropdown(region: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        select {
            style: "padding: 14px 20px; min-width: 200px; border: none; border-radius: 6px;
                   background: white; font-size: 14px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);",
            value: "{region}",
            onchange: move |e| on_change.call(facet_from_value(&e.value())),

            option { value: "", selected: region.is_empty(), {Region::UNSET_LABEL} }
            for option_region in Region::ALL {
                option {
                    key: "{option_region}",
                    value: "{option_region}",
                    selected: region == option_region.as_str(),
                    "{option_region}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_region_passes_through() {
        assert_eq!(facet_from_value("Oceania"), "Oceania");
    }

    #[test]
    fn test_unknown_value_clears_facet() {
        assert_eq!(facet_from_value(""), "");
        assert_eq!(facet_from_value("Antarctic"), "");
        assert_eq!(facet_from_value("europe"), "");
    }
}
