use dioxus::prelude::*;
use crate::domain::Country;

#[component]
pub fn CountryCard(country: Country) -> Element {
    let flag_alt = country.flag_alt();
    let population = country.formatted_population();
    let capital = country.capital_label();

    rsx! {
        article {
            class: "country-card",
            style: "background: white; border-radius: 6px; overflow: hidden;
                   box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);",

            // Flag
            if !country.flags.png.is_empty() {
                img {
                    style: "width: 100%; height: 160px; object-fit: cover; display: block;",
                    src: "{country.flags.png}",
                    alt: "{flag_alt}",
                }
            }

            div {
                style: "padding: 24px 24px 36px 24px;",

                h2 {
                    style: "margin: 0 0 16px 0; font-size: 1.1rem; font-weight: 800;",
                    "{country.name.common}"
                }

                p { style: "margin: 4px 0; font-size: 14px;",
                    span { style: "font-weight: 600;", "Population: " }
                    "{population}"
                }
                p { style: "margin: 4px 0; font-size: 14px;",
                    span { style: "font-weight: 600;", "Region: " }
                    "{country.region}"
                }
                p { style: "margin: 4px 0; font-size: 14px;",
                    span { style: "font-weight: 600;", "Capital: " }
                    "{capital}"
                }
            }
        }
    }
}
