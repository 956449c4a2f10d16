use serde::{Deserialize, Serialize};

use super::Browsable;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub cca3: String, // ISO 3166-1 alpha-3, unique
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub capital: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Country {
    pub fn new(cca3: impl Into<String>, common_name: impl Into<String>, region: impl Into<String>) -> Self {
        let common = common_name.into();
        Self {
            cca3: cca3.into(),
            name: CountryName {
                official: common.clone(),
                common,
            },
            flags: Flags::default(),
            population: 0,
            region: region.into(),
            capital: Vec::new(),
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_capital(mut self, capital: impl Into<String>) -> Self {
        self.capital.push(capital.into());
        self
    }

    pub fn with_flag(mut self, png: impl Into<String>) -> Self {
        self.flags.png = png.into();
        self
    }

    /// Population with thousands separators, e.g. `83,240,525`.
    pub fn formatted_population(&self) -> String {
        let digits = self.population.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    pub fn capital_label(&self) -> String {
        if self.capital.is_empty() {
            "N/A".to_string()
        } else {
            self.capital.join(", ")
        }
    }

    /// Alt text for the flag image, falling back to the country name.
    pub fn flag_alt(&self) -> String {
        self.flags
            .alt
            .clone()
            .unwrap_or_else(|| format!("Flag of {}", self.name.common))
    }
}

impl Browsable for Country {
    fn key(&self) -> &str {
        &self.cca3
    }

    fn display_name(&self) -> &str {
        &self.name.common
    }

    fn facet(&self) -> &str {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_deserialize_rest_countries_payload() {
        let json = r#"[{
            "flags": {
                "png": "https://flagcdn.com/w320/de.png",
                "svg": "https://flagcdn.com/de.svg",
                "alt": "The flag of Germany is composed of three equal horizontal bands of black, red and gold."
            },
            "name": {
                "common": "Germany",
                "official": "Federal Republic of Germany",
                "nativeName": {"deu": {"official": "Bundesrepublik Deutschland", "common": "Deutschland"}}
            },
            "cca3": "DEU",
            "capital": ["Berlin"],
            "region": "Europe",
            "population": 83240525
        }]"#;

        let countries: Vec<Country> = serde_json::from_str(json).unwrap();
        assert_eq!(countries.len(), 1);

        let germany = &countries[0];
        assert_eq!(germany.key(), "DEU");
        assert_eq!(germany.display_name(), "Germany");
        assert_eq!(germany.facet(), "Europe");
        assert_eq!(germany.name.official, "Federal Republic of Germany");
        assert_eq!(germany.capital, vec!["Berlin".to_string()]);
        assert!(germany.flags.alt.is_some());
    }

    #[test]
    fn test_deserialize_tolerates_missing_optional_fields() {
        let json = r#"{"cca3": "ATA", "name": {"common": "Antarctica"}}"#;

        let antarctica: Country = serde_json::from_str(json).unwrap();
        assert_eq!(antarctica.population, 0);
        assert!(antarctica.capital.is_empty());
        assert_eq!(antarctica.region, "");
        assert_eq!(antarctica.capital_label(), "N/A");
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(83240525, "83,240,525")]
    #[case(1402112000, "1,402,112,000")]
    fn test_formatted_population(#[case] population: u64, #[case] expected: &str) {
        let country = Country::new("XXX", "Somewhere", "Asia").with_population(population);
        assert_eq!(country.formatted_population(), expected);
    }

    #[test]
    fn test_capital_label_joins_multiple_capitals() {
        let south_africa = Country::new("ZAF", "South Africa", "Africa")
            .with_capital("Pretoria")
            .with_capital("Bloemfontein")
            .with_capital("Cape Town");
        assert_eq!(south_africa.capital_label(), "Pretoria, Bloemfontein, Cape Town");
    }

    #[test]
    fn test_flag_alt_falls_back_to_name() {
        let country = Country::new("FRA", "France", "Europe");
        assert_eq!(country.flag_alt(), "Flag of France");
    }
}
