use async_trait::async_trait;

use super::{DatasetSource, FetchError};
use crate::domain::Country;

/// In-memory source used for offline mode and tests.
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    outcome: Result<Vec<T>, String>,
}

impl<T> StaticSource<T> {
    pub fn ready(items: Vec<T>) -> Self {
        Self {
            outcome: Ok(items),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> DatasetSource<T> for StaticSource<T> {
    async fn fetch(&self) -> Result<Vec<T>, FetchError> {
        match &self.outcome {
            Ok(items) => Ok(items.clone()),
            Err(message) => Err(FetchError::Unavailable(message.clone())),
        }
    }
}

/// A small built-in dataset, enough to scroll through a couple of pages.
pub fn sample_countries() -> Vec<Country> {
    let rows: &[(&str, &str, &str, &str, &str, u64)] = &[
        ("AFG", "af", "Afghanistan", "Asia", "Kabul", 40218234),
        ("ALB", "al", "Albania", "Europe", "Tirana", 2837743),
        ("DZA", "dz", "Algeria", "Africa", "Algiers", 44700000),
        ("ARG", "ar", "Argentina", "Americas", "Buenos Aires", 45376763),
        ("AUS", "au", "Australia", "Oceania", "Canberra", 25687041),
        ("AUT", "at", "Austria", "Europe", "Vienna", 8917205),
        ("BGD", "bd", "Bangladesh", "Asia", "Dhaka", 164689383),
        ("BEL", "be", "Belgium", "Europe", "Brussels", 11555997),
        ("BRA", "br", "Brazil", "Americas", "Brasília", 212559409),
        ("CAN", "ca", "Canada", "Americas", "Ottawa", 38005238),
        ("CHL", "cl", "Chile", "Americas", "Santiago", 19116209),
        ("CHN", "cn", "China", "Asia", "Beijing", 1402112000),
        ("COL", "co", "Colombia", "Americas", "Bogotá", 50882884),
        ("EGY", "eg", "Egypt", "Africa", "Cairo", 102334403),
        ("ETH", "et", "Ethiopia", "Africa", "Addis Ababa", 114963583),
        ("FJI", "fj", "Fiji", "Oceania", "Suva", 896444),
        ("FIN", "fi", "Finland", "Europe", "Helsinki", 5530719),
        ("FRA", "fr", "France", "Europe", "Paris", 67391582),
        ("DEU", "de", "Germany", "Europe", "Berlin", 83240525),
        ("GHA", "gh", "Ghana", "Africa", "Accra", 31072945),
        ("GRC", "gr", "Greece", "Europe", "Athens", 10715549),
        ("ISL", "is", "Iceland", "Europe", "Reykjavik", 366425),
        ("IND", "in", "India", "Asia", "New Delhi", 1380004385),
        ("IDN", "id", "Indonesia", "Asia", "Jakarta", 273523621),
        ("IRL", "ie", "Ireland", "Europe", "Dublin", 4994724),
        ("JPN", "jp", "Japan", "Asia", "Tokyo", 125836021),
        ("KEN", "ke", "Kenya", "Africa", "Nairobi", 53771300),
        ("MEX", "mx", "Mexico", "Americas", "Mexico City", 128932753),
        ("NZL", "nz", "New Zealand", "Oceania", "Wellington", 5084300),
        ("NGA", "ng", "Nigeria", "Africa", "Abuja", 206139587),
        ("NOR", "no", "Norway", "Europe", "Oslo", 5379475),
        ("PER", "pe", "Peru", "Americas", "Lima", 32971846),
        ("PNG", "pg", "Papua New Guinea", "Oceania", "Port Moresby", 8947027),
        ("PRT", "pt", "Portugal", "Europe", "Lisbon", 10305564),
        ("SEN", "sn", "Senegal", "Africa", "Dakar", 16743930),
        ("ZAF", "za", "South Africa", "Africa", "Pretoria", 59308690),
        ("KOR", "kr", "South Korea", "Asia", "Seoul", 51780579),
        ("ESP", "es", "Spain", "Europe", "Madrid", 47351567),
        ("SWE", "se", "Sweden", "Europe", "Stockholm", 10353442),
        ("THA", "th", "Thailand", "Asia", "Bangkok", 69799978),
        ("TON", "to", "Tonga", "Oceania", "Nuku'alofa", 105697),
        ("URY", "uy", "Uruguay", "Americas", "Montevideo", 3473727),
        ("VNM", "vn", "Vietnam", "Asia", "Hanoi", 97338583),
    ];

    rows.iter()
        .map(|&(cca3, cca2, name, region, capital, population)| {
            Country::new(cca3, name, region)
                .with_capital(capital)
                .with_population(population)
                .with_flag(format!("https://flagcdn.com/w320/{}.png", cca2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Browsable;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_ready_source_returns_items() {
        let source = StaticSource::ready(vec![1u32, 2, 3]);
        assert_eq!(source.fetch().await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failing_source_reports_message_verbatim() {
        let source: StaticSource<u32> = StaticSource::failing("network error");
        let err = source.fetch().await.unwrap_err();
        assert_eq!(err.to_string(), "network error");
    }

    #[test]
    fn test_sample_countries_have_unique_keys() {
        let countries = sample_countries();
        let keys: HashSet<&str> = countries.iter().map(|c| c.key()).collect();
        assert_eq!(keys.len(), countries.len());
        assert!(countries.len() > 40, "sample should span more than two pages");
    }
}
