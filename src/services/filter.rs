use crate::domain::Browsable;

/// Free-text query plus facet selector. An empty value matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub facet: String,
}

impl FilterState {
    pub fn new(query: impl Into<String>, facet: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            facet: facet.into(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.facet.is_empty()
    }

    pub fn matches<T: Browsable>(&self, entity: &T) -> bool {
        Matcher::new(&self.query, &self.facet).matches(entity)
    }

    pub fn apply<'a, T: Browsable>(&self, entities: &'a [T]) -> Vec<&'a T> {
        filter_entities(entities, &self.query, &self.facet)
    }
}

/// Entities whose display name contains `query` (case-insensitive) and whose
/// facet equals `facet`, in input order.
pub fn filter_entities<'a, T: Browsable>(entities: &'a [T], query: &str, facet: &str) -> Vec<&'a T> {
    let matcher = Matcher::new(query, facet);
    entities.iter().filter(|entity| matcher.matches(*entity)).collect()
}

struct Matcher<'f> {
    needle: Option<String>,
    facet: Option<&'f str>,
}

impl<'f> Matcher<'f> {
    fn new(query: &str, facet: &'f str) -> Self {
        Self {
            needle: (!query.is_empty()).then(|| query.to_lowercase()),
            facet: (!facet.is_empty()).then_some(facet),
        }
    }

    fn matches<T: Browsable>(&self, entity: &T) -> bool {
        let text_ok = match &self.needle {
            Some(needle) => entity.display_name().to_lowercase().contains(needle.as_str()),
            None => true,
        };
        let facet_ok = match self.facet {
            Some(facet) => entity.facet() == facet,
            None => true,
        };
        text_ok && facet_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Country;
    use rstest::rstest;

    fn countries() -> Vec<Country> {
        vec![
            Country::new("DEU", "Germany", "Europe"),
            Country::new("NGA", "Nigeria", "Africa"),
            Country::new("NER", "Niger", "Africa"),
            Country::new("FRA", "France", "Europe"),
            Country::new("AUS", "Australia", "Oceania"),
            Country::new("AUT", "Austria", "Europe"),
        ]
    }

    fn keys(filtered: &[&Country]) -> Vec<String> {
        filtered.iter().map(|c| c.cca3.clone()).collect()
    }

    #[rstest]
    #[case("", "", vec!["DEU", "NGA", "NER", "FRA", "AUS", "AUT"])]
    #[case("niger", "", vec!["NGA", "NER"])]
    #[case("NIGER", "", vec!["NGA", "NER"])]
    #[case("nigeria", "", vec!["NGA"])]
    #[case("", "Europe", vec!["DEU", "FRA", "AUT"])]
    #[case("austr", "", vec!["AUS", "AUT"])]
    #[case("austr", "Europe", vec!["AUT"])]
    #[case("", "europe", vec![])]
    #[case("zzz", "", vec![])]
    fn test_filter_combinations(#[case] query: &str, #[case] facet: &str, #[case] expected: Vec<&str>) {
        let data = countries();
        let filtered = filter_entities(&data, query, facet);
        assert_eq!(keys(&filtered), expected);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = countries();
        let first = keys(&filter_entities(&data, "a", "Europe"));
        let second = keys(&filter_entities(&data, "a", "Europe"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_narrowing_yields_subsequence() {
        let data = countries();
        let broad = keys(&filter_entities(&data, "a", ""));
        let narrow_query = keys(&filter_entities(&data, "an", ""));
        let narrow_facet = keys(&filter_entities(&data, "a", "Europe"));

        for narrow in [narrow_query, narrow_facet] {
            let mut remaining = broad.iter();
            for key in &narrow {
                assert!(
                    remaining.any(|k| k == key),
                    "{key} is not in order within the broader result {broad:?}"
                );
            }
        }
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let data: Vec<Country> = Vec::new();
        assert!(filter_entities(&data, "x", "Asia").is_empty());
    }

    #[test]
    fn test_case_folding_is_unicode_aware() {
        let data = vec![Country::new("ALA", "Åland Islands", "Europe")];
        assert_eq!(filter_entities(&data, "åland", "").len(), 1);
    }

    #[test]
    fn test_filter_state_matches_single_entity() {
        let state = FilterState::new("ger", "Europe");
        assert!(state.matches(&Country::new("DEU", "Germany", "Europe")));
        assert!(!state.matches(&Country::new("NER", "Niger", "Africa")));
        assert!(!state.is_unfiltered());
        assert!(FilterState::default().is_unfiltered());
    }
}
