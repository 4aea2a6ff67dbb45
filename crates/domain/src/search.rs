//! Search — case-insensitive name filter over the loaded collection.

use crate::workshop::Workshop;

/// A search query typed by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    /// Build a query from raw input.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The query as typed, used to refill the search box.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the query matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether `workshop.name` contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, workshop: &Workshop) -> bool {
        self.is_empty() || workshop.name.to_lowercase().contains(&self.folded)
    }

    /// The matching subsequence of `workshops`, order preserved.
    #[must_use]
    pub fn filter<'a>(&self, workshops: &'a [Workshop]) -> Vec<&'a Workshop> {
        workshops.iter().filter(|ws| self.matches(ws)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::WorkshopId;

    fn named(id: i64, name: &str) -> Workshop {
        Workshop::builder(WorkshopId::new(id)).name(name).build()
    }

    fn collection() -> Vec<Workshop> {
        vec![
            named(1, "Intro to Rust"),
            named(2, "Advanced TypeScript"),
            named(3, "RUST for embedded"),
            named(4, "Databases"),
        ]
    }

    #[test]
    fn should_return_full_collection_when_query_is_empty() {
        let list = collection();
        let filtered = SearchQuery::default().filter(&list);
        assert_eq!(filtered.len(), list.len());
        assert!(filtered.iter().zip(&list).all(|(a, b)| *a == b));
    }

    #[test]
    fn should_match_case_insensitively() {
        let list = vec![named(1, "Intro to Rust")];
        let filtered = SearchQuery::new("rust").filter(&list);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, WorkshopId::new(1));
    }

    #[test]
    fn should_keep_only_substring_matches_in_order() {
        let list = collection();
        let ids: Vec<i64> = SearchQuery::new("RuSt")
            .filter(&list)
            .iter()
            .map(|ws| ws.id.get())
            .collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn should_return_nothing_when_no_name_matches() {
        let list = collection();
        assert!(SearchQuery::new("cobol").filter(&list).is_empty());
    }

    #[test]
    fn should_match_on_name_only() {
        let list = vec![
            Workshop::builder(WorkshopId::new(1))
                .name("Databases")
                .instructor("Rusty")
                .build(),
        ];
        assert!(SearchQuery::new("rusty").filter(&list).is_empty());
    }

    #[test]
    fn should_keep_raw_text_for_redisplay() {
        let query = SearchQuery::new("Intro");
        assert_eq!(query.as_str(), "Intro");
        assert!(!query.is_empty());
    }
}
