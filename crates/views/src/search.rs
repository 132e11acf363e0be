//! Case-insensitive free-text search.

use eventdesk_events::Event;
use eventdesk_guests::{Guest, Rsvp};
use eventdesk_inventory::InventoryItem;

/// A record with a fixed set of text fields that search looks at.
pub trait Searchable {
    /// Fields the search term is matched against. Absent optional fields
    /// are simply left out.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Rsvp {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.guest_name.as_str(), self.email.as_str()]
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.category.as_str()];
        if let Some(supplier) = &self.supplier {
            fields.push(supplier.as_str());
        }
        fields
    }
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str(), self.category.as_str()]
    }
}

impl Searchable for Guest {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

/// Normalized search input.
///
/// Built once per query so the needle is lowercased once, not per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            needle: term.as_ref().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// True if the term is empty or a substring of any field.
    pub fn matches_fields<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if self.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        self.is_empty() || self.matches_fields(record.search_fields())
    }
}

impl From<&str> for SearchTerm {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Searchable for Named {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    #[test]
    fn substring_match_ignores_case() {
        let records = [Named("Alice"), Named("Bob")];
        let term = SearchTerm::new("ali");
        let hits: Vec<&str> = records
            .iter()
            .filter(|r| term.matches(*r))
            .map(|r| r.0)
            .collect();
        assert_eq!(hits, vec!["Alice"]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let term = SearchTerm::new("");
        assert!(term.matches(&Named("")));
        assert!(term.matches_fields(std::iter::empty()));
    }

    #[test]
    fn uppercase_term_matches_lowercase_field() {
        assert!(SearchTerm::new("BOB@").matches_fields(["bob@example.com"]));
        assert!(!SearchTerm::new("carol").matches_fields(["bob@example.com", "Bob"]));
    }
}
