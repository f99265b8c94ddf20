//! Unique operation-id slugs.

use std::collections::{HashMap, HashSet};

/// Turns free text into URL-safe slugs, unique per instance.
///
/// One `Slugger` is constructed per document build so generated
/// `operationId` values never collide within a document: repeated input
/// gets a `-1`, `-2`, ... suffix.
///
/// # Example
///
/// ```
/// use stoa_openapi::Slugger;
///
/// let mut slugger = Slugger::new();
/// assert_eq!(slugger.slug("List widgets"), "list-widgets");
/// assert_eq!(slugger.slug("List widgets"), "list-widgets-1");
/// ```
#[derive(Debug, Default)]
pub struct Slugger {
    issued: HashSet<String>,
    counters: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a slugger with no issued slugs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugs the given text, guaranteeing uniqueness across this
    /// instance's lifetime.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        while !self.issued.insert(candidate.clone()) {
            let counter = self.counters.entry(base.clone()).or_insert(0);
            *counter += 1;
            candidate = format!("{base}-{counter}");
        }
        candidate
    }
}

/// Lowercases, turns whitespace into dashes, and drops everything that
/// is not URL-safe.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_whitespace() {
            slug.push('-');
        } else if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            slug.push(ch.to_ascii_lowercase());
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugging() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Get user"), "get-user");
        assert_eq!(slugger.slug("operation"), "operation");
    }

    #[test]
    fn test_drops_unsafe_characters() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Get user's orders!"), "get-users-orders");
    }

    #[test]
    fn test_repeats_are_suffixed() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("operation"), "operation");
        assert_eq!(slugger.slug("operation"), "operation-1");
        assert_eq!(slugger.slug("operation"), "operation-2");
    }

    #[test]
    fn test_suffix_collision_with_literal_input() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a-1"), "a-1");
        assert_eq!(slugger.slug("a"), "a");
        // "a-1" is taken, so the second "a" skips to "a-2".
        assert_eq!(slugger.slug("a"), "a-2");
    }
}
