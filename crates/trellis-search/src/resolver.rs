//! Staged fuzzy entity resolution
//!
//! Matching widens in stages so common queries hit exactly and vague
//! ones still land: case-insensitive exact first, then prefix, then
//! substring. The candidate cap bounds the disambiguation prompt on
//! graphs full of similarly named entities.

use serde::{Deserialize, Serialize};

use crate::chooser::Chooser;
use trellis_core::limits::DEFAULT_SUGGESTION_LIMIT;
use trellis_core::{text, GraphStore};

/// Outcome of a resolution attempt.
///
/// `Cancelled` is reported separately for diagnostics, but downstream
/// operations treat it exactly like `NoMatch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Resolved to the named entity
    Match(String),
    /// No stage produced a candidate
    NoMatch,
    /// The chooser declined or mis-selected among multiple candidates
    Cancelled,
}

impl Resolution {
    /// The resolved name, if any; `Cancelled` collapses to `None`.
    pub fn into_name(self) -> Option<String> {
        match self {
            Resolution::Match(name) => Some(name),
            Resolution::NoMatch | Resolution::Cancelled => None,
        }
    }
}

/// Stateless staged resolver
pub struct FuzzyResolver {
    pub suggestion_limit: usize,
}

impl FuzzyResolver {
    pub fn new() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Override the candidate cap (must be at least 1).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit.max(1);
        self
    }

    /// Resolve a free-text query against the store.
    ///
    /// The query is normalized first; an empty normalized query never
    /// matches. Stages run in store enumeration order and the first
    /// non-empty stage wins. A single candidate is returned without
    /// consulting the chooser.
    pub fn resolve(
        &self,
        query: &str,
        store: &GraphStore,
        chooser: &mut dyn Chooser,
    ) -> Resolution {
        let query = text::normalize(query);
        if query.is_empty() {
            return Resolution::NoMatch;
        }

        // Pass 1: exact, case-insensitive. First hit wins outright.
        for entity in store.entities() {
            if text::eq_ignore_case(&entity.name, &query) {
                tracing::debug!("Resolved '{}' by exact match: {}", query, entity.name);
                return Resolution::Match(entity.name.clone());
            }
        }

        // Pass 2: prefix. Pass 3: substring, only if prefix found nothing.
        let mut candidates = self.collect(store, |name| {
            text::starts_with_ignore_case(name, &query)
        });
        if candidates.is_empty() {
            candidates = self.collect(store, |name| text::contains_ignore_case(name, &query));
        }

        tracing::debug!("Query '{}' has {} candidate(s)", query, candidates.len());

        match candidates.len() {
            0 => Resolution::NoMatch,
            1 => Resolution::Match(candidates.remove(0)),
            _ => match chooser.choose(&candidates) {
                Some(idx) if idx < candidates.len() => {
                    Resolution::Match(candidates.remove(idx))
                }
                _ => Resolution::Cancelled,
            },
        }
    }

    /// Collect matching entity names in enumeration order, up to the
    /// suggestion cap.
    fn collect<F>(&self, store: &GraphStore, matches: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        store
            .entities()
            .filter(|e| matches(&e.name))
            .take(self.suggestion_limit)
            .map(|e| e.name.clone())
            .collect()
    }
}

impl Default for FuzzyResolver {
    fn default() -> Self {
        Self::new()
    }
}
