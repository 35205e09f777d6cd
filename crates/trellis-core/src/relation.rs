//! Relation (edge) types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directed, labeled edge to a target entity.
///
/// The source entity is implicit: a relation lives in exactly one
/// entity's outgoing list and never stores a back-pointer. The target
/// is referenced by name, which is the entity's identity in the store;
/// the store guarantees the target exists before the edge is linked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relation {
    /// Relationship label (e.g., "works_at", "depends on")
    pub label: String,

    /// Target entity name
    pub target: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Relation {
    /// Create a new relation. Callers are expected to pass normalized
    /// strings; the store's `add_relation` is the usual entry point.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-[{}]-> {}", self.label, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_creation() {
        let relation = Relation::new("works_at", "Google");

        assert_eq!(relation.label, "works_at");
        assert_eq!(relation.target, "Google");
    }

    #[test]
    fn test_relation_display() {
        let relation = Relation::new("mentors", "Jane_Doe");
        assert_eq!(relation.to_string(), "-[mentors]-> Jane_Doe");
    }
}
