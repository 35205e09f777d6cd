//! Entity (node) types and operations

use crate::relation::Relation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entity in the knowledge graph (a node).
///
/// An entity is uniquely identified by its exact name string. Two
/// names differing only in case are two distinct entities, even though
/// fuzzy resolution treats them as candidates for the same query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name (unique within the store, case-preserving)
    pub name: String,

    /// Outgoing labeled edges, newest first
    pub relations: Vec<Relation>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Entity {
    /// Create a new entity with no outgoing relations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relations: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Prepend an outgoing relation.
    ///
    /// Relations enumerate newest-first, matching the order the
    /// reference "show connections" output presents them in.
    pub fn push_relation(&mut self, relation: Relation) -> &Relation {
        self.relations.insert(0, relation);
        &self.relations[0]
    }

    /// Number of outgoing edges.
    pub fn out_degree(&self) -> usize {
        self.relations.len()
    }

    /// True if the entity has no outgoing edges.
    pub fn is_sink(&self) -> bool {
        self.relations.is_empty()
    }
}
