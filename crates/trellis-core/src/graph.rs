//! The owned graph store: entity index plus per-entity relation lists

use std::collections::HashMap;

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::limits::{MAX_ENTITY_NAME_LEN, MAX_RELATION_LABEL_LEN};
use crate::relation::Relation;
use crate::text;

/// In-memory store owning every entity and, transitively, every
/// relation.
///
/// The store is a single-session structure: constructed on start,
/// mutated by one caller at a time, dropped whole at the end. There
/// are no delete operations.
///
/// Enumeration order is creation order, so candidate collection in
/// fuzzy resolution is deterministic.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    entities: HashMap<String, Entity>,
    /// Names in creation order; parallel to `entities` keys.
    order: Vec<String>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a raw entity name: trim, collapse whitespace,
    /// truncate to the name bound. Empty or separator-bearing names
    /// are invalid.
    fn normalized_name(raw: &str) -> Result<String> {
        let name = text::normalize(raw);
        if name.is_empty() {
            return Err(Error::InvalidEntityName(raw.to_string()));
        }
        if name.contains('|') {
            return Err(Error::InvalidEntityName(name));
        }
        Ok(text::truncate_chars(&name, MAX_ENTITY_NAME_LEN).to_string())
    }

    /// Normalize a raw relation label under the same rules as names.
    fn normalized_label(raw: &str) -> Result<String> {
        let label = text::normalize(raw);
        if label.is_empty() {
            return Err(Error::InvalidRelationLabel(raw.to_string()));
        }
        if label.contains('|') {
            return Err(Error::InvalidRelationLabel(label));
        }
        Ok(text::truncate_chars(&label, MAX_RELATION_LABEL_LEN).to_string())
    }

    /// Look up an entity by its exact stored name (byte-for-byte).
    pub fn find_exact(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Return the entity with this name, creating it if absent.
    ///
    /// Repeated calls with the same exact string always return the
    /// same stored entity; distinct exact strings yield distinct
    /// entities (case-differing names included).
    pub fn get_or_create(&mut self, name: &str) -> Result<&Entity> {
        let key = Self::normalized_name(name)?;
        if !self.entities.contains_key(&key) {
            tracing::debug!("Creating entity '{}'", key);
            self.order.push(key.clone());
            self.entities.insert(key.clone(), Entity::new(key.clone()));
        }
        Ok(&self.entities[key.as_str()])
    }

    /// Add a labeled directed edge, get-or-creating both endpoints.
    ///
    /// Parallel edges are permitted: adding the same triple twice
    /// stores two relations. Returns a copy of the stored relation.
    pub fn add_relation(&mut self, source: &str, label: &str, target: &str) -> Result<Relation> {
        let label = Self::normalized_label(label)?;
        let source_key = self.get_or_create(source)?.name.clone();
        let target_key = self.get_or_create(target)?.name.clone();

        let entity = self
            .entities
            .get_mut(&source_key)
            .ok_or_else(|| Error::EntityNotFound(source_key.clone()))?;
        let relation = entity.push_relation(Relation::new(label, target_key)).clone();

        tracing::debug!(
            "Added relation: {} -[{}]-> {}",
            source_key,
            relation.label,
            relation.target
        );
        Ok(relation)
    }

    /// Outgoing edges of a named entity, newest first.
    pub fn relations_of(&self, name: &str) -> Option<&[Relation]> {
        self.entities.get(name).map(|e| e.relations.as_slice())
    }

    /// Every live entity exactly once, in creation order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|name| self.entities.get(name))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn relation_count(&self) -> usize {
        self.entities.values().map(|e| e.relations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut store = GraphStore::new();
        let created = store.get_or_create("Python").unwrap().created_at;
        let again = store.get_or_create("Python").unwrap();

        assert_eq!(again.created_at, created);
        assert_eq!(store.entity_count(), 1);
    }

    #[test]
    fn test_case_differing_names_are_distinct_entities() {
        let mut store = GraphStore::new();
        store.get_or_create("python").unwrap();
        store.get_or_create("Python").unwrap();

        assert_eq!(store.entity_count(), 2);
        assert!(store.find_exact("python").is_some());
        assert!(store.find_exact("Python").is_some());
        assert!(store.find_exact("PYTHON").is_none());
    }

    #[test]
    fn test_names_are_normalized_on_entry() {
        let mut store = GraphStore::new();
        store.get_or_create("  Deep   Learning ").unwrap();

        assert!(store.find_exact("Deep Learning").is_some());
        assert_eq!(store.entity_count(), 1);

        // Same name after normalization maps to the same entity
        store.get_or_create("Deep Learning").unwrap();
        assert_eq!(store.entity_count(), 1);
    }

    #[test]
    fn test_empty_and_separator_names_rejected() {
        let mut store = GraphStore::new();
        assert!(matches!(
            store.get_or_create("   "),
            Err(Error::InvalidEntityName(_))
        ));
        assert!(matches!(
            store.get_or_create("a|b"),
            Err(Error::InvalidEntityName(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_overlong_names_are_truncated() {
        let mut store = GraphStore::new();
        let long = "x".repeat(300);
        let entity_name = store.get_or_create(&long).unwrap().name.clone();

        assert_eq!(entity_name.chars().count(), 127);
        // The truncated form is the identity
        store.get_or_create(&entity_name).unwrap();
        assert_eq!(store.entity_count(), 1);
    }

    #[test]
    fn test_add_relation_links_live_entities() {
        let mut store = GraphStore::new();
        let relation = store
            .add_relation("John_Smith", "  works   at ", "Google")
            .unwrap();

        assert_eq!(relation.label, "works at");
        assert_eq!(relation.target, "Google");

        let relations = store.relations_of("John_Smith").unwrap();
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].target, store.find_exact("Google").unwrap().name);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut store = GraphStore::new();
        store.add_relation("A", "knows", "B").unwrap();
        store.add_relation("A", "knows", "B").unwrap();
        store.add_relation("A", "mentors", "B").unwrap();

        assert_eq!(store.relations_of("A").unwrap().len(), 3);
        assert_eq!(store.relation_count(), 3);
    }

    #[test]
    fn test_relations_enumerate_newest_first() {
        let mut store = GraphStore::new();
        store.add_relation("A", "first", "B").unwrap();
        store.add_relation("A", "second", "C").unwrap();

        let relations = store.relations_of("A").unwrap();
        assert_eq!(relations[0].label, "second");
        assert_eq!(relations[1].label, "first");
    }

    #[test]
    fn test_empty_label_rejected_without_side_effects() {
        let mut store = GraphStore::new();
        let err = store.add_relation("A", "  ", "B");

        assert!(matches!(err, Err(Error::InvalidRelationLabel(_))));
        // Label validation happens before endpoint creation
        assert!(store.is_empty());
    }

    #[test]
    fn test_enumeration_is_creation_order() {
        let mut store = GraphStore::new();
        for name in ["C", "A", "B"] {
            store.get_or_create(name).unwrap();
        }

        let names: Vec<&str> = store.entities().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_self_loop_is_allowed() {
        let mut store = GraphStore::new();
        store.add_relation("A", "references", "A").unwrap();

        assert_eq!(store.entity_count(), 1);
        assert_eq!(store.relations_of("A").unwrap()[0].target, "A");
    }
}
