//! Trellis Core - Graph engine for the Trellis knowledge graph store
//!
//! This crate provides the owned entity index, the per-entity relation
//! lists, and the BFS path finder.

pub mod entity;
pub mod error;
pub mod graph;
pub mod limits;
pub mod relation;
pub mod text;
pub mod traversal;

pub use entity::Entity;
pub use error::{Error, Result};
pub use graph::GraphStore;
pub use relation::Relation;
pub use traversal::{GraphPath, PathEdge, PathFinder, PathResult, TraversalStats};
