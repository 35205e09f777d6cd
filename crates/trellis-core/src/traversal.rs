//! BFS path finding over the directed edge relation

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::GraphStore;

/// A single path through the graph, both endpoints included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPath {
    /// Ordered list of entity names from source to target
    pub nodes: Vec<String>,

    /// Relations connecting the nodes
    pub edges: Vec<PathEdge>,

    /// Number of edges (zero for a source equal to the target)
    pub hops: usize,
}

/// Edge in a path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Result of a path search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResult {
    /// Resolved source entity name
    pub source: String,

    /// Resolved target entity name
    pub target: String,

    /// The fewest-hop path, or `None` when the target is unreachable.
    /// An unreachable target is a valid negative result, not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<GraphPath>,

    /// Statistics
    pub stats: TraversalStats,
}

/// Traversal statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraversalStats {
    pub nodes_visited: usize,
    pub edges_traversed: usize,
    pub path_found: bool,
}

/// Breadth-first path finder.
///
/// All traversal state (visited set, predecessor map, frontier) is
/// scoped to one `find_path` call; nothing is stored on the entities,
/// so successive queries never see stale marks.
pub struct PathFinder;

impl PathFinder {
    /// Find the fewest-hop directed path between two exact entity
    /// names.
    ///
    /// Endpoints must already be resolved: an unknown source or target
    /// fails with `SourceNotFound` / `TargetNotFound` before any
    /// search happens. Edge labels carry no weight; BFS guarantees the
    /// returned path minimizes hop count.
    pub fn find_path(store: &GraphStore, source: &str, target: &str) -> Result<PathResult> {
        let source = store
            .find_exact(source)
            .ok_or_else(|| Error::SourceNotFound(source.to_string()))?
            .name
            .clone();
        let target = store
            .find_exact(target)
            .ok_or_else(|| Error::TargetNotFound(target.to_string()))?
            .name
            .clone();

        tracing::debug!("BFS path search: '{}' -> '{}'", source, target);

        let mut visited: HashSet<String> = HashSet::new();
        let mut parent: HashMap<String, (String, PathEdge)> = HashMap::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut stats = TraversalStats::default();

        queue.push_back(source.clone());
        visited.insert(source.clone());

        while let Some(current) = queue.pop_front() {
            stats.nodes_visited += 1;

            if current == target {
                stats.path_found = true;
                break;
            }

            for rel in store.relations_of(&current).unwrap_or_default() {
                stats.edges_traversed += 1;

                if !visited.contains(&rel.target) {
                    visited.insert(rel.target.clone());
                    parent.insert(
                        rel.target.clone(),
                        (
                            current.clone(),
                            PathEdge {
                                from: current.clone(),
                                to: rel.target.clone(),
                                label: rel.label.clone(),
                            },
                        ),
                    );
                    queue.push_back(rel.target.clone());
                }
            }
        }

        let path = if stats.path_found {
            tracing::debug!("Path found after visiting {} nodes", stats.nodes_visited);
            Some(Self::reconstruct_path(&source, &target, &parent))
        } else {
            tracing::debug!("No path: frontier exhausted at {} nodes", stats.nodes_visited);
            None
        };

        Ok(PathResult {
            source,
            target,
            path,
            stats,
        })
    }

    /// Reconstruct the path by walking predecessor references from the
    /// target back to the source, then reversing.
    fn reconstruct_path(
        source: &str,
        target: &str,
        parent: &HashMap<String, (String, PathEdge)>,
    ) -> GraphPath {
        let mut nodes = vec![target.to_string()];
        let mut edges = Vec::new();
        let mut current = target.to_string();

        while current != source {
            if let Some((prev, edge)) = parent.get(&current) {
                edges.push(edge.clone());
                nodes.push(prev.clone());
                current = prev.clone();
            } else {
                break;
            }
        }

        nodes.reverse();
        edges.reverse();

        GraphPath {
            hops: edges.len(),
            nodes,
            edges,
        }
    }
}
