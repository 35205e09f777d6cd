//! Pipe-delimited graph format and GraphViz export
//!
//! One relation per line: `Source|Relationship|Target`. An entity
//! with no outgoing edges is declared on its own `node|Name` line so
//! it survives a save/load cycle. Blank lines and `#`-comments are
//! skipped; anything else that does not match either form is
//! malformed and reported in the load count. Field values cannot
//! contain `|` (the store rejects them), so export needs no escaping
//! and round-trips exactly.

use std::fmt::Write as _;
use std::path::Path;

use trellis_core::{text, GraphStore};

/// Outcome of a bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub nodes: usize,
    pub skipped: usize,
}

/// Split a data line into its three normalized fields.
///
/// Returns `None` for malformed lines: wrong separator count, or any
/// field empty after trimming and whitespace collapsing. Over-length
/// fields are not rejected here; the store truncates them.
pub fn parse_line(line: &str) -> Option<(String, String, String)> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() != 3 {
        return None;
    }

    let source = text::normalize(parts[0]);
    let label = text::normalize(parts[1]);
    let target = text::normalize(parts[2]);

    if source.is_empty() || label.is_empty() || target.is_empty() {
        return None;
    }
    Some((source, label, target))
}

/// Parse a standalone entity declaration: `node|Name`.
///
/// A three-field line whose source happens to be `node` is still a
/// relation; only the two-field form is a declaration.
pub fn parse_node_line(line: &str) -> Option<String> {
    let (keyword, rest) = line.split_once('|')?;
    if keyword.trim() != "node" || rest.contains('|') {
        return None;
    }

    let name = text::normalize(rest);
    if name.is_empty() {
        return None;
    }
    Some(name)
}

/// Ingest pipe-delimited content into the store.
///
/// Malformed lines are skipped and counted, never fatal.
pub fn load_into(store: &mut GraphStore, content: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (line_no, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(name) = parse_node_line(line) {
            match store.get_or_create(&name) {
                Ok(_) => report.nodes += 1,
                Err(e) => {
                    report.skipped += 1;
                    tracing::warn!("Skipping line {}: {}", line_no + 1, e);
                }
            }
            continue;
        }

        let Some((source, label, target)) = parse_line(line) else {
            report.skipped += 1;
            tracing::warn!("Skipping invalid line {}: \"{}\"", line_no + 1, line);
            continue;
        };

        match store.add_relation(&source, &label, &target) {
            Ok(_) => report.loaded += 1,
            Err(e) => {
                report.skipped += 1;
                tracing::warn!("Skipping line {}: {}", line_no + 1, e);
            }
        }
    }

    report
}

/// Load a graph from a pipe-delimited file. A missing file yields an
/// empty graph, so read-only commands work before any data exists.
pub fn read_graph(path: &Path) -> anyhow::Result<(GraphStore, LoadReport)> {
    let mut store = GraphStore::new();
    if !path.exists() {
        tracing::debug!("Data file {:?} does not exist yet; starting empty", path);
        return Ok((store, LoadReport::default()));
    }

    let content = std::fs::read_to_string(path)?;
    let report = load_into(&mut store, &content);
    tracing::debug!(
        "Loaded {} relations from {:?} (skipped {})",
        report.loaded,
        path,
        report.skipped
    );
    Ok((store, report))
}

/// Serialize the store in entity creation order: one
/// `Source|Relationship|Target` line per relation, plus a `node|Name`
/// declaration for each entity without outgoing edges. Relations are
/// written oldest-first so the loader's prepend rebuilds the stored
/// newest-first order.
pub fn to_pipe(store: &GraphStore) -> String {
    let mut out = String::new();
    for entity in store.entities() {
        if entity.is_sink() {
            let _ = writeln!(out, "node|{}", entity.name);
        }
        for relation in entity.relations.iter().rev() {
            // Fields are '|'-free by store invariant
            let _ = writeln!(out, "{}|{}|{}", entity.name, relation.label, relation.target);
        }
    }
    out
}

/// Write the graph back to its data file.
pub fn write_graph(store: &GraphStore, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, to_pipe(store))?;
    tracing::debug!("Saved {} relations to {:?}", store.relation_count(), path);
    Ok(())
}

/// Render the graph as GraphViz DOT: a standalone declaration for each
/// entity without outgoing edges, a labeled directed edge per relation.
pub fn to_dot(store: &GraphStore) -> String {
    let mut out = String::new();
    out.push_str("digraph trellis {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str(
        "  node [shape=box, style=filled, fontsize=11, color=\"#1A73E8\", fillcolor=\"#E8F0FE\"];\n",
    );
    out.push_str("  edge [color=\"#5F6368\", fontsize=10, arrowsize=0.85];\n\n");

    for entity in store.entities() {
        if entity.is_sink() {
            let _ = writeln!(out, "  \"{}\";", dot_escape(&entity.name));
        }
        for relation in &entity.relations {
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                dot_escape(&entity.name),
                dot_escape(&relation.target),
                dot_escape(&relation.label)
            );
        }
    }

    out.push_str("}\n");
    out
}

/// Escape a string for use inside a double-quoted DOT identifier.
fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
