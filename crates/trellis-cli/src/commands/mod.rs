//! CLI command implementations

pub mod completions;
pub mod entity;
pub mod io;
pub mod path;
pub mod relation;
pub mod show;

use trellis_core::{limits, text, GraphStore};
use trellis_search::{FirstCandidate, FuzzyResolver, Resolution};

use crate::prompt::StdinChooser;
use crate::Cli;

/// Resolve a user-supplied entity reference to a stored entity name.
///
/// Exact mode normalizes the input and requires a byte-for-byte match;
/// fuzzy mode runs the staged resolver, prompting on ambiguity unless
/// `--first` selected auto-pick.
pub fn resolve_entity(cli: &Cli, graph: &GraphStore, query: &str, exact: bool) -> Option<String> {
    if exact {
        let wanted = text::normalize(query);
        let wanted = text::truncate_chars(&wanted, limits::MAX_ENTITY_NAME_LEN);
        return graph.find_exact(wanted).map(|e| e.name.clone());
    }

    let resolver = FuzzyResolver::new();
    let resolution = if cli.first {
        resolver.resolve(query, graph, &mut FirstCandidate)
    } else {
        resolver.resolve(query, graph, &mut StdinChooser)
    };

    if resolution == Resolution::Cancelled {
        tracing::debug!("Selection cancelled for query '{}'", query);
    }
    resolution.into_name()
}
