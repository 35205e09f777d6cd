//! Field bounds for the graph store

/// Maximum length for entity names, in characters after normalization.
/// Longer names are truncated, not rejected.
pub const MAX_ENTITY_NAME_LEN: usize = 127;

/// Maximum length for relation labels, in characters after normalization.
/// Longer labels are truncated, not rejected.
pub const MAX_RELATION_LABEL_LEN: usize = 127;

/// Default cap on fuzzy-resolution candidates presented for
/// disambiguation.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 16;
