//! Trellis Search - Fuzzy entity resolution
//!
//! Resolves free-text queries to stored entities via staged matching
//! (case-insensitive exact, then prefix, then substring), with
//! disambiguation delegated to a caller-supplied [`Chooser`].

pub mod chooser;
pub mod resolver;

pub use chooser::{Chooser, FirstCandidate};
pub use resolver::{FuzzyResolver, Resolution};
