//! Title lookup and resolution.
//!
//! # Module layout
//!
//! - [`provider`] -- [`LookupClient`] trait and the shared lookup types.
//! - [`providers`] -- Concrete clients (IMDb).
//! - [`selector`] -- Picking one candidate from a search response.
//! - [`disambiguation`] -- Terminal and headless choice policies.
//! - [`resolver`] -- The resolution engine and its batch state.

pub mod disambiguation;
pub mod provider;
pub mod providers;
pub mod resolver;
pub mod selector;

pub use disambiguation::{Disambiguator, HeadlessDisambiguator, Selection, TerminalDisambiguator};
pub use provider::{EpisodeRecord, LookupClient, LookupError, ResolvedTitle, SearchCandidate};
pub use resolver::{BatchState, ResolutionEngine, ResolveError, SearchModes};
pub use selector::CandidateSelector;
