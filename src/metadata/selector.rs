//! Candidate selection for search responses.

use tracing::debug;

use crate::metadata::disambiguation::{Disambiguator, Selection};
use crate::metadata::provider::SearchCandidate;

/// Picks one candidate out of a search response.
///
/// - no candidates: nothing selected
/// - one candidate: selected regardless of year
/// - several: the unique candidate whose description contains the year
///   hint, otherwise the [`Disambiguator`] decides
pub struct CandidateSelector {
    disambiguator: Box<dyn Disambiguator>,
}

impl CandidateSelector {
    pub fn new(disambiguator: Box<dyn Disambiguator>) -> Self {
        Self { disambiguator }
    }

    /// Return the 0-based index of the selected candidate.
    pub fn select(
        &mut self,
        candidates: &[SearchCandidate],
        year_hint: Option<&str>,
    ) -> Option<usize> {
        match candidates.len() {
            0 => return None,
            1 => return Some(0),
            _ => {}
        }

        if let Some(year) = year_hint {
            let mut matches = candidates
                .iter()
                .enumerate()
                .filter(|(_, c)| c.description.contains(year))
                .map(|(i, _)| i);
            if let (Some(index), None) = (matches.next(), matches.next()) {
                debug!(year, index, "selected candidate by year");
                return Some(index);
            }
        }

        match self.disambiguator.resolve(candidates) {
            Selection::Index(index) if index < candidates.len() => Some(index),
            Selection::Index(_) | Selection::Ambiguous => {
                debug!(count = candidates.len(), "candidates left ambiguous");
                None
            }
        }
    }
}
