use proc::trace;

use crate::{lev, types::Cost};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Suggestion {
    pub candidate: String,
    pub distance: usize,
}

/// default_threshold allows roughly one edit per three characters of word, but always at least
/// one
pub fn default_threshold(word: &str) -> usize {
    (word.chars().count() / 3).max(1)
}

/// suggest computes the character wise distance of word to every candidate and returns at most
/// limit candidates not further away than threshold, closest first. Candidates with the same
/// distance keep their input order.
#[trace]
pub fn suggest<S: AsRef<str>>(
    word: &str,
    candidates: &[S],
    cost: Cost,
    threshold: usize,
    limit: usize,
) -> Vec<Suggestion> {
    let word = word.chars().collect::<Vec<char>>();
    let mut suggestions = candidates
        .iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let distance = lev::distance_with_cost(
                &word,
                &candidate.chars().collect::<Vec<char>>(),
                cost.get(),
            );
            (distance <= threshold).then(|| Suggestion {
                candidate: candidate.to_string(),
                distance,
            })
        })
        .collect::<Vec<Suggestion>>();

    // sort_by_key is stable, ties stay in input order
    suggestions.sort_by_key(|s| s.distance);
    suggestions.truncate(limit);
    suggestions
}
