use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::canonical::CanonicalSet;
use crate::error::ConsistencyViolation;
use crate::letters::WORD_LEN;
use crate::search::Candidate;

/// Five literal dictionary words, sorted, covering 25 distinct letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution([String; WORD_LEN]);

impl Solution {
    pub fn new(mut words: [String; WORD_LEN]) -> Self {
        words.sort();
        Self(words)
    }

    pub fn words(&self) -> &[String; WORD_LEN] {
        &self.0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Sorted word by word.
    pub solutions: Vec<Solution>,
    /// Adjacent solutions that compared equal after sorting.
    pub duplicates: usize,
}

/// Replaces every canonical word of every candidate by each of its anagrams in
/// turn and sorts the result.
pub fn expand(
    set: &CanonicalSet,
    candidates: &[Candidate],
) -> Result<Expansion, ConsistencyViolation> {
    let mut solutions = Vec::new();
    for candidate in candidates {
        let groups: Vec<&BTreeSet<String>> = candidate
            .indices()
            .map(|index| anagram_group(set, index))
            .try_collect()?;

        // Gather word solutions from the anagram groups.
        let word_solutions = groups
            .into_iter()
            .map(|group| group.iter())
            .multi_cartesian_product()
            .map(|words| {
                let mut slots: [String; WORD_LEN] = Default::default();
                for (slot, word) in slots.iter_mut().zip(words) {
                    *slot = word.clone();
                }
                Solution::new(slots)
            });
        solutions.extend(word_solutions);
    }
    solutions.sort();

    let duplicates = solutions.windows(2).filter(|w| w[0] == w[1]).count();
    if duplicates > 0 {
        tracing::warn!(duplicates, "multiple solutions with the same words");
    }
    tracing::info!(
        candidates = candidates.len(),
        solutions = solutions.len(),
        "expanded anagrams"
    );
    Ok(Expansion {
        solutions,
        duplicates,
    })
}

fn anagram_group(
    set: &CanonicalSet,
    index: usize,
) -> Result<&BTreeSet<String>, ConsistencyViolation> {
    let word = set.get(index).ok_or(ConsistencyViolation::IndexOutOfRange {
        index,
        len: set.len(),
    })?;
    if word.anagrams().is_empty() {
        return Err(ConsistencyViolation::EmptyAnagramGroup {
            key: word.key().to_owned(),
        });
    }
    Ok(word.anagrams())
}
