//! Finds every set of five five-letter words that together use 25 distinct
//! letters.
//!
//! Words are reduced to their letter sets, anagrams collapse into one
//! canonical word, a compatibility graph links canonical words with disjoint
//! letters, and a parallel backtracking search walks that graph. Each
//! combination found is expanded back into every anagram choice.

pub mod canonical;
pub mod dictionary;
pub mod dispatch;
pub mod error;
pub mod expand;
pub mod graph;
pub mod letters;
pub mod output;
pub mod search;

use std::num::NonZeroUsize;
use std::time::Instant;

pub use canonical::{CanonicalSet, CanonicalWord};
pub use dictionary::Dictionary;
pub use error::{ConsistencyViolation, Error, Result};
pub use expand::Solution;
pub use letters::{LetterOrder, LetterSet};
pub use search::Candidate;

use graph::CompatibilityGraph;
use letters::WORD_LEN;

/// How canonical keys order their letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterOrderKind {
    /// Most frequent letter in the kept words first.
    #[default]
    Frequency,
    Alphabetical,
}

#[derive(Debug, Clone)]
pub struct SolveOptions {
    pub workers: NonZeroUsize,
    pub letter_order: LetterOrderKind,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            workers: NonZeroUsize::new(20).unwrap_or(NonZeroUsize::MIN),
            letter_order: LetterOrderKind::default(),
        }
    }
}

#[derive(Debug)]
pub struct Solved {
    pub canonical: CanonicalSet,
    pub candidates: Vec<Candidate>,
    pub solutions: Vec<Solution>,
    pub duplicates: usize,
}

/// Runs every phase to completion; each phase starts only once the previous
/// one has finished.
pub fn solve(dictionary: &Dictionary, options: &SolveOptions) -> Result<Solved> {
    let order = match options.letter_order {
        LetterOrderKind::Alphabetical => LetterOrder::alphabetical(),
        LetterOrderKind::Frequency => LetterOrder::from_frequencies(
            dictionary
                .words()
                .iter()
                .filter(|w| LetterSet::from_word(w).is_ok())
                .map(String::as_str),
        ),
    };
    tracing::debug!(?order, "letter order");

    let canonical = CanonicalSet::build(dictionary, &order)?;

    let start = Instant::now();
    let graph = CompatibilityGraph::build(&canonical);
    tracing::debug!(elapsed = ?start.elapsed(), "graph build time");

    let mut candidates = dispatch::dispatch(&graph, options.workers)?;
    candidates.sort_unstable();
    debug_assert!(candidates.iter().all(|c| {
        c.indices()
            .fold(LetterSet::EMPTY, |acc, i| acc | graph.letters(i))
            .len()
            == (WORD_LEN * WORD_LEN) as u32
    }));

    let expansion = expand::expand(&canonical, &candidates)?;
    Ok(Solved {
        canonical,
        candidates,
        solutions: expansion.solutions,
        duplicates: expansion.duplicates,
    })
}

/// Compares the number of solutions with the number the word list is known to
/// produce. A mismatch is reported but never fatal.
pub fn check_expected(expected: usize, received: usize) -> bool {
    if expected != received {
        tracing::error!(expected, received, "wrong number of solutions");
        return false;
    }
    tracing::info!(received, "solution count matches");
    true
}
