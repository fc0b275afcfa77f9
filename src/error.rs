use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read word list '{}'", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("consistency violation: {0}")]
    Consistency(#[from] ConsistencyViolation),

    #[error("cannot open output '{}'", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("too many failed writes to output ({failures})")]
    OutputWrite {
        failures: usize,
        #[source]
        source: io::Error,
    },

    #[error("cannot start worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("search workers stopped before reporting completion")]
    WorkersLost,
}

/// Broken internal invariants. These point at a defect in canonicalization or
/// graph construction, never at bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyViolation {
    #[error("word '{word}' belongs to both '{first}' and '{second}'")]
    WordInTwoGroups {
        word: String,
        first: String,
        second: String,
    },

    #[error("canonical key '{key}' appears more than once")]
    DuplicateKey { key: String },

    #[error("canonical word '{key}' has {count} letters")]
    WrongLetterCount { key: String, count: u32 },

    #[error("canonical word '{key}' has no anagrams")]
    EmptyAnagramGroup { key: String },

    #[error("word '{word}' does not reduce to '{key}'")]
    ForeignAnagram { word: String, key: String },

    #[error("canonical words are not in ascending key order at index {index}")]
    Unsorted { index: usize },

    #[error("candidate refers to canonical word {index}, but only {len} exist")]
    IndexOutOfRange { index: usize, len: usize },
}
