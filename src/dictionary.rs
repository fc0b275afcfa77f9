use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::letters::WORD_LEN;

/// The five letter entries of a word list, sorted and without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input_error = |source| Error::InputAccess {
            path: path.to_owned(),
            source,
        };
        let wordfile = BufReader::new(File::open(path).map_err(input_error)?);
        let lines: Vec<String> = wordfile.lines().try_collect().map_err(input_error)?;
        let dictionary = Self::from_words(lines);
        tracing::info!(path = %path.display(), words = dictionary.len(), "read word list");
        Ok(dictionary)
    }

    /// Only entries of exactly five characters after trimming are kept.
    pub fn from_words<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| w.chars().count() == WORD_LEN)
            .sorted()
            .dedup()
            .collect_vec();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
