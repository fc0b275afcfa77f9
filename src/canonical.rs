use std::collections::{BTreeSet, HashMap, HashSet};

use itertools::Itertools;

use crate::dictionary::Dictionary;
use crate::error::{ConsistencyViolation, Result};
use crate::letters::{LetterOrder, LetterSet, WORD_LEN};

/// All dictionary words sharing one set of five distinct letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalWord {
    letters: LetterSet,
    key: String,
    ranks: [u8; WORD_LEN],
    anagrams: BTreeSet<String>,
}

impl CanonicalWord {
    pub fn new(letters: LetterSet, order: &LetterOrder, anagrams: BTreeSet<String>) -> Self {
        Self {
            letters,
            key: order.render(letters),
            ranks: order.ranks(letters),
            anagrams,
        }
    }

    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    /// The letters in the global letter order.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn anagrams(&self) -> &BTreeSet<String> {
        &self.anagrams
    }
}

/// Canonical words sorted by the total order, immutable once built.
#[derive(Debug, Clone)]
pub struct CanonicalSet {
    words: Vec<CanonicalWord>,
    kept: usize,
    rejected: usize,
}

impl CanonicalSet {
    pub fn build(dictionary: &Dictionary, order: &LetterOrder) -> Result<Self> {
        let mut rejected: usize = 0;
        let mut groups: HashMap<LetterSet, BTreeSet<String>> = HashMap::new();
        for word in dictionary.words() {
            match LetterSet::from_word(word) {
                Ok(letters) => {
                    groups.entry(letters).or_default().insert(word.clone());
                }
                Err(rejection) => {
                    tracing::debug!(word = %word, ?rejection, "discarding word");
                    rejected += 1;
                }
            }
        }

        let kept: usize = groups.values().map(BTreeSet::len).sum();
        let words = groups
            .into_iter()
            .map(|(letters, anagrams)| CanonicalWord::new(letters, order, anagrams))
            .sorted_by_key(|w| w.ranks)
            .collect_vec();
        verify_partition(&words)?;

        tracing::info!(kept, rejected, canonical = words.len(), "canonicalized word list");
        Ok(Self {
            words,
            kept,
            rejected,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_words_unchecked(words: Vec<CanonicalWord>) -> Self {
        Self {
            words,
            kept: 0,
            rejected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CanonicalWord> {
        self.words.get(index)
    }

    pub fn words(&self) -> &[CanonicalWord] {
        &self.words
    }

    /// Number of dictionary words that landed in some anagram group.
    pub fn kept(&self) -> usize {
        self.kept
    }

    /// Number of dictionary words discarded, mostly for repeated letters.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

/// Checks that `words` partitions the kept dictionary words: every group is a
/// non-empty set of genuine anagrams of a five letter key, keys are unique and
/// ascending, and no word sits in two groups.
pub fn verify_partition(
    words: &[CanonicalWord],
) -> std::result::Result<(), ConsistencyViolation> {
    let mut keys = HashSet::with_capacity(words.len());
    let mut owner: HashMap<&str, &str> = HashMap::new();

    for (index, word) in words.iter().enumerate() {
        let count = word.letters.len();
        if count != WORD_LEN as u32 {
            return Err(ConsistencyViolation::WrongLetterCount {
                key: word.key.clone(),
                count,
            });
        }
        if word.anagrams.is_empty() {
            return Err(ConsistencyViolation::EmptyAnagramGroup {
                key: word.key.clone(),
            });
        }
        for anagram in &word.anagrams {
            if let Some(first) = owner.insert(anagram.as_str(), word.key.as_str()) {
                return Err(ConsistencyViolation::WordInTwoGroups {
                    word: anagram.clone(),
                    first: first.to_owned(),
                    second: word.key.clone(),
                });
            }
            if LetterSet::from_word(anagram) != Ok(word.letters) {
                return Err(ConsistencyViolation::ForeignAnagram {
                    word: anagram.clone(),
                    key: word.key.clone(),
                });
            }
        }
        if !keys.insert(word.key.as_str()) {
            return Err(ConsistencyViolation::DuplicateKey {
                key: word.key.clone(),
            });
        }
        if index > 0 && words[index - 1].ranks >= word.ranks {
            return Err(ConsistencyViolation::Unsorted { index });
        }
    }
    Ok(())
}
