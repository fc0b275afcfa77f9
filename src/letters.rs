use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use itertools::Itertools;

pub const ALPHABET_LEN: usize = 26;

/// Number of letters in every dictionary word and number of words per solution.
pub const WORD_LEN: usize = 5;

/// One bit per letter, `a` in bit 0.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u32);

/// Why a raw word cannot be canonicalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    WrongLength(usize),
    InvalidCharacter(char),
    RepeatedLetter(char),
}

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);

    /// Letter set of a five letter word with no repeated letter.
    pub fn from_word(word: &str) -> Result<Self, Rejection> {
        let len = word.chars().count();
        if len != WORD_LEN {
            return Err(Rejection::WrongLength(len));
        }
        let mut set = LetterSet::EMPTY;
        for c in word.chars() {
            let bit = letter_bit(c).ok_or(Rejection::InvalidCharacter(c))?;
            if set.0 & bit != 0 {
                return Err(Rejection::RepeatedLetter(c));
            }
            set.0 |= bit;
        }
        Ok(set)
    }

    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_disjoint(self, other: LetterSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn remove(&mut self, other: LetterSet) {
        self.0 &= !other.0;
    }

    /// Letters in alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_LEN as u8)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(|i| (b'a' + i) as char)
    }
}

fn letter_bit(c: char) -> Option<u32> {
    c.is_ascii_lowercase().then(|| 1 << (c as u32 - 'a' as u32))
}

impl BitAnd for LetterSet {
    type Output = LetterSet;

    fn bitand(self, rhs: LetterSet) -> LetterSet {
        LetterSet(self.0 & rhs.0)
    }
}

impl BitOr for LetterSet {
    type Output = LetterSet;

    fn bitor(self, rhs: LetterSet) -> LetterSet {
        LetterSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for LetterSet {
    fn bitor_assign(&mut self, rhs: LetterSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({})", self.letters().collect::<String>())
    }
}

/// A fixed total order over the alphabet. Canonical keys render a word's
/// letters in this order and canonical words are sorted by it.
#[derive(Clone, PartialEq, Eq)]
pub struct LetterOrder {
    // letter index -> rank
    rank: [u8; ALPHABET_LEN],
    // rank -> letter
    letters: [u8; ALPHABET_LEN],
}

impl LetterOrder {
    pub fn alphabetical() -> Self {
        let mut letters = [0u8; ALPHABET_LEN];
        for (i, l) in letters.iter_mut().enumerate() {
            *l = b'a' + i as u8;
        }
        Self::from_ranked(letters)
    }

    /// Most frequent letter first, ties broken alphabetically.
    pub fn from_frequencies<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = [0usize; ALPHABET_LEN];
        for word in words {
            for c in word.chars().filter(char::is_ascii_lowercase) {
                counts[(c as u8 - b'a') as usize] += 1;
            }
        }
        let ranked = (0..ALPHABET_LEN as u8)
            .sorted_by_key(|&i| (std::cmp::Reverse(counts[i as usize]), i))
            .map(|i| b'a' + i)
            .collect_vec();

        let mut letters = [0u8; ALPHABET_LEN];
        letters.copy_from_slice(&ranked);
        Self::from_ranked(letters)
    }

    fn from_ranked(letters: [u8; ALPHABET_LEN]) -> Self {
        let mut rank = [0u8; ALPHABET_LEN];
        for (r, &l) in letters.iter().enumerate() {
            rank[(l - b'a') as usize] = r as u8;
        }
        Self { rank, letters }
    }

    /// Rank of each letter of `set`, ascending.
    pub fn ranks(&self, set: LetterSet) -> [u8; WORD_LEN] {
        let mut ranks = [u8::MAX; WORD_LEN];
        let sorted = set
            .letters()
            .map(|c| self.rank[(c as u8 - b'a') as usize])
            .sorted();
        for (slot, r) in ranks.iter_mut().zip(sorted) {
            *slot = r;
        }
        ranks
    }

    /// The letters of `set` rendered in rank order.
    pub fn render(&self, set: LetterSet) -> String {
        self.ranks(set)
            .iter()
            .filter(|&&r| (r as usize) < ALPHABET_LEN)
            .map(|&r| self.letters[r as usize] as char)
            .collect()
    }
}

impl fmt::Debug for LetterOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order: String = self.letters.iter().map(|&l| l as char).collect();
        f.debug_tuple("LetterOrder").field(&order).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_repeated_letters() {
        assert_eq!(LetterSet::from_word("hello"), Err(Rejection::RepeatedLetter('l')));
        assert_eq!(LetterSet::from_word("geese"), Err(Rejection::RepeatedLetter('e')));
    }

    #[test]
    fn rejects_bad_characters_and_length() {
        assert_eq!(LetterSet::from_word("ab-de"), Err(Rejection::InvalidCharacter('-')));
        assert_eq!(LetterSet::from_word("Abcde"), Err(Rejection::InvalidCharacter('A')));
        assert_eq!(LetterSet::from_word("abcd"), Err(Rejection::WrongLength(4)));
    }

    #[test]
    fn bits_per_letter() {
        let set = LetterSet::from_word("abcdz").unwrap();
        assert_eq!(set.0, 0b10_0000_0000_0000_0000_0000_1111);
        assert_eq!(set.len(), 5);
        assert_eq!(set.letters().collect::<String>(), "abcdz");
    }

    #[test]
    fn disjointness() {
        let a = LetterSet::from_word("abcde").unwrap();
        let b = LetterSet::from_word("fghij").unwrap();
        let c = LetterSet::from_word("ejklm").unwrap();
        assert!(a.is_disjoint(b));
        assert!(b.is_disjoint(a));
        assert!(!a.is_disjoint(c));
        assert_eq!((a | b).len(), 10);
        assert_eq!((a & c).letters().collect::<String>(), "e");
    }

    #[test]
    fn alphabetical_render_sorts_letters() {
        let order = LetterOrder::alphabetical();
        let set = LetterSet::from_word("bcdea").unwrap();
        assert_eq!(order.render(set), "abcde");
        assert_eq!(order.ranks(set), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn frequency_order_puts_common_letters_first() {
        let order = LetterOrder::from_frequencies(["zebra", "zonal", "azure"]);
        // a and z appear three times each, a wins the tie.
        let set = LetterSet::from_word("zebra").unwrap();
        assert_eq!(order.render(set), "azerb");
    }

    #[test]
    fn frequency_order_is_deterministic() {
        let words = ["crane", "slate", "pious", "vughy"];
        assert_eq!(
            LetterOrder::from_frequencies(words),
            LetterOrder::from_frequencies(words)
        );
    }
}
