use rayon::prelude::*;

use crate::canonical::CanonicalSet;
use crate::letters::LetterSet;

/// Letter-disjointness between canonical words, materialized only from the
/// earlier word to the later one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompatibilityGraph {
    letters: Vec<LetterSet>,
    compatible_after: Vec<Vec<u32>>,
}

impl CompatibilityGraph {
    pub fn build(set: &CanonicalSet) -> Self {
        let letters: Vec<LetterSet> = set.words().iter().map(|w| w.letters()).collect();

        // Upper triangle only: ascending order is what stops a permutation of
        // one combination from being found twice.
        let compatible_after: Vec<Vec<u32>> = (0..letters.len())
            .into_par_iter()
            .map(|i| {
                let mask = letters[i];
                (i + 1..letters.len())
                    .filter(|&j| letters[j].is_disjoint(mask))
                    .map(|j| j as u32)
                    .collect::<Vec<u32>>()
            })
            .collect();

        let graph = Self {
            letters,
            compatible_after,
        };
        tracing::info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            "built compatibility graph"
        );
        graph
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self, index: usize) -> LetterSet {
        self.letters[index]
    }

    /// Indices of later canonical words sharing no letter with `index`, ascending.
    pub fn compatible_after(&self, index: usize) -> &[u32] {
        &self.compatible_after[index]
    }

    pub fn edge_count(&self) -> usize {
        self.compatible_after.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::letters::LetterOrder;

    fn graph(words: &[&str]) -> (CanonicalSet, CompatibilityGraph) {
        let set = CanonicalSet::build(&Dictionary::from_words(words), &LetterOrder::alphabetical())
            .unwrap();
        let graph = CompatibilityGraph::build(&set);
        (set, graph)
    }

    #[test]
    fn edges_point_forward_only() {
        let (_, g) = graph(&["abcde", "fghij", "klmno"]);
        assert_eq!(g.compatible_after(0), [1, 2]);
        assert_eq!(g.compatible_after(1), [2]);
        assert!(g.compatible_after(2).is_empty());
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn overlapping_words_are_not_compatible() {
        let (_, g) = graph(&["abcde", "efghi", "jklmn"]);
        assert_eq!(g.compatible_after(0), [2]);
        assert_eq!(g.compatible_after(1), [2]);
        assert!(g.compatible_after(2).is_empty());
    }

    #[test]
    fn every_edge_is_letter_disjoint() {
        let (set, g) = graph(&[
            "crane", "slate", "pious", "vughy", "blimp", "fjord", "waltz", "gucks", "nymph",
            "vibex", "kreng", "fldxt", "prawn", "chunk", "jumpy",
        ]);
        for i in 0..g.len() {
            for &j in g.compatible_after(i) {
                let j = j as usize;
                assert!(j > i);
                let a = set.words()[i].letters();
                let b = set.words()[j].letters();
                assert_eq!((a & b).len(), 0);
            }
            for j in i + 1..g.len() {
                let disjoint = set.words()[i].letters().is_disjoint(set.words()[j].letters());
                let listed = g.compatible_after(i).contains(&(j as u32));
                assert_eq!(listed, disjoint);
            }
        }
    }

    #[test]
    fn empty_set_gives_empty_graph() {
        let (_, g) = graph(&["hello"]);
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }
}
