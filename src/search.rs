use crate::graph::CompatibilityGraph;
use crate::letters::{LetterSet, WORD_LEN};

/// Five pairwise letter-disjoint canonical words, as indices in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Candidate(pub [u32; WORD_LEN]);

impl Candidate {
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&i| i as usize)
    }
}

/// Every candidate whose smallest member is `root`, appended to `found`.
pub fn search_from(graph: &CompatibilityGraph, root: usize, found: &mut Vec<Candidate>) {
    let mut path = [root as u32; WORD_LEN];
    let mut used = graph.letters(root);
    extend(graph, &mut path, 1, &mut used, found);
}

#[cfg(test)]
pub(crate) fn search_all_sequential(graph: &CompatibilityGraph) -> Vec<Candidate> {
    let mut found = Vec::new();
    for root in 0..graph.len() {
        search_from(graph, root, &mut found);
    }
    found
}

fn extend(
    graph: &CompatibilityGraph,
    path: &mut [u32; WORD_LEN],
    depth: usize,
    used: &mut LetterSet,
    found: &mut Vec<Candidate>,
) {
    let candidates = graph.compatible_after(path[depth - 1] as usize);
    // Every remaining pick is later than this one and disjoint from the
    // predecessor, so it must come from the rest of this list.
    let needed = WORD_LEN - depth;
    for (pos, &next) in candidates.iter().enumerate() {
        if candidates.len() - pos < needed {
            break;
        }
        let letters = graph.letters(next as usize);
        if !used.is_disjoint(letters) {
            continue;
        }
        path[depth] = next;
        if depth + 1 == WORD_LEN {
            found.push(Candidate(*path));
            continue;
        }
        *used |= letters;
        extend(graph, path, depth + 1, used, found);
        used.remove(letters);
    }
}
