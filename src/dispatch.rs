use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use crate::error::{Error, Result};
use crate::graph::CompatibilityGraph;
use crate::search::{search_from, Candidate};

enum WorkerEvent {
    Found { root: usize, candidates: Vec<Candidate> },
    Finished { worker: usize },
}

/// Runs the search rooted at every canonical word on a pool of exactly
/// `workers` threads and gathers all candidates. Collection order is
/// unspecified.
pub fn dispatch(graph: &CompatibilityGraph, workers: NonZeroUsize) -> Result<Vec<Candidate>> {
    let workers = workers.get();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("search-{i}"))
        .build()?;

    // Roots are pulled from one shared queue so slow roots don't pile up on
    // a single worker.
    let (queue_tx, queue_rx) = crossbeam_channel::unbounded();
    for root in 0..graph.len() {
        queue_tx.send(root).map_err(|_| Error::WorkersLost)?;
    }
    drop(queue_tx);

    let (event_tx, event_rx) = crossbeam_channel::unbounded();
    pool.in_place_scope(|scope| {
        for worker in 0..workers {
            let queue = queue_rx.clone();
            let events = event_tx.clone();
            scope.spawn(move |_| run_worker(graph, worker, queue, events));
        }
        drop(event_tx);
        aggregate(&event_rx, graph.len(), workers)
    })
}

fn run_worker(
    graph: &CompatibilityGraph,
    worker: usize,
    queue: Receiver<usize>,
    events: Sender<WorkerEvent>,
) {
    let mut found = Vec::new();
    for root in queue.iter() {
        search_from(graph, root, &mut found);
        let candidates = std::mem::take(&mut found);
        if events.send(WorkerEvent::Found { root, candidates }).is_err() {
            return;
        }
    }
    events.send(WorkerEvent::Finished { worker }).ok();
}

fn aggregate(
    events: &Receiver<WorkerEvent>,
    roots: usize,
    workers: usize,
) -> Result<Vec<Candidate>> {
    let mut progress = Progress::new(roots, workers);
    let mut candidates = Vec::new();
    while progress.running > 0 {
        match events.recv().map_err(|_| Error::WorkersLost)? {
            WorkerEvent::Found {
                root,
                candidates: batch,
            } => {
                progress.record(root, batch.len());
                candidates.extend(batch);
            }
            WorkerEvent::Finished { worker } => {
                progress.running -= 1;
                tracing::debug!(worker, running = progress.running, "worker finished");
            }
        }
    }
    tracing::info!(
        candidates = candidates.len(),
        elapsed = ?progress.start.elapsed(),
        "search finished"
    );
    Ok(candidates)
}

struct Progress {
    start: Instant,
    roots_total: usize,
    roots_done: usize,
    candidates: usize,
    workers: usize,
    running: usize,
}

impl Progress {
    fn new(roots_total: usize, workers: usize) -> Self {
        Self {
            start: Instant::now(),
            roots_total,
            roots_done: 0,
            candidates: 0,
            workers,
            running: workers,
        }
    }

    fn record(&mut self, root: usize, found: usize) {
        self.roots_done += 1;
        if found == 0 {
            return;
        }
        self.candidates += found;
        let elapsed = self.start.elapsed();
        let remaining = estimate_remaining(elapsed, self.roots_total, self.roots_done);
        tracing::info!(
            root,
            received = found,
            total = self.candidates,
            roots = %format_args!("{}/{}", self.roots_done, self.roots_total),
            workers = %format_args!("{}/{}", self.running, self.workers),
            per_candidate = ?elapsed.div_f64(self.candidates as f64),
            remaining = ?remaining,
            "candidates received"
        );
    }
}

/// Linear extrapolation from the roots finished so far.
fn estimate_remaining(elapsed: Duration, total: usize, done: usize) -> Option<Duration> {
    if done == 0 || done > total {
        return None;
    }
    Some(elapsed.mul_f64((total - done) as f64 / done as f64))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::canonical::CanonicalSet;
    use crate::dictionary::Dictionary;
    use crate::letters::LetterOrder;
    use crate::search::search_all_sequential;

    fn graph(words: &[&str]) -> CompatibilityGraph {
        let set = CanonicalSet::build(&Dictionary::from_words(words), &LetterOrder::alphabetical())
            .unwrap();
        CompatibilityGraph::build(&set)
    }

    const WORDS: &[&str] = &[
        "abcde", "fghij", "klmno", "pqrst", "uvwxy", "bcdez", "ghijz", "lmnoz", "vwxyz", "afkpu",
        "bglqv", "chmrw", "dinsx", "ejoty", "qrstu", "hijkl", "mnopq", "ejotz", "dinsz",
    ];

    #[test]
    fn parallel_matches_sequential_for_any_worker_count() {
        let g = graph(WORDS);
        let expected: HashSet<Candidate> = search_all_sequential(&g).into_iter().collect();
        assert!(!expected.is_empty());
        for workers in [1, 2, 3, 8, 32] {
            let found = dispatch(&g, NonZeroUsize::new(workers).unwrap()).unwrap();
            assert_eq!(found.len(), expected.len(), "workers = {workers}");
            let found: HashSet<Candidate> = found.into_iter().collect();
            assert_eq!(found, expected, "workers = {workers}");
        }
    }

    #[test]
    fn empty_graph_finishes() {
        let g = graph(&[]);
        let found = dispatch(&g, NonZeroUsize::new(4).unwrap()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn more_workers_than_roots() {
        let g = graph(&["abcde", "fghij", "klmno", "pqrst", "uvwxy"]);
        let found = dispatch(&g, NonZeroUsize::new(16).unwrap()).unwrap();
        assert_eq!(found, [Candidate([0, 1, 2, 3, 4])]);
    }

    #[test]
    fn remaining_time_extrapolates_linearly() {
        let elapsed = Duration::from_secs(10);
        assert_eq!(estimate_remaining(elapsed, 40, 10), Some(Duration::from_secs(30)));
        assert_eq!(estimate_remaining(elapsed, 40, 40), Some(Duration::ZERO));
        assert_eq!(estimate_remaining(elapsed, 40, 0), None);
    }
}
