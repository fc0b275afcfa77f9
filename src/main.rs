use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordle_cliques::{output, Dictionary, LetterOrderKind, SolveOptions};

const DEFAULT_FILTER: &str = "wordle_cliques=info";

/// Find five words of five letters that together use 25 distinct letters.
#[derive(Parser, Debug)]
#[command(name = "wordle_cliques", version)]
struct Options {
    /// Word list, one word per line.
    #[arg(value_name = "WORDS", default_value = "words_alpha.txt")]
    words: PathBuf,

    /// Where to write the solutions; overwritten on every run.
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    #[arg(short, long, default_value = "20")]
    workers: NonZeroUsize,

    /// Number of solutions the word list is known to produce; no check when
    /// omitted.
    #[arg(short, long)]
    expected: Option<usize>,

    /// Order canonical keys alphabetically instead of by letter frequency.
    #[arg(long)]
    alphabetical_order: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();

    let opt = Options::parse();
    let start = Instant::now();
    tracing::info!(workers = opt.workers.get(), expected = ?opt.expected, "starting");

    let dictionary = Dictionary::load(&opt.words)?;
    let options = SolveOptions {
        workers: opt.workers,
        letter_order: if opt.alphabetical_order {
            LetterOrderKind::Alphabetical
        } else {
            LetterOrderKind::Frequency
        },
    };
    let solved = wordle_cliques::solve(&dictionary, &options).context("search failed")?;
    tracing::info!(
        kept = solved.canonical.kept(),
        rejected = solved.canonical.rejected(),
        candidates = solved.candidates.len(),
        solutions = solved.solutions.len(),
        duplicates = solved.duplicates,
        elapsed = ?start.elapsed(),
        "search complete"
    );

    output::write_solutions(&opt.output, &solved.solutions)
        .with_context(|| format!("writing {}", opt.output.display()))?;
    tracing::info!(elapsed = ?start.elapsed(), "finished");

    if let Some(expected) = opt.expected {
        wordle_cliques::check_expected(expected, solved.solutions.len());
    }
    Ok(())
}
