use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// A single failed line is tolerated; the next one aborts the write.
pub const MAX_WRITE_FAILURES: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: usize,
    pub failed: usize,
}

/// Truncates `path` and writes one line per item.
pub fn write_solutions<T: Display>(
    path: impl AsRef<Path>,
    lines: impl IntoIterator<Item = T>,
) -> Result<WriteReport> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| Error::OutputOpen {
            path: path.to_owned(),
            source,
        })?;
    let report = write_and_flush(BufWriter::new(file), lines)?;
    tracing::info!(
        path = %path.display(),
        written = report.written,
        failed = report.failed,
        "wrote solutions"
    );
    Ok(report)
}

/// A failed final flush is fatal whatever the line failures so far.
fn write_and_flush<W: Write, T: Display>(
    mut sink: W,
    lines: impl IntoIterator<Item = T>,
) -> Result<WriteReport> {
    let mut report = write_lines(&mut sink, lines)?;
    if let Err(source) = sink.flush() {
        report.failed += 1;
        return Err(Error::OutputWrite {
            failures: report.failed,
            source,
        });
    }
    Ok(report)
}

pub fn write_lines<W: Write, T: Display>(
    sink: &mut W,
    lines: impl IntoIterator<Item = T>,
) -> Result<WriteReport> {
    let mut report = WriteReport::default();
    for line in lines {
        // One write per line, so a failure never leaves half a line behind.
        let text = format!("{line}\n");
        match sink.write_all(text.as_bytes()) {
            Ok(()) => report.written += 1,
            Err(source) => {
                report.failed += 1;
                tracing::warn!(line = %line, error = %source, "failed to write line");
                if report.failed > MAX_WRITE_FAILURES {
                    return Err(Error::OutputWrite {
                        failures: report.failed,
                        source,
                    });
                }
            }
        }
    }
    Ok(report)
}
