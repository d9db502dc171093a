// crates/engine/src/lib.rs
use std::io::{Read, Write};

pub mod aggregate;
pub mod error;
pub mod options;
pub mod reader;
pub mod report;
pub mod stats;

use crate::aggregate::Accumulator;
use crate::error::Result;
use crate::options::{MalformedPolicy, Options};
use crate::reader::LineReader;

/// Counters describing one completed pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines folded into the accumulator.
    pub records: u64,
    /// Distinct keys seen.
    pub keys: usize,
    /// Malformed lines passed over under [`MalformedPolicy::Skip`].
    pub skipped: u64,
}

/// Consume `input` and build the per-key statistics.
///
/// # Errors
///
/// Returns [`error::EngineError::Read`] if the stream fails,
/// [`error::EngineError::LineTooLong`] past `options.max_line_length`, and the
/// first malformed line as an error unless `options.on_malformed` is `Skip`.
pub fn aggregate<R: Read>(input: R, options: &Options) -> Result<(Accumulator, RunSummary)> {
    let mut reader = LineReader::with_capacity(
        options.buffer_capacity,
        input,
        options.max_line_length,
        options.trailing_line,
    );
    let mut acc = Accumulator::new();
    let mut summary = RunSummary::default();

    loop {
        let line_number = reader.lines_read() + 1;
        let Some(line) = reader.next_line()? else {
            break;
        };
        match acc.observe_line(line) {
            Ok(()) => summary.records += 1,
            Err(e) => match options.on_malformed {
                MalformedPolicy::Abort => return Err(e.at_line(line_number, line)),
                MalformedPolicy::Skip => {
                    log::warn!("skipping line {line_number}: {e}");
                    summary.skipped += 1;
                }
            },
        }
    }

    summary.keys = acc.len();
    Ok((acc, summary))
}

/// Aggregate all of `input`, then write the report to `output` exactly once.
///
/// Nothing is written if reading or parsing fails.
///
/// # Errors
///
/// Any read, parse or write failure ends the run; see [`error::EngineError`].
pub fn run<R: Read, W: Write>(input: R, output: &mut W, options: &Options) -> Result<RunSummary> {
    let (acc, summary) = aggregate(input, options)?;
    log::debug!(
        "aggregated {} records into {} keys ({} skipped)",
        summary.records,
        summary.keys,
        summary.skipped
    );
    let rendered = report::render(&acc.into_sorted(), options.format)?;
    report::write_report(output, &rendered)?;
    Ok(summary)
}
