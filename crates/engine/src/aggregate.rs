use hashbrown::HashMap;
use thiserror::Error;

use crate::error::EngineError;
use crate::stats::Statistic;

const DELIMITER: u8 = b';';

/// Why a single line could not be turned into a `(key, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing ';' delimiter")]
    MissingDelimiter,
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
}

impl RecordError {
    /// Attach the position and content of the offending line.
    pub fn at_line(self, line_number: u64, line: &[u8]) -> EngineError {
        match self {
            Self::MissingDelimiter => EngineError::MalformedRecord {
                line_number,
                line: String::from_utf8_lossy(line).into_owned(),
            },
            Self::InvalidNumber(text) => EngineError::MalformedNumber { line_number, text },
        }
    }
}

/// Split a line into its key and value.
///
/// The key is everything before the first `;`, byte for byte. The value is
/// the rest with one trailing `\n` removed, parsed as an `f64`.
pub fn parse_record(line: &[u8]) -> Result<(&[u8], f64), RecordError> {
    let pos = memchr::memchr(DELIMITER, line).ok_or(RecordError::MissingDelimiter)?;
    let key = &line[..pos];
    let raw = &line[pos + 1..];
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    Ok((key, parse_value(raw)?))
}

fn parse_value(raw: &[u8]) -> Result<f64, RecordError> {
    std::str::from_utf8(raw)
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or_else(|| RecordError::InvalidNumber(String::from_utf8_lossy(raw).into_owned()))
}

/// Per-key statistics for one run.
#[derive(Debug, Default)]
pub struct Accumulator {
    stats: HashMap<Box<[u8]>, Statistic>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation into the statistic for `key`.
    ///
    /// The key is only copied the first time it is seen.
    pub fn observe(&mut self, key: &[u8], value: f64) {
        if let Some(stat) = self.stats.get_mut(key) {
            stat.record(value);
        } else {
            self.stats.insert(key.into(), Statistic::new(value));
        }
    }

    /// Parse `line` and fold it in. Nothing changes when parsing fails.
    pub fn observe_line(&mut self, line: &[u8]) -> Result<(), RecordError> {
        let (key, value) = parse_record(line)?;
        self.observe(key, value);
        Ok(())
    }

    pub fn get(&self, key: &[u8]) -> Option<&Statistic> {
        self.stats.get(key)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Consume the accumulator, yielding entries in ascending byte order of key.
    pub fn into_sorted(self) -> Vec<(Box<[u8]>, Statistic)> {
        let mut rows: Vec<_> = self.stats.into_iter().collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        rows
    }
}
