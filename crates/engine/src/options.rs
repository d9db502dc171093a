use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default capacity of the input read buffer.
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Default limit on a single line, terminator included.
pub const DEFAULT_MAX_LINE_LENGTH: usize = DEFAULT_BUFFER_CAPACITY;

/// What to do with a final line that has no `\n` terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailingLine {
    /// Treat it as an incomplete record and discard it.
    #[default]
    Drop,
    /// Aggregate it like any other record.
    Include,
}

/// What to do with a line that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedPolicy {
    /// Fail the whole run on the first bad line.
    #[default]
    Abort,
    /// Log the line, count it and keep going.
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    /// `{key=min/mean/max, ...}`
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Options {
    #[builder(default = "DEFAULT_BUFFER_CAPACITY")]
    pub buffer_capacity: usize,
    #[builder(default = "DEFAULT_MAX_LINE_LENGTH")]
    pub max_line_length: usize,
    #[builder(default)]
    pub trailing_line: TrailingLine,
    #[builder(default)]
    pub on_malformed: MalformedPolicy,
    #[builder(default)]
    pub format: ReportFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            trailing_line: TrailingLine::default(),
            on_malformed: MalformedPolicy::default(),
            format: ReportFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = OptionsBuilder::default().build().unwrap();
        let default = Options::default();
        assert_eq!(built.buffer_capacity, default.buffer_capacity);
        assert_eq!(built.max_line_length, DEFAULT_MAX_LINE_LENGTH);
        assert_eq!(built.trailing_line, TrailingLine::Drop);
        assert_eq!(built.on_malformed, MalformedPolicy::Abort);
        assert_eq!(built.format, ReportFormat::Text);
    }

    #[test]
    fn builder_overrides() {
        let opts = OptionsBuilder::default()
            .buffer_capacity(16usize)
            .max_line_length(128usize)
            .trailing_line(TrailingLine::Include)
            .on_malformed(MalformedPolicy::Skip)
            .format(ReportFormat::Json)
            .build()
            .unwrap();
        assert_eq!(opts.buffer_capacity, 16);
        assert_eq!(opts.max_line_length, 128);
        assert_eq!(opts.trailing_line, TrailingLine::Include);
        assert_eq!(opts.on_malformed, MalformedPolicy::Skip);
        assert_eq!(opts.format, ReportFormat::Json);
    }
}
