// src/config.rs
use crate::args::{AggregateArgs, FormatArg, MalformedArg, TrailingArg};
use keystats_engine::options::{
    DEFAULT_BUFFER_CAPACITY, DEFAULT_MAX_LINE_LENGTH, MalformedPolicy, Options, ReportFormat, TrailingLine,
};

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl From<MalformedArg> for MalformedPolicy {
    fn from(arg: MalformedArg) -> Self {
        match arg {
            MalformedArg::Abort => Self::Abort,
            MalformedArg::Skip => Self::Skip,
        }
    }
}

impl From<TrailingArg> for TrailingLine {
    fn from(arg: TrailingArg) -> Self {
        match arg {
            TrailingArg::Drop => Self::Drop,
            TrailingArg::Include => Self::Include,
        }
    }
}

impl From<&AggregateArgs> for Options {
    fn from(args: &AggregateArgs) -> Self {
        Self {
            buffer_capacity: args.buffer_size.unwrap_or(DEFAULT_BUFFER_CAPACITY),
            max_line_length: args.max_line_length.unwrap_or(DEFAULT_MAX_LINE_LENGTH),
            trailing_line: args.trailing_line.into(),
            on_malformed: args.on_malformed.into(),
            format: args.format.into(),
        }
    }
}
