// src/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

use crate::parsers;

#[derive(Parser, Debug)]
#[command(
    name = "keystats",
    version,
    about = "Per-key min/mean/max over `key;value` lines",
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub aggregate: AggregateArgs,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write synthetic measurements for a station list read from stdin
    Generate(GenerateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct AggregateArgs {
    /// Input file; `-` or absent reads stdin
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Handling of lines that fail to parse
    #[arg(long, value_enum, default_value = "abort")]
    pub on_malformed: MalformedArg,

    /// Handling of a final line with no newline
    #[arg(long, value_enum, default_value = "drop")]
    pub trailing_line: TrailingArg,

    /// Read buffer size in bytes (accepts K/M suffixes)
    #[arg(long, value_parser = parsers::parse_byte_size)]
    pub buffer_size: Option<usize>,

    /// Longest accepted line in bytes, newline included (accepts K/M suffixes)
    #[arg(long, value_parser = parsers::parse_byte_size)]
    pub max_line_length: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Number of measurement lines to write
    pub rows: u64,

    /// How many distinct stations to draw from the list
    #[arg(long, default_value_t = 10_000, value_parser = parsers::parse_positive_usize)]
    pub keys: usize,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Standard deviation of values around each station's mean
    #[arg(long, default_value_t = 10.0)]
    pub stddev: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MalformedArg {
    /// Stop at the first bad line
    #[default]
    Abort,
    /// Warn and continue
    Skip,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TrailingArg {
    /// Discard it as an incomplete record
    #[default]
    Drop,
    /// Aggregate it
    Include,
}
