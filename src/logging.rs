// src/logging.rs
use tracing_subscriber::filter::LevelFilter;

/// Map the `-v` count onto a level; warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber. `log` records from the engine are bridged in.
pub fn init(verbosity: u8) {
    // A subscriber may already be set (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
