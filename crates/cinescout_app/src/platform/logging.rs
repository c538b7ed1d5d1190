//! Logger initialization for cinescout_app.
//!
//! File output goes to `./cinescout.log` in the current working directory.
//! The terminal variant is only useful when the raw-mode UI is not running.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./cinescout.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

/// Initialize the global logger. Safe to call once; failures to create the
/// log file degrade to a warning on stderr rather than aborting startup.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let wants_terminal = matches!(destination, LogDestination::Terminal | LogDestination::Both);
    let wants_file = matches!(destination, LogDestination::File | LogDestination::Both);

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if wants_terminal {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if wants_file {
        let log_path = PathBuf::from(LOG_FILENAME);
        match File::create(&log_path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config.clone(), file)),
            Err(err) => {
                eprintln!("Warning: could not create log file at {log_path:?}: {err}");
            }
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}
