//! log4rs initialisation.

use crate::config::FALLBACK_LOG_FILE;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {t} - {m}{n}";

/// Initialise logging from the YAML file at `path`.
///
/// Falls back to an info-level file appender when the YAML cannot be
/// loaded. Logs never go to the terminal, which belongs to the prompts.
pub fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(path, Default::default()) {
        Ok(()) => {
            log::info!("Logging configured from {path}");
            Ok(())
        }
        Err(e) => {
            init_fallback()?;
            log::warn!("Could not load {path} ({e}), logging to {FALLBACK_LOG_FILE}");
            Ok(())
        }
    }
}

fn init_fallback() -> Result<(), Box<dyn Error>> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build(FALLBACK_LOG_FILE)?;
    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
