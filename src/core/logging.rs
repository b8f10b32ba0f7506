use std::path::{Path, PathBuf};

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use crate::error::{Error, Result};

use super::Resources;

const CONSOLE_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum LogSource {
    File(PathBuf),
    Console,
}

fn log_source(resources: &Resources) -> LogSource {
    match resources.log_toml() {
        Some(path) => LogSource::File(path),
        None => LogSource::Console,
    }
}

/// Installs the global logger from `log.toml` when one is found, console otherwise.
///
/// A `log.toml` that fails to load is reported on the console logger it falls back to.
pub fn init(resources: &Resources) -> Result<()> {
    match log_source(resources) {
        LogSource::File(path) => {
            if let Err(e) = init_file(&path) {
                init_console()?;
                log::error!("{}, logging to console", e);
            }
        }
        LogSource::Console => {
            init_console()?;
            log::debug!("No log config in {:?}, logging to console", resources.config_paths());
        }
    }
    Ok(())
}

fn init_file(path: &Path) -> Result<()> {
    log4rs::init_file(path, Default::default())
        .map_err(|e| Error::Logging(format!("{}: {}", path.display(), e)))
}

fn init_console() -> Result<()> {
    log4rs::init_config(console_config(LevelFilter::Info)?)
        .map(|_| ())
        .map_err(|e| Error::Logging(e.to_string()))
}

fn console_config(level: LevelFilter) -> Result<Config> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| Error::Logging(e.to_string()))
}
