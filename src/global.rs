//! The process-wide writer.
//!
//! The global writer is assigned once. The first successful [`init`] or
//! [`logger`] call decides its configuration; every later call returns that
//! same instance unchanged.

use once_cell::sync::OnceCell;

use crate::{Error, LogConfig, LogWriter, Result};

static LOGGER: OnceCell<LogWriter> = OnceCell::new();

/// Initialize the global writer with `config`.
///
/// If the global writer already exists it is returned as is and `config` is
/// ignored.
pub fn init(config: LogConfig) -> Result<&'static LogWriter> {
    LOGGER.get_or_try_init(|| LogWriter::new(config))
}

/// The global writer, built from [`LogConfig::default`] on first use.
///
/// Exits the process with status 1 if that writer cannot be built; see
/// [`init_or_exit`].
pub fn logger() -> &'static LogWriter {
    if let Some(writer) = LOGGER.get() {
        return writer;
    }
    init_or_exit(LogConfig::default())
}

/// Like [`init`], but a writer that cannot be built (log directory or file
/// unusable, rotation failed) exits the process with status 1 after
/// reporting the error on the diagnostic target and stderr.
pub fn init_or_exit(config: LogConfig) -> &'static LogWriter {
    LOGGER.get_or_init(|| match LogWriter::new(config) {
        Ok(writer) => writer,
        Err(err) => fatal(err),
    })
}

/// The global writer if it has been initialized.
pub fn try_logger() -> Option<&'static LogWriter> {
    LOGGER.get()
}

/// Sync and release the global writer's log file. Call before process exit.
pub fn shutdown() {
    if let Some(writer) = LOGGER.get() {
        writer.close();
    }
}

fn fatal(err: Error) -> ! {
    tracing::error!(target: "rotalog::diagnostic", error = %err, "cannot initialize logging");
    eprintln!("rotalog: cannot initialize logging: {}", err);
    std::process::exit(1)
}
