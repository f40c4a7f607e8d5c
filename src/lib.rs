//! # Rotalog
//!
//! Leveled console logging mirrored into a log file that is rotated by size.
//!
//! ## Features
//!
//! - Six status levels, each with its own tag and console color
//! - Optional timestamps and caller locations
//! - Full-line output or a single console line redrawn in place
//! - Log file truncated or backed up to a timestamped copy once it is full
//!
//! ## Example
//!
//! ```rust
//! use rotalog::{LogConfig, LogWriter};
//!
//! let log = LogWriter::new(LogConfig::plain())?;
//! log.info("This is an info message");
//! log.success("done");
//! # Ok::<(), rotalog::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod global;
pub mod location;
mod macros;
pub mod palette;
pub mod rotation;
pub mod status;
pub mod writer;

pub use builder::LogBuilder;
pub use config::{FileLogConfig, LocationMode, LogConfig};
pub use error::{Error, Result};
pub use global::{init, init_or_exit, logger, shutdown, try_logger};
pub use location::CallSite;
pub use palette::Palette;
pub use rotation::RotationPolicy;
pub use status::Status;
pub use writer::LogWriter;

/// Start building a logging configuration.
pub fn builder() -> LogBuilder {
    LogBuilder::new()
}
