//! Builder pattern for initializing logging configuration.
//!
//! # Example
//!
//! ```rust,no_run
//! use rotalog::{LocationMode, RotationPolicy};
//!
//! let log = rotalog::builder()
//!     .with_location(LocationMode::Relative)
//!     .with_file("/var/log/app/current.log")
//!     .with_max_size(1024 * 1024)
//!     .with_rotation(RotationPolicy::Backup)
//!     .init()
//!     .expect("Failed to initialize logging");
//!
//! log.info("ready");
//! ```

use std::path::PathBuf;

use crate::{FileLogConfig, LocationMode, LogConfig, LogWriter, Result, RotationPolicy};

/// A builder for configuring and initializing logging.
#[derive(Debug, Clone)]
pub struct LogBuilder {
    config: LogConfig,
}

impl LogBuilder {
    /// Create a new LogBuilder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LogConfig::new(),
        }
    }

    /// Create a LogBuilder from an existing configuration.
    pub fn from_config(config: LogConfig) -> Self {
        Self { config }
    }

    /// Newline-terminated lines (true) or a single line redrawn in place (false).
    pub fn with_full_line(mut self, full_line: bool) -> Self {
        self.config = self.config.with_full_line(full_line);
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.config = self.config.with_timestamp(timestamp);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.config = self.config.with_color(color);
        self
    }

    pub fn with_location(mut self, location: LocationMode) -> Self {
        self.config = self.config.with_location(location);
        self
    }

    /// Sleep this many seconds before every write.
    pub fn with_delay_secs(mut self, delay_secs: u64) -> Self {
        self.config = self.config.with_delay_secs(delay_secs);
        self
    }

    pub fn with_independent_sinks(mut self, independent_sinks: bool) -> Self {
        self.config = self.config.with_independent_sinks(independent_sinks);
        self
    }

    pub fn with_rotate_on_write(mut self, rotate_on_write: bool) -> Self {
        self.config = self.config.with_rotate_on_write(rotate_on_write);
        self
    }

    /// Configure file logging with a path.
    ///
    /// The directory becomes the parent of `path`; the size limit and
    /// rotation policy keep their current values.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        let mut file_config = FileLogConfig::new(path);
        if let Some(current) = &self.config.file {
            file_config.max_size = current.max_size;
            file_config.rotation = current.rotation;
        }
        self.config = self.config.with_file(file_config);
        self
    }

    /// Configure file logging with a custom FileLogConfig.
    pub fn with_file_config(mut self, file_config: FileLogConfig) -> Self {
        self.config = self.config.with_file(file_config);
        self
    }

    /// Set the maximum log file size.
    ///
    /// If no file is configured, the default file is enabled first.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.file_mut().max_size = max_size;
        self
    }

    /// Set the rotation policy.
    ///
    /// If no file is configured, the default file is enabled first.
    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.file_mut().rotation = rotation;
        self
    }

    /// Console only.
    pub fn without_file(mut self) -> Self {
        self.config = self.config.without_file();
        self
    }

    fn file_mut(&mut self) -> &mut FileLogConfig {
        self.config.file.get_or_insert_with(FileLogConfig::default)
    }

    /// Get the current configuration without initializing.
    pub fn build(self) -> LogConfig {
        self.config
    }

    /// Build a standalone writer that is not installed globally.
    pub fn build_writer(self) -> Result<LogWriter> {
        LogWriter::new(self.config)
    }

    /// Initialize the global writer with the configured settings.
    ///
    /// Returns the existing global writer unchanged if one is already set.
    pub fn init(self) -> Result<&'static LogWriter> {
        crate::init(self.config)
    }
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_new() {
        let config = LogBuilder::new().build();
        assert_eq!(config, LogConfig::new());
    }

    #[test]
    fn test_builder_flags() {
        let config = LogBuilder::new()
            .with_full_line(false)
            .with_timestamp(false)
            .with_color(false)
            .with_location(LocationMode::None)
            .with_delay_secs(1)
            .with_independent_sinks(true)
            .with_rotate_on_write(true)
            .build();
        assert!(!config.full_line);
        assert!(!config.timestamp);
        assert!(!config.color);
        assert_eq!(config.location, LocationMode::None);
        assert_eq!(config.delay_secs, 1);
        assert!(config.independent_sinks);
        assert!(config.rotate_on_write);
    }

    #[test]
    fn test_builder_with_file_keeps_limits() {
        let config = LogBuilder::new()
            .with_max_size(2048)
            .with_rotation(RotationPolicy::Backup)
            .with_file("app/current.log")
            .build();
        let file = config.file.unwrap();
        assert_eq!(file.path, PathBuf::from("app/current.log"));
        assert_eq!(file.directory, PathBuf::from("app"));
        assert_eq!(file.max_size, 2048);
        assert_eq!(file.rotation, RotationPolicy::Backup);
    }

    #[test]
    fn test_builder_rotation_enables_default_file() {
        let config = LogBuilder::new()
            .without_file()
            .with_rotation(RotationPolicy::Backup)
            .build();
        let file = config.file.unwrap();
        assert_eq!(file.rotation, RotationPolicy::Backup);
        assert!(file.path.ends_with("logs/current.log"));
    }

    #[test]
    fn test_builder_without_file() {
        let config = LogBuilder::new().without_file().build();
        assert!(config.file.is_none());
    }

    #[test]
    fn test_builder_from_config() {
        let original = LogConfig::plain().with_delay_secs(3);
        let config = LogBuilder::from_config(original.clone()).build();
        assert_eq!(config, original);
    }

    #[test]
    fn test_builder_build_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/current.log");
        let writer = LogBuilder::new()
            .with_file(&path)
            .build_writer()
            .unwrap();
        assert!(writer.has_file());
        assert!(path.exists());
    }
}
