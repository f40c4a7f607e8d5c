use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, RotationPolicy};

/// Default maximum size of the log file before it is rotated (5 MiB).
pub const DEFAULT_MAX_SIZE: u64 = 5 * 1024 * 1024;

/// How the caller's source location is embedded in each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// No location.
    None,
    /// `<parent dir>/<file name>:<line>`
    Relative,
    /// `<absolute path>:<line>`
    #[default]
    Absolute,
}

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Terminate every console line with a newline. When false each line
    /// redraws the previous one in place.
    pub full_line: bool,
    /// Prefix lines with `YYYY-MM-DD_HH:MM:SS`
    pub timestamp: bool,
    /// Color the status tag on the console
    pub color: bool,
    /// Caller location rendering
    pub location: LocationMode,
    /// Seconds to sleep before every write
    pub delay_secs: u64,
    /// Keep writing to the console when the file write fails
    pub independent_sinks: bool,
    /// Check the file size before every write, not only when the file is opened
    pub rotate_on_write: bool,
    /// File logging configuration; `None` disables the log file
    pub file: Option<FileLogConfig>,
}

impl LogConfig {
    /// Create a new LogConfig with defaults
    pub fn new() -> Self {
        Self {
            full_line: true,
            timestamp: true,
            color: true,
            location: LocationMode::default(),
            delay_secs: 0,
            independent_sinks: false,
            rotate_on_write: false,
            file: Some(FileLogConfig::default()),
        }
    }

    /// Console-only configuration with every decoration turned off.
    pub fn plain() -> Self {
        Self {
            timestamp: false,
            color: false,
            location: LocationMode::None,
            file: None,
            ..Self::new()
        }
    }

    pub fn with_full_line(mut self, full_line: bool) -> Self {
        self.full_line = full_line;
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_location(mut self, location: LocationMode) -> Self {
        self.location = location;
        self
    }

    pub fn with_delay_secs(mut self, delay_secs: u64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    pub fn with_independent_sinks(mut self, independent_sinks: bool) -> Self {
        self.independent_sinks = independent_sinks;
        self
    }

    pub fn with_rotate_on_write(mut self, rotate_on_write: bool) -> Self {
        self.rotate_on_write = rotate_on_write;
        self
    }

    /// Set file logging configuration
    pub fn with_file(mut self, file: FileLogConfig) -> Self {
        self.file = Some(file);
        self
    }

    /// Disable the log file
    pub fn without_file(mut self) -> Self {
        self.file = None;
        self
    }

    /// Reject configurations that cannot produce a usable log file.
    pub fn validate(&self) -> Result<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        if file.path.as_os_str().is_empty() {
            return Err(Error::Config("log file path is empty".to_string()));
        }
        if file.directory.as_os_str().is_empty() {
            return Err(Error::Config("log directory is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for file logging
///
/// Every field may be omitted when deserializing. A missing `directory` is the
/// parent of `path`, as with [`FileLogConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FileLogConfigInput")]
pub struct FileLogConfig {
    /// Path to the log file
    pub path: PathBuf,
    /// Directory created on startup and holding backups
    pub directory: PathBuf,
    /// Size in bytes at which the file is rotated
    pub max_size: u64,
    /// What to do with a full log file
    pub rotation: RotationPolicy,
}

/// Serialized form of [`FileLogConfig`] before defaults are filled in.
#[derive(Deserialize)]
struct FileLogConfigInput {
    path: Option<PathBuf>,
    directory: Option<PathBuf>,
    /// A number of bytes or a string with a unit, e.g. "5M".
    #[serde(
        default = "default_max_size",
        deserialize_with = "crate::rotation::deserialize_size"
    )]
    max_size: u64,
    #[serde(default)]
    rotation: RotationPolicy,
}

impl From<FileLogConfigInput> for FileLogConfig {
    fn from(input: FileLogConfigInput) -> Self {
        let mut config = match input.path {
            Some(path) => Self::new(path),
            None => Self::default(),
        };
        if let Some(directory) = input.directory {
            config.directory = directory;
        }
        config.max_size = input.max_size;
        config.rotation = input.rotation;
        config
    }
}

impl FileLogConfig {
    /// Create a new FileLogConfig; the directory is the parent of `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            path,
            directory,
            max_size: DEFAULT_MAX_SIZE,
            rotation: RotationPolicy::default(),
        }
    }

    /// Set the directory that is created on startup and receives backups.
    pub fn with_directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_rotation(mut self, rotation: RotationPolicy) -> Self {
        self.rotation = rotation;
        self
    }
}

impl Default for FileLogConfig {
    /// `<executable dir>/logs/current.log`
    fn default() -> Self {
        Self::new(default_log_dir().join("current.log"))
    }
}

fn default_max_size() -> u64 {
    DEFAULT_MAX_SIZE
}

/// `<executable dir>/logs`, or `./logs` when the executable cannot be located.
pub fn default_log_dir() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_new() {
        let config = LogConfig::new();
        assert!(config.full_line);
        assert!(config.timestamp);
        assert!(config.color);
        assert_eq!(config.location, LocationMode::Absolute);
        assert_eq!(config.delay_secs, 0);
        assert!(!config.independent_sinks);
        assert!(!config.rotate_on_write);
        assert!(config.file.is_some());
    }

    #[test]
    fn test_log_config_default() {
        assert_eq!(LogConfig::default(), LogConfig::new());
    }

    #[test]
    fn test_default_file_config() {
        let file = FileLogConfig::default();
        assert_eq!(file.max_size, 5_242_880);
        assert_eq!(file.rotation, RotationPolicy::Truncate);
        assert!(file.path.ends_with("logs/current.log"));
        assert_eq!(file.directory, default_log_dir());
        assert_eq!(file.path.parent(), Some(file.directory.as_path()));
    }

    #[test]
    fn test_plain_config() {
        let config = LogConfig::plain();
        assert!(config.full_line);
        assert!(!config.timestamp);
        assert!(!config.color);
        assert_eq!(config.location, LocationMode::None);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_log_config_chaining() {
        let config = LogConfig::new()
            .with_full_line(false)
            .with_timestamp(false)
            .with_color(false)
            .with_location(LocationMode::Relative)
            .with_delay_secs(2)
            .with_independent_sinks(true)
            .with_rotate_on_write(true)
            .without_file();
        assert!(!config.full_line);
        assert!(!config.timestamp);
        assert!(!config.color);
        assert_eq!(config.location, LocationMode::Relative);
        assert_eq!(config.delay_secs, 2);
        assert!(config.independent_sinks);
        assert!(config.rotate_on_write);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_file_log_config_new() {
        let config = FileLogConfig::new("/var/log/app/current.log");
        assert_eq!(config.path, PathBuf::from("/var/log/app/current.log"));
        assert_eq!(config.directory, PathBuf::from("/var/log/app"));
        assert_eq!(config.max_size, DEFAULT_MAX_SIZE);

        let bare = FileLogConfig::new("current.log");
        assert_eq!(bare.directory, PathBuf::from("."));
    }

    #[test]
    fn test_file_log_config_chaining() {
        let config = FileLogConfig::new("logs/current.log")
            .with_directory("archive")
            .with_max_size(1024)
            .with_rotation(RotationPolicy::Backup);
        assert_eq!(config.directory, PathBuf::from("archive"));
        assert_eq!(config.max_size, 1024);
        assert_eq!(config.rotation, RotationPolicy::Backup);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
color: false
location: relative
file:
  path: /tmp/app/current.log
  directory: /tmp/app
  max_size: "2M"
  rotation: backup
"#;
        let config: LogConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.color);
        assert!(config.timestamp);
        assert_eq!(config.location, LocationMode::Relative);
        let file = config.file.unwrap();
        assert_eq!(file.max_size, 2 * 1024 * 1024);
        assert_eq!(file.rotation, RotationPolicy::Backup);
    }

    #[test]
    fn test_path_only_file_section() {
        let yaml = r#"
file:
  path: /tmp/app/current.log
"#;
        let config: LogConfig = serde_yaml::from_str(yaml).unwrap();
        let file = config.file.unwrap();
        assert_eq!(file.path, PathBuf::from("/tmp/app/current.log"));
        assert_eq!(file.directory, PathBuf::from("/tmp/app"));
        assert_eq!(file.max_size, DEFAULT_MAX_SIZE);
        assert_eq!(file.rotation, RotationPolicy::Truncate);
    }

    #[test]
    fn test_empty_file_section_uses_default_file() {
        let config: LogConfig = serde_yaml::from_str("file: {}").unwrap();
        assert_eq!(config.file, Some(FileLogConfig::default()));
    }

    #[test]
    fn test_validate() {
        assert!(LogConfig::new().validate().is_ok());
        assert!(LogConfig::plain().validate().is_ok());

        let empty_path = LogConfig::new().with_file(FileLogConfig::new(""));
        assert!(matches!(empty_path.validate(), Err(Error::Config(_))));

        let empty_dir =
            LogConfig::new().with_file(FileLogConfig::new("logs/current.log").with_directory(""));
        assert!(matches!(empty_dir.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_null_file_disables_persistence() {
        let config: LogConfig = serde_yaml::from_str("file: null").unwrap();
        assert!(config.file.is_none());
    }
}
