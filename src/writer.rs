use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::format::{self, Line};
use crate::rotation;
use crate::{CallSite, Error, FileLogConfig, LogConfig, Palette, Result, Status};

/// State of the current log file.
#[derive(Debug)]
struct FileState {
    /// The open file handle.
    file: File,
    /// Current size of the file in bytes.
    size: u64,
}

/// Everything a log line is written to, guarded by one mutex so lines from
/// different threads never interleave.
struct Sinks {
    file: Option<FileState>,
    console: Box<dyn Write + Send>,
}

/// Writes leveled lines to the console and to a size-rotated log file.
pub struct LogWriter {
    config: LogConfig,
    palette: Palette,
    sinks: Mutex<Sinks>,
}

impl LogWriter {
    /// Create a writer that prints to stdout.
    ///
    /// When file logging is enabled this creates the log directory, opens the
    /// log file and rotates it first if it has reached its maximum size.
    pub fn new(config: LogConfig) -> Result<Self> {
        Self::with_console(config, Box::new(io::stdout()))
    }

    /// Create a writer with a custom console sink.
    pub fn with_console(config: LogConfig, console: Box<dyn Write + Send>) -> Result<Self> {
        config.validate()?;
        let file = match &config.file {
            Some(file_config) => Some(open_log_file(file_config)?),
            None => None,
        };
        Ok(Self::from_state(config, file, console))
    }

    /// Create a writer around a file handle the caller already opened.
    ///
    /// No directory is created and no rotation check happens at open time.
    /// `config.file` still decides whether the handle is written to and where
    /// backups go.
    pub fn from_handle(config: LogConfig, file: File, console: Box<dyn Write + Send>) -> Self {
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);
        Self::from_state(config, Some(FileState { file, size }), console)
    }

    fn from_state(config: LogConfig, file: Option<FileState>, console: Box<dyn Write + Send>) -> Self {
        Self {
            config,
            palette: Palette::ANSI,
            sinks: Mutex::new(Sinks { file, console }),
        }
    }

    /// Replace the console color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// `[RUN]` in blue.
    #[track_caller]
    pub fn run(&self, message: impl Display) {
        self.log_at(Status::Run, CallSite::caller(), message);
    }

    /// `[+]` in green.
    #[track_caller]
    pub fn success(&self, message: impl Display) {
        self.log_at(Status::Success, CallSite::caller(), message);
    }

    /// `[-]` in yellow.
    #[track_caller]
    pub fn failed(&self, message: impl Display) {
        self.log_at(Status::Failed, CallSite::caller(), message);
    }

    /// `[!]` in yellow.
    #[track_caller]
    pub fn warning(&self, message: impl Display) {
        self.log_at(Status::Warning, CallSite::caller(), message);
    }

    /// `[ERR]` in red.
    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log_at(Status::Error, CallSite::caller(), message);
    }

    /// `[INFO]` in blue.
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log_at(Status::Info, CallSite::caller(), message);
    }

    #[track_caller]
    pub fn log(&self, status: Status, message: impl Display) {
        self.log_at(status, CallSite::caller(), message);
    }

    /// Write one line attributed to `site`.
    ///
    /// Failures never reach the caller: they are reported as `warn` events on
    /// the `rotalog::diagnostic` tracing target and the line is dropped.
    pub fn log_at(&self, status: Status, site: CallSite, message: impl Display) {
        let (color, reset) = if self.config.color {
            (status.color(&self.palette), self.palette.reset)
        } else {
            ("", "")
        };

        let timestamp = if self.config.timestamp {
            match format::timestamp() {
                Ok(timestamp) => timestamp,
                Err(err) => {
                    tracing::warn!(target: "rotalog::diagnostic", error = %err, "cannot format timestamp");
                    return;
                }
            }
        } else {
            String::new()
        };

        let location = match site.render(self.config.location) {
            Ok(location) => location,
            Err(err) => {
                tracing::warn!(target: "rotalog::diagnostic", error = %err, "cannot resolve caller location");
                return;
            }
        };

        let message = message.to_string();
        let line = Line {
            timestamp: &timestamp,
            location: &location,
            tag: status.tag(),
            message: &message,
        };

        if self.config.delay_secs > 0 {
            std::thread::sleep(Duration::from_secs(self.config.delay_secs));
        }

        let mut sinks = self.lock();

        if let Err(err) = self.write_file(&mut sinks, &line) {
            tracing::warn!(target: "rotalog::diagnostic", error = %err, "failed to write log file");
            if !self.config.independent_sinks {
                return;
            }
        }

        let rendered = line.render_console(color, reset, self.config.full_line);
        if let Err(err) = write_console(&mut sinks.console, &rendered) {
            tracing::warn!(target: "rotalog::diagnostic", error = %err, "failed to write console");
        }
    }

    fn write_file(&self, sinks: &mut Sinks, line: &Line<'_>) -> Result<()> {
        let (Some(file_config), Some(state)) = (&self.config.file, sinks.file.as_mut()) else {
            return Ok(());
        };

        let rendered = line.render_file();
        let len = rendered.len() as u64;

        if self.config.rotate_on_write && state.size > 0 && state.size + len > file_config.max_size
        {
            let backup = file_config.rotation.rotate(
                &state.file,
                &file_config.path,
                &file_config.directory,
            )?;
            tracing::debug!(
                target: "rotalog::diagnostic",
                path = %file_config.path.display(),
                backup = ?backup,
                "rotated log file"
            );
            state.size = 0;
        }

        state.file.write_all(rendered.as_bytes())?;
        state.size += len;
        state.file.sync_data()?;
        Ok(())
    }

    /// Sync and release the log file. Later calls only write to the console.
    pub fn close(&self) {
        let mut sinks = self.lock();
        if let Some(state) = sinks.file.take()
            && let Err(err) = state.file.sync_all()
        {
            tracing::warn!(target: "rotalog::diagnostic", error = %err, "failed to sync log file on close");
        }
        if let Err(err) = sinks.console.flush() {
            tracing::warn!(target: "rotalog::diagnostic", error = %err, "failed to flush console");
        }
    }

    /// Whether the log file is still open.
    pub fn has_file(&self) -> bool {
        self.lock().file.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Sinks> {
        self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogWriter")
            .field("config", &self.config)
            .field("palette", &self.palette)
            .finish_non_exhaustive()
    }
}

fn write_console(console: &mut Box<dyn Write + Send>, rendered: &str) -> io::Result<()> {
    console.write_all(rendered.as_bytes())?;
    console.flush()
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
}

/// Create the log directory and open the log file, rotating it when it has
/// already reached `max_size`.
fn open_log_file(config: &FileLogConfig) -> Result<FileState> {
    std::fs::create_dir_all(&config.directory).map_err(|e| {
        Error::Init(format!(
            "cannot create log directory {}: {}",
            config.directory.display(),
            e
        ))
    })?;
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::Init(format!(
                "cannot create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let existing = match std::fs::metadata(&config.path) {
        Ok(metadata) => Some(metadata.len()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(Error::Init(format!(
                "cannot inspect log file {}: {}",
                config.path.display(),
                e
            )));
        }
    };

    let file = open_append(&config.path).map_err(|e| {
        Error::Init(format!(
            "cannot open log file {}: {}",
            config.path.display(),
            e
        ))
    })?;

    let size = match existing {
        Some(size) if rotation::needs_rotation(size, config.max_size) => {
            let backup = config
                .rotation
                .rotate(&file, &config.path, &config.directory)?;
            tracing::debug!(
                target: "rotalog::diagnostic",
                path = %config.path.display(),
                size,
                backup = ?backup,
                "rotated log file on open"
            );
            0
        }
        Some(size) => size,
        None => 0,
    };

    Ok(FileState { file, size })
}
