//! Caller source locations embedded in log lines.

use std::io;
use std::panic::Location;
use std::path::Path;

use crate::{LocationMode, Result};

/// Source file and line of the code that issued a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of whoever called the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// Render the location tag for `mode`, e.g. `| app/main.rs:12 |`.
    ///
    /// Returns an empty string for [`LocationMode::None`].
    pub fn render(&self, mode: LocationMode) -> Result<String> {
        let file = match mode {
            LocationMode::None => return Ok(String::new()),
            LocationMode::Absolute => absolute_file(known(self.file)?)?,
            LocationMode::Relative => relative_file(known(self.file)?),
        };
        Ok(format!("| {}:{} |", file, self.line))
    }
}

impl From<&Location<'static>> for CallSite {
    fn from(location: &Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

fn known(file: &str) -> io::Result<&str> {
    if file.is_empty() {
        return Err(io::Error::new(io::ErrorKind::NotFound, "caller file is unknown"));
    }
    Ok(file)
}

fn absolute_file(file: &str) -> io::Result<String> {
    let path = Path::new(file);
    if path.is_absolute() {
        return Ok(file.to_string());
    }
    Ok(std::path::absolute(path)?.display().to_string())
}

/// `<parent dir>/<file name>`, splitting on either separator style.
fn relative_file(file: &str) -> String {
    let segments: Vec<&str> = file.split(['/', '\\']).collect();
    match segments.as_slice() {
        [.., parent, name] => format!("{}/{}", parent, name),
        _ => file.to_string(),
    }
}
