use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::format;
use crate::{Error, Result};

/// Parse a size string with an optional unit (B/K/M/G, case-insensitive).
/// A bare number is a byte count.
pub fn parse_size(s: &str) -> std::result::Result<u64, String> {
    let s = s.trim();
    let Some(last) = s.chars().last() else {
        return Err("empty size string".to_string());
    };

    let (num_str, unit) = if last.is_alphabetic() {
        (&s[..s.len() - last.len_utf8()], last.to_ascii_uppercase())
    } else {
        (s, 'B')
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    let multiplier = match unit {
        'B' => 1,
        'K' => 1024,
        'M' => 1024 * 1024,
        'G' => 1024 * 1024 * 1024,
        _ => return Err(format!("invalid unit: {}, supported: B/K/M/G", unit)),
    };

    num.checked_mul(multiplier)
        .ok_or_else(|| "size too large".to_string())
}

/// Size value that can be a number or string with units.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeValue {
    Number(u64),
    String(String),
}

/// Deserialize a byte size from either `5242880` or `"5M"`.
pub(crate) fn deserialize_size<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match SizeValue::deserialize(deserializer)? {
        SizeValue::Number(n) => Ok(n),
        SizeValue::String(s) => parse_size(&s).map_err(de::Error::custom),
    }
}

/// What happens to a log file that has reached its maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Empty the file in place.
    #[default]
    #[serde(alias = "c", alias = "clear")]
    Truncate,
    /// Copy the content to a timestamped file in the log directory, then empty it.
    #[serde(alias = "b", alias = "back")]
    Backup,
}

impl RotationPolicy {
    /// Rotate the log file at `path`, whose open handle is `file`.
    ///
    /// On return the file is empty. For [`RotationPolicy::Backup`] the path of
    /// the backup copy is returned.
    pub fn rotate(&self, file: &File, path: &Path, directory: &Path) -> Result<Option<PathBuf>> {
        let backup = match self {
            Self::Truncate => None,
            Self::Backup => Some(backup(path, directory)?),
        };
        truncate(file, path)?;
        Ok(backup)
    }
}

/// Check whether a file of `size` bytes has to be rotated.
pub fn needs_rotation(size: u64, max_size: u64) -> bool {
    size >= max_size
}

/// File name used for a backup taken now: `YYYY-MM-DD_HH:MM:SS.log`.
pub fn backup_file_name() -> Result<String> {
    Ok(format!("{}.log", format::timestamp()?))
}

/// Set the file length to zero, keeping the handle and path.
pub fn truncate(file: &File, path: &Path) -> Result<()> {
    file.set_len(0).map_err(|source| Error::Rotation {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy the whole content of `path` into a timestamped file under `directory`.
///
/// The backup is opened in append mode, so two backups taken within the
/// same second land in the same file one after the other.
pub fn backup(path: &Path, directory: &Path) -> Result<PathBuf> {
    let content = std::fs::read(path).map_err(|source| Error::Rotation {
        path: path.to_path_buf(),
        source,
    })?;

    let target = directory.join(backup_file_name()?);
    let fail = |source| Error::Rotation {
        path: target.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(&target)
        .map_err(fail)?;
    file.write_all(&content).map_err(fail)?;
    file.sync_all().map_err(fail)?;

    Ok(target)
}
