//! Line layout shared by the file and console sinks.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::Result;

const TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]:[minute]:[second]");

/// Current local time as `YYYY-MM-DD_HH:MM:SS`, falling back to UTC when the
/// local offset cannot be determined.
pub fn timestamp() -> Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

/// Render `at` as `YYYY-MM-DD_HH:MM:SS`.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String> {
    Ok(at.format(TIMESTAMP)?)
}

/// One formatted log line, before it is rendered for a particular sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    pub timestamp: &'a str,
    pub location: &'a str,
    pub tag: &'a str,
    pub message: &'a str,
}

impl Line<'_> {
    /// Timestamp and location tag joined by a space, followed by a trailing
    /// space; empty when both are absent.
    fn head(&self) -> String {
        let mut head = String::new();
        for part in [self.timestamp, self.location] {
            if part.is_empty() {
                continue;
            }
            if !head.is_empty() {
                head.push(' ');
            }
            head.push_str(part);
        }
        if !head.is_empty() {
            head.push(' ');
        }
        head
    }

    /// `<head>[<tag>] <message>\n`, never colored.
    pub fn render_file(&self) -> String {
        format!("{}[{}] {}\n", self.head(), self.tag, self.message)
    }

    /// `<start><head><color>[<tag>]<reset> <message><end>`.
    pub fn render_console(&self, color: &str, reset: &str, full_line: bool) -> String {
        let (start, end) = line_delimiters(full_line);
        format!(
            "{}{}{}[{}]{} {}{}",
            start,
            self.head(),
            color,
            self.tag,
            reset,
            self.message,
            end
        )
    }
}

/// Line-start and line-end characters: full lines end with a newline, compact
/// lines start with a carriage return so the terminal redraws in place.
pub fn line_delimiters(full_line: bool) -> (&'static str, &'static str) {
    if full_line { ("", "\n") } else { ("\r", "") }
}
