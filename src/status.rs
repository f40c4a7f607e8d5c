use std::fmt;

use crate::Palette;

/// The six leveled entry points. Every status is always emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Run,
    Success,
    Failed,
    Warning,
    Error,
    Info,
}

impl Status {
    /// Text shown between the brackets, e.g. `[ERR]`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Run => "RUN",
            Self::Success => "+",
            Self::Failed => "-",
            Self::Warning => "!",
            Self::Error => "ERR",
            Self::Info => "INFO",
        }
    }

    /// Console color of the tag.
    pub fn color(&self, palette: &Palette) -> &'static str {
        match self {
            Self::Run | Self::Info => palette.blue,
            Self::Success => palette.green,
            Self::Failed | Self::Warning => palette.yellow,
            Self::Error => palette.red,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
