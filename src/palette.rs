/// Named ANSI escape sequences used to color console status tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub blue: &'static str,
    pub magenta: &'static str,
    pub cyan: &'static str,
    pub white: &'static str,
    pub black_bg: &'static str,
    pub red_bg: &'static str,
    pub green_bg: &'static str,
    pub yellow_bg: &'static str,
    pub blue_bg: &'static str,
    pub purple_bg: &'static str,
    pub cyan_bg: &'static str,
    pub white_bg: &'static str,
}

impl Palette {
    /// Standard ANSI foreground and background codes.
    pub const ANSI: Palette = Palette {
        reset: "\x1b[0m",
        red: "\x1b[31m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        blue: "\x1b[34m",
        magenta: "\x1b[35m",
        cyan: "\x1b[36m",
        white: "\x1b[37m",
        black_bg: "\x1b[40m",
        red_bg: "\x1b[41m",
        green_bg: "\x1b[42m",
        yellow_bg: "\x1b[43m",
        blue_bg: "\x1b[44m",
        purple_bg: "\x1b[45m",
        cyan_bg: "\x1b[46m",
        white_bg: "\x1b[47m",
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::ANSI
    }
}
