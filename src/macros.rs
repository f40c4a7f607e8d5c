//! Call-site macros that take `format!`-style arguments.
//!
//! ```rust
//! let log = rotalog::LogWriter::new(rotalog::LogConfig::plain())?;
//! rotalog::info!(log, "listening on port {}", 8080);
//! rotalog::error!(log, "{} retries left", 0);
//! # Ok::<(), rotalog::Error>(())
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($writer:expr, $status:ident, $($arg:tt)+) => {
        $writer.log_at(
            $crate::Status::$status,
            $crate::CallSite::new(::core::file!(), ::core::line!()),
            ::core::format_args!($($arg)+),
        )
    };
}

/// Log a `[RUN]` line.
#[macro_export]
macro_rules! run {
    ($writer:expr, $($arg:tt)+) => { $crate::__log_at!($writer, Run, $($arg)+) };
}

/// Log a `[+]` line.
#[macro_export]
macro_rules! success {
    ($writer:expr, $($arg:tt)+) => { $crate::__log_at!($writer, Success, $($arg)+) };
}

/// Log a `[-]` line.
#[macro_export]
macro_rules! failed {
    ($writer:expr, $($arg:tt)+) => { $crate::__log_at!($writer, Failed, $($arg)+) };
}

/// Log a `[!]` line.
#[macro_export]
macro_rules! warning {
    ($writer:expr, $($arg:tt)+) => { $crate::__log_at!($writer, Warning, $($arg)+) };
}

/// Log an `[ERR]` line.
#[macro_export]
macro_rules! error {
    ($writer:expr, $($arg:tt)+) => { $crate::__log_at!($writer, Error, $($arg)+) };
}

/// Log an `[INFO]` line.
#[macro_export]
macro_rules! info {
    ($writer:expr, $($arg:tt)+) => { $crate::__log_at!($writer, Info, $($arg)+) };
}
