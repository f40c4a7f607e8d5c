//! The fallback channel for problems inside the logger itself.
//!
//! Failures that do not abort the process (unresolvable caller location, a
//! log line that could not be written) are emitted as `tracing` events on the
//! [`TARGET`] target. Applications that already install a subscriber receive
//! them there; others can call [`init`] to print them on stderr.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Error, Result};

/// Target of every diagnostic event emitted by this crate.
pub const TARGET: &str = "rotalog::diagnostic";

/// Install a stderr subscriber for diagnostics at `level` ("warn" if empty).
///
/// `RUST_LOG`, when set and non-empty, takes precedence over `level`.
pub fn init(level: &str) -> Result<()> {
    let env_filter = build_filter(&effective_filter_spec(level))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))?;

    Ok(())
}

fn build_filter(spec: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(spec).map_err(|e| Error::Init(format!("invalid filter {:?}: {}", spec, e)))
}

/// Determine the filter spec, considering `RUST_LOG` first.
fn effective_filter_spec(level: &str) -> String {
    if let Ok(rust_log) = std::env::var("RUST_LOG")
        && !rust_log.is_empty()
    {
        return rust_log;
    }

    if level.is_empty() {
        "warn".to_string()
    } else {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases share one test because they mutate the process environment.
    #[test]
    fn test_effective_filter_spec() {
        let prev = std::env::var_os("RUST_LOG");

        unsafe {
            std::env::set_var("RUST_LOG", "");
        }
        assert_eq!(effective_filter_spec(""), "warn");
        assert_eq!(effective_filter_spec("debug"), "debug");

        unsafe {
            std::env::set_var("RUST_LOG", "trace");
        }
        assert_eq!(effective_filter_spec("info"), "trace");

        unsafe {
            match prev {
                Some(v) => std::env::set_var("RUST_LOG", v),
                None => std::env::remove_var("RUST_LOG"),
            }
        }
    }

    #[test]
    fn test_build_filter() {
        assert!(build_filter("warn").is_ok());
        assert!(build_filter("rotalog::diagnostic=debug").is_ok());
        assert!(matches!(
            build_filter("rotalog=notalevel"),
            Err(Error::Init(_))
        ));
    }

    #[test]
    fn test_init_only_once() {
        let _ = init("warn");
        // the global subscriber is set by now, whatever the first call returned
        assert!(matches!(init("warn"), Err(Error::Init(_))));
    }
}
