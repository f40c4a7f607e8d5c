//! Basic console and file logging.
//!
//! Writes to `<executable dir>/logs/current.log` and to stdout using the
//! global writer.

fn main() {
    let log = rotalog::logger();

    log.run("starting up");
    log.info("This is an info message");
    log.success("This worked");
    log.failed("This did not");
    log.warning("This is a warning message");
    log.error("This is an error message");
    rotalog::info!(log, "formatted: {} + {} = {}", 1, 2, 1 + 2);

    rotalog::shutdown();
}
