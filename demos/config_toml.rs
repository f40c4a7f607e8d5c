//! Loading the configuration from TOML, with a single progress line redrawn in place.

use rotalog::{LogConfig, LogWriter};

const CONFIG: &str = r#"
full_line = false
location = "none"

[file]
path = "logs/current.log"
directory = "logs"
max_size = "1M"
rotation = "truncate"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    rotalog::diagnostics::init("warn")?;

    let config: LogConfig = toml::from_str(CONFIG)?;
    let log = LogWriter::new(config)?;

    for step in 1..=5 {
        log.run(format!("step {}/5", step));
        std::thread::sleep(std::time::Duration::from_millis(300));
    }
    log.success("all steps finished");
    println!();

    Ok(())
}
