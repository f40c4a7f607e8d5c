//! Backup rotation: a full log file is copied to `<timestamp>.log` on startup.

use rotalog::{FileLogConfig, LocationMode, LogConfig, LogWriter, RotationPolicy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempfile::tempdir()?;
    let log_path = temp_dir.path().join("current.log");
    std::fs::write(&log_path, "x".repeat(2048))?;

    let config = LogConfig::new()
        .with_location(LocationMode::Relative)
        .with_file(
            FileLogConfig::new(&log_path)
                .with_max_size(1024)
                .with_rotation(RotationPolicy::Backup),
        );
    let log = LogWriter::new(config)?;

    for i in 0..10 {
        log.info(format!("Log message number {}", i));
    }

    for entry in std::fs::read_dir(temp_dir.path())? {
        let entry = entry?;
        println!("{} ({} bytes)", entry.path().display(), entry.metadata()?.len());
    }

    Ok(())
}
