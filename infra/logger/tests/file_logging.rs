use codr_logger::{FileSink, LevelFilter, Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn json_file_sink_writes_events() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("codr-file")
        .console(false)
        .level(LevelFilter::INFO)
        .file(FileSink::new(&log_dir).rotation(Rotation::NEVER).json(true))
        .init()?;
    assert!(logger.writes_files());

    tracing::info!(path = "/", "rendered page");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    let line = contents.lines().find(|l| l.contains("rendered page")).expect("event logged");
    assert!(line.trim_start().starts_with('{'), "json output expected: {line}");
    Ok(())
}
