use codr_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_writer() {
    let logger = Logger::builder()
        .name("codr-console-only")
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    tracing::info!("console only");
    assert!(!logger.writes_files());
}
