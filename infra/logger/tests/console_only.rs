use suite_logger::{LevelFilter, Logger};

#[test]
fn init_console_logger_keeps_name() {
    let logger = Logger::builder()
        .name("integration-console-only")
        .level(LevelFilter::INFO)
        .ansi(false)
        .init()
        .expect("logger should initialize");

    tracing::info!("console logging goes to stderr");
    assert_eq!(logger.name(), "integration-console-only");
}
