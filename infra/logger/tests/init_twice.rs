use freight_logger::{Journal, LevelFilter, Logger, LoggerError};

#[test]
fn second_install_is_a_subscriber_error() {
    let journal = Journal::new();
    let _logger = Logger::builder()
        .name("freight-first")
        .level(LevelFilter::INFO)
        .journal(journal.clone())
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("freight-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }), "{err}");

    // The first subscriber stays in place.
    tracing::warn!("still journaled");
    assert!(journal.entries().iter().any(|entry| entry.message == "still journaled"));
}
