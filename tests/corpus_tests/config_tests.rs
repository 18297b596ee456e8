//! Tests for Config

use std::path::PathBuf;

use iggy_testgen::{Config, WireError};

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();
    config.validate().unwrap();
    assert_eq!(config.output_path, PathBuf::from("test_messages.bin"));
    assert_eq!(config.username, "testuser");
    assert_eq!(config.message_count, 1);
    assert_eq!(config.message_size, 100);
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .output_path("/tmp/out.bin")
        .username("admin")
        .password("secret")
        .client_version(None)
        .client_context(Some("ctx".to_string()))
        .stream_name("s")
        .topic_name("t")
        .consumer_name("c")
        .group_name("g")
        .partitions_count(8)
        .poll_count(1)
        .message_count(0)
        .message_size(0)
        .stored_offset(7)
        .build();

    config.validate().unwrap();
    assert_eq!(config.output_path, PathBuf::from("/tmp/out.bin"));
    assert_eq!(config.username, "admin");
    assert_eq!(config.client_version, None);
    assert_eq!(config.client_context.as_deref(), Some("ctx"));
    assert_eq!(config.partitions_count, 8);
    assert_eq!(config.stored_offset, 7);
}

#[test]
fn test_validate_rejects_long_names() {
    let config = Config::builder().group_name("g".repeat(256)).build();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, WireError::Config(_)));
    assert!(err.to_string().contains("group_name"));
}

#[test]
fn test_validate_rejects_oversized_batch() {
    let config = Config::builder()
        .message_count(usize::MAX)
        .message_size(2)
        .build();
    assert!(matches!(config.validate(), Err(WireError::Config(_))));

    let config = Config::builder()
        .message_count(2)
        .message_size(u32::MAX as usize)
        .build();
    assert!(matches!(config.validate(), Err(WireError::Config(_))));
}
