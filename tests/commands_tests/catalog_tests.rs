//! Catalog Tests
//!
//! Expected frames were captured from the reference fixture generator.

use bytes::Bytes;
use iggy_testgen::commands;
use iggy_testgen::protocol::{
    decode_request, CommandCode, Consumer, Identifier, MessageBatch, Partitioning,
    PayloadReader, PollingStrategy,
};
use iggy_testgen::WireError;

use crate::from_hex;

// =============================================================================
// Helper Functions
// =============================================================================

fn stream() -> Identifier {
    Identifier::numeric(1)
}

fn topic() -> Identifier {
    Identifier::numeric(1)
}

fn test_consumer() -> Consumer {
    Consumer::new(Identifier::named("test_consumer").unwrap())
}

/// Check the header and return the payload
fn payload_of(frame: &[u8], command: CommandCode) -> Vec<u8> {
    let decoded = decode_request(frame).unwrap();
    assert_eq!(decoded.command(), Some(command));
    assert_eq!(decoded.length as usize, decoded.payload.len() + 4);
    assert_eq!(decoded.encoded_len(), frame.len());
    decoded.payload
}

// =============================================================================
// Empty-Payload Commands
// =============================================================================

#[test]
fn test_ping() {
    assert_eq!(commands::ping().unwrap(), from_hex("0400000001000000"));
}

#[test]
fn test_logout_user() {
    assert_eq!(commands::logout_user().unwrap(), from_hex("0400000027000000"));
}

#[test]
fn test_get_streams() {
    assert_eq!(commands::get_streams().unwrap(), from_hex("04000000c9000000"));
}

#[test]
fn test_get_stats() {
    assert_eq!(commands::get_stats().unwrap(), from_hex("040000000a000000"));
}

// =============================================================================
// Users
// =============================================================================

#[test]
fn test_login_user() {
    let frame = commands::login_user(
        "testuser",
        "testpass123",
        Some("dissector-test-v1.0"),
        Some("wireshark-testing"),
    )
    .unwrap();

    assert_eq!(
        frame,
        from_hex(concat!(
            "4500000026000000",
            "087465737475736572",
            "0b7465737470617373313233",
            "13000000646973736563746f722d746573742d76312e30",
            "1100000077697265736861726b2d74657374696e67",
        ))
    );
}

#[test]
fn test_login_user_without_metadata() {
    let frame = commands::login_user("u", "p", None, Some("")).unwrap();
    let payload = payload_of(&frame, CommandCode::LoginUser);
    assert_eq!(
        payload,
        vec![0x01, b'u', 0x01, b'p', 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn test_login_user_long_username() {
    let username = "u".repeat(256);
    let result = commands::login_user(&username, "pass", None, None);
    assert!(matches!(result, Err(WireError::Encoding(_))));
}

// =============================================================================
// Streams
// =============================================================================

#[test]
fn test_create_stream() {
    let frame = commands::create_stream(0, "test_stream").unwrap();
    assert_eq!(
        frame,
        from_hex("14000000ca000000000000000b746573745f73747265616d")
    );
}

#[test]
fn test_create_stream_name_boundary() {
    assert!(commands::create_stream(7, &"s".repeat(255)).is_ok());
    assert!(matches!(
        commands::create_stream(7, &"s".repeat(256)),
        Err(WireError::Encoding(_))
    ));
}

#[test]
fn test_get_stream() {
    let frame = commands::get_stream(&stream()).unwrap();
    assert_eq!(frame, from_hex("0a000000c8000000010401000000"));
}

#[test]
fn test_delete_stream() {
    let frame = commands::delete_stream(&Identifier::named("test_stream").unwrap()).unwrap();
    assert_eq!(
        frame,
        from_hex("11000000cb000000020b746573745f73747265616d")
    );
}

#[test]
fn test_stream_builder_rejects_unchecked_identifier() {
    let identifier = Identifier::String("x".repeat(256));
    assert!(matches!(
        commands::get_stream(&identifier),
        Err(WireError::Encoding(_))
    ));
}

// =============================================================================
// Topics
// =============================================================================

#[test]
fn test_create_topic() {
    let frame = commands::create_topic(&stream(), 0, 3, "test_topic", 0).unwrap();
    assert_eq!(
        frame,
        from_hex("210000002e01000001040100000000000000030000000a746573745f746f70696300000000")
    );
}

#[test]
fn test_get_topic() {
    let frame = commands::get_topic(&stream(), &topic()).unwrap();
    assert_eq!(
        frame,
        from_hex("100000002c010000010401000000010401000000")
    );
}

#[test]
fn test_get_topics() {
    let frame = commands::get_topics(&Identifier::named("s").unwrap()).unwrap();
    let payload = payload_of(&frame, CommandCode::GetTopics);
    assert_eq!(payload, vec![0x02, 0x01, b's']);
}

#[test]
fn test_delete_topic() {
    let frame = commands::delete_topic(&stream(), &Identifier::named("t").unwrap()).unwrap();
    let payload = payload_of(&frame, CommandCode::DeleteTopic);
    assert_eq!(payload, vec![0x01, 0x04, 0x01, 0x00, 0x00, 0x00, 0x02, 0x01, b't']);
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn test_poll_messages() {
    let frame = commands::poll_messages(
        &test_consumer(),
        &stream(),
        &topic(),
        1,
        &PollingStrategy::first(),
        10,
        true,
    )
    .unwrap();

    assert_eq!(
        frame,
        from_hex(concat!(
            "3200000064000000",
            "01020d746573745f636f6e73756d6572",
            "010401000000",
            "010401000000",
            "01000000",
            "03",
            "0000000000000000",
            "0a000000",
            "01",
        ))
    );
}

#[test]
fn test_poll_messages_field_order() {
    let frame = commands::poll_messages(
        &Consumer::group(Identifier::numeric(4)),
        &Identifier::named("orders").unwrap(),
        &topic(),
        2,
        &PollingStrategy::offset(500),
        25,
        false,
    )
    .unwrap();
    let payload = payload_of(&frame, CommandCode::PollMessages);

    let mut reader = PayloadReader::new(&payload);
    assert_eq!(reader.get_u8().unwrap(), 2);
    assert_eq!(reader.get_identifier().unwrap(), Identifier::numeric(4));
    assert_eq!(
        reader.get_identifier().unwrap(),
        Identifier::String("orders".to_string())
    );
    assert_eq!(reader.get_identifier().unwrap(), topic());
    assert_eq!(reader.get_u32().unwrap(), 2);
    assert_eq!(reader.get_u8().unwrap(), 1);
    assert_eq!(reader.get_u64().unwrap(), 500);
    assert_eq!(reader.get_u32().unwrap(), 25);
    assert!(!reader.get_bool().unwrap());
    reader.finish().unwrap();
}

#[test]
fn test_send_messages() {
    let batch = MessageBatch::new(stream(), topic(), Partitioning::Balanced)
        .with_message(vec![b'X'; 100]);
    let frame = commands::send_messages(&batch).unwrap();

    let mut expected = from_hex(concat!(
        "8e00000065000000",
        "12000000",
        "010401000000",
        "010401000000",
        "0100",
        "01000000",
        "0000000000000000",
        "64000000",
        "00000000",
    ));
    expected.extend_from_slice(&[b'X'; 100]);

    assert_eq!(frame.len(), 146);
    assert_eq!(frame, expected);
}

#[test]
fn test_send_messages_empty_batch() {
    let batch = MessageBatch::new(stream(), topic(), Partitioning::PartitionId(2));
    let frame = commands::send_messages(&batch).unwrap();
    let payload = payload_of(&frame, CommandCode::SendMessages);

    // metadata length + metadata, nothing else
    assert_eq!(payload.len(), 4 + 22);
    assert_eq!(&payload[..4], &22u32.to_le_bytes());
    assert_eq!(&payload[22..26], &0u32.to_le_bytes());
}

#[test]
fn test_send_messages_multiple() {
    let batch = MessageBatch::new(stream(), topic(), Partitioning::Balanced)
        .with_message(Bytes::from_static(b"abc"))
        .with_message(Bytes::from_static(b"defgh"));
    let frame = commands::send_messages(&batch).unwrap();
    let payload = payload_of(&frame, CommandCode::SendMessages);

    assert_eq!(payload.len(), 4 + 18 + 2 * 16 + 8);
    assert_eq!(&payload[payload.len() - 8..], b"abcdefgh");
}

// =============================================================================
// Consumer Offsets
// =============================================================================

#[test]
fn test_store_consumer_offset() {
    let frame =
        commands::store_consumer_offset(&test_consumer(), &stream(), &topic(), 1, 12345).unwrap();
    assert_eq!(
        frame,
        from_hex(concat!(
            "2c00000079000000",
            "01020d746573745f636f6e73756d6572",
            "010401000000",
            "010401000000",
            "01000000",
            "3930000000000000",
        ))
    );
}

#[test]
fn test_get_consumer_offset() {
    let frame = commands::get_consumer_offset(&test_consumer(), &stream(), &topic(), 1).unwrap();
    assert_eq!(
        frame,
        from_hex(concat!(
            "2400000078000000",
            "01020d746573745f636f6e73756d6572",
            "010401000000",
            "010401000000",
            "01000000",
        ))
    );
}

#[test]
fn test_offset_commands_share_prefix() {
    let store =
        commands::store_consumer_offset(&test_consumer(), &stream(), &topic(), 9, 0).unwrap();
    let get = commands::get_consumer_offset(&test_consumer(), &stream(), &topic(), 9).unwrap();
    let store_payload = payload_of(&store, CommandCode::StoreConsumerOffset);
    let get_payload = payload_of(&get, CommandCode::GetConsumerOffset);

    assert_eq!(store_payload.len(), get_payload.len() + 8);
    assert_eq!(&store_payload[..get_payload.len()], get_payload.as_slice());
}

// =============================================================================
// Consumer Groups
// =============================================================================

#[test]
fn test_create_consumer_group() {
    let frame = commands::create_consumer_group(&stream(), &topic(), 1, "test_group").unwrap();
    assert_eq!(
        frame,
        from_hex("1f0000005a020000010401000000010401000000010000000a746573745f67726f7570")
    );
}

#[test]
fn test_get_consumer_group() {
    let frame =
        commands::get_consumer_group(&stream(), &topic(), &Identifier::numeric(1)).unwrap();
    assert_eq!(
        frame,
        from_hex("1600000058020000010401000000010401000000010401000000")
    );
}

#[test]
fn test_get_consumer_groups() {
    let frame = commands::get_consumer_groups(&stream(), &topic()).unwrap();
    assert_eq!(
        frame,
        from_hex("1000000059020000010401000000010401000000")
    );
}

#[test]
fn test_delete_consumer_group() {
    let group = Identifier::named("g").unwrap();
    let frame = commands::delete_consumer_group(&stream(), &topic(), &group).unwrap();
    let payload = payload_of(&frame, CommandCode::DeleteConsumerGroup);
    assert_eq!(&payload[12..], &[0x02, 0x01, b'g']);
}

#[test]
fn test_create_consumer_group_long_name() {
    let result = commands::create_consumer_group(&stream(), &topic(), 1, &"g".repeat(300));
    assert!(matches!(result, Err(WireError::Encoding(_))));
}

// =============================================================================
// Properties
// =============================================================================

/// One frame per catalog command, built with fixed arguments
fn every_command() -> Vec<(CommandCode, Vec<u8>)> {
    let consumer = test_consumer();
    let named = Identifier::named("name").unwrap();
    let batch = MessageBatch::new(stream(), named.clone(), Partitioning::PartitionId(1))
        .with_message(Bytes::from_static(b"payload"));

    vec![
        (CommandCode::Ping, commands::ping().unwrap()),
        (CommandCode::GetStats, commands::get_stats().unwrap()),
        (
            CommandCode::LoginUser,
            commands::login_user("a", "b", Some("c"), None).unwrap(),
        ),
        (CommandCode::LogoutUser, commands::logout_user().unwrap()),
        (
            CommandCode::PollMessages,
            commands::poll_messages(&consumer, &stream(), &named, 0, &PollingStrategy::last(), 0, false)
                .unwrap(),
        ),
        (CommandCode::SendMessages, commands::send_messages(&batch).unwrap()),
        (
            CommandCode::GetConsumerOffset,
            commands::get_consumer_offset(&consumer, &stream(), &topic(), 0).unwrap(),
        ),
        (
            CommandCode::StoreConsumerOffset,
            commands::store_consumer_offset(&consumer, &stream(), &topic(), 0, u64::MAX).unwrap(),
        ),
        (CommandCode::GetStream, commands::get_stream(&named).unwrap()),
        (CommandCode::GetStreams, commands::get_streams().unwrap()),
        (CommandCode::CreateStream, commands::create_stream(0, "").unwrap()),
        (CommandCode::DeleteStream, commands::delete_stream(&stream()).unwrap()),
        (CommandCode::GetTopic, commands::get_topic(&stream(), &named).unwrap()),
        (CommandCode::GetTopics, commands::get_topics(&stream()).unwrap()),
        (
            CommandCode::CreateTopic,
            commands::create_topic(&named, 0, 0, "", 0).unwrap(),
        ),
        (CommandCode::DeleteTopic, commands::delete_topic(&stream(), &topic()).unwrap()),
        (
            CommandCode::GetConsumerGroup,
            commands::get_consumer_group(&stream(), &topic(), &named).unwrap(),
        ),
        (
            CommandCode::GetConsumerGroups,
            commands::get_consumer_groups(&stream(), &topic()).unwrap(),
        ),
        (
            CommandCode::CreateConsumerGroup,
            commands::create_consumer_group(&stream(), &topic(), 0, "").unwrap(),
        ),
        (
            CommandCode::DeleteConsumerGroup,
            commands::delete_consumer_group(&stream(), &topic(), &named).unwrap(),
        ),
    ]
}

#[test]
fn test_every_command_header_round_trip() {
    let frames = every_command();
    assert_eq!(frames.len(), CommandCode::ALL.len());

    for (command, frame) in frames {
        let decoded = decode_request(&frame).unwrap();
        assert_eq!(decoded.command_code, command.code(), "{}", command);
        assert_eq!(decoded.length as usize, decoded.payload.len() + 4, "{}", command);
        assert_eq!(frame.len(), 8 + decoded.payload.len(), "{}", command);
    }
}

#[test]
fn test_builders_are_idempotent() {
    assert_eq!(every_command(), every_command());
}
