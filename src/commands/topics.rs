//! Topic commands

use crate::error::Result;
use crate::protocol::{CommandCode, Identifier, PayloadWriter};
use super::request;

/// CREATE_TOPIC (302)
///
/// Payload: stream (identifier) + topic id (u32, 0 = auto) +
/// partitions count (u32) + name (str-u8) + message expiry (u32, 0 = never)
pub fn create_topic(
    stream_id: &Identifier,
    topic_id: u32,
    partitions_count: u32,
    name: &str,
    message_expiry: u32,
) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::with_capacity(stream_id.encoded_len() + 13 + name.len());
    payload
        .put_identifier(stream_id)?
        .put_u32(topic_id)
        .put_u32(partitions_count)
        .put_string_u8(name)?
        .put_u32(message_expiry);
    request(CommandCode::CreateTopic, payload)
}

/// GET_TOPIC (300)
pub fn get_topic(stream_id: &Identifier, topic_id: &Identifier) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::new();
    payload.put_identifier(stream_id)?.put_identifier(topic_id)?;
    request(CommandCode::GetTopic, payload)
}

/// GET_TOPICS (301)
pub fn get_topics(stream_id: &Identifier) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::new();
    payload.put_identifier(stream_id)?;
    request(CommandCode::GetTopics, payload)
}

/// DELETE_TOPIC (303)
pub fn delete_topic(stream_id: &Identifier, topic_id: &Identifier) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::new();
    payload.put_identifier(stream_id)?.put_identifier(topic_id)?;
    request(CommandCode::DeleteTopic, payload)
}
