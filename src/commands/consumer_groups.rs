//! Consumer group commands

use crate::error::Result;
use crate::protocol::{CommandCode, Identifier, PayloadWriter};
use super::request;

fn stream_and_topic(stream_id: &Identifier, topic_id: &Identifier) -> Result<PayloadWriter> {
    let mut payload = PayloadWriter::new();
    payload.put_identifier(stream_id)?.put_identifier(topic_id)?;
    Ok(payload)
}

/// CREATE_CONSUMER_GROUP (602)
///
/// Payload: stream + topic + group id (u32) + name (str-u8)
pub fn create_consumer_group(
    stream_id: &Identifier,
    topic_id: &Identifier,
    group_id: u32,
    name: &str,
) -> Result<Vec<u8>> {
    let mut payload = stream_and_topic(stream_id, topic_id)?;
    payload.put_u32(group_id).put_string_u8(name)?;
    request(CommandCode::CreateConsumerGroup, payload)
}

/// GET_CONSUMER_GROUP (600)
pub fn get_consumer_group(
    stream_id: &Identifier,
    topic_id: &Identifier,
    group_id: &Identifier,
) -> Result<Vec<u8>> {
    let mut payload = stream_and_topic(stream_id, topic_id)?;
    payload.put_identifier(group_id)?;
    request(CommandCode::GetConsumerGroup, payload)
}

/// GET_CONSUMER_GROUPS (601)
pub fn get_consumer_groups(stream_id: &Identifier, topic_id: &Identifier) -> Result<Vec<u8>> {
    let payload = stream_and_topic(stream_id, topic_id)?;
    request(CommandCode::GetConsumerGroups, payload)
}

/// DELETE_CONSUMER_GROUP (603)
pub fn delete_consumer_group(
    stream_id: &Identifier,
    topic_id: &Identifier,
    group_id: &Identifier,
) -> Result<Vec<u8>> {
    let mut payload = stream_and_topic(stream_id, topic_id)?;
    payload.put_identifier(group_id)?;
    request(CommandCode::DeleteConsumerGroup, payload)
}
