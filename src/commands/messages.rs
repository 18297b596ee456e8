//! Message commands

use crate::error::Result;
use crate::protocol::{
    CommandCode, Consumer, Identifier, MessageBatch, PayloadWriter, PollingStrategy,
};
use super::request;

/// POLL_MESSAGES (100)
///
/// Payload: consumer kind (u8) + consumer id + stream + topic +
/// partition id (u32) + strategy kind (u8) + strategy value (u64) +
/// count (u32) + auto commit (u8)
pub fn poll_messages(
    consumer: &Consumer,
    stream_id: &Identifier,
    topic_id: &Identifier,
    partition_id: u32,
    strategy: &PollingStrategy,
    count: u32,
    auto_commit: bool,
) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::new();
    consumer.write_to(&mut payload)?;
    payload
        .put_identifier(stream_id)?
        .put_identifier(topic_id)?
        .put_u32(partition_id);
    strategy.write_to(&mut payload);
    payload.put_u32(count).put_bool(auto_commit);
    request(CommandCode::PollMessages, payload)
}

/// SEND_MESSAGES (101)
///
/// Payload layout is documented on `MessageBatch`.
pub fn send_messages(batch: &MessageBatch) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::new();
    batch.write_to(&mut payload)?;
    request(CommandCode::SendMessages, payload)
}
