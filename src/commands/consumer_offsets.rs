//! Consumer offset commands

use crate::error::Result;
use crate::protocol::{CommandCode, Consumer, Identifier, PayloadWriter};
use super::request;

/// Fields shared by both offset commands
fn offset_target(
    consumer: &Consumer,
    stream_id: &Identifier,
    topic_id: &Identifier,
    partition_id: u32,
) -> Result<PayloadWriter> {
    let mut payload = PayloadWriter::new();
    consumer.write_to(&mut payload)?;
    payload
        .put_identifier(stream_id)?
        .put_identifier(topic_id)?
        .put_u32(partition_id);
    Ok(payload)
}

/// STORE_CONSUMER_OFFSET (121)
///
/// Payload: consumer + stream + topic + partition id (u32) + offset (u64)
pub fn store_consumer_offset(
    consumer: &Consumer,
    stream_id: &Identifier,
    topic_id: &Identifier,
    partition_id: u32,
    offset: u64,
) -> Result<Vec<u8>> {
    let mut payload = offset_target(consumer, stream_id, topic_id, partition_id)?;
    payload.put_u64(offset);
    request(CommandCode::StoreConsumerOffset, payload)
}

/// GET_CONSUMER_OFFSET (120)
///
/// Payload: consumer + stream + topic + partition id (u32)
pub fn get_consumer_offset(
    consumer: &Consumer,
    stream_id: &Identifier,
    topic_id: &Identifier,
    partition_id: u32,
) -> Result<Vec<u8>> {
    let payload = offset_target(consumer, stream_id, topic_id, partition_id)?;
    request(CommandCode::GetConsumerOffset, payload)
}
