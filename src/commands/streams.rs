//! Stream commands

use crate::error::Result;
use crate::protocol::{CommandCode, Identifier, PayloadWriter};
use super::{empty_request, request};

/// CREATE_STREAM (202)
///
/// Payload: stream id (u32, 0 lets the server assign one) + name (str-u8)
pub fn create_stream(stream_id: u32, name: &str) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::with_capacity(5 + name.len());
    payload.put_u32(stream_id).put_string_u8(name)?;
    request(CommandCode::CreateStream, payload)
}

/// GET_STREAM (200)
pub fn get_stream(stream_id: &Identifier) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::with_capacity(stream_id.encoded_len());
    payload.put_identifier(stream_id)?;
    request(CommandCode::GetStream, payload)
}

/// GET_STREAMS (201)
pub fn get_streams() -> Result<Vec<u8>> {
    empty_request(CommandCode::GetStreams)
}

/// DELETE_STREAM (203)
pub fn delete_stream(stream_id: &Identifier) -> Result<Vec<u8>> {
    let mut payload = PayloadWriter::with_capacity(stream_id.encoded_len());
    payload.put_identifier(stream_id)?;
    request(CommandCode::DeleteStream, payload)
}
