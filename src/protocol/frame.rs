//! Frame builder
//!
//! Wraps payloads in request and response headers, and recovers those
//! headers again for verification.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Len (4)  │ Code (4) │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//! Len = payload length + 4. The command code is counted even though it is
//! not part of the payload.
//!
//! ### Response
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(4) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//! Len = payload length, no offset.

use std::io::{Read, Write};

use bytes::{Buf, BufMut};

use crate::error::{Result, WireError};
use super::codes::{CommandCode, Status};

/// Header size for both frame kinds: two u32 fields
pub const HEADER_SIZE: usize = 8;

/// Bytes of the command code counted by the request length field
const COMMAND_CODE_SIZE: u32 = 4;

/// Largest payload the decoders accept (64 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 64 * 1024 * 1024;

// =============================================================================
// Frame Encoding
// =============================================================================

/// Build a request frame
///
/// Format: length (4) + command code (4) + payload, length = payload + 4
pub fn build_request(command_code: u32, payload: &[u8]) -> Result<Vec<u8>> {
    let length = u32::try_from(payload.len())
        .ok()
        .and_then(|len| len.checked_add(COMMAND_CODE_SIZE))
        .ok_or_else(|| {
            WireError::InvalidArgument(format!(
                "request payload of {} bytes exceeds the u32 length field",
                payload.len()
            ))
        })?;

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.put_u32_le(length);
    frame.put_u32_le(command_code);
    frame.put_slice(payload);
    Ok(frame)
}

/// Build a response frame
///
/// Format: status (4) + payload length (4) + payload
pub fn build_response(status: u32, payload: &[u8]) -> Result<Vec<u8>> {
    let length = u32::try_from(payload.len()).map_err(|_| {
        WireError::InvalidArgument(format!(
            "response payload of {} bytes exceeds the u32 length field",
            payload.len()
        ))
    })?;

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.put_u32_le(status);
    frame.put_u32_le(length);
    frame.put_slice(payload);
    Ok(frame)
}

/// Successful response carrying `payload`
pub fn ok_response(payload: &[u8]) -> Result<Vec<u8>> {
    build_response(Status::Ok.code(), payload)
}

/// Error response: non-zero status, empty payload
pub fn error_response(status: u32) -> Result<Vec<u8>> {
    build_response(status, &[])
}

// =============================================================================
// Frame Decoding
// =============================================================================

/// A request frame split into its header fields and raw payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFrame {
    /// Value of the length field (payload length + 4)
    pub length: u32,
    pub command_code: u32,
    pub payload: Vec<u8>,
}

impl RequestFrame {
    /// The command, if the code is a known one
    pub fn command(&self) -> Option<CommandCode> {
        CommandCode::from_code(self.command_code)
    }

    /// Bytes this frame occupies on the wire
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// A response frame split into its header fields and raw payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    pub status: u32,
    pub payload: Vec<u8>,
}

impl ResponseFrame {
    /// The status, if the code is a known one
    pub fn status(&self) -> Option<Status> {
        Status::from_code(self.status)
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok.code()
    }

    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Read the two header words, little-endian
fn split_header(mut header: &[u8]) -> (u32, u32) {
    let first = header.get_u32_le();
    let second = header.get_u32_le();
    (first, second)
}

/// Length of the payload announced by a request length field
fn request_payload_len(length: u32) -> Result<usize> {
    let payload_len = length.checked_sub(COMMAND_CODE_SIZE).ok_or_else(|| {
        WireError::Protocol(format!(
            "Request length {} is smaller than the command code field",
            length
        ))
    })?;
    check_payload_len(payload_len)?;
    Ok(payload_len as usize)
}

fn check_payload_len(payload_len: u32) -> Result<()> {
    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(WireError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }
    Ok(())
}

fn check_header(bytes: &[u8]) -> Result<()> {
    if bytes.len() < HEADER_SIZE {
        return Err(WireError::Protocol(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }
    Ok(())
}

fn slice_payload(bytes: &[u8], payload_len: usize) -> Result<Vec<u8>> {
    let total_len = HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(WireError::Protocol(format!(
            "Incomplete payload: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }
    Ok(bytes[HEADER_SIZE..total_len].to_vec())
}

/// Decode the request frame at the start of `bytes`
///
/// Trailing bytes after the frame are ignored; use `encoded_len` to step to
/// the next frame.
pub fn decode_request(bytes: &[u8]) -> Result<RequestFrame> {
    check_header(bytes)?;
    let (length, command_code) = split_header(&bytes[..HEADER_SIZE]);
    let payload_len = request_payload_len(length)?;
    let payload = slice_payload(bytes, payload_len)?;

    Ok(RequestFrame {
        length,
        command_code,
        payload,
    })
}

/// Decode the response frame at the start of `bytes`
pub fn decode_response(bytes: &[u8]) -> Result<ResponseFrame> {
    check_header(bytes)?;
    let (status, length) = split_header(&bytes[..HEADER_SIZE]);
    check_payload_len(length)?;
    let payload = slice_payload(bytes, length as usize)?;

    Ok(ResponseFrame { status, payload })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

fn read_payload<R: Read>(reader: &mut R, payload_len: usize) -> Result<Vec<u8>> {
    let mut payload = vec![0u8; payload_len];
    if payload_len > 0 {
        reader.read_exact(&mut payload)?;
    }
    Ok(payload)
}

/// Read one complete request frame from a stream
pub fn read_request<R: Read>(reader: &mut R) -> Result<RequestFrame> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let (length, command_code) = split_header(&header);
    let payload_len = request_payload_len(length)?;
    let payload = read_payload(reader, payload_len)?;

    Ok(RequestFrame {
        length,
        command_code,
        payload,
    })
}

/// Read one complete response frame from a stream
pub fn read_response<R: Read>(reader: &mut R) -> Result<ResponseFrame> {
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let (status, length) = split_header(&header);
    check_payload_len(length)?;
    let payload = read_payload(reader, length as usize)?;

    Ok(ResponseFrame { status, payload })
}

/// Write an encoded frame to a stream
pub fn write_frame<W: Write>(writer: &mut W, frame: &[u8]) -> Result<()> {
    writer.write_all(frame)?;
    writer.flush()?;
    Ok(())
}
