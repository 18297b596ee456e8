//! Protocol Module
//!
//! Encoders, decoders and frame builders for the IGGY binary protocol.
//! Little-endian throughout.
//!
//! ## Request Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │ Len (4)  │ Code (4) │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//! `Len` counts the command code as well: `Len = 4 + payload.len()`.
//!
//! ## Response Format
//! ```text
//! ┌──────────┬──────────┬─────────────────────────────┐
//! │Status(4) │ Len (4)  │         Payload             │
//! └──────────┴──────────┴─────────────────────────────┘
//! ```
//! `Len` is the payload length alone.
//!
//! ## Field Encodings
//! - Identifier:   kind (1) + len (1) + value  (kind 1 = numeric, 2 = string)
//! - Partitioning: kind (1) + len (1) + value  (kind 1 = balanced, 2 = partition id)
//! - Strings:      len (1) + UTF-8 for names/credentials,
//!                 len (4) + UTF-8 for free-form metadata (0 = absent)

mod codec;
mod codes;
mod consumer;
mod frame;
mod identifier;
mod message_batch;

pub use codec::{
    decode_identifier, decode_partitioning, decode_string_u32, decode_string_u8, decode_u32,
    decode_u64, decode_u8, encode_identifier, encode_identifier_numeric,
    encode_identifier_string, encode_partitioning, encode_partitioning_balanced,
    encode_partitioning_partition_id, encode_string_u32, encode_string_u8, encode_u32,
    encode_u64, encode_u8, PayloadReader, PayloadWriter, MAX_STRING_U8_LEN,
};
pub use codes::{CommandCode, Status};
pub use consumer::{Consumer, ConsumerKind, PollingKind, PollingStrategy};
pub use frame::{
    build_request, build_response, decode_request, decode_response, error_response,
    ok_response, read_request, read_response, write_frame, RequestFrame, ResponseFrame,
    HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
pub use identifier::{Identifier, Partitioning};
pub use message_batch::{MessageBatch, INDEX_ENTRY_SIZE};
