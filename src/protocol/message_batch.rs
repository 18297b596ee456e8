//! Message batch encoding
//!
//! Payload layout of the send-messages command:
//!
//! ```text
//! ┌────────────┬──────────────────────────────────────────────┐
//! │ MetaLen(4) │ stream id │ topic id │ partitioning │ cnt(4) │
//! ├────────────┴──────────────────────────────────────────────┤
//! │ index entry × cnt: reserved (8) │ cumulative (4) │ rsv (4) │
//! ├───────────────────────────────────────────────────────────┤
//! │ message data, concatenated                                │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! `MetaLen` covers the metadata block only, not itself. Each index entry's
//! cumulative field is the number of data bytes up to and including its
//! message.

use bytes::Bytes;

use crate::error::{Result, WireError};
use super::codec::PayloadWriter;
use super::identifier::{Identifier, Partitioning};

/// Size of one index entry
pub const INDEX_ENTRY_SIZE: usize = 16;

/// Messages bound for one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBatch {
    pub stream_id: Identifier,
    pub topic_id: Identifier,
    pub partitioning: Partitioning,
    pub messages: Vec<Bytes>,
}

impl MessageBatch {
    pub fn new(stream_id: Identifier, topic_id: Identifier, partitioning: Partitioning) -> Self {
        Self {
            stream_id,
            topic_id,
            partitioning,
            messages: Vec::new(),
        }
    }

    /// Append a message
    pub fn with_message(mut self, message: impl Into<Bytes>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// Total bytes of message data
    pub fn data_len(&self) -> usize {
        self.messages.iter().map(Bytes::len).sum()
    }

    /// Byte length of the metadata block, excluding its own length prefix
    pub fn metadata_len(&self) -> usize {
        self.stream_id.encoded_len()
            + self.topic_id.encoded_len()
            + self.partitioning.encoded_len()
            + 4
    }

    /// Running sums of message lengths, one per message
    pub fn cumulative_sizes(&self) -> Result<Vec<u32>> {
        let mut total: u32 = 0;
        self.messages
            .iter()
            .map(|message| -> Result<u32> {
                let len = u32::try_from(message.len()).ok();
                total = len.and_then(|len| total.checked_add(len)).ok_or_else(|| {
                    WireError::InvalidArgument(format!(
                        "message data exceeds {} bytes",
                        u32::MAX
                    ))
                })?;
                Ok(total)
            })
            .collect()
    }

    /// Append the full send-messages payload to `writer`
    pub fn write_to(&self, writer: &mut PayloadWriter) -> Result<()> {
        let count = u32::try_from(self.messages.len()).map_err(|_| {
            WireError::InvalidArgument(format!(
                "message count {} exceeds {}",
                self.messages.len(),
                u32::MAX
            ))
        })?;
        let cumulative = self.cumulative_sizes()?;

        let mut metadata = PayloadWriter::with_capacity(self.metadata_len());
        metadata
            .put_identifier(&self.stream_id)?
            .put_identifier(&self.topic_id)?
            .put_partitioning(&self.partitioning)
            .put_u32(count);

        // metadata length always fits: identifiers are capped at 257 bytes
        writer.put_u32(metadata.len() as u32).put_slice(metadata.as_slice());

        for size in cumulative {
            writer.put_u64(0).put_u32(size).put_u32(0);
        }
        for message in &self.messages {
            writer.put_slice(message);
        }
        Ok(())
    }

    /// Encode the send-messages payload on its own
    pub fn encode(&self) -> Result<Vec<u8>> {
        let capacity = 4
            + self.metadata_len()
            + INDEX_ENTRY_SIZE * self.messages.len()
            + self.data_len();
        let mut payload = PayloadWriter::with_capacity(capacity);
        self.write_to(&mut payload)?;
        Ok(payload.into_vec())
    }
}
