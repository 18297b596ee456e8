//! Consumer and polling strategy definitions
//!
//! Used by the message polling and consumer offset commands.

use super::codec::PayloadWriter;
use super::identifier::Identifier;
use crate::error::Result;

/// Consumer kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ConsumerKind {
    Consumer = 1,
    ConsumerGroup = 2,
}

/// The party reading messages or tracking offsets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Consumer {
    pub kind: ConsumerKind,
    pub id: Identifier,
}

impl Consumer {
    /// An individual consumer
    pub fn new(id: Identifier) -> Self {
        Self {
            kind: ConsumerKind::Consumer,
            id,
        }
    }

    /// A consumer group
    pub fn group(id: Identifier) -> Self {
        Self {
            kind: ConsumerKind::ConsumerGroup,
            id,
        }
    }

    /// kind (1) + identifier
    pub(crate) fn write_to(&self, writer: &mut PayloadWriter) -> Result<()> {
        writer.put_u8(self.kind as u8).put_identifier(&self.id)?;
        Ok(())
    }
}

/// Polling strategy kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PollingKind {
    Offset = 1,
    Timestamp = 2,
    First = 3,
    Last = 4,
    Next = 5,
}

/// Where a poll starts reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PollingStrategy {
    pub kind: PollingKind,
    pub value: u64,
}

impl PollingStrategy {
    pub fn offset(offset: u64) -> Self {
        Self {
            kind: PollingKind::Offset,
            value: offset,
        }
    }

    /// Timestamp in microseconds since the epoch
    pub fn timestamp(timestamp: u64) -> Self {
        Self {
            kind: PollingKind::Timestamp,
            value: timestamp,
        }
    }

    pub fn first() -> Self {
        Self {
            kind: PollingKind::First,
            value: 0,
        }
    }

    pub fn last() -> Self {
        Self {
            kind: PollingKind::Last,
            value: 0,
        }
    }

    pub fn next() -> Self {
        Self {
            kind: PollingKind::Next,
            value: 0,
        }
    }

    /// kind (1) + value (8)
    pub(crate) fn write_to(&self, writer: &mut PayloadWriter) {
        writer.put_u8(self.kind as u8).put_u64(self.value);
    }
}
