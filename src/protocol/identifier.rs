//! Identifier and partitioning definitions
//!
//! Tagged values shared by most command payloads.

use std::fmt;

use crate::error::{Result, WireError};
use super::codec::{
    string_u8_len, IDENTIFIER_KIND_NUMERIC, IDENTIFIER_KIND_STRING,
    PARTITIONING_KIND_BALANCED, PARTITIONING_KIND_PARTITION_ID,
};

/// Reference to a stream, topic, consumer or consumer group
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Numeric id, always encoded with a 4-byte value
    Numeric(u32),

    /// Name, at most 255 UTF-8 bytes
    String(String),
}

impl Identifier {
    pub fn numeric(id: u32) -> Self {
        Identifier::Numeric(id)
    }

    /// Create a string identifier, rejecting names longer than 255 bytes
    pub fn named(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        string_u8_len("identifier", &name)?;
        Ok(Identifier::String(name))
    }

    /// Kind tag written ahead of the value
    pub fn kind(&self) -> u8 {
        match self {
            Identifier::Numeric(_) => IDENTIFIER_KIND_NUMERIC,
            Identifier::String(_) => IDENTIFIER_KIND_STRING,
        }
    }

    /// Encoded size: kind + length + value
    pub fn encoded_len(&self) -> usize {
        match self {
            Identifier::Numeric(_) => 2 + 4,
            Identifier::String(name) => 2 + name.len(),
        }
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Numeric(id)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(id) => write!(f, "{}", id),
            Identifier::String(name) => write!(f, "{}", name),
        }
    }
}

/// Partition selection for a message batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Partitioning {
    /// Server picks the partition
    #[default]
    Balanced,

    /// Explicit partition
    PartitionId(u32),
}

impl Partitioning {
    pub fn balanced() -> Self {
        Partitioning::Balanced
    }

    /// Explicit partition id; ids wider than 32 bits are rejected
    pub fn partition_id(id: u64) -> Result<Self> {
        u32::try_from(id).map(Partitioning::PartitionId).map_err(|_| {
            WireError::InvalidArgument(format!(
                "partition id {} does not fit in 32 bits",
                id
            ))
        })
    }

    pub fn kind(&self) -> u8 {
        match self {
            Partitioning::Balanced => PARTITIONING_KIND_BALANCED,
            Partitioning::PartitionId(_) => PARTITIONING_KIND_PARTITION_ID,
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Partitioning::Balanced => 2,
            Partitioning::PartitionId(_) => 2 + 4,
        }
    }
}
