//! Primitive codec
//!
//! Field-level encoding and decoding for the IGGY protocol. Every width, tag
//! and byte order used by the command catalog is defined here and nowhere
//! else.
//!
//! ## Primitive Layouts
//! ```text
//! u8 / u32 / u64          little-endian, fixed width
//! string (u8 prefix)      [len: u8][UTF-8 bytes]          len <= 255
//! string (u32 prefix)     [len: u32][UTF-8 bytes]         len == 0 means absent
//! identifier (numeric)    [kind=1][len=4][value: u32]
//! identifier (string)     [kind=2][len: u8][UTF-8 bytes]
//! partitioning (balanced) [kind=1][len=0]
//! partitioning (id)       [kind=2][len=4][value: u32]
//! ```

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{Result, WireError};
use super::identifier::{Identifier, Partitioning};

/// Longest string addressable by a u8 length prefix
pub const MAX_STRING_U8_LEN: usize = u8::MAX as usize;

// =============================================================================
// Wire Tags
// =============================================================================

pub(crate) const IDENTIFIER_KIND_NUMERIC: u8 = 1;
pub(crate) const IDENTIFIER_KIND_STRING: u8 = 2;

/// Length byte carried by numeric identifiers and partition ids
pub(crate) const U32_VALUE_LEN: u8 = 4;

pub(crate) const PARTITIONING_KIND_BALANCED: u8 = 1;
pub(crate) const PARTITIONING_KIND_PARTITION_ID: u8 = 2;

/// Validate that `text` fits a u8 length prefix and return that prefix
pub(crate) fn string_u8_len(field: &str, text: &str) -> Result<u8> {
    u8::try_from(text.len()).map_err(|_| {
        WireError::Encoding(format!(
            "{} is {} bytes, exceeds maximum of {}",
            field,
            text.len(),
            MAX_STRING_U8_LEN
        ))
    })
}

// =============================================================================
// PayloadWriter
// =============================================================================

/// Append-only payload buffer
///
/// Fields are written in call order; there is no way to seek back, so a
/// payload's field order is exactly the order of the `put_*` calls.
#[derive(Debug, Default, Clone)]
pub struct PayloadWriter {
    buf: BytesMut,
}

impl PayloadWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buf.put_u8(value);
        self
    }

    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.buf.put_u32_le(value);
        self
    }

    pub fn put_u64(&mut self, value: u64) -> &mut Self {
        self.buf.put_u64_le(value);
        self
    }

    /// Booleans travel as a single byte, 1 for true
    pub fn put_bool(&mut self, value: bool) -> &mut Self {
        self.put_u8(u8::from(value))
    }

    pub fn put_slice(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.put_slice(bytes);
        self
    }

    /// Write a string with a 1-byte length prefix
    ///
    /// Fails with `WireError::Encoding` if the text is longer than 255 bytes.
    pub fn put_string_u8(&mut self, text: &str) -> Result<&mut Self> {
        let len = string_u8_len("string", text)?;
        self.buf.put_u8(len);
        self.buf.put_slice(text.as_bytes());
        Ok(self)
    }

    /// Write a string with a 4-byte length prefix
    ///
    /// `None` and `Some("")` both encode as a zero prefix with nothing after it.
    pub fn put_string_u32(&mut self, text: Option<&str>) -> Result<&mut Self> {
        let text = text.unwrap_or_default();
        let len = u32::try_from(text.len()).map_err(|_| {
            WireError::Encoding(format!(
                "string is {} bytes, exceeds maximum of {}",
                text.len(),
                u32::MAX
            ))
        })?;
        self.buf.put_u32_le(len);
        self.buf.put_slice(text.as_bytes());
        Ok(self)
    }

    pub fn put_identifier(&mut self, identifier: &Identifier) -> Result<&mut Self> {
        match identifier {
            Identifier::Numeric(id) => {
                self.buf.put_u8(IDENTIFIER_KIND_NUMERIC);
                self.buf.put_u8(U32_VALUE_LEN);
                self.buf.put_u32_le(*id);
            }
            Identifier::String(name) => {
                let len = string_u8_len("identifier", name)?;
                self.buf.put_u8(IDENTIFIER_KIND_STRING);
                self.buf.put_u8(len);
                self.buf.put_slice(name.as_bytes());
            }
        }
        Ok(self)
    }

    pub fn put_partitioning(&mut self, partitioning: &Partitioning) -> &mut Self {
        match partitioning {
            Partitioning::Balanced => {
                self.buf.put_u8(PARTITIONING_KIND_BALANCED);
                self.buf.put_u8(0);
            }
            Partitioning::PartitionId(id) => {
                self.buf.put_u8(PARTITIONING_KIND_PARTITION_ID);
                self.buf.put_u8(U32_VALUE_LEN);
                self.buf.put_u32_le(*id);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.buf.to_vec()
    }
}

// =============================================================================
// Free-standing Encoders
// =============================================================================

pub fn encode_u8(value: u8) -> Vec<u8> {
    vec![value]
}

pub fn encode_u32(value: u32) -> Vec<u8> {
    let mut writer = PayloadWriter::with_capacity(4);
    writer.put_u32(value);
    writer.into_vec()
}

pub fn encode_u64(value: u64) -> Vec<u8> {
    let mut writer = PayloadWriter::with_capacity(8);
    writer.put_u64(value);
    writer.into_vec()
}

pub fn encode_string_u8(text: &str) -> Result<Vec<u8>> {
    let mut writer = PayloadWriter::with_capacity(1 + text.len());
    writer.put_string_u8(text)?;
    Ok(writer.into_vec())
}

pub fn encode_string_u32(text: Option<&str>) -> Result<Vec<u8>> {
    let mut writer = PayloadWriter::with_capacity(4 + text.map_or(0, str::len));
    writer.put_string_u32(text)?;
    Ok(writer.into_vec())
}

pub fn encode_identifier(identifier: &Identifier) -> Result<Vec<u8>> {
    let mut writer = PayloadWriter::with_capacity(identifier.encoded_len());
    writer.put_identifier(identifier)?;
    Ok(writer.into_vec())
}

pub fn encode_identifier_numeric(id: u32) -> Vec<u8> {
    let mut writer = PayloadWriter::with_capacity(6);
    writer.put_u8(IDENTIFIER_KIND_NUMERIC).put_u8(U32_VALUE_LEN).put_u32(id);
    writer.into_vec()
}

pub fn encode_identifier_string(name: &str) -> Result<Vec<u8>> {
    encode_identifier(&Identifier::String(name.to_string()))
}

pub fn encode_partitioning(partitioning: &Partitioning) -> Vec<u8> {
    let mut writer = PayloadWriter::with_capacity(partitioning.encoded_len());
    writer.put_partitioning(partitioning);
    writer.into_vec()
}

pub fn encode_partitioning_balanced() -> Vec<u8> {
    encode_partitioning(&Partitioning::Balanced)
}

pub fn encode_partitioning_partition_id(id: u32) -> Vec<u8> {
    encode_partitioning(&Partitioning::PartitionId(id))
}

// =============================================================================
// PayloadReader
// =============================================================================

/// Cursor over an encoded payload
///
/// Every read checks the remaining length first; truncated input yields
/// `WireError::Protocol` rather than a panic.
#[derive(Debug, Clone)]
pub struct PayloadReader<'a> {
    buf: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { buf: bytes }
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn is_empty(&self) -> bool {
        !self.buf.has_remaining()
    }

    fn ensure(&self, needed: usize, what: &str) -> Result<()> {
        if self.buf.remaining() < needed {
            return Err(WireError::Protocol(format!(
                "Incomplete {}: expected {} bytes, got {}",
                what,
                needed,
                self.buf.remaining()
            )));
        }
        Ok(())
    }

    pub fn get_u8(&mut self) -> Result<u8> {
        self.ensure(1, "u8")?;
        Ok(self.buf.get_u8())
    }

    pub fn get_u32(&mut self) -> Result<u32> {
        self.ensure(4, "u32")?;
        Ok(self.buf.get_u32_le())
    }

    pub fn get_u64(&mut self) -> Result<u64> {
        self.ensure(8, "u64")?;
        Ok(self.buf.get_u64_le())
    }

    pub fn get_bool(&mut self) -> Result<bool> {
        match self.get_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(WireError::Protocol(format!(
                "Invalid boolean byte: 0x{:02x}",
                other
            ))),
        }
    }

    pub fn get_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len, "byte run")?;
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    fn get_utf8(&mut self, len: usize) -> Result<String> {
        let bytes = self.get_bytes(len)?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| WireError::Protocol(format!("Invalid UTF-8 in string: {}", e)))
    }

    pub fn get_string_u8(&mut self) -> Result<String> {
        let len = self.get_u8()? as usize;
        self.get_utf8(len)
    }

    /// Read a u32-prefixed string; an absent string comes back empty
    pub fn get_string_u32(&mut self) -> Result<String> {
        let len = self.get_u32()? as usize;
        self.get_utf8(len)
    }

    pub fn get_identifier(&mut self) -> Result<Identifier> {
        let kind = self.get_u8()?;
        let len = self.get_u8()?;
        match kind {
            IDENTIFIER_KIND_NUMERIC => {
                if len != U32_VALUE_LEN {
                    return Err(WireError::Protocol(format!(
                        "Numeric identifier: length must be {}, got {}",
                        U32_VALUE_LEN, len
                    )));
                }
                Ok(Identifier::Numeric(self.get_u32()?))
            }
            IDENTIFIER_KIND_STRING => Ok(Identifier::String(self.get_utf8(len as usize)?)),
            _ => Err(WireError::Protocol(format!(
                "Unknown identifier kind: 0x{:02x}",
                kind
            ))),
        }
    }

    pub fn get_partitioning(&mut self) -> Result<Partitioning> {
        let kind = self.get_u8()?;
        let len = self.get_u8()?;
        match (kind, len) {
            (PARTITIONING_KIND_BALANCED, 0) => Ok(Partitioning::Balanced),
            (PARTITIONING_KIND_PARTITION_ID, U32_VALUE_LEN) => {
                Ok(Partitioning::PartitionId(self.get_u32()?))
            }
            (PARTITIONING_KIND_BALANCED, _) | (PARTITIONING_KIND_PARTITION_ID, _) => {
                Err(WireError::Protocol(format!(
                    "Partitioning kind {}: unexpected length {}",
                    kind, len
                )))
            }
            _ => Err(WireError::Protocol(format!(
                "Unknown partitioning kind: 0x{:02x}",
                kind
            ))),
        }
    }

    /// Fail if any bytes are left unread
    pub fn finish(self) -> Result<()> {
        if self.buf.has_remaining() {
            return Err(WireError::Protocol(format!(
                "Unexpected trailing data: {} bytes",
                self.buf.remaining()
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Free-standing Decoders
// =============================================================================

/// Decode a single value that must span the whole input
fn decode_exact<'a, T>(
    bytes: &'a [u8],
    read: impl FnOnce(&mut PayloadReader<'a>) -> Result<T>,
) -> Result<T> {
    let mut reader = PayloadReader::new(bytes);
    let value = read(&mut reader)?;
    reader.finish()?;
    Ok(value)
}

pub fn decode_u8(bytes: &[u8]) -> Result<u8> {
    decode_exact(bytes, |r| r.get_u8())
}

pub fn decode_u32(bytes: &[u8]) -> Result<u32> {
    decode_exact(bytes, |r| r.get_u32())
}

pub fn decode_u64(bytes: &[u8]) -> Result<u64> {
    decode_exact(bytes, |r| r.get_u64())
}

pub fn decode_string_u8(bytes: &[u8]) -> Result<String> {
    decode_exact(bytes, |r| r.get_string_u8())
}

pub fn decode_string_u32(bytes: &[u8]) -> Result<String> {
    decode_exact(bytes, |r| r.get_string_u32())
}

pub fn decode_identifier(bytes: &[u8]) -> Result<Identifier> {
    decode_exact(bytes, |r| r.get_identifier())
}

pub fn decode_partitioning(bytes: &[u8]) -> Result<Partitioning> {
    decode_exact(bytes, |r| r.get_partitioning())
}
