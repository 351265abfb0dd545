//! Packed buffer codec
//!
//! Serializes an ordered batch of messages into one contiguous buffer with no
//! generic serialization layer in between. Each record is an 8-byte header
//! (4-byte little-endian record index, 4-byte little-endian message length)
//! followed by the raw message bytes, with records back-to-back and no
//! trailing padding.

/// Per-record header size: 4-byte index + 4-byte length.
pub const HEADER_LEN: usize = 8;

/// Error type for unpacking a packed buffer
#[derive(Debug, PartialEq, Eq)]
pub enum UnpackError {
    /// Fewer than `HEADER_LEN` bytes remained where a header was expected.
    TruncatedHeader { at: usize },
    /// The header declared more body bytes than the buffer holds.
    TruncatedBody { index: u32, declared: u32, available: usize },
    /// The header's index field did not match the record's position.
    IndexMismatch { expected: u32, found: u32 },
}

impl std::fmt::Display for UnpackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnpackError::TruncatedHeader { at } => {
                write!(f, "truncated header at byte {}", at)
            }
            UnpackError::TruncatedBody {
                index,
                declared,
                available,
            } => write!(
                f,
                "record {} declares {} bytes but only {} remain",
                index, declared, available
            ),
            UnpackError::IndexMismatch { expected, found } => {
                write!(f, "expected record index {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for UnpackError {}

/// Exact size of the packed encoding: one header per message plus the bytes.
#[inline]
pub fn packed_len<M: AsRef<[u8]>>(messages: &[M]) -> usize {
    HEADER_LEN * messages.len() + messages.iter().map(|m| m.as_ref().len()).sum::<usize>()
}

/// Pack a batch of messages into a single contiguous buffer.
///
/// The output is pre-allocated to its exact final size, then filled in one
/// linear pass. Message lengths must fit in `u32`; the generator guarantees
/// this by construction.
pub fn pack<M: AsRef<[u8]>>(messages: &[M]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(packed_len(messages));

    for (i, message) in messages.iter().enumerate() {
        let bytes = message.as_ref();
        buf.extend_from_slice(&(i as u32).to_le_bytes());
        buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
        buf.extend_from_slice(bytes);
    }

    buf
}

/// Unpack a packed buffer back into its messages.
///
/// Reads records until the buffer is exhausted. Each header's index must
/// equal the record's position, and each declared length must be available.
pub fn unpack(buf: &[u8]) -> Result<Vec<Vec<u8>>, UnpackError> {
    let mut messages = Vec::new();
    let mut pos = 0usize;

    while pos < buf.len() {
        if buf.len() - pos < HEADER_LEN {
            return Err(UnpackError::TruncatedHeader { at: pos });
        }

        let index = read_u32(buf, pos);
        let len = read_u32(buf, pos + 4);
        pos += HEADER_LEN;

        let expected = messages.len() as u32;
        if index != expected {
            return Err(UnpackError::IndexMismatch {
                expected,
                found: index,
            });
        }

        let available = buf.len() - pos;
        if available < len as usize {
            return Err(UnpackError::TruncatedBody {
                index,
                declared: len,
                available,
            });
        }

        messages.push(buf[pos..pos + len as usize].to_vec());
        pos += len as usize;
    }

    Ok(messages)
}

#[inline(always)]
fn read_u32(buf: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([buf[pos], buf[pos + 1], buf[pos + 2], buf[pos + 3]])
}
