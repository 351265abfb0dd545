//! # Packbench
//!
//! Micro-benchmark comparing two encodings of a batch of binary messages:
//! wrapping the batch in a JSON document via serde, versus packing the
//! messages directly into one contiguous buffer with fixed 8-byte headers.
//!
//! ```rust
//! use packbench::packed::{pack, unpack};
//!
//! let messages = vec![vec![1u8, 2, 3], vec![4u8, 5]];
//! let buf = pack(&messages);
//! assert_eq!(buf.len(), 2 * 8 + 5);
//! assert_eq!(unpack(&buf).unwrap(), messages);
//! ```

pub mod batch;
pub mod harness;
pub mod packed;

pub use batch::{GenConfig, MessageBatch};
pub use harness::{run, BenchConfig, BenchError, BenchReport, RawMode, TimingStats};
pub use packed::{pack, packed_len, unpack, UnpackError, HEADER_LEN};
