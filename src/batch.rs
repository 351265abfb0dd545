//! Message batches and random generation
//!
//! A batch is the unit both encodings operate on: an ordered list of opaque
//! byte messages. The struct wraps the list in a single `messages` field so
//! the structured path serializes a proper JSON object rather than a bare
//! array.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Shape of a generated batch.
#[derive(Debug, Clone, Copy)]
pub struct GenConfig {
    /// Number of messages per batch.
    pub count: usize,
    /// Smallest message length, inclusive.
    pub min_len: usize,
    /// Largest message length, inclusive.
    pub max_len: usize,
}

/// An ordered batch of opaque binary messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBatch {
    pub messages: Vec<Vec<u8>>,
}

impl MessageBatch {
    /// Generate a batch of `config.count` messages, each with a uniformly
    /// random length in `[min_len, max_len]` and uniformly random contents.
    pub fn generate<R: Rng>(config: &GenConfig, rng: &mut R) -> Self {
        let mut messages = Vec::with_capacity(config.count);

        for _ in 0..config.count {
            let len = rng.random_range(config.min_len..=config.max_len);
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            messages.push(bytes);
        }

        MessageBatch { messages }
    }

    /// Total payload bytes across all messages, headers excluded.
    pub fn payload_len(&self) -> usize {
        self.messages.iter().map(|m| m.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CONFIG: GenConfig = GenConfig {
        count: 64,
        min_len: 10,
        max_len: 20,
    };

    #[test]
    fn test_lengths_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = MessageBatch::generate(&CONFIG, &mut rng);

        assert_eq!(batch.messages.len(), CONFIG.count);
        for message in &batch.messages {
            assert!(message.len() >= CONFIG.min_len);
            assert!(message.len() <= CONFIG.max_len);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = MessageBatch::generate(&CONFIG, &mut StdRng::seed_from_u64(42));
        let b = MessageBatch::generate(&CONFIG, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = MessageBatch::generate(&CONFIG, &mut StdRng::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_json_round_trip() {
        let mut rng = StdRng::seed_from_u64(1);
        let batch = MessageBatch::generate(&CONFIG, &mut rng);

        let json = serde_json::to_string(&batch).unwrap();
        let decoded: MessageBatch = serde_json::from_str(&json).unwrap();
        assert_eq!(batch, decoded);
    }

    #[test]
    fn test_fixed_length_interval() {
        let config = GenConfig {
            count: 8,
            min_len: 5,
            max_len: 5,
        };
        let batch = MessageBatch::generate(&config, &mut StdRng::seed_from_u64(0));
        assert!(batch.messages.iter().all(|m| m.len() == 5));
        assert_eq!(batch.payload_len(), 40);
    }
}
