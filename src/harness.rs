//! Benchmark harness
//!
//! Runs N trials. Each trial generates a fresh random batch and times three
//! operations: JSON encode, raw pack (optionally pack + unpack), and JSON
//! decode. Timings accumulate in a report returned to the caller; nothing is
//! kept in process-wide state.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::batch::{GenConfig, MessageBatch};
use crate::packed::{self, UnpackError};

/// What the raw path measures per trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawMode {
    /// Time `pack` only. Matches the reference measurement, which never read
    /// the packed buffer back, so the raw number is write-path cost alone.
    #[default]
    EncodeOnly,
    /// Time `pack` and `unpack` separately, making the raw path symmetric
    /// with the JSON path.
    RoundTrip,
}

/// Benchmark configuration.
#[derive(Debug, Clone, Copy)]
pub struct BenchConfig {
    /// Number of trials.
    pub trials: usize,
    /// Messages per batch.
    pub messages: usize,
    /// Smallest message length, inclusive.
    pub min_len: usize,
    /// Largest message length, inclusive.
    pub max_len: usize,
    /// Explicit rng seed for reproducible runs; OS entropy when absent.
    pub seed: Option<u64>,
    pub raw_mode: RawMode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            trials: 1000,
            messages: 800,
            min_len: 259,
            max_len: 300,
            seed: None,
            raw_mode: RawMode::default(),
        }
    }
}

/// Error type for a benchmark run
#[derive(Debug)]
pub enum BenchError {
    Json(serde_json::Error),
    Unpack(UnpackError),
}

impl std::fmt::Display for BenchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BenchError::Json(e) => write!(f, "json encoding failed: {}", e),
            BenchError::Unpack(e) => write!(f, "packed decoding failed: {}", e),
        }
    }
}

impl std::error::Error for BenchError {}

impl From<serde_json::Error> for BenchError {
    fn from(e: serde_json::Error) -> Self {
        BenchError::Json(e)
    }
}

impl From<UnpackError> for BenchError {
    fn from(e: UnpackError) -> Self {
        BenchError::Unpack(e)
    }
}

/// Mean and maximum over a series of millisecond samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub mean_ms: f64,
    pub max_ms: f64,
}

impl TimingStats {
    pub fn of(samples: &[f64]) -> Self {
        let mean_ms = if samples.is_empty() {
            0.0
        } else {
            samples.iter().sum::<f64>() / samples.len() as f64
        };
        let max_ms = samples.iter().copied().fold(0.0f64, f64::max);
        TimingStats { mean_ms, max_ms }
    }
}

/// Per-path timing series for one run, in milliseconds.
#[derive(Debug, Default)]
pub struct BenchReport {
    pub json_encode_ms: Vec<f64>,
    pub json_decode_ms: Vec<f64>,
    pub raw_encode_ms: Vec<f64>,
    /// Empty unless the run used `RawMode::RoundTrip`.
    pub raw_decode_ms: Vec<f64>,
}

impl BenchReport {
    pub fn json_encode(&self) -> TimingStats {
        TimingStats::of(&self.json_encode_ms)
    }

    pub fn json_decode(&self) -> TimingStats {
        TimingStats::of(&self.json_decode_ms)
    }

    pub fn raw_encode(&self) -> TimingStats {
        TimingStats::of(&self.raw_encode_ms)
    }

    pub fn raw_decode(&self) -> TimingStats {
        TimingStats::of(&self.raw_decode_ms)
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1_000.0
}

/// Run the full benchmark and collect per-trial timings.
pub fn run(config: &BenchConfig) -> Result<BenchReport, BenchError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let shape = GenConfig {
        count: config.messages,
        min_len: config.min_len,
        max_len: config.max_len,
    };

    let mut report = BenchReport::default();

    for _ in 0..config.trials {
        let batch = MessageBatch::generate(&shape, &mut rng);

        // JSON encode; keep the text for the decode measurement below.
        let start = Instant::now();
        let json = serde_json::to_string(&batch)?;
        report.json_encode_ms.push(elapsed_ms(start));

        // Raw pack, and in round-trip mode a separately timed unpack.
        let start = Instant::now();
        let packed = packed::pack(&batch.messages);
        report.raw_encode_ms.push(elapsed_ms(start));

        if config.raw_mode == RawMode::RoundTrip {
            let start = Instant::now();
            let decoded = packed::unpack(&packed)?;
            report.raw_decode_ms.push(elapsed_ms(start));
            std::hint::black_box(decoded);
        }

        // JSON decode.
        let start = Instant::now();
        let decoded: MessageBatch = serde_json::from_str(&json)?;
        report.json_decode_ms.push(elapsed_ms(start));
        std::hint::black_box(decoded);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(raw_mode: RawMode) -> BenchConfig {
        BenchConfig {
            trials: 5,
            messages: 16,
            min_len: 8,
            max_len: 24,
            seed: Some(99),
            raw_mode,
        }
    }

    #[test]
    fn test_encode_only_series_lengths() {
        let report = run(&small_config(RawMode::EncodeOnly)).unwrap();
        assert_eq!(report.json_encode_ms.len(), 5);
        assert_eq!(report.json_decode_ms.len(), 5);
        assert_eq!(report.raw_encode_ms.len(), 5);
        assert!(report.raw_decode_ms.is_empty());
    }

    #[test]
    fn test_round_trip_collects_raw_decode() {
        let report = run(&small_config(RawMode::RoundTrip)).unwrap();
        assert_eq!(report.raw_decode_ms.len(), 5);
    }

    #[test]
    fn test_stats_mean_and_max() {
        let stats = TimingStats::of(&[1.0, 2.0, 6.0]);
        assert_eq!(stats.mean_ms, 3.0);
        assert_eq!(stats.max_ms, 6.0);
    }

    #[test]
    fn test_stats_empty_series() {
        let stats = TimingStats::of(&[]);
        assert_eq!(stats.mean_ms, 0.0);
        assert_eq!(stats.max_ms, 0.0);
    }

    #[test]
    fn test_default_matches_reference_shape() {
        let config = BenchConfig::default();
        assert_eq!(config.trials, 1000);
        assert_eq!(config.messages, 800);
        assert_eq!(config.min_len, 259);
        assert_eq!(config.max_len, 300);
        assert_eq!(config.raw_mode, RawMode::EncodeOnly);
    }
}
