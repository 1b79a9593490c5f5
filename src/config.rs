//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::types::FRAME_MS;

/// Knobs for the terminal runner. Arena dimensions are compile-time
/// constants and not configurable here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Fixed piece seed. `None` seeds from the wall clock.
    pub seed: Option<u32>,
    /// Target frame period in milliseconds.
    pub frame_ms: u32,
    /// Log file. Logging is off when unset.
    pub log_path: Option<PathBuf>,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl RunConfig {
    /// Read `ARENA_TETRIS_SEED`, `ARENA_TETRIS_FRAME_MS`,
    /// `ARENA_TETRIS_LOG_PATH` and `ARENA_TETRIS_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with a custom variable source.
    ///
    /// Unparsable or blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("ARENA_TETRIS_SEED").and_then(|s| s.parse().ok());
        let frame_ms = var("ARENA_TETRIS_FRAME_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.frame_ms);
        let log_path = var("ARENA_TETRIS_LOG_PATH").map(PathBuf::from);
        let log_filter = var("ARENA_TETRIS_LOG").unwrap_or(defaults.log_filter);

        Self {
            seed,
            frame_ms,
            log_path,
            log_filter,
        }
    }
}
