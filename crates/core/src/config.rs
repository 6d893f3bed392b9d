// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker configuration
//!
//! Tick rates and roll weights with defaults matching the shipped worker.
//! Loadable from TOML; absent keys fall back to their defaults.

use crate::chance::ResurrectionOdds;
use crate::tick::TICKS_PER_SECOND;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Minimum ticks between handler invocations, per state group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TickRates {
    /// Cycle entry decision
    pub start_working: u64,
    /// Idle poll for new work
    pub idle: u64,
    /// Supervisory re-evaluation
    pub preparing: u64,
    /// Walking/mutating work states
    pub active: u64,
    /// Crafting hand-off
    pub crafting: u64,
}

impl Default for TickRates {
    fn default() -> Self {
        Self {
            start_working: 1,
            idle: 10,
            preparing: TICKS_PER_SECOND,
            active: 5,
            crafting: 5,
        }
    }
}

/// Full grave-worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub rates: TickRates,
    pub odds: ResurrectionOdds,
    /// Experience granted per completed dig
    pub xp_per_dig: f64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            rates: TickRates::default(),
            odds: ResurrectionOdds::default(),
            xp_per_dig: 0.5,
        }
    }
}

impl WorkerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
