// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resurrection odds
//!
//! The roll succeeds when a uniform [0, 1) draw lands at or below the
//! computed chance. The raw chance is a weighted sum of building level and
//! worker mana level, clamped once after summing to a cap that grows with
//! the colony's mystical site level. Never negative.

use serde::{Deserialize, Serialize};

/// Weights and caps for the resurrection roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResurrectionOdds {
    /// Chance added per graveyard building level
    pub building_level_weight: f64,
    /// Chance added per worker mana level
    pub mana_level_weight: f64,
    /// Cap with no mystical site in the colony
    pub base_cap: f64,
    /// Cap bonus per mystical site level
    pub mystical_bonus: f64,
}

impl Default for ResurrectionOdds {
    fn default() -> Self {
        Self {
            building_level_weight: 0.005,
            mana_level_weight: 0.0025,
            base_cap: 0.10,
            mystical_bonus: 0.01,
        }
    }
}

impl ResurrectionOdds {
    /// Chance cap for a colony with the given mystical site level.
    pub fn cap(&self, mystical_level: u32) -> f64 {
        (self.base_cap + self.mystical_bonus * f64::from(mystical_level)).max(0.0)
    }

    /// Resurrection chance in `[0, cap]`. The weighted terms are summed
    /// first and the sum clamped once.
    pub fn chance(&self, building_level: u32, mana_level: u32, mystical_level: u32) -> f64 {
        let raw = f64::from(building_level) * self.building_level_weight
            + f64::from(mana_level) * self.mana_level_weight;
        raw.clamp(0.0, self.cap(mystical_level))
    }
}
