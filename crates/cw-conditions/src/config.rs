//! Configuration for medical care capacity.

use cw_core::GameMode;
use serde::{Deserialize, Serialize};

/// Tuning for how many clan members the medicine den can look after.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    /// Cats one medic can treat in expanded mode.
    pub cats_per_medic: u32,
    /// Cats one medic can treat in cruel season.
    pub cats_per_medic_cruel_season: u32,
    /// Cats one medic can treat in classic mode. Large enough to never gate.
    pub cats_per_medic_classic: u32,
    /// How many medics a full medicine cat counts as, indexed by healer tier (0 = no healer skill).
    pub healer_tier_weights: [f64; 4],
    /// How many medics an apprentice counts as.
    pub apprentice_weight: f64,
    /// Medics gained per point of summed medic experience.
    pub experience_factor: f64,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            cats_per_medic: 10,
            cats_per_medic_cruel_season: 7,
            cats_per_medic_classic: 1_000_000,
            healer_tier_weights: [1.0, 1.5, 1.75, 2.0],
            apprentice_weight: 0.5,
            experience_factor: 0.003,
        }
    }
}

impl CareConfig {
    /// Cats one medic can treat in the given mode.
    pub fn cats_per_medic(&self, mode: GameMode) -> u32 {
        match mode {
            GameMode::Classic => self.cats_per_medic_classic,
            GameMode::Expanded => self.cats_per_medic,
            GameMode::CruelSeason => self.cats_per_medic_cruel_season,
        }
    }

    /// Set the per-medic capacity for expanded mode.
    pub fn with_cats_per_medic(mut self, cats: u32) -> Self {
        self.cats_per_medic = cats;
        self
    }

    /// Set the per-medic capacity for cruel season.
    pub fn with_cruel_season_capacity(mut self, cats: u32) -> Self {
        self.cats_per_medic_cruel_season = cats;
        self
    }

    /// Set the experience bonus factor.
    pub fn with_experience_factor(mut self, factor: f64) -> Self {
        self.experience_factor = factor;
        self
    }
}
