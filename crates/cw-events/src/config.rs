//! Tunable thresholds for the context predicates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Upper bounds of the lower two bands of a three-band score.
///
/// A score `<= low_max` is in the first band, `<= mid_max` the second, and
/// anything above is in the third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bands {
    /// Highest score of the first band.
    pub low_max: u32,
    /// Highest score of the second band.
    pub mid_max: u32,
}

impl Bands {
    /// Bands with the given upper bounds.
    pub fn new(low_max: u32, mid_max: u32) -> Self {
        Self { low_max, mid_max }
    }

    /// Index of the band `score` falls into: 0, 1 or 2.
    pub fn band_of(&self, score: u32) -> usize {
        if score <= self.low_max {
            0
        } else if score <= self.mid_max {
            1
        } else {
            2
        }
    }
}

/// Thresholds used by event filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Reputation bands: hostile, neutral, welcoming.
    pub reputation_bands: Bands,
    /// Other-clan relation bands: hostile, neutral, ally.
    pub relation_bands: Bands,
    /// Clan-size divider for the fresh-kill excess threshold in expanded mode.
    pub freshkill_divider_expanded: f64,
    /// Clan-size divider for the fresh-kill excess threshold in other modes.
    pub freshkill_divider: f64,
    /// Lowest excess factor allowed in expanded mode.
    pub freshkill_factor_floor: f64,
    /// Minimum lives the leader must have for each life tag.
    pub leader_lives: BTreeMap<String, u32>,
    /// Moons past the end of kittenhood before a cat may adopt.
    pub adoption_moons_past_kitten: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        let leader_lives = [
            ("some_lives", 4),
            ("lives_remain", 2),
            ("high_lives", 7),
            ("mid_lives", 4),
            ("low_lives", 1),
        ]
        .into_iter()
        .map(|(tag, lives)| (tag.to_string(), lives))
        .collect();

        Self {
            reputation_bands: Bands::new(30, 70),
            relation_bands: Bands::new(6, 17),
            freshkill_divider_expanded: 35.0,
            freshkill_divider: 20.0,
            freshkill_factor_floor: 2.0,
            leader_lives,
            adoption_moons_past_kitten: 14,
        }
    }
}

impl FilterConfig {
    /// Set the reputation bands.
    pub fn with_reputation_bands(mut self, low_max: u32, mid_max: u32) -> Self {
        self.reputation_bands = Bands::new(low_max, mid_max);
        self
    }

    /// Set the other-clan relation bands.
    pub fn with_relation_bands(mut self, low_max: u32, mid_max: u32) -> Self {
        self.relation_bands = Bands::new(low_max, mid_max);
        self
    }

    /// Set or replace a leader life tag.
    pub fn with_leader_lives(mut self, tag: impl Into<String>, lives: u32) -> Self {
        self.leader_lives.insert(tag.into(), lives);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands() {
        let cfg = FilterConfig::default();
        assert_eq!(cfg.reputation_bands.band_of(0), 0);
        assert_eq!(cfg.reputation_bands.band_of(30), 0);
        assert_eq!(cfg.reputation_bands.band_of(31), 1);
        assert_eq!(cfg.reputation_bands.band_of(70), 1);
        assert_eq!(cfg.reputation_bands.band_of(71), 2);
        assert_eq!(cfg.relation_bands.band_of(6), 0);
        assert_eq!(cfg.relation_bands.band_of(17), 1);
        assert_eq!(cfg.relation_bands.band_of(18), 2);
    }

    #[test]
    fn default_leader_lives() {
        let cfg = FilterConfig::default();
        assert_eq!(cfg.leader_lives["high_lives"], 7);
        assert_eq!(cfg.leader_lives["low_lives"], 1);
        assert_eq!(cfg.leader_lives.len(), 5);
    }

    #[test]
    fn builder_methods() {
        let cfg = FilterConfig::default()
            .with_reputation_bands(20, 80)
            .with_relation_bands(3, 9)
            .with_leader_lives("last_life", 1);
        assert_eq!(cfg.reputation_bands, Bands::new(20, 80));
        assert_eq!(cfg.relation_bands.band_of(10), 2);
        assert_eq!(cfg.leader_lives["last_life"], 1);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: FilterConfig =
            serde_json::from_str(r#"{"reputation_bands": {"low_max": 10, "mid_max": 90}}"#)
                .unwrap();
        assert_eq!(cfg.reputation_bands.band_of(50), 1);
        assert_eq!(cfg.relation_bands, Bands::new(6, 17));
    }
}
