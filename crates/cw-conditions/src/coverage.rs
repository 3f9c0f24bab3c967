//! Medical coverage: can the medicine den look after the whole clan?
//!
//! Coverage is never cached. Every condition mutator asks again, because
//! medics fall ill, retire, and gain experience between calls.

use cw_core::{CatRank, Clan, GameMode, Roster, SkillPath};

use crate::config::CareConfig;

/// The clan state a condition needs to decide whether it is being treated.
#[derive(Debug, Clone, Copy)]
pub struct CareContext<'a> {
    /// Every cat, medics included.
    pub roster: &'a Roster,
    /// Current game mode.
    pub game_mode: GameMode,
    /// Capacity tuning.
    pub config: CareConfig,
}

impl<'a> CareContext<'a> {
    /// Care context with the default capacity tuning.
    pub fn new(roster: &'a Roster, game_mode: GameMode) -> Self {
        Self {
            roster,
            game_mode,
            config: CareConfig::default(),
        }
    }

    /// Care context for a clan's roster and mode.
    pub fn for_clan(roster: &'a Roster, clan: &Clan) -> Self {
        Self::new(roster, clan.game_mode)
    }

    /// Replace the capacity tuning.
    pub fn with_config(mut self, config: CareConfig) -> Self {
        self.config = config;
        self
    }

    /// Cats one medic can treat in the current mode.
    pub fn amount_per_medic(&self) -> u32 {
        self.config.cats_per_medic(self.game_mode)
    }

    /// Whether the working medics can cover every living clan member.
    pub fn can_cover_clan(&self) -> bool {
        medicine_cats_can_cover_clan(self.roster, self.amount_per_medic(), &self.config)
    }
}

/// How many medics the working medicine den counts as.
///
/// Full medicine cats count as 1.0 to 2.0 depending on healer tier,
/// apprentices as 0.5, plus a small bonus from summed experience.
pub fn effective_medic_count(roster: &Roster, config: &CareConfig) -> f64 {
    let medics: Vec<_> = roster
        .living_cats()
        .filter(|c| !c.not_working() && c.status.rank.is_any_medicine_rank())
        .collect();

    let total_exp: f64 = medics.iter().map(|c| c.experience as f64).sum::<f64>()
        * config.experience_factor;

    let weight: f64 = medics
        .iter()
        .map(|c| match c.status.rank {
            CatRank::MedicineCat => {
                let tier = (1..=3)
                    .rev()
                    .find(|t| c.skills.meets_skill_requirement(SkillPath::Healer, *t))
                    .unwrap_or(0);
                config.healer_tier_weights[tier as usize]
            }
            _ => config.apprentice_weight,
        })
        .sum();

    weight + total_exp
}

/// Number of clan members the working medics can treat.
pub fn amount_clanmembers_covered(roster: &Roster, amount_per_med: u32, config: &CareConfig) -> u64 {
    let medics = effective_medic_count(roster, config);
    (medics * (amount_per_med as f64 + 1.0)).floor() as u64
}

/// Whether the working medics can treat every living clan member.
pub fn medicine_cats_can_cover_clan(roster: &Roster, amount_per_med: u32, config: &CareConfig) -> bool {
    let covered = amount_clanmembers_covered(roster, amount_per_med, config);
    let clan_size = roster.clan_size() as u64;
    tracing::trace!(covered, clan_size, "medical coverage");
    covered > clan_size
}
