use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A cat's rank within its clan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatRank {
    /// Newly born kit.
    Newborn,
    /// Nursery kit.
    Kitten,
    /// Warrior apprentice.
    Apprentice,
    /// Full warrior.
    Warrior,
    /// Apprentice to a mediator.
    MediatorApprentice,
    /// Settles disputes within and between clans.
    Mediator,
    /// Apprentice to a medicine cat.
    MedicineApprentice,
    /// Full medicine cat.
    MedicineCat,
    /// Second in command.
    Deputy,
    /// Clan leader.
    Leader,
    /// Retired from duties.
    Elder,
}

impl CatRank {
    /// All ranks.
    pub const ALL: [CatRank; 11] = [
        Self::Newborn,
        Self::Kitten,
        Self::Apprentice,
        Self::Warrior,
        Self::MediatorApprentice,
        Self::Mediator,
        Self::MedicineApprentice,
        Self::MedicineCat,
        Self::Deputy,
        Self::Leader,
        Self::Elder,
    ];

    /// Ranks counted as "apps" in clan rank tags.
    pub const APPRENTICES: [CatRank; 3] = [
        Self::Apprentice,
        Self::MediatorApprentice,
        Self::MedicineApprentice,
    ];

    /// True for medicine cats and their apprentices.
    pub fn is_any_medicine_rank(self) -> bool {
        matches!(self, Self::MedicineCat | Self::MedicineApprentice)
    }

    /// True for any apprentice rank.
    pub fn is_any_apprentice_rank(self) -> bool {
        Self::APPRENTICES.contains(&self)
    }

    /// True for ranks that a clan holds at most one of.
    pub fn is_leadership(self) -> bool {
        matches!(self, Self::Leader | Self::Deputy)
    }

    /// The authored name used in event files (e.g. `"medicine cat"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newborn => "newborn",
            Self::Kitten => "kitten",
            Self::Apprentice => "apprentice",
            Self::Warrior => "warrior",
            Self::MediatorApprentice => "mediator apprentice",
            Self::Mediator => "mediator",
            Self::MedicineApprentice => "medicine cat apprentice",
            Self::MedicineCat => "medicine cat",
            Self::Deputy => "deputy",
            Self::Leader => "leader",
            Self::Elder => "elder",
        }
    }
}

impl fmt::Display for CatRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatRank {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', " ");
        Self::ALL
            .into_iter()
            .find(|rank| rank.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownRank(s.to_string()))
    }
}

/// Where a cat stands relative to the player's clan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Living member of the player's clan.
    #[default]
    Member,
    /// Went missing; may return.
    Lost,
    /// Driven out of the clan.
    Exiled,
    /// Dead.
    Dead,
    /// Never belonged to the clan (loner, rogue, other clan).
    Outsider,
}

/// Rank plus standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The cat's rank.
    pub rank: CatRank,
    /// The cat's standing relative to the player's clan.
    #[serde(default)]
    pub standing: Standing,
}

impl Status {
    /// A living clan member with the given rank.
    pub fn member(rank: CatRank) -> Self {
        Self {
            rank,
            standing: Standing::Member,
        }
    }

    /// Returns true for the clan leader.
    pub fn is_leader(&self) -> bool {
        self.rank == CatRank::Leader
    }

    /// Returns true if the cat is missing or exiled from the clan.
    pub fn is_lost(&self) -> bool {
        matches!(self.standing, Standing::Lost | Standing::Exiled)
    }

    /// Returns true if the cat is alive and currently in the player's clan.
    pub fn alive_in_player_clan(&self) -> bool {
        self.standing == Standing::Member
    }
}
