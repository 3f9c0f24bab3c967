use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Life stage of a cat, derived from its age in moons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatAge {
    /// Zero moons old. Only eligible for events that name it explicitly.
    Newborn,
    /// Nursery kit.
    Kitten,
    /// Apprentice-aged.
    Adolescent,
    /// Recently made a warrior.
    YoungAdult,
    /// Prime of life.
    Adult,
    /// Past prime, still working.
    SeniorAdult,
    /// Elderly.
    Senior,
}

impl CatAge {
    /// All age categories, youngest first.
    pub const ALL: [CatAge; 7] = [
        Self::Newborn,
        Self::Kitten,
        Self::Adolescent,
        Self::YoungAdult,
        Self::Adult,
        Self::SeniorAdult,
        Self::Senior,
    ];

    /// Inclusive moon range covered by this age category.
    pub fn moon_range(self) -> (u32, u32) {
        match self {
            Self::Newborn => (0, 0),
            Self::Kitten => (1, 5),
            Self::Adolescent => (6, 11),
            Self::YoungAdult => (12, 47),
            Self::Adult => (48, 95),
            Self::SeniorAdult => (96, 119),
            Self::Senior => (120, 300),
        }
    }

    /// Age category for a cat of the given age in moons.
    pub fn from_moons(moons: u32) -> Self {
        Self::ALL
            .into_iter()
            .find(|age| {
                let (_, max) = age.moon_range();
                moons <= max
            })
            .unwrap_or(Self::Senior)
    }

    /// The authored name used in event files (e.g. `"young adult"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newborn => "newborn",
            Self::Kitten => "kitten",
            Self::Adolescent => "adolescent",
            Self::YoungAdult => "young adult",
            Self::Adult => "adult",
            Self::SeniorAdult => "senior adult",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for CatAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatAge {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', " ");
        Self::ALL
            .into_iter()
            .find(|age| age.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownAge(s.to_string()))
    }
}
