use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A skill path a cat can develop along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum SkillPath {
    Teacher,
    Hunter,
    Fighter,
    Runner,
    Climber,
    Swimmer,
    Speaker,
    Mediator,
    Clever,
    Insightful,
    Sense,
    Kit,
    Story,
    Lore,
    Camp,
    Healer,
    Star,
    Dark,
    Omen,
    Dream,
    Clairvoyant,
    Prophet,
    Ghost,
}

impl SkillPath {
    /// All skill paths.
    pub const ALL: [SkillPath; 23] = [
        Self::Teacher,
        Self::Hunter,
        Self::Fighter,
        Self::Runner,
        Self::Climber,
        Self::Swimmer,
        Self::Speaker,
        Self::Mediator,
        Self::Clever,
        Self::Insightful,
        Self::Sense,
        Self::Kit,
        Self::Story,
        Self::Lore,
        Self::Camp,
        Self::Healer,
        Self::Star,
        Self::Dark,
        Self::Omen,
        Self::Dream,
        Self::Clairvoyant,
        Self::Prophet,
        Self::Ghost,
    ];

    /// The authored upper-case name (e.g. `"HUNTER"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "TEACHER",
            Self::Hunter => "HUNTER",
            Self::Fighter => "FIGHTER",
            Self::Runner => "RUNNER",
            Self::Climber => "CLIMBER",
            Self::Swimmer => "SWIMMER",
            Self::Speaker => "SPEAKER",
            Self::Mediator => "MEDIATOR",
            Self::Clever => "CLEVER",
            Self::Insightful => "INSIGHTFUL",
            Self::Sense => "SENSE",
            Self::Kit => "KIT",
            Self::Story => "STORY",
            Self::Lore => "LORE",
            Self::Camp => "CAMP",
            Self::Healer => "HEALER",
            Self::Star => "STAR",
            Self::Dark => "DARK",
            Self::Omen => "OMEN",
            Self::Dream => "DREAM",
            Self::Clairvoyant => "CLAIRVOYANT",
            Self::Prophet => "PROPHET",
            Self::Ghost => "GHOST",
        }
    }
}

impl fmt::Display for SkillPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillPath {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == upper)
            .ok_or_else(|| CoreError::UnknownSkillPath(s.to_string()))
    }
}

/// A single skill: a path and how far along it the cat is (1..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// The skill path.
    pub path: SkillPath,
    /// Tier reached on the path.
    pub tier: u8,
}

impl Skill {
    /// Highest tier a skill can reach.
    pub const MAX_TIER: u8 = 3;

    /// Creates a skill, clamping the tier to 1..=3.
    pub fn new(path: SkillPath, tier: u8) -> Self {
        Self {
            path,
            tier: tier.clamp(1, Self::MAX_TIER),
        }
    }
}

/// The skills a cat has learned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    /// Main skill.
    pub primary: Option<Skill>,
    /// Second skill, usually weaker.
    pub secondary: Option<Skill>,
}

impl Skills {
    /// Skills with only a primary skill set.
    pub fn primary(path: SkillPath, tier: u8) -> Self {
        Self {
            primary: Some(Skill::new(path, tier)),
            secondary: None,
        }
    }

    /// Adds a secondary skill.
    pub fn with_secondary(mut self, path: SkillPath, tier: u8) -> Self {
        self.secondary = Some(Skill::new(path, tier));
        self
    }

    /// Returns true if any skill on `path` has reached at least `tier`.
    pub fn meets_skill_requirement(&self, path: SkillPath, tier: u8) -> bool {
        [self.primary, self.secondary]
            .into_iter()
            .flatten()
            .any(|s| s.path == path && s.tier >= tier)
    }
}
