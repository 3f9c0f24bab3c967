//! Authored event constraints.

use std::str::FromStr;
use std::sync::OnceLock;

use cw_core::{Cat, SkillPath};
use serde::{Deserialize, Serialize};

use crate::error::EventResult;

/// Sentinel meaning "no constraint on this axis".
pub const ANY: &str = "any";

/// Returns true if an allow-list places no constraint: empty or `"any"`.
pub fn is_unconstrained(list: &[String]) -> bool {
    list.is_empty() || list.iter().any(|v| v == ANY)
}

/// Returns true if `list` contains `value`.
pub fn contains(list: &[String], value: &str) -> bool {
    list.iter().any(|v| v == value)
}

/// What a cat must (or must not) be to take part in an event.
///
/// Every list is optional. An empty list, or one containing `"any"`, leaves
/// its axis unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSpec {
    /// Allowed age categories.
    pub age: Vec<String>,
    /// Allowed ranks, plus the `"lost"` pseudo-status.
    pub status: Vec<String>,
    /// Allowed personality traits.
    #[serde(rename = "trait")]
    pub trait_name: Vec<String>,
    /// Forbidden personality traits.
    pub not_trait: Vec<String>,
    /// Skill requirements as `"PATH,tier"`, any one of which must be met.
    skill: Vec<String>,
    /// Skill requirements as `"PATH,tier"`, none of which may be met.
    not_skill: Vec<String>,
    /// Allowed backstories.
    pub backstory: Vec<String>,
    /// Allowed genders.
    pub gender: Vec<String>,
    /// Relationship tags toward the rest of the group.
    pub relationship_status: Vec<String>,
    #[serde(skip)]
    parsed_skills: SkillCache,
}

/// Lazily parsed skill lists. Never affects equality.
#[derive(Debug, Clone, Default)]
struct SkillCache(OnceLock<SkillRequirements>);

impl PartialEq for SkillCache {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for SkillCache {}

impl ConstraintSpec {
    /// An unconstrained specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a specification from its authored JSON form.
    pub fn from_json(json: &str) -> EventResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Restrict ages.
    pub fn with_age<S: Into<String>>(mut self, ages: impl IntoIterator<Item = S>) -> Self {
        self.age = ages.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict ranks.
    pub fn with_status<S: Into<String>>(mut self, statuses: impl IntoIterator<Item = S>) -> Self {
        self.status = statuses.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict traits.
    pub fn with_trait<S: Into<String>>(mut self, traits: impl IntoIterator<Item = S>) -> Self {
        self.trait_name = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Forbid traits.
    pub fn with_not_trait<S: Into<String>>(mut self, traits: impl IntoIterator<Item = S>) -> Self {
        self.not_trait = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Require any one of these skills.
    pub fn with_skill<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skill = skills.into_iter().map(Into::into).collect();
        self.parsed_skills = SkillCache::default();
        self
    }

    /// Forbid these skills.
    pub fn with_not_skill<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.not_skill = skills.into_iter().map(Into::into).collect();
        self.parsed_skills = SkillCache::default();
        self
    }

    /// Authored skill entries, any one of which must be met.
    pub fn skill(&self) -> &[String] {
        &self.skill
    }

    /// Authored skill entries, none of which may be met.
    pub fn not_skill(&self) -> &[String] {
        &self.not_skill
    }

    /// Both skill lists, parsed on first use. Malformed entries are logged
    /// once and skipped.
    pub fn skill_requirements(&self) -> &SkillRequirements {
        self.parsed_skills.0.get_or_init(|| SkillRequirements {
            required: SkillRequirement::parse_list(&self.skill),
            forbidden: SkillRequirement::parse_list(&self.not_skill),
        })
    }

    /// Restrict backstories.
    pub fn with_backstory<S: Into<String>>(
        mut self,
        backstories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.backstory = backstories.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict genders.
    pub fn with_gender<S: Into<String>>(mut self, genders: impl IntoIterator<Item = S>) -> Self {
        self.gender = genders.into_iter().map(Into::into).collect();
        self
    }

    /// Require relationship tags.
    pub fn with_relationship_status<S: Into<String>>(
        mut self,
        tags: impl IntoIterator<Item = S>,
    ) -> Self {
        self.relationship_status = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// The parsed `skill` and `not_skill` lists of a [`ConstraintSpec`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillRequirements {
    /// Any one of these must be met.
    pub required: Vec<SkillRequirement>,
    /// None of these may be met.
    pub forbidden: Vec<SkillRequirement>,
}

/// A parsed `"PATH,tier"` skill entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRequirement {
    /// Skill path.
    pub path: SkillPath,
    /// Minimum tier.
    pub tier: u8,
}

impl SkillRequirement {
    /// Returns true if `cat` meets this requirement.
    pub fn is_met_by(&self, cat: &Cat) -> bool {
        cat.skills.meets_skill_requirement(self.path, self.tier)
    }

    /// Parse a list of authored entries. Malformed entries are logged and
    /// skipped.
    pub fn parse_list(entries: &[String]) -> Vec<Self> {
        entries
            .iter()
            .filter_map(|entry| match entry.parse() {
                Ok(req) => Some(req),
                Err(()) => {
                    tracing::warn!(entry = %entry, "cat skill incorrectly formatted, skipping");
                    None
                }
            })
            .collect()
    }
}

impl FromStr for SkillRequirement {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(path), Some(tier)) = (parts.next(), parts.next()) else {
            return Err(());
        };
        let path = path.parse::<SkillPath>().map_err(|_| ())?;
        let tier = tier.trim().parse::<u8>().map_err(|_| ())?;
        Ok(Self { path, tier })
    }
}
