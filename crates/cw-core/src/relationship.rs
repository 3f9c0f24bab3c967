use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How one cat feels about another. Directed: the record lives on the cat
/// doing the feeling. Every value is 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Romantic interest.
    pub romantic_love: i32,
    /// Friendship.
    pub platonic_like: i32,
    /// Dislike.
    pub dislike: i32,
    /// Admiration.
    pub admiration: i32,
    /// Comfort in the other's presence.
    pub comfortable: i32,
    /// Jealousy.
    pub jealousy: i32,
    /// Trust.
    pub trust: i32,
}

impl Relationship {
    /// Highest value any feeling can take.
    pub const MAX_VALUE: i32 = 100;

    /// Reads the value of a single feeling.
    pub fn value(&self, kind: RelationshipValue) -> i32 {
        match kind {
            RelationshipValue::Romantic => self.romantic_love,
            RelationshipValue::Platonic => self.platonic_like,
            RelationshipValue::Dislike => self.dislike,
            RelationshipValue::Admiration => self.admiration,
            RelationshipValue::Comfortable => self.comfortable,
            RelationshipValue::Jealousy => self.jealousy,
            RelationshipValue::Trust => self.trust,
        }
    }

    /// Sets a single feeling, clamped to 0..=100.
    pub fn with_value(mut self, kind: RelationshipValue, value: i32) -> Self {
        let value = value.clamp(0, Self::MAX_VALUE);
        match kind {
            RelationshipValue::Romantic => self.romantic_love = value,
            RelationshipValue::Platonic => self.platonic_like = value,
            RelationshipValue::Dislike => self.dislike = value,
            RelationshipValue::Admiration => self.admiration = value,
            RelationshipValue::Comfortable => self.comfortable = value,
            RelationshipValue::Jealousy => self.jealousy = value,
            RelationshipValue::Trust => self.trust = value,
        }
        self
    }
}

/// One axis of a [`Relationship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipValue {
    /// `romantic_love`.
    Romantic,
    /// `platonic_like`.
    Platonic,
    /// `dislike`.
    Dislike,
    /// `admiration`.
    Admiration,
    /// `comfortable`.
    Comfortable,
    /// `jealousy`.
    Jealousy,
    /// `trust`.
    Trust,
}

impl RelationshipValue {
    /// The prefix used in authored relationship tags (e.g. `romantic_30`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Romantic => "romantic",
            Self::Platonic => "platonic",
            Self::Dislike => "dislike",
            Self::Admiration => "admiration",
            Self::Comfortable => "comfortable",
            Self::Jealousy => "jealousy",
            Self::Trust => "trust",
        }
    }
}

impl fmt::Display for RelationshipValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationshipValue {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "romantic" => Ok(Self::Romantic),
            "platonic" => Ok(Self::Platonic),
            "dislike" => Ok(Self::Dislike),
            "admiration" => Ok(Self::Admiration),
            "comfortable" => Ok(Self::Comfortable),
            "jealousy" => Ok(Self::Jealousy),
            "trust" => Ok(Self::Trust),
            _ => Err(()),
        }
    }
}
