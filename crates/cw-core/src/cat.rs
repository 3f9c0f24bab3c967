use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::age::CatAge;
use crate::rank::{CatRank, Standing, Status};
use crate::relationship::Relationship;
use crate::skills::Skills;

/// Unique identifier for every cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CatId(pub Uuid);

impl CatId {
    /// Generate a new random cat ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CatId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Scar tags that mark a missing tail.
pub const TAIL_LOSS_SCARS: [&str; 2] = ["NOTAIL", "HALFTAIL"];
/// Scar tag that marks a missing ear.
pub const EAR_LOSS_SCAR: &str = "NOEAR";

/// Appearance details that matter to events. Only scars are tracked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pelt {
    /// Scar tags such as `NOTAIL` or `NOEAR`.
    pub scars: BTreeSet<String>,
}

impl Pelt {
    /// Returns true if the cat has lost all or half of its tail.
    pub fn missing_tail(&self) -> bool {
        TAIL_LOSS_SCARS.iter().any(|s| self.scars.contains(*s))
    }

    /// Returns true if the cat has lost an ear.
    pub fn missing_ear(&self) -> bool {
        self.scars.contains(EAR_LOSS_SCAR)
    }
}

/// A cat's personality. Only the trait name is consumed by events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    /// Trait name (e.g. `"bold"`, `"calm"`).
    #[serde(rename = "trait")]
    pub trait_name: String,
}

/// A cat in the clan. Read-only from the point of view of event filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    /// Unique identifier.
    pub id: CatId,
    /// Display name.
    pub name: String,
    /// Age in moons.
    pub moons: u32,
    /// Age category derived from `moons`.
    pub age: CatAge,
    /// Rank and standing.
    pub status: Status,
    /// Personality.
    pub personality: Personality,
    /// Learned skills.
    pub skills: Skills,
    /// Authored backstory tag (e.g. `"clanborn"`).
    pub backstory: String,
    /// Gender as authored in event files.
    pub gender: String,
    /// Appearance.
    pub pelt: Pelt,
    /// Current mates.
    pub mate: Vec<CatId>,
    /// Birth or adoptive parents.
    pub parents: Vec<CatId>,
    /// Current mentor, if apprenticed.
    pub mentor: Option<CatId>,
    /// Current apprentices.
    pub apprentice: Vec<CatId>,
    /// The player has opted this cat out of having kits.
    pub no_kits: bool,
    /// Accumulated experience points.
    pub experience: u32,
    /// True while illness or injury keeps the cat from its duties.
    pub incapacitated: bool,
    /// This cat's feelings toward other cats.
    pub relationships: HashMap<CatId, Relationship>,
}

impl Cat {
    /// Create a living clan member with a random ID.
    pub fn new(name: impl Into<String>, moons: u32, rank: CatRank) -> Self {
        Self::with_id(CatId::new(), name, moons, rank)
    }

    /// Create a living clan member with a pre-assigned ID.
    pub fn with_id(id: CatId, name: impl Into<String>, moons: u32, rank: CatRank) -> Self {
        Self {
            id,
            name: name.into(),
            moons,
            age: CatAge::from_moons(moons),
            status: Status::member(rank),
            personality: Personality::default(),
            skills: Skills::default(),
            backstory: "clanborn".to_string(),
            gender: "female".to_string(),
            pelt: Pelt::default(),
            mate: Vec::new(),
            parents: Vec::new(),
            mentor: None,
            apprentice: Vec::new(),
            no_kits: false,
            experience: 0,
            incapacitated: false,
            relationships: HashMap::new(),
        }
    }

    /// Set the personality trait.
    pub fn with_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.personality.trait_name = trait_name.into();
        self
    }

    /// Set the skills.
    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    /// Set the backstory tag.
    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }

    /// Set the gender.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Set the standing relative to the player's clan.
    pub fn with_standing(mut self, standing: Standing) -> Self {
        self.status.standing = standing;
        self
    }

    /// Add a scar tag.
    pub fn with_scar(mut self, scar: impl Into<String>) -> Self {
        self.pelt.scars.insert(scar.into());
        self
    }

    /// Add a parent.
    pub fn with_parent(mut self, parent: CatId) -> Self {
        self.parents.push(parent);
        self
    }

    /// Set accumulated experience.
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    /// Record this cat's feelings toward another cat.
    pub fn with_relationship(mut self, other: CatId, relationship: Relationship) -> Self {
        self.relationships.insert(other, relationship);
        self
    }

    /// Returns true if the cat cannot currently perform its duties.
    pub fn not_working(&self) -> bool {
        self.incapacitated
    }

    /// Returns true if `other` is one of this cat's parents.
    pub fn is_child_of(&self, other: &Cat) -> bool {
        self.parents.contains(&other.id)
    }

    /// Returns true if both cats share at least one parent.
    pub fn is_sibling(&self, other: &Cat) -> bool {
        self.id != other.id && self.parents.iter().any(|p| other.parents.contains(p))
    }

    /// Returns true for parents, children and siblings.
    pub fn is_related(&self, other: &Cat) -> bool {
        self.is_child_of(other) || other.is_child_of(self) || self.is_sibling(other)
    }

    /// Returns true if `other` could become this cat's mate.
    ///
    /// Both cats must be at least young adults, no more than one life stage
    /// apart, unrelated, not in a mentor/apprentice pairing, and living in
    /// the clan.
    pub fn is_potential_mate(&self, other: &Cat) -> bool {
        if self.id == other.id {
            return false;
        }
        if !self.status.alive_in_player_clan() || !other.status.alive_in_player_clan() {
            return false;
        }
        if self.age < CatAge::YoungAdult || other.age < CatAge::YoungAdult {
            return false;
        }
        let gap = (self.age as i32 - other.age as i32).abs();
        if gap > 1 {
            return false;
        }
        if self.is_related(other) {
            return false;
        }
        if self.mentor == Some(other.id) || other.mentor == Some(self.id) {
            return false;
        }
        true
    }
}
