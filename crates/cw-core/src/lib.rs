//! Core clan data model for Clanwarden.
//!
//! Defines the cats, ranks, skills, relationships, and clan context that the
//! condition and event crates read from. Nothing in here evaluates events;
//! it only answers questions about the current state of the clan.

/// Age categories and their moon ranges.
pub mod age;
/// Cats, their identifiers, and appearance.
pub mod cat;
/// The clan, its biome, season, and game mode.
pub mod clan;
/// Error types used throughout the crate.
pub mod error;
/// Ranks, standing, and status.
pub mod rank;
/// Directed relationship values between cats.
pub mod relationship;
/// The roster that owns every cat.
pub mod roster;
/// Skill paths and tiers.
pub mod skills;
/// Herb and fresh-kill supplies.
pub mod supply;

/// Re-export cat types.
pub use age::CatAge;
pub use cat::{Cat, CatId, Pelt, Personality};
/// Re-export clan context types.
pub use clan::{Clan, GameMode, OtherClan, Season};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export rank types.
pub use rank::{CatRank, Standing, Status};
/// Re-export relationship types.
pub use relationship::{Relationship, RelationshipValue};
/// Re-export the roster.
pub use roster::Roster;
/// Re-export skill types.
pub use skills::{Skill, SkillPath, Skills};
/// Re-export supply types.
pub use supply::{FreshkillPile, HerbSupply, SupplyRating};
