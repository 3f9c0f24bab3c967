//! Event eligibility for Clanwarden.
//!
//! Decides whether the clan's situation suits an event, whether a single
//! cat may take part in it, and which cat from a roster gets picked. All
//! checks are read-only: they take the clan state through an
//! [`EventContext`] and never change it.

/// Tunable thresholds.
pub mod config;
/// Authored event constraints.
pub mod constraint;
/// Clan-level predicates and the evaluation context.
pub mod context;
/// Per-cat eligibility.
pub mod eligibility;
/// Error types.
pub mod error;
/// Relationship tags between cats.
pub mod relations;
/// Roster filtering and random selection.
pub mod selection;
/// Calendar holidays.
pub mod special_dates;

pub use config::{Bands, FilterConfig};
pub use constraint::{ANY, ConstraintSpec, SkillRequirement, SkillRequirements};
pub use context::{
    EventContext, event_for_clan_relations, event_for_freshkill_supply, event_for_herb_supply,
    event_for_location, event_for_reputation, event_for_season, event_for_tags,
};
pub use eligibility::{EventQuery, can_receive_injuries, character_is_eligible};
pub use error::{EventError, EventResult};
pub use relations::{RelationshipFilter, RelationshipTag, RosterRelationshipFilter};
pub use selection::{
    SelectionQuery, eligible_characters, select_eligible_character, select_eligible_character_id,
};
pub use special_dates::{SpecialDate, SpecialDateCalendar, SpecialDates};
