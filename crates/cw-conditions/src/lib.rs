//! Condition severity model for Clanwarden.
//!
//! Illnesses, injuries, and permanent conditions carry authored base values
//! and current values. Current duration and mortality are adjusted whenever
//! the medicine den can cover the whole clan, which is decided fresh on
//! every mutation from the roster and game mode in a [`CareContext`].

/// Authored condition data.
pub mod catalog;
/// Condition types and their treatment rules.
pub mod condition;
/// Care capacity tuning.
pub mod config;
/// Medical coverage computation.
pub mod coverage;
/// Error types.
pub mod error;

pub use catalog::ConditionCatalog;
pub use condition::{
    Condition, Congenital, Illness, IllnessDefinition, Injury, InjuryDefinition,
    PermanentCondition, PermanentConditionDefinition, Risk, Severity,
};
pub use config::CareConfig;
pub use coverage::{
    CareContext, amount_clanmembers_covered, effective_medic_count, medicine_cats_can_cover_clan,
};
pub use error::{ConditionError, ConditionResult};
