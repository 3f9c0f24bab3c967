//! Authored condition data, keyed by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::condition::{
    Illness, IllnessDefinition, Injury, InjuryDefinition, PermanentCondition,
    PermanentConditionDefinition,
};
use crate::coverage::CareContext;
use crate::error::{ConditionError, ConditionResult};

/// Every illness, injury, and permanent condition the game knows about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionCatalog {
    /// Illness definitions.
    pub illnesses: BTreeMap<String, IllnessDefinition>,
    /// Injury definitions.
    pub injuries: BTreeMap<String, InjuryDefinition>,
    /// Permanent condition definitions.
    pub permanent_conditions: BTreeMap<String, PermanentConditionDefinition>,
}

impl ConditionCatalog {
    /// Parse a catalog from a JSON document with `illnesses`, `injuries`,
    /// and `permanent_conditions` maps. Missing maps are empty.
    pub fn from_json(json: &str) -> ConditionResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(
            illnesses = catalog.illnesses.len(),
            injuries = catalog.injuries.len(),
            permanent = catalog.permanent_conditions.len(),
            "loaded condition catalog"
        );
        Ok(catalog)
    }

    /// Contract a named illness.
    pub fn illness(
        &self,
        name: &str,
        event_triggered: bool,
        care: &CareContext<'_>,
    ) -> ConditionResult<Illness> {
        let def = self.illnesses.get(name).ok_or_else(|| unknown("illness", name))?;
        Ok(Illness::new(name, def, event_triggered, care))
    }

    /// Suffer a named injury.
    pub fn injury(
        &self,
        name: &str,
        event_triggered: bool,
        care: &CareContext<'_>,
    ) -> ConditionResult<Injury> {
        let def = self.injuries.get(name).ok_or_else(|| unknown("injury", name))?;
        Ok(Injury::new(name, def, event_triggered, care))
    }

    /// Acquire a named permanent condition.
    pub fn permanent_condition(
        &self,
        name: &str,
        moons_until: u32,
        event_triggered: bool,
    ) -> ConditionResult<PermanentCondition> {
        let def = self
            .permanent_conditions
            .get(name)
            .ok_or_else(|| unknown("permanent condition", name))?;
        Ok(PermanentCondition::new(name, def, moons_until, event_triggered))
    }

    /// Returns true if any kind of condition has this name.
    pub fn contains(&self, name: &str) -> bool {
        self.illnesses.contains_key(name)
            || self.injuries.contains_key(name)
            || self.permanent_conditions.contains_key(name)
    }
}

fn unknown(kind: &'static str, name: &str) -> ConditionError {
    ConditionError::UnknownCondition {
        kind,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Congenital, Severity};
    use cw_core::{Cat, CatRank, GameMode, Roster};

    const CATALOG: &str = r#"{
        "illnesses": {
            "greencough": {
                "severity": "major",
                "mortality": 20,
                "infectiousness": 30,
                "duration": 8,
                "medicine_duration": 4,
                "medicine_mortality": 40,
                "risks": [{"name": "blackcough", "chance": 30}],
                "herbs": ["catmint"]
            }
        },
        "injuries": {
            "sprain": {
                "severity": "minor",
                "duration": 3,
                "medicine_duration": 2,
                "mortality": 0,
                "cause_permanent": ["weak leg"]
            }
        },
        "permanent_conditions": {
            "blind": {"severity": "major", "congenital": "sometimes"}
        }
    }"#;

    #[test]
    fn loads_all_three_kinds() {
        let catalog = ConditionCatalog::from_json(CATALOG).unwrap();
        assert!(catalog.contains("greencough"));
        assert!(catalog.contains("sprain"));
        assert!(catalog.contains("blind"));
        assert!(!catalog.contains("whitecough"));
        assert_eq!(catalog.injuries["sprain"].cause_permanent, ["weak leg".to_string()]);
        let blind = &catalog.permanent_conditions["blind"];
        assert_eq!(blind.severity, Severity::Major);
        assert_eq!(blind.congenital, Congenital::Sometimes);
    }

    #[test]
    fn instantiates_by_name() {
        let catalog = ConditionCatalog::from_json(CATALOG).unwrap();
        let roster = Roster::from_cats([Cat::new("Warrior", 30, CatRank::Warrior)]).unwrap();
        let care = CareContext::new(&roster, GameMode::Expanded);

        let illness = catalog.illness("greencough", false, &care).unwrap();
        assert_eq!(illness.current_duration(), 8);
        let injury = catalog.injury("sprain", true, &care).unwrap();
        assert!(injury.new);
        let blind = catalog.permanent_condition("blind", 3, false).unwrap();
        assert_eq!(blind.moons_until, 3);
    }

    #[test]
    fn unknown_names_error() {
        let catalog = ConditionCatalog::default();
        let roster = Roster::new();
        let care = CareContext::new(&roster, GameMode::Expanded);
        let err = catalog.illness("greencough", false, &care).unwrap_err();
        assert_eq!(err.to_string(), "unknown illness: greencough");
        assert!(catalog.permanent_condition("blind", 0, false).is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            ConditionCatalog::from_json("{"),
            Err(ConditionError::InvalidCatalog(_))
        ));
    }
}
