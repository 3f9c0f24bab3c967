//! Illnesses, injuries, and permanent conditions.
//!
//! Each condition keeps its authored base values and a pair of current
//! values. The current values only move through the explicit mutators,
//! which take a [`CareContext`] so the treatment check is visible at the
//! call site:
//!
//! - duration is capped at the treated duration while the medicine den can
//!   cover the clan;
//! - illness mortality is raised to at least the treated mortality while
//!   covered (mortality is a 1-in-N chance, so higher is safer);
//! - injury mortality is fixed at construction;
//! - permanent conditions have no duration at all.

use serde::{Deserialize, Serialize};

use crate::coverage::CareContext;

/// How serious a condition is. Drives retirement elsewhere in the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Never forces retirement.
    #[default]
    Minor,
    /// May force retirement.
    Major,
    /// Always forces retirement.
    Severe,
}

impl Severity {
    /// Returns true if a cat with this condition must retire.
    pub fn forces_retirement(self) -> bool {
        self == Self::Severe
    }

    /// Returns true if a cat with this condition might retire.
    pub fn may_force_retirement(self) -> bool {
        self >= Self::Major
    }
}

/// Whether a permanent condition can be present from birth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Congenital {
    /// Only acquired.
    #[default]
    Never,
    /// Sometimes present from birth.
    Sometimes,
    /// Always present from birth.
    Always,
}

/// A follow-on condition that may develop from this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    /// Name of the follow-on condition.
    pub name: String,
    /// 1-in-N chance per moon.
    pub chance: u32,
}

// ---------------------------------------------------------------------------
// Illness
// ---------------------------------------------------------------------------

/// Authored data for an illness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IllnessDefinition {
    /// Severity.
    pub severity: Severity,
    /// Untreated 1-in-N death chance.
    pub mortality: u32,
    /// 1-in-N chance to spread.
    pub infectiousness: u32,
    /// Untreated duration in moons.
    pub duration: u32,
    /// Duration in moons while treated.
    pub medicine_duration: u32,
    /// 1-in-N death chance while treated.
    pub medicine_mortality: u32,
    /// Follow-on conditions.
    pub risks: Vec<Risk>,
    /// Herbs that help.
    pub herbs: Vec<String>,
}

/// An illness a cat has contracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Illness {
    /// Illness name.
    pub name: String,
    /// Severity.
    pub severity: Severity,
    /// Untreated 1-in-N death chance.
    pub base_mortality: u32,
    /// 1-in-N chance to spread.
    pub infectiousness: u32,
    /// Untreated duration in moons.
    pub base_duration: u32,
    /// Duration cap while treated.
    pub treated_duration: u32,
    /// Mortality floor while treated.
    pub treated_mortality: u32,
    /// Follow-on conditions.
    pub risks: Vec<Risk>,
    /// Herbs that help.
    pub herbs: Vec<String>,
    /// Set when the illness was given by an event this moon.
    pub new: bool,
    current_duration: u32,
    current_mortality: u32,
}

impl Illness {
    /// Contract an illness. Current values start at the base values and are
    /// immediately adjusted for treatment.
    pub fn new(
        name: impl Into<String>,
        def: &IllnessDefinition,
        event_triggered: bool,
        care: &CareContext<'_>,
    ) -> Self {
        let mut illness = Self {
            name: name.into(),
            severity: def.severity,
            base_mortality: def.mortality,
            infectiousness: def.infectiousness,
            base_duration: def.duration,
            treated_duration: def.medicine_duration,
            treated_mortality: def.medicine_mortality,
            risks: def.risks.clone(),
            herbs: def.herbs.clone(),
            new: event_triggered,
            current_duration: def.duration,
            current_mortality: def.mortality,
        };
        illness.recompute(care);
        illness
    }

    /// Moons left, as last computed.
    pub fn current_duration(&self) -> u32 {
        self.current_duration
    }

    /// Current 1-in-N death chance, as last computed.
    pub fn current_mortality(&self) -> u32 {
        self.current_mortality
    }

    /// Set the remaining duration, capped at the base duration and, while
    /// treated, at the treated duration.
    pub fn set_current_duration(&mut self, value: u32, care: &CareContext<'_>) {
        let mut value = value.min(self.base_duration);
        if care.can_cover_clan() {
            value = value.min(self.treated_duration);
        }
        self.current_duration = value;
    }

    /// Set the mortality, raised to the treated mortality while treated.
    pub fn set_current_mortality(&mut self, value: u32, care: &CareContext<'_>) {
        let mut value = value;
        if care.can_cover_clan() {
            value = value.max(self.treated_mortality);
        }
        self.current_mortality = value;
    }

    /// Re-apply treatment to the current values.
    pub fn recompute(&mut self, care: &CareContext<'_>) {
        self.set_current_duration(self.current_duration, care);
        self.set_current_mortality(self.current_mortality, care);
    }
}

// ---------------------------------------------------------------------------
// Injury
// ---------------------------------------------------------------------------

/// Authored data for an injury.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjuryDefinition {
    /// Severity.
    pub severity: Severity,
    /// Untreated duration in moons.
    pub duration: u32,
    /// Duration in moons while treated.
    pub medicine_duration: u32,
    /// 1-in-N death chance.
    pub mortality: u32,
    /// Follow-on conditions.
    pub risks: Vec<Risk>,
    /// Infectiousness of an illness that comes with the injury.
    pub illness_infectiousness: Option<u32>,
    /// Other conditions given together with this one.
    pub also_got: Vec<String>,
    /// Permanent conditions this injury may leave behind.
    pub cause_permanent: Vec<String>,
    /// Herbs that help.
    pub herbs: Vec<String>,
}

/// An injury a cat has suffered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Injury {
    /// Injury name.
    pub name: String,
    /// Severity.
    pub severity: Severity,
    /// Untreated duration in moons.
    pub base_duration: u32,
    /// Duration cap while treated.
    pub treated_duration: u32,
    /// 1-in-N death chance.
    pub base_mortality: u32,
    /// Follow-on conditions.
    pub risks: Vec<Risk>,
    /// Infectiousness of an illness that comes with the injury.
    pub illness_infectiousness: Option<u32>,
    /// Other conditions given together with this one.
    pub also_got: Vec<String>,
    /// Permanent conditions this injury may leave behind.
    pub cause_permanent: Vec<String>,
    /// Herbs that help.
    pub herbs: Vec<String>,
    /// Set when the injury was given by an event this moon.
    pub new: bool,
    current_duration: u32,
    current_mortality: u32,
}

impl Injury {
    /// Suffer an injury. Medicine shortens injuries but never changes their
    /// mortality.
    pub fn new(
        name: impl Into<String>,
        def: &InjuryDefinition,
        event_triggered: bool,
        care: &CareContext<'_>,
    ) -> Self {
        let mut injury = Self {
            name: name.into(),
            severity: def.severity,
            base_duration: def.duration,
            treated_duration: def.medicine_duration,
            base_mortality: def.mortality,
            risks: def.risks.clone(),
            illness_infectiousness: def.illness_infectiousness,
            also_got: def.also_got.clone(),
            cause_permanent: def.cause_permanent.clone(),
            herbs: def.herbs.clone(),
            new: event_triggered,
            current_duration: def.duration,
            current_mortality: def.mortality,
        };
        injury.recompute(care);
        injury
    }

    /// Moons left, as last computed.
    pub fn current_duration(&self) -> u32 {
        self.current_duration
    }

    /// Current 1-in-N death chance.
    pub fn current_mortality(&self) -> u32 {
        self.current_mortality
    }

    /// Set the remaining duration, capped at the base duration and, while
    /// treated, at the treated duration.
    pub fn set_current_duration(&mut self, value: u32, care: &CareContext<'_>) {
        let mut value = value.min(self.base_duration);
        if care.can_cover_clan() {
            value = value.min(self.treated_duration);
        }
        self.current_duration = value;
    }

    /// Set the mortality as given.
    pub fn set_current_mortality(&mut self, value: u32) {
        self.current_mortality = value;
    }

    /// Re-apply treatment to the current duration.
    pub fn recompute(&mut self, care: &CareContext<'_>) {
        self.set_current_duration(self.current_duration, care);
    }
}

// ---------------------------------------------------------------------------
// Permanent condition
// ---------------------------------------------------------------------------

/// Authored data for a permanent condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermanentConditionDefinition {
    /// Severity.
    pub severity: Severity,
    /// Whether cats can be born with it.
    pub congenital: Congenital,
    /// 1-in-N death chance (0 = harmless).
    pub mortality: u32,
    /// Follow-on conditions.
    pub risks: Vec<Risk>,
    /// Infectiousness of an illness that comes with the condition.
    pub illness_infectiousness: Option<u32>,
    /// Herbs that help.
    pub herbs: Vec<String>,
}

/// A lifelong condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermanentCondition {
    /// Condition name.
    pub name: String,
    /// Severity.
    pub severity: Severity,
    /// Whether cats can be born with it.
    pub congenital: Congenital,
    /// Moons between contracting the condition and showing it.
    pub moons_until: u32,
    /// 1-in-N death chance.
    pub base_mortality: u32,
    /// Follow-on conditions.
    pub risks: Vec<Risk>,
    /// Infectiousness of an illness that comes with the condition.
    pub illness_infectiousness: Option<u32>,
    /// Herbs that help.
    pub herbs: Vec<String>,
    /// Set when the condition was given by an event this moon.
    pub new: bool,
    current_mortality: u32,
}

impl PermanentCondition {
    /// Acquire a permanent condition that shows after `moons_until` moons.
    pub fn new(
        name: impl Into<String>,
        def: &PermanentConditionDefinition,
        moons_until: u32,
        event_triggered: bool,
    ) -> Self {
        Self {
            name: name.into(),
            severity: def.severity,
            congenital: def.congenital,
            moons_until,
            base_mortality: def.mortality,
            risks: def.risks.clone(),
            illness_infectiousness: def.illness_infectiousness,
            herbs: def.herbs.clone(),
            new: event_triggered,
            current_mortality: def.mortality,
        }
    }

    /// Current 1-in-N death chance.
    pub fn current_mortality(&self) -> u32 {
        self.current_mortality
    }

    /// Set the mortality as given.
    pub fn set_current_mortality(&mut self, value: u32) {
        self.current_mortality = value;
    }

    /// Returns true once the condition has manifested.
    pub fn has_manifested(&self) -> bool {
        self.moons_until == 0
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Any condition a cat can have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// A passing illness.
    Illness(Illness),
    /// A passing injury.
    Injury(Injury),
    /// A lifelong condition.
    Permanent(PermanentCondition),
}

impl Condition {
    /// Condition name.
    pub fn name(&self) -> &str {
        match self {
            Self::Illness(c) => &c.name,
            Self::Injury(c) => &c.name,
            Self::Permanent(c) => &c.name,
        }
    }

    /// Severity.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Illness(c) => c.severity,
            Self::Injury(c) => c.severity,
            Self::Permanent(c) => c.severity,
        }
    }

    /// Herbs that help.
    pub fn herbs(&self) -> &[String] {
        match self {
            Self::Illness(c) => &c.herbs,
            Self::Injury(c) => &c.herbs,
            Self::Permanent(c) => &c.herbs,
        }
    }

    /// Follow-on conditions.
    pub fn risks(&self) -> &[Risk] {
        match self {
            Self::Illness(c) => &c.risks,
            Self::Injury(c) => &c.risks,
            Self::Permanent(c) => &c.risks,
        }
    }

    /// Moons left. Permanent conditions never end.
    pub fn current_duration(&self) -> Option<u32> {
        match self {
            Self::Illness(c) => Some(c.current_duration()),
            Self::Injury(c) => Some(c.current_duration()),
            Self::Permanent(_) => None,
        }
    }

    /// Current 1-in-N death chance.
    pub fn current_mortality(&self) -> u32 {
        match self {
            Self::Illness(c) => c.current_mortality(),
            Self::Injury(c) => c.current_mortality(),
            Self::Permanent(c) => c.current_mortality(),
        }
    }

    /// True if the condition was given by an event this moon.
    pub fn is_new(&self) -> bool {
        match self {
            Self::Illness(c) => c.new,
            Self::Injury(c) => c.new,
            Self::Permanent(c) => c.new,
        }
    }

    /// Re-apply treatment. Permanent conditions are unaffected.
    pub fn recompute(&mut self, care: &CareContext<'_>) {
        match self {
            Self::Illness(c) => c.recompute(care),
            Self::Injury(c) => c.recompute(care),
            Self::Permanent(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_core::{Cat, CatRank, GameMode, Roster};

    fn covered_roster() -> Roster {
        Roster::from_cats([
            Cat::new("Medic", 40, CatRank::MedicineCat),
            Cat::new("Warrior", 30, CatRank::Warrior),
        ])
        .unwrap()
    }

    fn uncovered_roster() -> Roster {
        Roster::from_cats([Cat::new("Warrior", 30, CatRank::Warrior)]).unwrap()
    }

    fn greencough() -> IllnessDefinition {
        IllnessDefinition {
            severity: Severity::Major,
            mortality: 20,
            infectiousness: 30,
            duration: 8,
            medicine_duration: 4,
            medicine_mortality: 40,
            risks: vec![Risk {
                name: "blackcough".to_string(),
                chance: 30,
            }],
            herbs: vec!["catmint".to_string()],
        }
    }

    #[test]
    fn untreated_illness_keeps_base_values() {
        let roster = uncovered_roster();
        let care = CareContext::new(&roster, GameMode::Expanded);
        let illness = Illness::new("greencough", &greencough(), false, &care);
        assert_eq!(illness.current_duration(), 8);
        assert_eq!(illness.current_mortality(), 20);
    }

    #[test]
    fn treated_illness_is_shorter_and_safer() {
        let roster = covered_roster();
        let care = CareContext::new(&roster, GameMode::Expanded);
        let illness = Illness::new("greencough", &greencough(), true, &care);
        assert_eq!(illness.current_duration(), 4);
        assert_eq!(illness.current_mortality(), 40);
        assert!(illness.new);
    }

    #[test]
    fn treated_duration_never_lengthens_an_illness() {
        let roster = covered_roster();
        let care = CareContext::new(&roster, GameMode::Expanded);
        let def = IllnessDefinition {
            duration: 2,
            medicine_duration: 5,
            ..greencough()
        };
        let illness = Illness::new("cold", &def, false, &care);
        assert_eq!(illness.current_duration(), 2);
    }

    #[test]
    fn recompute_applies_coverage_gained_later() {
        let sick_roster = uncovered_roster();
        let care = CareContext::new(&sick_roster, GameMode::Expanded);
        let mut illness = Illness::new("greencough", &greencough(), false, &care);
        illness.set_current_duration(7, &care);
        assert_eq!(illness.current_duration(), 7);

        let healed_roster = covered_roster();
        let care = CareContext::new(&healed_roster, GameMode::Expanded);
        illness.recompute(&care);
        assert_eq!(illness.current_duration(), 4);
        assert_eq!(illness.current_mortality(), 40);
    }

    #[test]
    fn setter_caps_at_base_duration() {
        let roster = uncovered_roster();
        let care = CareContext::new(&roster, GameMode::Expanded);
        let mut illness = Illness::new("greencough", &greencough(), false, &care);
        illness.set_current_duration(99, &care);
        assert_eq!(illness.current_duration(), 8);
    }

    #[test]
    fn injury_mortality_ignores_treatment() {
        let roster = covered_roster();
        let care = CareContext::new(&roster, GameMode::Expanded);
        let def = InjuryDefinition {
            severity: Severity::Severe,
            duration: 6,
            medicine_duration: 3,
            mortality: 10,
            ..Default::default()
        };
        let mut injury = Injury::new("broken back", &def, false, &care);
        assert_eq!(injury.current_duration(), 3);
        assert_eq!(injury.current_mortality(), 10);
        injury.recompute(&care);
        assert_eq!(injury.current_mortality(), 10);
    }

    #[test]
    fn permanent_condition_waits_to_manifest() {
        let def = PermanentConditionDefinition {
            severity: Severity::Major,
            congenital: Congenital::Sometimes,
            mortality: 0,
            ..Default::default()
        };
        let mut condition = PermanentCondition::new("blind", &def, 2, false);
        assert!(!condition.has_manifested());
        condition.moons_until = 0;
        assert!(condition.has_manifested());
        assert_eq!(condition.current_mortality(), 0);
    }

    #[test]
    fn condition_wrapper_accessors() {
        let roster = uncovered_roster();
        let care = CareContext::new(&roster, GameMode::Expanded);
        let mut condition =
            Condition::Illness(Illness::new("greencough", &greencough(), false, &care));
        assert_eq!(condition.name(), "greencough");
        assert_eq!(condition.severity(), Severity::Major);
        assert_eq!(condition.herbs(), ["catmint".to_string()]);
        assert_eq!(condition.risks()[0].name, "blackcough");
        assert_eq!(condition.current_duration(), Some(8));

        let roster = covered_roster();
        condition.recompute(&CareContext::new(&roster, GameMode::Expanded));
        assert_eq!(condition.current_duration(), Some(4));

        let permanent = Condition::Permanent(PermanentCondition::new(
            "lame",
            &PermanentConditionDefinition::default(),
            0,
            false,
        ));
        assert_eq!(permanent.current_duration(), None);
    }

    #[test]
    fn severity_retirement_policy() {
        assert!(Severity::Severe.forces_retirement());
        assert!(Severity::Major.may_force_retirement());
        assert!(!Severity::Minor.may_force_retirement());
    }
}
