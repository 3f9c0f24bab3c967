//! Per-cat eligibility: can this one cat take part in the event?

use cw_core::{Cat, CatAge, CatRank};

use crate::constraint::{ConstraintSpec, SkillRequirement, contains, is_unconstrained};
use crate::context::EventContext;

/// Injury that needs a whole tail.
pub const MANGLED_TAIL: &str = "mangled tail";
/// Injury that needs an intact ear.
pub const TORN_EAR: &str = "torn ear";

/// The event-specific inputs to an eligibility check.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventQuery<'a> {
    /// Every cat taking part, in event order.
    pub group: &'a [&'a Cat],
    /// Event identifier, for diagnostics.
    pub event_id: Option<&'a str>,
    /// Patrol leader, for patrol events.
    pub patrol_leader: Option<&'a Cat>,
    /// Injuries the event may inflict on the cat.
    pub prospective_injuries: &'a [String],
}

impl<'a> EventQuery<'a> {
    /// A query with no group, leader or injuries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group.
    pub fn with_group(mut self, group: &'a [&'a Cat]) -> Self {
        self.group = group;
        self
    }

    /// Set the event identifier.
    pub fn with_event_id(mut self, event_id: &'a str) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Set the patrol leader.
    pub fn with_patrol_leader(mut self, leader: &'a Cat) -> Self {
        self.patrol_leader = Some(leader);
        self
    }

    /// Set the injuries the event may inflict.
    pub fn with_injuries(mut self, injuries: &'a [String]) -> Self {
        self.prospective_injuries = injuries;
        self
    }
}

/// One independent constraint on a single cat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Age,
    Status,
    Trait,
    Skill,
    Backstory,
    Gender,
}

impl Axis {
    const ORDER: [Axis; 6] = [
        Axis::Age,
        Axis::Status,
        Axis::Trait,
        Axis::Skill,
        Axis::Backstory,
        Axis::Gender,
    ];

    fn admits(self, constraints: &ConstraintSpec, cat: &Cat) -> bool {
        match self {
            Axis::Age => age_allowed(cat, &constraints.age),
            Axis::Status => status_allowed(cat, &constraints.status),
            Axis::Trait => {
                trait_allowed(cat, &constraints.trait_name)
                    && !trait_denied(cat, &constraints.not_trait)
            }
            Axis::Skill => {
                let skills = constraints.skill_requirements();
                (constraints.skill().is_empty() || has_any_skill(cat, &skills.required))
                    && !has_any_skill(cat, &skills.forbidden)
            }
            Axis::Backstory => list_allows(&constraints.backstory, &cat.backstory),
            Axis::Gender => list_allows(&constraints.gender, &cat.gender),
        }
    }
}

/// Returns true if `cat` may take part in an event with these constraints.
///
/// Checks age, status, trait, skills, backstory and gender in turn and stops
/// at the first failure. Then rejects cats that cannot receive the
/// prospective injuries, and finally checks relationship tags against the
/// query's group.
pub fn character_is_eligible(
    constraints: &ConstraintSpec,
    cat: &Cat,
    ctx: &EventContext<'_>,
    query: &EventQuery<'_>,
) -> bool {
    if let Some(axis) = Axis::ORDER.iter().find(|a| !a.admits(constraints, cat)) {
        tracing::trace!(cat = %cat.id, ?axis, "cat fails constraint");
        return false;
    }

    if !can_receive_injuries(cat, query.prospective_injuries) {
        return false;
    }

    if constraints.relationship_status.is_empty() {
        return true;
    }

    if !relationship_possible(cat, &constraints.relationship_status, ctx, query) {
        return false;
    }

    query.group.is_empty()
        || ctx.relationships.filter_relationship_type(
            query.group,
            &constraints.relationship_status,
            query.event_id,
            query.patrol_leader,
        )
}

/// Cheap checks that rule out relationship tags this cat can never meet.
fn relationship_possible(
    cat: &Cat,
    tags: &[String],
    ctx: &EventContext<'_>,
    query: &EventQuery<'_>,
) -> bool {
    tags.iter().all(|tag| match tag.as_str() {
        "siblings" => !ctx.roster.get_siblings(cat).is_empty(),
        "mates" => !cat.mate.is_empty(),
        "mates_with_pl" => query
            .patrol_leader
            .is_some_and(|leader| cat.mate.contains(&leader.id)),
        "parent/child" => !ctx.roster.get_children(cat).is_empty(),
        "child/parent" => !ctx.roster.get_parents(cat).is_empty(),
        "mentor/app" => !cat.apprentice.is_empty(),
        "app/mentor" => cat.mentor.is_some(),
        _ => true,
    })
}

// ---------------------------------------------------------------------------
// Shared axis checks
// ---------------------------------------------------------------------------

/// Returns true if `value` is admitted by an allow-list.
pub(crate) fn list_allows(list: &[String], value: &str) -> bool {
    is_unconstrained(list) || contains(list, value)
}

/// Age check for one cat. Newborns only pass when listed by name.
pub(crate) fn age_allowed(cat: &Cat, ages: &[String]) -> bool {
    if cat.age == CatAge::Newborn && !age_listed(cat, ages) {
        return false;
    }
    is_unconstrained(ages) || age_listed(cat, ages)
}

/// Returns true if the cat's age category is named in `ages`.
pub(crate) fn age_listed(cat: &Cat, ages: &[String]) -> bool {
    ages.iter()
        .any(|a| a.parse::<CatAge>().is_ok_and(|age| age == cat.age))
}

/// Status check. `"lost"` admits lost and exiled cats.
pub(crate) fn status_allowed(cat: &Cat, statuses: &[String]) -> bool {
    if is_unconstrained(statuses) {
        return true;
    }
    if statuses
        .iter()
        .any(|s| s.parse::<CatRank>().is_ok_and(|rank| rank == cat.status.rank))
    {
        return true;
    }
    contains(statuses, "lost") && cat.status.is_lost()
}

pub(crate) fn trait_allowed(cat: &Cat, traits: &[String]) -> bool {
    list_allows(traits, &cat.personality.trait_name)
}

pub(crate) fn trait_denied(cat: &Cat, not_traits: &[String]) -> bool {
    contains(not_traits, &cat.personality.trait_name)
}

pub(crate) fn has_any_skill(cat: &Cat, requirements: &[SkillRequirement]) -> bool {
    requirements.iter().any(|req| req.is_met_by(cat))
}

/// Returns false if the event would give `cat` an injury it cannot get.
pub fn can_receive_injuries(cat: &Cat, injuries: &[String]) -> bool {
    if contains(injuries, MANGLED_TAIL) && cat.pelt.missing_tail() {
        return false;
    }
    !(contains(injuries, TORN_EAR) && cat.pelt.missing_ear())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cw_core::{Clan, Roster, SkillPath, Skills, Standing};

    use crate::config::FilterConfig;
    use crate::relations::RosterRelationshipFilter;
    use crate::special_dates::SpecialDateCalendar;

    struct Fixture {
        clan: Clan,
        roster: Roster,
        calendar: SpecialDateCalendar,
        config: FilterConfig,
    }

    impl Fixture {
        fn new(cats: Vec<Cat>) -> Self {
            Self {
                clan: Clan::new("ThunderClan"),
                roster: Roster::from_cats(cats).unwrap(),
                calendar: SpecialDateCalendar::empty()
                    .pinned_to(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
                config: FilterConfig::default(),
            }
        }

        fn eligible(&self, spec: &ConstraintSpec, cat: &Cat, query: &EventQuery<'_>) -> bool {
            let filter = RosterRelationshipFilter::new(&self.roster);
            let ctx = EventContext::new(&self.clan, &self.roster, &filter, &self.calendar, &self.config);
            character_is_eligible(spec, cat, &ctx, query)
        }
    }

    #[test]
    fn unconstrained_spec_admits_everyone_but_newborns() {
        let warrior = Cat::new("Brackenfur", 30, CatRank::Warrior);
        let newborn = Cat::new("Tinykit", 0, CatRank::Newborn);
        let fx = Fixture::new(vec![]);
        let spec = ConstraintSpec::new();
        assert!(fx.eligible(&spec, &warrior, &EventQuery::new()));
        assert!(!fx.eligible(&spec, &newborn, &EventQuery::new()));
        assert!(fx.eligible(&spec.with_age(["newborn"]), &newborn, &EventQuery::new()));
    }

    #[test]
    fn age_list() {
        let fx = Fixture::new(vec![]);
        let cat = Cat::new("Cloudtail", 30, CatRank::Warrior);
        let spec = ConstraintSpec::new().with_age(["young adult", "adult"]);
        assert!(fx.eligible(&spec, &cat, &EventQuery::new()));
        let spec = ConstraintSpec::new().with_age(["senior"]);
        assert!(!fx.eligible(&spec, &cat, &EventQuery::new()));
    }

    #[test]
    fn status_with_lost() {
        let fx = Fixture::new(vec![]);
        let lost = Cat::new("Ravenpaw", 30, CatRank::Warrior).with_standing(Standing::Exiled);
        let spec = ConstraintSpec::new().with_status(["lost"]);
        assert!(fx.eligible(&spec, &lost, &EventQuery::new()));
        let home = Cat::new("Graystripe", 30, CatRank::Warrior);
        assert!(!fx.eligible(&spec, &home, &EventQuery::new()));
        let spec = ConstraintSpec::new().with_status(["medicine cat", "warrior"]);
        assert!(fx.eligible(&spec, &home, &EventQuery::new()));
    }

    #[test]
    fn trait_allow_and_deny() {
        let fx = Fixture::new(vec![]);
        let bold = Cat::new("Lionheart", 50, CatRank::Warrior).with_trait("bold");
        assert!(fx.eligible(&ConstraintSpec::new().with_trait(["bold", "fierce"]), &bold, &EventQuery::new()));
        assert!(!fx.eligible(&ConstraintSpec::new().with_trait(["calm"]), &bold, &EventQuery::new()));
        assert!(!fx.eligible(&ConstraintSpec::new().with_not_trait(["bold"]), &bold, &EventQuery::new()));
    }

    #[test]
    fn skill_allow_and_deny() {
        let fx = Fixture::new(vec![]);
        let hunter = Cat::new("Sandstorm", 40, CatRank::Warrior)
            .with_skills(Skills::primary(SkillPath::Hunter, 2));
        let spec = ConstraintSpec::new().with_skill(["HUNTER,1", "FIGHTER,3"]);
        assert!(fx.eligible(&spec, &hunter, &EventQuery::new()));
        let spec = ConstraintSpec::new().with_skill(["HUNTER,3"]);
        assert!(!fx.eligible(&spec, &hunter, &EventQuery::new()));
        let spec = ConstraintSpec::new().with_not_skill(["HUNTER,2"]);
        assert!(!fx.eligible(&spec, &hunter, &EventQuery::new()));
        let spec = ConstraintSpec::new().with_not_skill(["FIGHTER,1"]);
        assert!(fx.eligible(&spec, &hunter, &EventQuery::new()));
    }

    #[test]
    fn malformed_skill_entries_are_skipped() {
        let fx = Fixture::new(vec![]);
        let hunter = Cat::new("Sandstorm", 40, CatRank::Warrior)
            .with_skills(Skills::primary(SkillPath::Hunter, 2));
        let spec = ConstraintSpec::new().with_skill(["HUNTER", "HUNTER,1"]);
        assert!(fx.eligible(&spec, &hunter, &EventQuery::new()));
        // Only malformed entries: nothing can be met.
        let spec = ConstraintSpec::new().with_skill(["HUNTER"]);
        assert!(!fx.eligible(&spec, &hunter, &EventQuery::new()));
    }

    #[test]
    fn backstory_and_gender() {
        let fx = Fixture::new(vec![]);
        let cat = Cat::new("Firestar", 50, CatRank::Leader)
            .with_backstory("kittypet1")
            .with_gender("male");
        assert!(fx.eligible(&ConstraintSpec::new().with_backstory(["kittypet1"]), &cat, &EventQuery::new()));
        assert!(!fx.eligible(&ConstraintSpec::new().with_backstory(["clanborn"]), &cat, &EventQuery::new()));
        assert!(fx.eligible(&ConstraintSpec::new().with_gender(["male"]), &cat, &EventQuery::new()));
        assert!(!fx.eligible(&ConstraintSpec::new().with_gender(["female"]), &cat, &EventQuery::new()));
    }

    #[test]
    fn injury_compatibility() {
        let fx = Fixture::new(vec![]);
        let stub = Cat::new("Stubtail", 30, CatRank::Warrior).with_scar("NOTAIL");
        let torn = Cat::new("Tornear", 30, CatRank::Warrior).with_scar("NOEAR");
        let tail = vec![MANGLED_TAIL.to_string()];
        let ear = vec![TORN_EAR.to_string()];
        let spec = ConstraintSpec::new();
        assert!(!fx.eligible(&spec, &stub, &EventQuery::new().with_injuries(&tail)));
        assert!(fx.eligible(&spec, &stub, &EventQuery::new().with_injuries(&ear)));
        assert!(!fx.eligible(&spec, &torn, &EventQuery::new().with_injuries(&ear)));
    }

    #[test]
    fn relationship_prechecks_fail_fast() {
        let fx = Fixture::new(vec![]);
        let single = Cat::new("Longtail", 40, CatRank::Warrior);
        for tag in ["mates", "siblings", "parent/child", "child/parent", "mentor/app", "app/mentor"] {
            let spec = ConstraintSpec::new().with_relationship_status([tag]);
            assert!(!fx.eligible(&spec, &single, &EventQuery::new()), "{tag}");
        }
        let spec = ConstraintSpec::new().with_relationship_status(["mates_with_pl"]);
        assert!(!fx.eligible(&spec, &single, &EventQuery::new()));
    }

    #[test]
    fn relationship_tags_delegate_to_the_filter() {
        let mut roster = Roster::new();
        let a = roster.add_cat(Cat::new("Firestar", 50, CatRank::Leader)).unwrap();
        let b = roster.add_cat(Cat::new("Sandstorm", 48, CatRank::Warrior)).unwrap();
        let c = roster.add_cat(Cat::new("Cinderpelt", 40, CatRank::Warrior)).unwrap();
        roster.set_mates(a, b).unwrap();
        roster.set_mates(a, c).unwrap();

        let fx = Fixture {
            roster,
            ..Fixture::new(vec![])
        };
        let (a, b, c) = (
            fx.roster.fetch_cat(a).unwrap(),
            fx.roster.fetch_cat(b).unwrap(),
            fx.roster.fetch_cat(c).unwrap(),
        );
        let spec = ConstraintSpec::new().with_relationship_status(["mates"]);
        let pair = [b, a];
        assert!(fx.eligible(&spec, b, &EventQuery::new().with_group(&pair).with_event_id("mates_walk")));
        let trio = [b, a, c];
        assert!(!fx.eligible(&spec, b, &EventQuery::new().with_group(&trio)));

        let spec = ConstraintSpec::new().with_relationship_status(["mates_with_pl"]);
        let patrol = [a, b, c];
        let query = EventQuery::new().with_group(&patrol).with_patrol_leader(a);
        assert!(fx.eligible(&spec, b, &query));
    }
}
