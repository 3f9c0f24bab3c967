//! Pick one eligible cat from a list of candidates.
//!
//! The candidate list is narrowed one axis at a time, which is cheaper than
//! checking every axis for every cat when an early axis rules most of the
//! clan out. Relationship tags are checked last, against a comparison cat.

use cw_core::{Cat, CatId};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::constraint::{ConstraintSpec, contains, is_unconstrained};
use crate::context::EventContext;
use crate::eligibility::{
    age_listed, can_receive_injuries, has_any_skill, list_allows, status_allowed, trait_allowed,
    trait_denied,
};

/// The event-specific inputs to a roster selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionQuery<'a> {
    /// Cat the chosen cat must relate to.
    pub comparison_cat: Option<&'a Cat>,
    /// Relationship tags the comparison cat must have toward the chosen cat.
    pub comparison_rel_status: &'a [String],
    /// Injuries the event may inflict on the chosen cat.
    pub prospective_injuries: &'a [String],
}

impl<'a> SelectionQuery<'a> {
    /// A query with no comparison cat and no injuries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison cat.
    pub fn with_comparison_cat(mut self, cat: &'a Cat) -> Self {
        self.comparison_cat = Some(cat);
        self
    }

    /// Set the comparison cat's relationship tags toward the chosen cat.
    pub fn with_comparison_rel_status(mut self, tags: &'a [String]) -> Self {
        self.comparison_rel_status = tags;
        self
    }

    /// Set the injuries the event may inflict.
    pub fn with_injuries(mut self, injuries: &'a [String]) -> Self {
        self.prospective_injuries = injuries;
        self
    }
}

/// A set-level filter over candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RosterAxis {
    Age,
    Status,
    Skill,
    NotSkill,
    Trait,
    NotTrait,
    Backstory,
    Gender,
}

impl RosterAxis {
    const ORDER: [RosterAxis; 8] = [
        RosterAxis::Age,
        RosterAxis::Status,
        RosterAxis::Skill,
        RosterAxis::NotSkill,
        RosterAxis::Trait,
        RosterAxis::NotTrait,
        RosterAxis::Backstory,
        RosterAxis::Gender,
    ];

    fn values(self, constraints: &ConstraintSpec) -> &[String] {
        match self {
            RosterAxis::Age => &constraints.age,
            RosterAxis::Status => &constraints.status,
            RosterAxis::Skill => constraints.skill(),
            RosterAxis::NotSkill => constraints.not_skill(),
            RosterAxis::Trait => &constraints.trait_name,
            RosterAxis::NotTrait => &constraints.not_trait,
            RosterAxis::Backstory => &constraints.backstory,
            RosterAxis::Gender => &constraints.gender,
        }
    }

    fn narrow(self, constraints: &ConstraintSpec, values: &[String], cats: &mut Vec<&Cat>) {
        match self {
            RosterAxis::Age => {
                if !is_unconstrained(values) {
                    cats.retain(|c| age_listed(c, values));
                }
            }
            RosterAxis::Status => cats.retain(|c| status_allowed(c, values)),
            RosterAxis::Skill => {
                let required = &constraints.skill_requirements().required;
                cats.retain(|c| has_any_skill(c, required));
            }
            RosterAxis::NotSkill => {
                let forbidden = &constraints.skill_requirements().forbidden;
                cats.retain(|c| !has_any_skill(c, forbidden));
            }
            RosterAxis::Trait => cats.retain(|c| trait_allowed(c, values)),
            RosterAxis::NotTrait => cats.retain(|c| !trait_denied(c, values)),
            RosterAxis::Backstory => cats.retain(|c| list_allows(values, &c.backstory)),
            RosterAxis::Gender => cats.retain(|c| list_allows(values, &c.gender)),
        }
    }
}

/// Choose one cat from `candidates` that satisfies `constraints`.
///
/// Returns `None` as soon as any filter leaves no candidates. The pick is
/// uniform over the cats that survive every filter.
pub fn select_eligible_character<'c, R: Rng + ?Sized>(
    constraints: &ConstraintSpec,
    candidates: &[&'c Cat],
    ctx: &EventContext<'_>,
    query: &SelectionQuery<'_>,
    rng: &mut R,
) -> Option<&'c Cat> {
    let allowed = eligible_characters(constraints, candidates, ctx, query);
    allowed.choose(rng).copied()
}

/// Like [`select_eligible_character`], returning the chosen cat's ID.
pub fn select_eligible_character_id<R: Rng + ?Sized>(
    constraints: &ConstraintSpec,
    candidates: &[&Cat],
    ctx: &EventContext<'_>,
    query: &SelectionQuery<'_>,
    rng: &mut R,
) -> Option<CatId> {
    select_eligible_character(constraints, candidates, ctx, query, rng).map(|cat| cat.id)
}

/// Every cat in `candidates` that satisfies `constraints`, in candidate
/// order.
pub fn eligible_characters<'c>(
    constraints: &ConstraintSpec,
    candidates: &[&'c Cat],
    ctx: &EventContext<'_>,
    query: &SelectionQuery<'_>,
) -> Vec<&'c Cat> {
    let mut allowed = candidates.to_vec();

    for axis in RosterAxis::ORDER {
        let values = axis.values(constraints);
        if values.is_empty() {
            continue;
        }
        axis.narrow(constraints, values, &mut allowed);
        tracing::trace!(?axis, remaining = allowed.len(), "narrowed candidates");
        if allowed.is_empty() {
            return allowed;
        }
    }

    if !query.prospective_injuries.is_empty() {
        allowed.retain(|c| can_receive_injuries(c, query.prospective_injuries));
        if allowed.is_empty() {
            return allowed;
        }
    }

    if query.comparison_rel_status.is_empty() && constraints.relationship_status.is_empty() {
        return allowed;
    }

    let Some(comparison) = query.comparison_cat else {
        tracing::warn!("relationship constraints given without a comparison cat");
        return Vec::new();
    };

    let remaining = narrow_by_relation(&mut allowed, comparison, query.comparison_rel_status, ctx);

    allowed.retain(|&cat| {
        if !remaining.is_empty()
            && !ctx
                .relationships
                .filter_relationship_type(&[comparison, cat], &remaining, None, None)
        {
            return false;
        }
        constraints.relationship_status.is_empty()
            || ctx.relationships.filter_relationship_type(
                &[cat, comparison],
                &constraints.relationship_status,
                None,
                None,
            )
    });
    tracing::debug!(remaining = allowed.len(), "relationship filter applied");
    allowed
}

/// Keep only cats standing in the requested family, mate, or mentor
/// relation to `comparison`. Returns the tags still left to check.
///
/// Only one of `siblings`, `mates`, `not_mates`, `parent/child` and
/// `child/parent` is applied, in that order of precedence. A mentor tag may
/// combine with any of them.
fn narrow_by_relation(
    cats: &mut Vec<&Cat>,
    comparison: &Cat,
    tags: &[String],
    ctx: &EventContext<'_>,
) -> Vec<String> {
    let mut remaining = tags.to_vec();
    let mut take = |tag: &str| {
        let present = contains(&remaining, tag);
        if present {
            remaining.retain(|t| t != tag);
        }
        present
    };

    if take("siblings") {
        let siblings = ctx.roster.get_siblings(comparison);
        cats.retain(|c| siblings.contains(&c.id));
    } else if take("mates") {
        cats.retain(|c| comparison.mate.contains(&c.id));
    } else if take("not_mates") {
        cats.retain(|c| !comparison.mate.contains(&c.id));
    } else if take("parent/child") {
        let children = ctx.roster.get_children(comparison);
        cats.retain(|c| children.contains(&c.id));
    } else if take("child/parent") {
        let parents = ctx.roster.get_parents(comparison);
        cats.retain(|c| parents.contains(&c.id));
    }

    if take("mentor/app") {
        cats.retain(|c| comparison.apprentice.contains(&c.id));
    } else if take("app/mentor") {
        cats.retain(|c| comparison.mentor == Some(c.id));
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cw_core::{CatRank, Clan, Relationship, RelationshipValue, Roster, SkillPath, Skills};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

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
        fn new(roster: Roster) -> Self {
            Self {
                clan: Clan::new("ThunderClan"),
                roster,
                calendar: SpecialDateCalendar::empty()
                    .pinned_to(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
                config: FilterConfig::default(),
            }
        }

        fn eligible(&self, spec: &ConstraintSpec, query: &SelectionQuery<'_>) -> Vec<CatId> {
            let filter = RosterRelationshipFilter::new(&self.roster);
            let ctx = EventContext::new(&self.clan, &self.roster, &filter, &self.calendar, &self.config);
            let candidates: Vec<&Cat> = self.roster.living_cats().collect();
            eligible_characters(spec, &candidates, &ctx, query)
                .into_iter()
                .map(|c| c.id)
                .collect()
        }

        fn pick(&self, spec: &ConstraintSpec, seed: u64) -> Option<CatId> {
            let filter = RosterRelationshipFilter::new(&self.roster);
            let ctx = EventContext::new(&self.clan, &self.roster, &filter, &self.calendar, &self.config);
            let candidates: Vec<&Cat> = self.roster.living_cats().collect();
            let mut rng = StdRng::seed_from_u64(seed);
            select_eligible_character_id(spec, &candidates, &ctx, &SelectionQuery::new(), &mut rng)
        }
    }

    #[test]
    fn empty_axis_means_no_one() {
        let roster = Roster::from_cats([Cat::new("A", 30, CatRank::Warrior).with_trait("bold")]).unwrap();
        let fx = Fixture::new(roster);
        assert_eq!(fx.pick(&ConstraintSpec::new().with_trait(["calm"]), 1), None);
    }

    #[test]
    fn unconstrained_pick_returns_a_candidate() {
        let cat = Cat::new("A", 30, CatRank::Warrior);
        let id = cat.id;
        let fx = Fixture::new(Roster::from_cats([cat]).unwrap());
        assert_eq!(fx.pick(&ConstraintSpec::new(), 7), Some(id));
    }

    #[test]
    fn axes_narrow_in_turn() {
        let hunter = Cat::new("Hunter", 30, CatRank::Warrior)
            .with_trait("bold")
            .with_skills(Skills::primary(SkillPath::Hunter, 2));
        let fighter = Cat::new("Fighter", 30, CatRank::Warrior)
            .with_trait("bold")
            .with_skills(Skills::primary(SkillPath::Fighter, 2));
        let elder = Cat::new("Elder", 130, CatRank::Elder).with_trait("bold");
        let hunter_id = hunter.id;
        let fx = Fixture::new(Roster::from_cats([hunter, fighter, elder]).unwrap());

        let spec = ConstraintSpec::new()
            .with_status(["warrior"])
            .with_skill(["HUNTER,1"])
            .with_trait(["bold"]);
        assert_eq!(fx.eligible(&spec, &SelectionQuery::new()), vec![hunter_id]);

        let spec = ConstraintSpec::new().with_not_skill(["FIGHTER,1"]).with_age(["senior"]);
        assert_eq!(fx.eligible(&spec, &SelectionQuery::new()).len(), 1);
    }

    #[test]
    fn gender_and_backstory_axes() {
        let a = Cat::new("A", 30, CatRank::Warrior).with_gender("male").with_backstory("loner1");
        let b = Cat::new("B", 30, CatRank::Warrior).with_gender("female");
        let a_id = a.id;
        let fx = Fixture::new(Roster::from_cats([a, b]).unwrap());
        let spec = ConstraintSpec::new().with_gender(["male"]);
        assert_eq!(fx.eligible(&spec, &SelectionQuery::new()), vec![a_id]);
        let spec = ConstraintSpec::new().with_backstory(["loner1"]);
        assert_eq!(fx.eligible(&spec, &SelectionQuery::new()), vec![a_id]);
    }

    #[test]
    fn injuries_remove_scarred_cats() {
        let stub = Cat::new("Stub", 30, CatRank::Warrior).with_scar("HALFTAIL");
        let whole = Cat::new("Whole", 30, CatRank::Warrior);
        let whole_id = whole.id;
        let fx = Fixture::new(Roster::from_cats([stub, whole]).unwrap());
        let injuries = vec!["mangled tail".to_string()];
        let query = SelectionQuery::new().with_injuries(&injuries);
        assert_eq!(fx.eligible(&ConstraintSpec::new(), &query), vec![whole_id]);
    }

    #[test]
    fn relationship_without_comparison_cat_is_none() {
        let fx = Fixture::new(Roster::from_cats([Cat::new("A", 30, CatRank::Warrior)]).unwrap());
        let spec = ConstraintSpec::new().with_relationship_status(["romantic_10"]);
        assert!(fx.eligible(&spec, &SelectionQuery::new()).is_empty());
    }

    #[test]
    fn comparison_mates_narrow_structurally() {
        let mut roster = Roster::new();
        let a = roster.add_cat(Cat::new("Firestar", 50, CatRank::Leader)).unwrap();
        let b = roster.add_cat(Cat::new("Sandstorm", 48, CatRank::Warrior)).unwrap();
        roster.add_cat(Cat::new("Dustpelt", 48, CatRank::Warrior)).unwrap();
        roster.set_mates(a, b).unwrap();
        let fx = Fixture::new(roster);

        let comparison = fx.roster.fetch_cat(a).unwrap();
        let mates = vec!["mates".to_string()];
        let query = SelectionQuery::new()
            .with_comparison_cat(comparison)
            .with_comparison_rel_status(&mates);
        assert_eq!(fx.eligible(&ConstraintSpec::new(), &query), vec![b]);

        let not_mates = vec!["not_mates".to_string()];
        let query = SelectionQuery::new()
            .with_comparison_cat(comparison)
            .with_comparison_rel_status(&not_mates);
        let ids = fx.eligible(&ConstraintSpec::new(), &query);
        assert!(!ids.contains(&b));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn relationship_values_filter_candidates() {
        let mut roster = Roster::new();
        let leader = Cat::new("Leader", 60, CatRank::Leader);
        let fond = Cat::new("Fond", 30, CatRank::Warrior);
        let cold = Cat::new("Cold", 30, CatRank::Warrior);
        let (leader_id, fond_id, cold_id) = (leader.id, fond.id, cold.id);
        let warm = Relationship::default().with_value(RelationshipValue::Platonic, 50);
        let leader = leader
            .with_relationship(fond_id, warm)
            .with_relationship(cold_id, warm);
        let fond = fond.with_relationship(leader_id, warm);
        let cold = cold.with_relationship(leader_id, Relationship::default());
        roster.add_cat(leader).unwrap();
        roster.add_cat(fond).unwrap();
        roster.add_cat(cold).unwrap();
        let fx = Fixture::new(roster);

        let comparison = fx.roster.fetch_cat(leader_id).unwrap();
        let outward = vec!["platonic_40".to_string()];
        let query = SelectionQuery::new()
            .with_comparison_cat(comparison)
            .with_comparison_rel_status(&outward);
        let ids = fx.eligible(&ConstraintSpec::new(), &query);
        assert!(ids.contains(&fond_id));
        assert!(!ids.contains(&cold_id));

        let spec = ConstraintSpec::new().with_relationship_status(["platonic_40"]);
        let query = SelectionQuery::new().with_comparison_cat(comparison);
        let ids = fx.eligible(&spec, &query);
        assert!(ids.contains(&fond_id));
        assert!(!ids.contains(&cold_id));
    }

    #[test]
    fn mentor_tag_combines_with_family_tag() {
        let mut roster = Roster::new();
        let mentor = Cat::new("Mentor", 40, CatRank::Warrior);
        let mentor_id = mentor.id;
        let kin = Cat::new("Kinpaw", 8, CatRank::Apprentice).with_parent(mentor_id);
        let other = Cat::new("Otherpaw", 8, CatRank::Apprentice);
        let (kin_id, other_id) = (kin.id, other.id);
        roster.add_cat(mentor).unwrap();
        roster.add_cat(kin).unwrap();
        roster.add_cat(other).unwrap();
        roster.set_mentor(mentor_id, kin_id).unwrap();
        roster.set_mentor(mentor_id, other_id).unwrap();
        let fx = Fixture::new(roster);

        let comparison = fx.roster.fetch_cat(mentor_id).unwrap();
        let tags = vec!["parent/child".to_string(), "mentor/app".to_string()];
        let query = SelectionQuery::new()
            .with_comparison_cat(comparison)
            .with_comparison_rel_status(&tags);
        assert_eq!(fx.eligible(&ConstraintSpec::new(), &query), vec![kin_id]);
    }

    #[test]
    fn seeded_pick_is_reproducible() {
        let cats: Vec<Cat> = (0..10)
            .map(|i| Cat::new(format!("Warrior {i}"), 30, CatRank::Warrior))
            .collect();
        let fx = Fixture::new(Roster::from_cats(cats).unwrap());
        let spec = ConstraintSpec::new();
        assert_eq!(fx.pick(&spec, 99), fx.pick(&spec, 99));
    }
}
