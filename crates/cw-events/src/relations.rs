//! Relationship tags between the cats of an event group.
//!
//! Structural tags look at family, mates and mentorship. Value tags such as
//! `romantic_30` require every ordered pair in the group to feel at least
//! that strongly about each other.

use std::str::FromStr;

use cw_core::{Cat, RelationshipValue, Roster};

/// Decides whether a group of cats satisfies a list of relationship tags.
pub trait RelationshipFilter {
    /// Returns true if `group` satisfies every tag in `filter_types`.
    ///
    /// `event_id` is only used for diagnostics. `patrol_leader` is needed by
    /// the `mates_with_pl` tag.
    fn filter_relationship_type(
        &self,
        group: &[&Cat],
        filter_types: &[String],
        event_id: Option<&str>,
        patrol_leader: Option<&Cat>,
    ) -> bool;
}

/// A relationship tag as authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipTag {
    /// Every cat is a sibling of the first.
    Siblings,
    /// The two cats are mates.
    Mates,
    /// Every cat other than the patrol leader is the leader's mate.
    MatesWithPatrolLeader,
    /// The two cats are not mates.
    NotMates,
    /// The second cat is a child of the first.
    ParentChild,
    /// The first cat is a child of the second.
    ChildParent,
    /// The second cat is the first's apprentice.
    MentorApprentice,
    /// The first cat is the second's apprentice.
    ApprenticeMentor,
    /// Every ordered pair has at least this much of a relationship value.
    AtLeast(RelationshipValue, i32),
}

impl FromStr for RelationshipTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "siblings" => Self::Siblings,
            "mates" => Self::Mates,
            "mates_with_pl" => Self::MatesWithPatrolLeader,
            "not_mates" => Self::NotMates,
            "parent/child" => Self::ParentChild,
            "child/parent" => Self::ChildParent,
            "mentor/app" => Self::MentorApprentice,
            "app/mentor" => Self::ApprenticeMentor,
            _ => {
                let (kind, amount) = s.rsplit_once('_').ok_or(())?;
                let kind = kind.parse::<RelationshipValue>()?;
                let amount = amount.parse::<i32>().map_err(|_| ())?;
                Self::AtLeast(kind, amount)
            }
        })
    }
}

/// Relationship filter that reads family links from a [`Roster`].
#[derive(Debug, Clone, Copy)]
pub struct RosterRelationshipFilter<'a> {
    roster: &'a Roster,
}

impl<'a> RosterRelationshipFilter<'a> {
    /// Filter backed by `roster`.
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    fn check(
        &self,
        tag: RelationshipTag,
        group: &[&Cat],
        event_id: Option<&str>,
        patrol_leader: Option<&Cat>,
    ) -> bool {
        match tag {
            RelationshipTag::Siblings => {
                let Some((first, rest)) = group.split_first() else {
                    return false;
                };
                let siblings = self.roster.get_siblings(first);
                rest.iter()
                    .filter(|c| c.id != first.id)
                    .all(|c| siblings.contains(&c.id))
            }
            RelationshipTag::Mates => match group {
                [a, b] => b.mate.contains(&a.id),
                _ => {
                    tracing::warn!(
                        event = event_id.unwrap_or("unknown"),
                        size = group.len(),
                        "mates tag used on a group that is not a pair"
                    );
                    false
                }
            },
            RelationshipTag::MatesWithPatrolLeader => {
                let Some(leader) = patrol_leader else {
                    tracing::warn!(
                        event = event_id.unwrap_or("unknown"),
                        "mates_with_pl tag used without a patrol leader"
                    );
                    return false;
                };
                group
                    .iter()
                    .filter(|c| c.id != leader.id)
                    .all(|c| leader.mate.contains(&c.id))
            }
            RelationshipTag::NotMates => match group {
                [a, b, ..] => !b.mate.contains(&a.id) && !a.mate.contains(&b.id),
                _ => true,
            },
            RelationshipTag::ParentChild => match group {
                [parent, child, ..] => child.is_child_of(parent),
                _ => false,
            },
            RelationshipTag::ChildParent => match group {
                [child, parent, ..] => child.is_child_of(parent),
                _ => false,
            },
            RelationshipTag::MentorApprentice => match group {
                [mentor, app, ..] => mentor.apprentice.contains(&app.id),
                _ => false,
            },
            RelationshipTag::ApprenticeMentor => match group {
                [app, mentor, ..] => mentor.apprentice.contains(&app.id),
                _ => false,
            },
            RelationshipTag::AtLeast(kind, amount) => group.iter().all(|from| {
                group.iter().filter(|to| to.id != from.id).all(|to| {
                    from.relationships
                        .get(&to.id)
                        .is_some_and(|rel| rel.value(kind) >= amount)
                })
            }),
        }
    }
}

impl RelationshipFilter for RosterRelationshipFilter<'_> {
    fn filter_relationship_type(
        &self,
        group: &[&Cat],
        filter_types: &[String],
        event_id: Option<&str>,
        patrol_leader: Option<&Cat>,
    ) -> bool {
        for raw in filter_types {
            let Ok(tag) = raw.parse::<RelationshipTag>() else {
                tracing::warn!(
                    event = event_id.unwrap_or("unknown"),
                    tag = %raw,
                    "unknown relationship tag, ignoring"
                );
                continue;
            };
            if !self.check(tag, group, event_id, patrol_leader) {
                tracing::trace!(tag = %raw, "relationship filter rejected group");
                return false;
            }
        }
        true
    }
}
