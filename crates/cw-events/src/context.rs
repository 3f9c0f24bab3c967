//! Clan-level checks: is the clan's situation right for this event?
//!
//! Every predicate reads only the state it is handed and never mutates it.

use std::fmt;

use cw_core::{Cat, CatAge, CatRank, Clan, FreshkillPile, GameMode, HerbSupply, OtherClan, Roster};

use crate::config::FilterConfig;
use crate::constraint::{ANY, contains};
use crate::relations::RelationshipFilter;
use crate::special_dates::SpecialDates;

/// Everything an eligibility check may consult besides the cats themselves.
#[derive(Clone, Copy)]
pub struct EventContext<'a> {
    /// The player's clan.
    pub clan: &'a Clan,
    /// Every cat.
    pub roster: &'a Roster,
    /// Decides relationship tags.
    pub relationships: &'a dyn RelationshipFilter,
    /// Decides which holiday is active.
    pub special_dates: &'a dyn SpecialDates,
    /// Thresholds.
    pub config: &'a FilterConfig,
}

impl fmt::Debug for EventContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventContext")
            .field("clan", &self.clan.name)
            .field("cats", &self.roster.len())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> EventContext<'a> {
    /// Bundle the clan state for event filtering.
    pub fn new(
        clan: &'a Clan,
        roster: &'a Roster,
        relationships: &'a dyn RelationshipFilter,
        special_dates: &'a dyn SpecialDates,
        config: &'a FilterConfig,
    ) -> Self {
        Self {
            clan,
            roster,
            relationships,
            special_dates,
            config,
        }
    }
}

// ---------------------------------------------------------------------------
// Location, season, standing
// ---------------------------------------------------------------------------

/// Returns true if the clan lives in one of `locations`.
///
/// Entries are `biome` or `biome:camp1_camp2`. The clan's override biome
/// replaces its natural one when set.
pub fn event_for_location(locations: &[String], clan: &Clan) -> bool {
    if contains(locations, ANY) {
        return true;
    }

    locations.iter().any(|place| {
        let (biome, camps) = match place.split_once(':') {
            Some((biome, camps)) => (biome, camps.split('_').collect::<Vec<_>>()),
            None => (place.as_str(), vec![ANY]),
        };
        biome == clan.effective_biome().to_lowercase()
            && (camps.contains(&ANY) || camps.contains(&clan.camp_bg.as_str()))
    })
}

/// Returns true if the clan is in one of `seasons`.
pub fn event_for_season(seasons: &[String], clan: &Clan) -> bool {
    contains(seasons, ANY) || contains(seasons, clan.current_season.as_str())
}

/// Returns true if the clan's reputation is in one of `required` bands:
/// `hostile`, `neutral` or `welcoming`.
pub fn event_for_reputation(required: &[String], clan: &Clan, config: &FilterConfig) -> bool {
    if contains(required, ANY) {
        return true;
    }
    let band = ["hostile", "neutral", "welcoming"][config.reputation_bands.band_of(clan.reputation)];
    contains(required, band)
}

/// Returns true if relations with `other_clan` are in one of `required`
/// bands: `hostile`, `neutral` or `ally`.
pub fn event_for_clan_relations(
    required: &[String],
    other_clan: &OtherClan,
    config: &FilterConfig,
) -> bool {
    if contains(required, ANY) {
        return true;
    }
    let band = ["hostile", "neutral", "ally"][config.relation_bands.band_of(other_clan.relations)];
    contains(required, band)
}

// ---------------------------------------------------------------------------
// Supplies
// ---------------------------------------------------------------------------

/// Returns true if the fresh-kill pile matches one of `triggers`:
/// `always`, `low`, `adequate`, `full` or `excess`.
///
/// `factor` sets how many times the clan's need counts as excess before it
/// is scaled down for large clans. Classic mode has no fresh-kill events.
pub fn event_for_freshkill_supply(
    triggers: &[String],
    pile: &FreshkillPile,
    factor: f64,
    clan_size: usize,
    game_mode: GameMode,
    config: &FilterConfig,
) -> bool {
    if game_mode == GameMode::Classic {
        return false;
    }

    let needed = pile.amount_food_needed();
    let half = needed / 2.0;
    let supply = pile.total_amount;

    if contains(triggers, "always") {
        return true;
    }
    if contains(triggers, "low") && half > supply {
        return true;
    }
    if contains(triggers, "adequate") && half < supply && supply < needed {
        return true;
    }

    let trigger_value = excess_threshold(needed, factor, clan_size, game_mode, config);
    tracing::trace!(needed, supply, trigger_value, "fresh-kill thresholds");

    if contains(triggers, "full") && needed < supply && supply < trigger_value {
        return true;
    }
    contains(triggers, "excess") && supply > trigger_value
}

/// Prey above which the pile counts as excess.
pub fn excess_threshold(
    needed: f64,
    factor: f64,
    clan_size: usize,
    game_mode: GameMode,
    config: &FilterConfig,
) -> f64 {
    let divider = if game_mode == GameMode::Expanded {
        config.freshkill_divider_expanded
    } else {
        config.freshkill_divider
    };
    let mut factor = factor - (clan_size as f64 / divider).powi(2).round_ties_even();
    if game_mode == GameMode::Expanded && factor < config.freshkill_factor_floor {
        factor = config.freshkill_factor_floor;
    }
    (factor * needed * 100.0).round_ties_even() / 100.0
}

/// Returns true if the herb stores match one of `triggers`.
///
/// `selector` is `all_herb` for the overall rating, `any_herb` for any
/// single herb, or a herb name. Unknown herb names never match.
pub fn event_for_herb_supply(triggers: &[String], selector: &str, supply: &HerbSupply) -> bool {
    if contains(triggers, "always") {
        return true;
    }
    if supply.is_empty() && contains(triggers, "empty") {
        return true;
    }

    match selector {
        "all_herb" => contains(triggers, supply.get_overall_rating().as_str()),
        "any_herb" => supply
            .entire_supply
            .keys()
            .any(|herb| contains(triggers, supply.get_herb_rating(herb).as_str())),
        herb => {
            if !supply.is_known_herb(herb) {
                tracing::warn!(herb, "possible typo in supply constraint");
                return false;
            }
            contains(triggers, supply.get_herb_rating(herb).as_str())
        }
    }
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

const MODE_TAGS: [GameMode; 3] = [GameMode::Classic, GameMode::Expanded, GameMode::CruelSeason];

/// Returns true unless one of `tags` rules the event out.
///
/// `cat` is the event's main cat and `other_cat` its partner, when the
/// event has them. Checks game mode, leader lives, adoption, romance,
/// ranks present in the clan, and holidays.
pub fn event_for_tags(
    tags: &[String],
    cat: Option<&Cat>,
    other_cat: Option<&Cat>,
    ctx: &EventContext<'_>,
) -> bool {
    if tags.is_empty() {
        return true;
    }

    let mode = ctx.clan.game_mode;
    if MODE_TAGS
        .iter()
        .any(|m| *m != mode && contains(tags, m.as_str()))
    {
        return false;
    }

    if let Some(cat) = cat
        && !cat_allows_tags(tags, cat, other_cat, ctx)
    {
        return false;
    }

    if !ranks_available(tags, ctx.roster) {
        return false;
    }

    if ctx.special_dates.contains_special_date_tag(tags) {
        let active = ctx.special_dates.current_special_date();
        if !active.is_some_and(|date| contains(tags, &date.patrol_tag)) {
            return false;
        }
    }

    true
}

fn cat_allows_tags(tags: &[String], cat: &Cat, other_cat: Option<&Cat>, ctx: &EventContext<'_>) -> bool {
    if cat.status.is_leader() {
        let lives = ctx.clan.leader_lives;
        let short = ctx
            .config
            .leader_lives
            .iter()
            .find(|(tag, min)| lives < **min && contains(tags, tag));
        if let Some((tag, min)) = short {
            tracing::trace!(tag = %tag, lives, min, "leader has too few lives");
            return false;
        }
    }

    if contains(tags, "adoption") {
        if cat.no_kits {
            return false;
        }
        let (_, kitten_max) = CatAge::Kitten.moon_range();
        if cat.moons <= ctx.config.adoption_moons_past_kitten + kitten_max {
            return false;
        }
        if cat
            .mate
            .iter()
            .filter_map(|id| ctx.roster.fetch_cat(*id))
            .any(|mate| mate.no_kits)
        {
            return false;
        }
    }

    if let Some(other) = other_cat
        && contains(tags, "romantic")
        && !other.is_potential_mate(cat)
    {
        return false;
    }

    true
}

fn ranks_available(tags: &[String], roster: &Roster) -> bool {
    for ranks in tags.iter().filter_map(|t| t.strip_prefix("clan:")) {
        for rank in ranks.split(',') {
            if rank == "apps" {
                if roster.find_alive_cats_with_rank(&CatRank::APPRENTICES).is_empty() {
                    return false;
                }
                continue;
            }
            let Ok(rank) = rank.parse::<CatRank>() else {
                tracing::warn!(rank, "unknown rank in clan tag");
                return false;
            };
            let holders = roster.find_alive_cats_with_rank(&[rank]).len();
            let needed = if rank.is_leadership() { 1 } else { 2 };
            if holders < needed {
                return false;
            }
        }
    }
    true
}
