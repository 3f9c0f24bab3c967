use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rank::CatRank;
use crate::roster::Roster;

/// How well stocked a supply is relative to what the clan needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyRating {
    /// Nothing in stock.
    Empty,
    /// Less than half of what is needed.
    Low,
    /// At least half, but not all, of what is needed.
    Adequate,
    /// Enough, with some to spare.
    Full,
    /// Twice what is needed or more.
    Excess,
}

impl SupplyRating {
    /// Rate `stock` against `required`.
    pub fn rate(stock: u64, required: u64) -> Self {
        let (stock, required) = (u128::from(stock), u128::from(required.max(1)));
        if stock == 0 {
            Self::Empty
        } else if stock * 2 < required {
            Self::Low
        } else if stock < required {
            Self::Adequate
        } else if stock < required * 2 {
            Self::Full
        } else {
            Self::Excess
        }
    }

    /// The authored trigger name (e.g. `"adequate"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Low => "low",
            Self::Adequate => "adequate",
            Self::Full => "full",
            Self::Excess => "excess",
        }
    }
}

impl fmt::Display for SupplyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The medicine den's herb stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HerbSupply {
    /// Every herb the game knows about.
    pub base_herb_list: BTreeSet<String>,
    /// Current stock per herb.
    pub entire_supply: BTreeMap<String, u32>,
    /// Stock of a single herb that counts as enough for the clan.
    pub required_per_herb: u32,
}

impl HerbSupply {
    /// An empty supply over the given known herbs.
    pub fn new<I, S>(herbs: I, required_per_herb: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_herb_list: herbs.into_iter().map(Into::into).collect(),
            entire_supply: BTreeMap::new(),
            required_per_herb,
        }
    }

    /// Set the stock of a herb. Herbs not in the base list are ignored.
    pub fn with_stock(mut self, herb: &str, amount: u32) -> Self {
        if self.base_herb_list.contains(herb) {
            self.entire_supply.insert(herb.to_string(), amount);
        }
        self
    }

    /// Returns true if no herb has any stock.
    pub fn is_empty(&self) -> bool {
        self.entire_supply.values().all(|v| *v == 0)
    }

    /// Herbs that currently have stock.
    pub fn stocked_herbs(&self) -> impl Iterator<Item = &str> {
        self.entire_supply
            .iter()
            .filter(|(_, v)| **v > 0)
            .map(|(k, _)| k.as_str())
    }

    /// Returns true if `herb` is a known herb.
    pub fn is_known_herb(&self, herb: &str) -> bool {
        self.base_herb_list.contains(herb)
    }

    /// Rating for a single herb. Unknown herbs rate as empty.
    pub fn get_herb_rating(&self, herb: &str) -> SupplyRating {
        let stock = self.entire_supply.get(herb).copied().unwrap_or(0);
        SupplyRating::rate(u64::from(stock), u64::from(self.required_per_herb))
    }

    /// Rating for the whole store, against every known herb being stocked.
    pub fn get_overall_rating(&self) -> SupplyRating {
        let total: u64 = self
            .base_herb_list
            .iter()
            .map(|h| u64::from(self.entire_supply.get(h).copied().unwrap_or(0)))
            .sum();
        let herbs = u64::try_from(self.base_herb_list.len()).unwrap_or(u64::MAX);
        let required = u64::from(self.required_per_herb).saturating_mul(herbs);
        SupplyRating::rate(total, required)
    }
}

/// The clan's fresh-kill pile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FreshkillPile {
    /// Prey currently on the pile.
    pub total_amount: f64,
    /// Prey the clan needs to eat this moon.
    pub food_needed: f64,
}

impl FreshkillPile {
    /// A pile with a known stock and need.
    pub fn new(total_amount: f64, food_needed: f64) -> Self {
        Self {
            total_amount,
            food_needed,
        }
    }

    /// A pile whose need is computed from the living members of `roster`.
    pub fn for_roster(total_amount: f64, roster: &Roster) -> Self {
        let food_needed = roster
            .living_cats()
            .map(|c| Self::ration(c.status.rank))
            .sum();
        Self::new(total_amount, food_needed)
    }

    /// Prey a cat of the given rank eats per moon.
    pub fn ration(rank: CatRank) -> f64 {
        match rank {
            CatRank::Newborn => 0.0,
            CatRank::Kitten => 0.5,
            CatRank::Apprentice | CatRank::MediatorApprentice | CatRank::MedicineApprentice => {
                1.5
            }
            CatRank::Elder | CatRank::MedicineCat | CatRank::Mediator => 2.0,
            CatRank::Warrior | CatRank::Deputy | CatRank::Leader => 3.0,
        }
    }

    /// Prey the clan needs.
    pub fn amount_food_needed(&self) -> f64 {
        self.food_needed
    }
}
