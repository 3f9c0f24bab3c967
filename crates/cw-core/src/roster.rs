use std::collections::HashMap;

use crate::cat::{Cat, CatId};
use crate::error::{CoreError, CoreResult};
use crate::rank::CatRank;

/// Every cat the game knows about, living or not. Owns the cats and
/// answers family and rank lookups that need the whole population.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    cats: HashMap<CatId, Cat>,
    // Insertion order, for deterministic iteration.
    order: Vec<CatId>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a list of cats, rejecting duplicate IDs.
    pub fn from_cats(cats: impl IntoIterator<Item = Cat>) -> CoreResult<Self> {
        let mut roster = Self::new();
        for cat in cats {
            roster.add_cat(cat)?;
        }
        Ok(roster)
    }

    // -----------------------------------------------------------------------
    // Cat CRUD
    // -----------------------------------------------------------------------

    /// Add a cat to the roster. Returns the cat's ID.
    pub fn add_cat(&mut self, cat: Cat) -> CoreResult<CatId> {
        let id = cat.id;
        if self.cats.contains_key(&id) {
            return Err(CoreError::DuplicateCat(id));
        }
        self.order.push(id);
        self.cats.insert(id, cat);
        Ok(id)
    }

    /// Get a reference to a cat by ID.
    pub fn fetch_cat(&self, id: CatId) -> Option<&Cat> {
        self.cats.get(&id)
    }

    /// Get a mutable reference to a cat by ID.
    pub fn fetch_cat_mut(&mut self, id: CatId) -> Option<&mut Cat> {
        self.cats.get_mut(&id)
    }

    /// Remove a cat from the roster.
    pub fn remove_cat(&mut self, id: CatId) -> CoreResult<Cat> {
        let cat = self.cats.remove(&id).ok_or(CoreError::CatNotFound(id))?;
        self.order.retain(|c| *c != id);
        Ok(cat)
    }

    /// Make two cats mates of each other.
    pub fn set_mates(&mut self, a: CatId, b: CatId) -> CoreResult<()> {
        self.require(a)?;
        self.require(b)?;
        if let Some(cat) = self.cats.get_mut(&a)
            && !cat.mate.contains(&b)
        {
            cat.mate.push(b);
        }
        if let Some(cat) = self.cats.get_mut(&b)
            && !cat.mate.contains(&a)
        {
            cat.mate.push(a);
        }
        Ok(())
    }

    /// Assign `apprentice` to `mentor`, replacing any previous mentor.
    pub fn set_mentor(&mut self, mentor: CatId, apprentice: CatId) -> CoreResult<()> {
        self.require(mentor)?;
        let previous = self.require(apprentice)?.mentor;
        if let Some(prev) = previous
            && let Some(old) = self.cats.get_mut(&prev)
        {
            old.apprentice.retain(|a| *a != apprentice);
        }
        if let Some(cat) = self.cats.get_mut(&mentor)
            && !cat.apprentice.contains(&apprentice)
        {
            cat.apprentice.push(apprentice);
        }
        if let Some(cat) = self.cats.get_mut(&apprentice) {
            cat.mentor = Some(mentor);
        }
        Ok(())
    }

    fn require(&self, id: CatId) -> CoreResult<&Cat> {
        self.cats.get(&id).ok_or(CoreError::CatNotFound(id))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Iterate over every cat in insertion order.
    pub fn all_cats(&self) -> impl Iterator<Item = &Cat> {
        self.order.iter().filter_map(|id| self.cats.get(id))
    }

    /// Iterate over cats alive and present in the player's clan.
    pub fn living_cats(&self) -> impl Iterator<Item = &Cat> {
        self.all_cats()
            .filter(|c| c.status.alive_in_player_clan())
    }

    /// Number of living clan members.
    pub fn clan_size(&self) -> usize {
        self.living_cats().count()
    }

    /// Total number of cats, living or not.
    pub fn len(&self) -> usize {
        self.cats.len()
    }

    /// Returns true if the roster has no cats.
    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }

    /// IDs of cats sharing at least one parent with `cat`.
    pub fn get_siblings(&self, cat: &Cat) -> Vec<CatId> {
        self.all_cats()
            .filter(|other| cat.is_sibling(other))
            .map(|other| other.id)
            .collect()
    }

    /// IDs of cats that list `cat` as a parent.
    pub fn get_children(&self, cat: &Cat) -> Vec<CatId> {
        self.all_cats()
            .filter(|other| other.is_child_of(cat))
            .map(|other| other.id)
            .collect()
    }

    /// IDs of `cat`'s parents.
    pub fn get_parents(&self, cat: &Cat) -> Vec<CatId> {
        cat.parents.clone()
    }

    /// Living clan members holding any of the given ranks.
    pub fn find_alive_cats_with_rank(&self, ranks: &[CatRank]) -> Vec<&Cat> {
        self.living_cats()
            .filter(|c| ranks.contains(&c.status.rank))
            .collect()
    }
}
