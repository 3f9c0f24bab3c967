use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::supply::{FreshkillPile, HerbSupply};

/// Difficulty mode the clan is played in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// No supply or medicine gating.
    Classic,
    /// Standard survival rules.
    #[default]
    Expanded,
    /// Harsher survival rules.
    CruelSeason,
}

impl GameMode {
    /// All game modes.
    pub const ALL: [GameMode; 3] = [Self::Classic, Self::Expanded, Self::CruelSeason];

    /// The tag used in event files (e.g. `"cruel_season"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Expanded => "expanded",
            Self::CruelSeason => "cruel_season",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "classic" => Ok(Self::Classic),
            "expanded" => Ok(Self::Expanded),
            "cruel_season" => Ok(Self::CruelSeason),
            _ => Err(CoreError::UnknownGameMode(s.to_string())),
        }
    }
}

/// The four seasons of the clan year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    /// Spring.
    #[default]
    Newleaf,
    /// Summer.
    Greenleaf,
    /// Autumn.
    LeafFall,
    /// Winter.
    LeafBare,
}

impl Season {
    /// The tag used in event files (e.g. `"leaf-bare"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newleaf => "newleaf",
            Self::Greenleaf => "greenleaf",
            Self::LeafFall => "leaf-fall",
            Self::LeafBare => "leaf-bare",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "newleaf" => Ok(Self::Newleaf),
            "greenleaf" => Ok(Self::Greenleaf),
            "leaf-fall" => Ok(Self::LeafFall),
            "leaf-bare" => Ok(Self::LeafBare),
            _ => Err(CoreError::UnknownSeason(s.to_string())),
        }
    }
}

/// A neighbouring clan and how it feels about the player's clan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherClan {
    /// Clan name.
    pub name: String,
    /// Relation score; higher is friendlier.
    pub relations: u32,
}

impl OtherClan {
    /// Create a neighbouring clan.
    pub fn new(name: impl Into<String>, relations: u32) -> Self {
        Self {
            name: name.into(),
            relations,
        }
    }
}

/// The player's clan: where it lives, how it is doing, and what it has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clan {
    /// Clan name.
    pub name: String,
    /// Natural biome (e.g. `"forest"`).
    pub biome: String,
    /// Biome chosen by the player that replaces the natural one for events.
    pub override_biome: Option<String>,
    /// Camp background tag (e.g. `"camp1"`).
    pub camp_bg: String,
    /// Current season.
    pub current_season: Season,
    /// Reputation with outsiders, 0..=100.
    pub reputation: u32,
    /// Game mode.
    pub game_mode: GameMode,
    /// Lives the leader has left.
    pub leader_lives: u32,
    /// Herb stores.
    pub herb_supply: HerbSupply,
    /// Fresh-kill pile.
    pub freshkill: FreshkillPile,
    /// Neighbouring clans.
    pub other_clans: Vec<OtherClan>,
}

impl Clan {
    /// A forest clan in newleaf with neutral reputation and nine lives.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            biome: "forest".to_string(),
            override_biome: None,
            camp_bg: "camp1".to_string(),
            current_season: Season::Newleaf,
            reputation: 50,
            game_mode: GameMode::Expanded,
            leader_lives: 9,
            herb_supply: HerbSupply::default(),
            freshkill: FreshkillPile::default(),
            other_clans: Vec::new(),
        }
    }

    /// Set the biome and camp.
    pub fn with_biome(mut self, biome: impl Into<String>, camp_bg: impl Into<String>) -> Self {
        self.biome = biome.into();
        self.camp_bg = camp_bg.into();
        self
    }

    /// Set the game mode.
    pub fn with_game_mode(mut self, mode: GameMode) -> Self {
        self.game_mode = mode;
        self
    }

    /// Set the current season.
    pub fn with_season(mut self, season: Season) -> Self {
        self.current_season = season;
        self
    }

    /// Set the reputation, clamped to 0..=100.
    pub fn with_reputation(mut self, reputation: u32) -> Self {
        self.reputation = reputation.min(100);
        self
    }

    /// The biome events should see: the override if set, otherwise the natural one.
    pub fn effective_biome(&self) -> &str {
        self.override_biome.as_deref().unwrap_or(&self.biome)
    }

    /// Find a neighbouring clan by name (case-insensitive).
    pub fn other_clan(&self, name: &str) -> Option<&OtherClan> {
        self.other_clans
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
