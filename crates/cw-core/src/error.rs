use crate::cat::CatId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying the clan model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested cat ID does not exist in the roster.
    #[error("cat not found: {0}")]
    CatNotFound(CatId),

    /// A cat with the same ID is already in the roster.
    #[error("cat already exists: {0}")]
    DuplicateCat(CatId),

    /// An authored rank name did not match any known rank.
    #[error("unknown rank: \"{0}\"")]
    UnknownRank(String),

    /// An authored age name did not match any known age category.
    #[error("unknown age: \"{0}\"")]
    UnknownAge(String),

    /// An authored skill path did not match any known path.
    #[error("unknown skill path: \"{0}\"")]
    UnknownSkillPath(String),

    /// An authored game mode did not match any known mode.
    #[error("unknown game mode: \"{0}\"")]
    UnknownGameMode(String),

    /// An authored season did not match any known season.
    #[error("unknown season: \"{0}\"")]
    UnknownSeason(String),
}
