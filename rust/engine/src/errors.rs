use thiserror::Error;

/// Precondition violations raised while setting up a game or a dice source.
///
/// The turn loop itself never fails; these are returned by constructors and
/// by [`crate::engine::TurnChoice`] parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("At least {minimum} players are required, got {actual}")]
    TooFewPlayers { minimum: usize, actual: usize },
    #[error("Player {index} has an empty name")]
    EmptyName { index: usize },
    #[error("Winning threshold must be positive")]
    InvalidThreshold,
    #[error("Unrecognized choice '{input}'. Enter 'h'/'hold' or 'r'/'roll'")]
    InvalidChoice { input: String },
    #[error("Die face {face} is outside 1-6")]
    InvalidFace { face: u8 },
    #[error("Scripted die needs at least one face")]
    EmptyScript,
}
