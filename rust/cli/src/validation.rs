//! Input parsing and validation for the setup prompts.
//!
//! Hold/roll answers are parsed by the engine itself
//! ([`pig_engine::engine::TurnChoice`]); this module covers what the setup
//! collaborator asks for: the player count, names, and whether to play again.
//! Failures carry the message to show before asking again.

use crate::ui;
use pig_engine::engine::MIN_PLAYERS;

/// Outcome of reading a line that may also be a request to leave.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    Value(T),
    Quit,
    Invalid(String),
}

/// `q` or `quit`, any case.
pub fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "q" | "quit")
}

/// Parse the number of players.
///
/// # Example
///
/// ```rust
/// # use pig_cli::validation::{parse_player_count, ParseResult};
/// assert_eq!(parse_player_count("3"), ParseResult::Value(3));
/// assert!(matches!(parse_player_count("1"), ParseResult::Invalid(_)));
/// assert!(matches!(parse_player_count("two"), ParseResult::Invalid(_)));
/// assert_eq!(parse_player_count("q"), ParseResult::Quit);
/// ```
pub fn parse_player_count(input: &str) -> ParseResult<usize> {
    if is_quit(input) {
        return ParseResult::Quit;
    }
    match input.trim().parse::<usize>() {
        Ok(n) if n >= MIN_PLAYERS => ParseResult::Value(n),
        Ok(_) => ParseResult::Invalid(ui::TOO_FEW_PLAYERS.to_string()),
        Err(_) => ParseResult::Invalid(ui::NOT_A_NUMBER.to_string()),
    }
}

/// Parse a player name: anything non-blank, trimmed.
pub fn parse_player_name(input: &str) -> ParseResult<String> {
    let name = input.trim();
    if name.is_empty() {
        ParseResult::Invalid(ui::INVALID_NAME.to_string())
    } else {
        ParseResult::Value(name.to_string())
    }
}

/// Only `y` or `yes` (any case) start another game.
pub fn wants_new_game(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
