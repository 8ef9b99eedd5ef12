//! UI helper functions for terminal output.
//!
//! Fixed texts shown around a game (rules banner, setup complaints, farewell)
//! live here so the play command and the renderers agree on wording.

use std::io::Write;

pub const RULE_LINE_WIDTH: usize = 50;

pub const NOT_A_NUMBER: &str = "That is not a number. Please enter a number";
pub const TOO_FEW_PLAYERS: &str = "Minimum number of players to start the game is 2. Please retry.";
pub const INVALID_NAME: &str = "Enter a valid name";
pub const INVALID_CHOICE: &str =
    "Your input is invalid. Enter \"h\", \"hold\" to hold or \"r\", \"roll\" to roll the die again.";
pub const DECISION_PROMPT: &str = "Do you want to Hold or Roll the die again? Enter 'h' or 'r': ";
pub const NEW_GAME_PROMPT: &str = "Do you want to start a new game? y/n ";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// The rules of Pig for a game played to `target` points.
pub fn rules_text(target: u32) -> String {
    [
        format!(
            "The rules of Pig are simple. Players take turns trying to reach {target} points first."
        ),
        "Each turn, a player repeatedly rolls a die until either a 1 is rolled or the player holds and".into(),
        "scores the sum of the rolls (i.e. the turn total). After every roll the player decides:".into(),
        "- roll: If the player rolls a".into(),
        "    1: the player scores nothing and it becomes the next player's turn.".into(),
        "    2 - 6: the number is added to the player's turn total and the turn continues.".into(),
        "- hold: The turn total is added to the player's score and it becomes the next player's turn."
            .into(),
        format!("Reaching {target} during a turn wins on the spot."),
    ]
    .join("\n")
}

pub fn rule_line() -> String {
    "-".repeat(RULE_LINE_WIDTH)
}

pub fn farewell_lines() -> [&'static str; 2] {
    ["Good Bye.........", "See you soon-------------------"]
}

/// Prompt for the name of the 1-based player `n`.
pub fn name_prompt(n: usize) -> String {
    format!("Enter name of player {} ", n)
}
