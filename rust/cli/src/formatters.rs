//! Rendering of engine events for the terminal.
//!
//! [`format_event`] is a pure mapping from a [`GameEvent`] to the lines a
//! player sees; [`EventRenderer`] plugs that (or the JSON form) into the
//! engine as a [`GameObserver`].
//!
//! ## Example
//!
//! ```rust
//! use pig_cli::formatters::format_event;
//! use pig_engine::events::GameEvent;
//!
//! let lines = format_event(&GameEvent::Busted { player: "Bob".into(), discarded: 4 });
//! assert_eq!(lines, vec!["No points for you!", "Your turn is over"]);
//! ```

use crate::cli::OutputFormat;
use crate::io_utils::SharedWriter;
use crate::ui;
use pig_engine::dice::BUST_FACE;
use pig_engine::events::{GameEvent, GameObserver, Standing};
use std::io::{self, Write};

const SCORE_CARD_FRAME: &str = "*********** Score Card ***********";

/// Lines shown to players for one event.
pub fn format_event(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::GameStarted { players, target } => vec![
            "Starting game of Pig.............".to_string(),
            ui::rule_line(),
            ui::rules_text(*target),
            ui::rule_line(),
            format!("Players: {}", players.join(", ")),
        ],
        GameEvent::TurnStarted { player, .. } => vec![format!("It's {} player's turn", player)],
        GameEvent::Rolled {
            face,
            turn_total,
            potential,
            ..
        } => {
            let mut lines = vec![format!("You rolled: {}", face)];
            if *face != BUST_FACE {
                lines.push(format!("Your turn score is: {}", turn_total));
                lines.push(format!("Your total score is: {}", potential));
            }
            lines
        }
        GameEvent::InvalidChoice { .. } => vec![ui::INVALID_CHOICE.to_string()],
        GameEvent::Busted { .. } => vec![
            "No points for you!".to_string(),
            "Your turn is over".to_string(),
        ],
        GameEvent::Held { player, score, .. } => {
            vec![format!("{} is holding. Total Score is: {}", player, score)]
        }
        GameEvent::Won { player, score } => {
            vec![format!("Winner! {} reaches {} points", player, score)]
        }
        GameEvent::Scoreboard { standings } => format_scoreboard(standings),
        GameEvent::Abandoned { player } => {
            vec![format!("{} left the table. Game abandoned.", player)]
        }
    }
}

/// The score card printed after every turn.
pub fn format_scoreboard(standings: &[Standing]) -> Vec<String> {
    let mut lines = Vec::with_capacity(standings.len() + 2);
    lines.push(SCORE_CARD_FRAME.to_string());
    lines.extend(
        standings
            .iter()
            .map(|s| format!("{} : {} points", s.name, s.score)),
    );
    lines.push(SCORE_CARD_FRAME.to_string());
    lines
}

/// Writes events to a shared stream as text or JSON lines.
///
/// The observer interface cannot fail, so the first write error is kept and
/// surfaced by [`EventRenderer::finish`]; later events are dropped.
pub struct EventRenderer<'a, 'w> {
    out: &'a SharedWriter<'w>,
    format: OutputFormat,
    error: Option<io::Error>,
}

impl<'a, 'w> EventRenderer<'a, 'w> {
    pub fn new(out: &'a SharedWriter<'w>, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    fn render(&self, event: &GameEvent) -> io::Result<()> {
        let mut w = self.out.borrow_mut();
        match self.format {
            OutputFormat::Text => {
                for line in format_event(event) {
                    writeln!(w, "{}", line)?;
                }
            }
            OutputFormat::Json => {
                let line = event.to_json_line().map_err(io::Error::other)?;
                writeln!(w, "{}", line)?;
            }
        }
        w.flush()
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl GameObserver for EventRenderer<'_, '_> {
    fn on_event(&mut self, event: &GameEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.render(event) {
            tracing::error!("failed to render event: {}", e);
            self.error = Some(e);
        }
    }
}
