//! # Play Command
//!
//! Interactive Pig at the terminal.
//!
//! The command is the setup and I/O collaborator around
//! [`pig_engine::engine::RoundEngine`]: it asks for the player count and
//! names, feeds the engine hold/roll answers read from stdin, renders the
//! events the engine emits, and offers a new game once someone wins.
//!
//! ## Input
//!
//! - Player count: an integer >= 2 (skipped when `--players` or config sets it)
//! - Names: any non-blank text
//! - Between rolls: `h`/`hold` or `r`/`roll`, any case; anything else is
//!   rejected and asked again
//! - `q`/`quit` at a count or hold/roll prompt, or EOF anywhere, leaves the
//!   session
//!
//! With `--format json` the event stream owns stdout and every prompt moves
//! to stderr.

use crate::cli::OutputFormat;
use crate::config;
use crate::error::CliError;
use crate::formatters::EventRenderer;
use crate::io_utils::{SharedWriter, prompt_line, say};
use crate::ui;
use crate::validation::{
    ParseResult, is_quit, parse_player_count, parse_player_name, wants_new_game,
};
use pig_engine::dice::SeededDie;
use pig_engine::engine::{DecisionPrompt, DecisionProvider, GameOutcome, RoundEngine};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Flags given to `pig play`; unset values come from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    pub players: Option<u8>,
    pub target: Option<u32>,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

/// Handle the play command: resolve settings, then run games until the
/// players stop.
///
/// # Returns
///
/// * `Ok(())` when the players leave, whether after a win or mid-game
/// * `Err(CliError)` on invalid configuration, a rejected roster, or I/O errors
pub fn handle_play_command<'w>(
    opts: PlayOptions,
    stdin: &mut dyn BufRead,
    out: &'w mut dyn Write,
    err: &'w mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    let cfg = resolved.config;

    let target = opts.target.unwrap_or(cfg.target);
    let players = opts.players.or(cfg.players).map(usize::from);
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);

    execute_play_command(target, players, seed, opts.format, stdin, out, err)
}

/// Session loop shared by the handler and the tests (module-private helper).
fn execute_play_command<'w>(
    target: u32,
    players: Option<usize>,
    seed: u64,
    format: OutputFormat,
    stdin: &mut dyn BufRead,
    out: &'w mut dyn Write,
    err: &'w mut dyn Write,
) -> Result<(), CliError> {
    if target == 0 {
        return Err(CliError::InvalidInput("target must be >= 1".to_string()));
    }

    let out: SharedWriter<'w> = RefCell::new(out);
    let err: SharedWriter<'w> = RefCell::new(err);
    let prompts = match format {
        OutputFormat::Text => &out,
        OutputFormat::Json => &err,
    };

    say(
        prompts,
        &format!(
            "play: target={} seed={} format={}",
            target,
            seed,
            format.as_str()
        ),
    )?;

    let mut game_no = 0u64;
    loop {
        // one seed per game so a replayed session replays every game
        let die = SeededDie::new_with_seed(seed.wrapping_add(game_no));
        game_no += 1;

        let Some(names) = ask_roster(stdin, prompts, players)? else {
            say(prompts, "Setup abandoned.")?;
            return Ok(());
        };
        info!(game = game_no, players = names.len(), target, "starting game");
        let mut engine = RoundEngine::new(names, target, die)?;

        let outcome = {
            let mut decisions = ConsoleDecisions::new(&mut *stdin, prompts);
            let mut renderer = EventRenderer::new(&out, format);
            let outcome = engine.play(&mut decisions, &mut renderer);
            renderer.finish()?;
            decisions.finish()?;
            outcome
        };

        if let GameOutcome::Abandoned { turns } = outcome {
            info!(game = game_no, turns, "session ended mid-game");
            return Ok(());
        }

        match prompt_line(stdin, prompts, ui::NEW_GAME_PROMPT)? {
            Some(answer) if wants_new_game(&answer) => continue,
            _ => {
                for line in ui::farewell_lines() {
                    say(prompts, line)?;
                }
                return Ok(());
            }
        }
    }
}

/// Ask for the player count (unless preset) and every name.
/// `Ok(None)` means the user quit or input ended.
fn ask_roster(
    stdin: &mut dyn BufRead,
    prompts: &SharedWriter<'_>,
    preset: Option<usize>,
) -> Result<Option<Vec<String>>, CliError> {
    let count = match preset {
        Some(n) => n,
        None => loop {
            let Some(line) = prompt_line(stdin, prompts, "Enter number of players: ")? else {
                return Ok(None);
            };
            match parse_player_count(&line) {
                ParseResult::Value(n) => break n,
                ParseResult::Quit => return Ok(None),
                ParseResult::Invalid(msg) => say(prompts, &msg)?,
            }
        },
    };

    let mut names = Vec::with_capacity(count);
    for i in 1..=count {
        let name = loop {
            let Some(line) = prompt_line(stdin, prompts, &ui::name_prompt(i))? else {
                return Ok(None);
            };
            match parse_player_name(&line) {
                ParseResult::Value(name) => break name,
                ParseResult::Quit => return Ok(None),
                ParseResult::Invalid(msg) => say(prompts, &msg)?,
            }
        };
        names.push(name);
    }
    Ok(Some(names))
}

/// Hold/roll answers typed at the console.
///
/// End of input and `q` both stop the game. A failed read or prompt write
/// also stops it, and is kept for [`ConsoleDecisions::finish`] to report.
struct ConsoleDecisions<'a, 'w> {
    stdin: &'a mut dyn BufRead,
    prompts: &'a SharedWriter<'w>,
    error: Option<io::Error>,
}

impl<'a, 'w> ConsoleDecisions<'a, 'w> {
    fn new(stdin: &'a mut dyn BufRead, prompts: &'a SharedWriter<'w>) -> Self {
        Self {
            stdin,
            prompts,
            error: None,
        }
    }

    fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl DecisionProvider for ConsoleDecisions<'_, '_> {
    fn decide(&mut self, prompt: &DecisionPrompt<'_>) -> Option<String> {
        debug!(
            player = prompt.player,
            turn_total = prompt.turn_total,
            attempt = prompt.attempt,
            "awaiting decision"
        );
        match prompt_line(&mut *self.stdin, self.prompts, ui::DECISION_PROMPT) {
            Ok(Some(answer)) if is_quit(&answer) => None,
            Ok(answer) => answer,
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}
