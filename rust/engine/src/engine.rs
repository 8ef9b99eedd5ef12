use std::collections::VecDeque;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::dice::{DieRoller, SeededDie, BUST_FACE};
use crate::errors::GameError;
use crate::events::{GameEvent, GameObserver, Standing};
use crate::player::PlayerAccount;

/// Score a player must reach or exceed to win unless configured otherwise
pub const DEFAULT_WIN_THRESHOLD: u32 = 100;

/// Smallest table Pig is played at
pub const MIN_PLAYERS: usize = 2;

/// The two answers a player can give between rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChoice {
    /// Bank the turn total and pass the die
    Hold,
    /// Risk the turn total on another roll
    Roll,
}

impl FromStr for TurnChoice {
    type Err = GameError;

    /// Accepts `h`, `hold`, `r`, `roll` in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "hold" => Ok(TurnChoice::Hold),
            "r" | "roll" => Ok(TurnChoice::Roll),
            _ => Err(GameError::InvalidChoice {
                input: s.trim().to_string(),
            }),
        }
    }
}

/// What the decision provider is shown when asked to hold or roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPrompt<'a> {
    pub player: &'a str,
    pub turn_total: u32,
    pub score: u32,
    /// Non-zero when the previous answer was rejected
    pub attempt: u32,
}

/// Supplies raw hold/roll answers, blocking as long as it needs to.
///
/// Returning `None` means no more answers will come (input closed or the
/// user quit); the engine then abandons the game without touching scores.
pub trait DecisionProvider {
    fn decide(&mut self, prompt: &DecisionPrompt<'_>) -> Option<String>;
}

/// Answers from a fixed queue, then `None` once drained.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    answers: VecDeque<String>,
    asked: usize,
}

impl ScriptedDecisions {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: 0,
        }
    }

    /// How many times the engine has asked for a decision.
    pub fn times_asked(&self) -> usize {
        self.asked
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn decide(&mut self, _prompt: &DecisionPrompt<'_>) -> Option<String> {
        self.asked += 1;
        self.answers.pop_front()
    }
}

/// Non-terminal states of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Rolling,
    Deciding,
}

/// How a single turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Rolled a 1; the turn total was thrown away
    Bust { discarded: u32 },
    /// Chose to hold; the turn total was banked
    Held { banked: u32 },
    /// Crossed the threshold mid-turn; the turn total was banked automatically
    Won { banked: u32 },
    /// The decision provider stopped answering
    Abandoned,
}

/// How a whole game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won {
        winner: usize,
        name: String,
        score: u32,
        turns: u32,
    },
    Abandoned {
        turns: u32,
    },
}

/// Runs one game of Pig: the roster, the rotation cursor and the turn state
/// machine.
///
/// # Examples
///
/// ```
/// use pig_engine::dice::ScriptedDie;
/// use pig_engine::engine::{RoundEngine, ScriptedDecisions, TurnOutcome};
///
/// let die = ScriptedDie::new(vec![5]).unwrap();
/// let mut engine = RoundEngine::new(["Alice", "Bob"], 100, die).unwrap();
///
/// let mut answers = ScriptedDecisions::new(["hold"]);
/// let outcome = engine.play_turn(&mut answers, &mut ());
///
/// assert_eq!(outcome, TurnOutcome::Held { banked: 5 });
/// assert_eq!(engine.players()[0].score(), 5);
/// ```
#[derive(Debug)]
pub struct RoundEngine<R: DieRoller = SeededDie> {
    players: Vec<PlayerAccount>,
    current: usize,
    win_threshold: u32,
    /// Points at risk in the active turn; zero between turns
    turn_total: u32,
    die: R,
}

impl<R: DieRoller> RoundEngine<R> {
    pub fn new<I, S>(names: I, win_threshold: u32, die: R) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if win_threshold == 0 {
            return Err(GameError::InvalidThreshold);
        }
        let players: Vec<PlayerAccount> = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.into();
                if name.trim().is_empty() {
                    Err(GameError::EmptyName { index })
                } else {
                    Ok(PlayerAccount::new(name))
                }
            })
            .collect::<Result<_, _>>()?;
        if players.len() < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers {
                minimum: MIN_PLAYERS,
                actual: players.len(),
            });
        }
        Ok(Self {
            players,
            current: 0,
            win_threshold,
            turn_total: 0,
            die,
        })
    }

    pub fn players(&self) -> &[PlayerAccount] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &PlayerAccount {
        &self.players[self.current]
    }

    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| Standing {
                name: p.name().to_string(),
                score: p.score(),
            })
            .collect()
    }

    pub fn roll_die(&mut self) -> u8 {
        self.die.roll()
    }

    /// Pass the die to the next seat, wrapping after the last one.
    pub fn switch_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Whether `player` has won already, or would win by banking `turn_score`.
    pub fn would_win(&self, player: usize, turn_score: u32) -> bool {
        let score = self.players[player].score();
        score >= self.win_threshold || score.saturating_add(turn_score) >= self.win_threshold
    }

    /// Bank `turn_score` for a player who has not yet reached the threshold.
    pub fn commit_win(&mut self, player: usize, turn_score: u32) {
        if self.players[player].score() < self.win_threshold {
            self.players[player].add_score(turn_score);
        }
    }

    /// Check for a win and, if the turn score is what gets the player there,
    /// bank it in the same step. Claiming the win is the check.
    pub fn claim_win(&mut self, player: usize, turn_score: u32) -> bool {
        if !self.would_win(player, turn_score) {
            return false;
        }
        self.commit_win(player, turn_score);
        true
    }

    /// Whether `player` has already banked a winning score.
    pub fn is_winner(&self, player: usize) -> bool {
        self.would_win(player, 0)
    }

    /// Play one turn for the current player and report how it ended.
    ///
    /// The turn alternates between rolling and deciding. A 1 ends it with
    /// nothing banked; reaching the threshold ends it with the turn total
    /// banked and no further question asked. The cursor is not advanced.
    pub fn play_turn(
        &mut self,
        decisions: &mut dyn DecisionProvider,
        observer: &mut dyn GameObserver,
    ) -> TurnOutcome {
        let idx = self.current;
        let name = self.players[idx].name().to_string();
        self.turn_total = 0;
        observer.on_event(&GameEvent::TurnStarted {
            player: name.clone(),
            score: self.players[idx].score(),
        });

        let mut phase = TurnPhase::Rolling;
        let outcome = loop {
            phase = match phase {
                TurnPhase::Rolling => {
                    let face = self.roll_die();
                    if face != BUST_FACE {
                        self.turn_total = self.turn_total.saturating_add(u32::from(face));
                    }
                    let potential = self.players[idx].score().saturating_add(self.turn_total);
                    debug!(player = %name, face, turn_total = self.turn_total, "rolled");
                    observer.on_event(&GameEvent::Rolled {
                        player: name.clone(),
                        face,
                        turn_total: self.turn_total,
                        potential,
                    });

                    if face == BUST_FACE {
                        let discarded = self.turn_total;
                        info!(player = %name, discarded, "bust");
                        observer.on_event(&GameEvent::Busted {
                            player: name.clone(),
                            discarded,
                        });
                        break TurnOutcome::Bust { discarded };
                    }
                    if self.claim_win(idx, self.turn_total) {
                        let banked = self.turn_total;
                        let score = self.players[idx].score();
                        info!(player = %name, banked, score, "threshold reached mid-turn");
                        observer.on_event(&GameEvent::Won {
                            player: name.clone(),
                            score,
                        });
                        break TurnOutcome::Won { banked };
                    }
                    TurnPhase::Deciding
                }
                TurnPhase::Deciding => match self.await_choice(idx, decisions, observer) {
                    Some(TurnChoice::Roll) => TurnPhase::Rolling,
                    Some(TurnChoice::Hold) => {
                        let banked = self.turn_total;
                        self.players[idx].add_score(banked);
                        let score = self.players[idx].score();
                        info!(player = %name, banked, score, "hold");
                        observer.on_event(&GameEvent::Held {
                            player: name.clone(),
                            banked,
                            score,
                        });
                        break TurnOutcome::Held { banked };
                    }
                    None => {
                        info!(player = %name, "decision source closed");
                        observer.on_event(&GameEvent::Abandoned {
                            player: name.clone(),
                        });
                        break TurnOutcome::Abandoned;
                    }
                },
            };
        };
        self.turn_total = 0;
        outcome
    }

    /// Ask until a recognisable hold/roll answer arrives. Rejected answers
    /// change nothing but the attempt counter shown in the next prompt.
    fn await_choice(
        &self,
        idx: usize,
        decisions: &mut dyn DecisionProvider,
        observer: &mut dyn GameObserver,
    ) -> Option<TurnChoice> {
        let player = &self.players[idx];
        let mut attempt = 0;
        loop {
            let prompt = DecisionPrompt {
                player: player.name(),
                turn_total: self.turn_total,
                score: player.score(),
                attempt,
            };
            let raw = decisions.decide(&prompt)?;
            match raw.parse::<TurnChoice>() {
                Ok(choice) => {
                    debug!(player = player.name(), ?choice, "decision");
                    return Some(choice);
                }
                Err(e) => {
                    warn!(player = player.name(), input = %raw, "{}", e);
                    observer.on_event(&GameEvent::InvalidChoice {
                        input: raw.trim().to_string(),
                    });
                    attempt += 1;
                }
            }
        }
    }

    /// Play turns in rotation until someone has banked a winning score.
    ///
    /// A scoreboard event follows every turn, whatever its outcome.
    pub fn play(
        &mut self,
        decisions: &mut dyn DecisionProvider,
        observer: &mut dyn GameObserver,
    ) -> GameOutcome {
        observer.on_event(&GameEvent::GameStarted {
            players: self.players.iter().map(|p| p.name().to_string()).collect(),
            target: self.win_threshold,
        });

        let mut turns = 0u32;
        loop {
            turns += 1;
            let outcome = self.play_turn(decisions, observer);
            observer.on_event(&GameEvent::Scoreboard {
                standings: self.standings(),
            });

            if outcome == TurnOutcome::Abandoned {
                info!(turns, "game abandoned");
                return GameOutcome::Abandoned { turns };
            }
            if self.is_winner(self.current) {
                let winner = self.current_player();
                info!(winner = winner.name(), score = winner.score(), turns, "game over");
                return GameOutcome::Won {
                    winner: self.current,
                    name: winner.name().to_string(),
                    score: winner.score(),
                    turns,
                };
            }
            self.switch_player();
        }
    }
}
