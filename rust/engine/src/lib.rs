//! # pig-engine: Rules Core for the Dice Game Pig
//!
//! Two or more players take turns rolling a single six-sided die. Each roll
//! of 2-6 adds to the turn total; a 1 wipes it out and ends the turn. A player
//! may hold at any point to bank the turn total. The first to reach the
//! winning threshold (100 by default) wins, and reaching it mid-turn banks the
//! points immediately.
//!
//! ## Core Modules
//!
//! - [`player`] - `PlayerAccount`: name plus committed score
//! - [`dice`] - Injectable die sources (seeded ChaCha20, scripted, closures)
//! - [`engine`] - `RoundEngine`: turn state machine, win detection, rotation
//! - [`events`] - Events emitted for display and the observer trait
//! - [`errors`] - Precondition errors
//!
//! ## Quick Start
//!
//! ```rust
//! use pig_engine::dice::ScriptedDie;
//! use pig_engine::engine::{GameOutcome, RoundEngine, ScriptedDecisions};
//!
//! // Every roll is a 6 and every answer is "roll": the first player
//! // reaches 100 on the 17th roll without ever being asked to hold.
//! let die = ScriptedDie::new(vec![6]).unwrap();
//! let mut engine = RoundEngine::new(["Alice", "Bob"], 100, die).unwrap();
//! let mut answers = ScriptedDecisions::new(vec!["r"; 16]);
//!
//! let outcome = engine.play(&mut answers, &mut ());
//! assert!(matches!(outcome, GameOutcome::Won { winner: 0, score: 102, .. }));
//! ```
//!
//! ## Deterministic Dice
//!
//! ```rust
//! use pig_engine::dice::{DieRoller, SeededDie};
//!
//! let mut a = SeededDie::new_with_seed(42);
//! let mut b = SeededDie::new_with_seed(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

pub mod dice;
pub mod engine;
pub mod errors;
pub mod events;
pub mod player;
