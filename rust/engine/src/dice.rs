use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::errors::GameError;

/// Number of faces on the single Pig die
pub const DIE_FACES: u8 = 6;

/// The face that ends a turn with nothing banked
pub const BUST_FACE: u8 = 1;

/// Source of die rolls consumed by the round engine.
///
/// Implementations must return a value in `1..=6`. Closures returning `u8`
/// qualify, so tests can inject a roll sequence inline.
pub trait DieRoller {
    fn roll(&mut self) -> u8;
}

impl<F> DieRoller for F
where
    F: FnMut() -> u8,
{
    fn roll(&mut self) -> u8 {
        self()
    }
}

/// A fair six-sided die backed by ChaCha20.
///
/// Two dice built from the same seed produce identical roll sequences.
#[derive(Debug, Clone)]
pub struct SeededDie {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededDie {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draw a fresh seed from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DieRoller for SeededDie {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

/// Replays a fixed list of faces, wrapping back to the start when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDie {
    faces: Vec<u8>,
    position: usize,
}

impl ScriptedDie {
    pub fn new(faces: Vec<u8>) -> Result<Self, GameError> {
        if faces.is_empty() {
            return Err(GameError::EmptyScript);
        }
        if let Some(&face) = faces.iter().find(|f| !(1..=DIE_FACES).contains(*f)) {
            return Err(GameError::InvalidFace { face });
        }
        Ok(Self { faces, position: 0 })
    }

    /// Rolls consumed so far, including wrap-arounds.
    pub fn rolls_taken(&self) -> usize {
        self.position
    }
}

impl DieRoller for ScriptedDie {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.position % self.faces.len()];
        self.position += 1;
        face
    }
}
