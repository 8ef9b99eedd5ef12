//! Die sampling command.
//!
//! The `rolls` command rolls the same ChaCha20-backed die the game uses and
//! prints the faces plus a histogram, which makes it easy to check that a
//! seed reproduces and that every face turns up.

use crate::error::CliError;
use pig_engine::dice::{DIE_FACES, DieRoller, SeededDie};
use std::io::Write;

/// Faces beyond this many are summarised by the histogram only
const MAX_LISTED_ROLLS: usize = 100;

/// Handle the rolls command.
///
/// # Arguments
///
/// * `seed` - Die seed (random when `None`)
/// * `count` - Number of rolls
/// * `out` - Output stream
pub fn handle_rolls_command(
    seed: Option<u64>,
    count: u32,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut die = seed.map_or_else(SeededDie::from_entropy, SeededDie::new_with_seed);
    let seed = die.seed();
    let rolls: Vec<u8> = (0..count).map(|_| die.roll()).collect();

    let mut histogram = [0u32; DIE_FACES as usize];
    for face in &rolls {
        histogram[usize::from(*face - 1)] += 1;
    }

    writeln!(out, "seed: {}", seed)?;
    if rolls.len() <= MAX_LISTED_ROLLS {
        writeln!(out, "rolls: {:?}", rolls)?;
    }
    for (i, n) in histogram.iter().enumerate() {
        writeln!(out, "{}: {}", i + 1, n)?;
    }
    Ok(())
}
