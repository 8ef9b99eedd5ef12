use serde::{Deserialize, Serialize};

/// A seat at the Pig table: an immutable name and the committed score.
///
/// The score only moves through [`PlayerAccount::add_score`] or
/// [`PlayerAccount::reset`]. Points still at risk during a turn live in the
/// engine's turn total, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAccount {
    /// Display name, non-empty
    name: String,
    /// Points banked across completed turns
    score: u32,
}

impl PlayerAccount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Bank `points` onto the committed score.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_at_zero() {
        let p = PlayerAccount::new("Charlie");
        assert_eq!(p.name(), "Charlie");
        assert_eq!(p.score(), 0);
    }

    #[test]
    fn add_score_accumulates() {
        let mut p = PlayerAccount::new("Alice");
        p.add_score(10);
        assert_eq!(p.score(), 10);
        p.add_score(5);
        assert_eq!(p.score(), 15);
        p.add_score(0);
        assert_eq!(p.score(), 15);
    }

    #[test]
    fn reset_clears_any_score() {
        let mut p = PlayerAccount::new("Bob");
        p.add_score(20);
        p.reset();
        assert_eq!(p.score(), 0);
        p.reset();
        assert_eq!(p.score(), 0);
    }
}
