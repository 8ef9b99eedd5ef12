use serde::{Deserialize, Serialize};

/// A player's name and committed score at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub score: u32,
}

/// Printable facts emitted by the round engine as a game unfolds.
///
/// The engine never formats output itself; observers decide how (or whether)
/// to render these. Serialized with an `event` tag so a stream of them reads
/// as JSON lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    GameStarted {
        players: Vec<String>,
        target: u32,
    },
    TurnStarted {
        player: String,
        score: u32,
    },
    /// A face came up. `potential` is committed score plus turn total.
    Rolled {
        player: String,
        face: u8,
        turn_total: u32,
        potential: u32,
    },
    /// Hold/roll input that was rejected before asking again
    InvalidChoice {
        input: String,
    },
    Busted {
        player: String,
        discarded: u32,
    },
    Held {
        player: String,
        banked: u32,
        score: u32,
    },
    Won {
        player: String,
        score: u32,
    },
    Scoreboard {
        standings: Vec<Standing>,
    },
    /// The decision source closed mid-turn
    Abandoned {
        player: String,
    },
}

impl GameEvent {
    /// Single-line JSON rendering of the event.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Consumer of [`GameEvent`]s.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards every event.
impl GameObserver for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Records every event in order.
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
