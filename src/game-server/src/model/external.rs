use std::{collections::BTreeMap, fmt};

use agent::strategy::Strategy;
use common::model::game::{Move, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub player_wins: u32,
    pub computer_wins: u32,
    pub ties: u32,
    pub games_played: u32,
}

impl Scoreboard {
    pub fn is_consistent(&self) -> bool {
        self.player_wins + self.computer_wins + self.ties == self.games_played
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player Wins: {}", self.player_wins)?;
        writeln!(f, "Computer Wins: {}", self.computer_wins)?;
        writeln!(f, "Ties: {}", self.ties)?;
        write!(f, "Games Played: {}", self.games_played)
    }
}

/// Everything a shell needs to render one finished round.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub outcome: Outcome,
    pub player_move: Move,
    pub computer_move: Move,
    pub strategy: Strategy,
    pub scoreboard: Scoreboard,
    pub history_entry: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub scoreboard: Scoreboard,
    pub move_frequency: BTreeMap<Move, u32>,
    pub last_player_move: Move,
    pub last_strategy: Strategy,
    pub history: Vec<String>,
}

// Client types
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum ClientRequest {
    // Raw text so that unknown moves reach the validation boundary
    Move { value: String },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ClientResponse {
    Session(SessionSnapshot),
    RoundResult(RoundReport),
    Error { message: String },
}
