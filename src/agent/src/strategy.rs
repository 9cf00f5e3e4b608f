use std::{collections::BTreeMap, fmt};

use common::model::game::Move;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance of forcing `Cheat` before the uniform draw over all strategies.
pub const CHEAT_CHANCE: f64 = 0.1;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    Random,
    LastUsed,
    MostUsed,
    LeastUsed,
    Cheat,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::LastUsed,
        Strategy::MostUsed,
        Strategy::LeastUsed,
        Strategy::Cheat,
    ];

    /// Computer move for this round. `player_move` is only looked at by `Cheat`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        profile: &PlayerProfile,
        player_move: Move,
        rng: &mut R,
    ) -> Move {
        match self {
            Strategy::Random => random_move(rng),
            Strategy::LastUsed => profile.last_move(),
            Strategy::MostUsed => profile.most_used().unwrap_or_else(|| random_move(rng)),
            Strategy::LeastUsed => profile.least_used().unwrap_or_else(|| random_move(rng)),
            Strategy::Cheat => player_move.beaten_by(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Random => "RANDOM",
            Strategy::LastUsed => "LAST_USED",
            Strategy::MostUsed => "MOST_USED",
            Strategy::LeastUsed => "LEAST_USED",
            Strategy::Cheat => "CHEAT",
        };
        f.write_str(label)
    }
}

/// Cheat with `CHEAT_CHANCE`, otherwise a uniform pick over all five
/// strategies. Cheat can come out of either stage.
pub fn select_strategy<R: Rng + ?Sized>(rng: &mut R) -> Strategy {
    if rng.gen::<f64>() < CHEAT_CHANCE {
        Strategy::Cheat
    } else {
        Strategy::ALL[rng.gen_range(0..Strategy::ALL.len())]
    }
}

pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    Move::ALL[rng.gen_range(0..Move::ALL.len())]
}

/// What the opponent knows about the human: the previous move and how often
/// each move has been played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    last_move: Move,
    frequency: BTreeMap<Move, u32>,
}

impl PlayerProfile {
    pub fn new() -> Self {
        PlayerProfile {
            last_move: Move::Rock,
            frequency: Move::ALL.into_iter().map(|m| (m, 0)).collect(),
        }
    }

    pub fn last_move(&self) -> Move {
        self.last_move
    }

    pub fn frequency(&self) -> &BTreeMap<Move, u32> {
        &self.frequency
    }

    pub fn count(&self, player_move: Move) -> u32 {
        self.frequency.get(&player_move).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.frequency.values().sum()
    }

    pub fn set_last_move(&mut self, player_move: Move) {
        self.last_move = player_move;
    }

    pub fn increment(&mut self, player_move: Move) {
        *self.frequency.entry(player_move).or_insert(0) += 1;
    }

    // Ties go to the earliest move in Rock, Paper, Scissors order.
    pub fn most_used(&self) -> Option<Move> {
        self.pick(|count, best| count > best)
    }

    pub fn least_used(&self) -> Option<Move> {
        self.pick(|count, best| count < best)
    }

    fn pick(&self, replaces: impl Fn(u32, u32) -> bool) -> Option<Move> {
        let mut best: Option<(Move, u32)> = None;
        for (&player_move, &count) in &self.frequency {
            match best {
                Some((_, best_count)) if !replaces(count, best_count) => {}
                _ => best = Some((player_move, count)),
            }
        }
        best.map(|(player_move, _)| player_move)
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new()
    }
}
