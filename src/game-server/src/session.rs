use agent::{
    opponent::Opponent,
    strategy::{PlayerProfile, Strategy},
};
use common::model::game::{resolve, InvalidMoveError, Move, Outcome};
use rand::Rng;
use tracing::debug;

use crate::model::external::{RoundReport, Scoreboard, SessionSnapshot};

/// Counters, player profile and history accumulated since the session started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub scoreboard: Scoreboard,
    pub profile: PlayerProfile,
    pub last_strategy: Strategy,
    pub history: Vec<String>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            scoreboard: Scoreboard::default(),
            profile: PlayerProfile::new(),
            last_strategy: Strategy::Random,
            history: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            scoreboard: self.scoreboard,
            move_frequency: self.profile.frequency().clone(),
            last_player_move: self.profile.last_move(),
            last_strategy: self.last_strategy,
            history: self.history.clone(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays one round against `opponent` and returns the next state along with
/// the report for the shell.
pub fn play_round<R: Rng>(
    state: SessionState,
    player_move: Move,
    opponent: &mut Opponent<R>,
) -> (SessionState, RoundReport) {
    let SessionState {
        mut scoreboard,
        mut profile,
        mut history,
        ..
    } = state;

    scoreboard.games_played += 1;
    let (strategy, computer_move) = opponent.respond(&profile, player_move);
    let outcome = resolve(player_move, computer_move);
    match outcome {
        Outcome::Tie => scoreboard.ties += 1,
        Outcome::PlayerWins => scoreboard.player_wins += 1,
        Outcome::ComputerWins => scoreboard.computer_wins += 1,
    }
    profile.set_last_move(player_move);
    profile.increment(player_move);

    let history_entry = history_line(player_move, computer_move, outcome, strategy);
    debug!(round = scoreboard.games_played, "{}", history_entry);
    history.push(history_entry.clone());

    let report = RoundReport {
        outcome,
        player_move,
        computer_move,
        strategy,
        scoreboard,
        history_entry,
    };
    let state = SessionState {
        scoreboard,
        profile,
        last_strategy: strategy,
        history,
    };
    (state, report)
}

pub fn history_line(
    player_move: Move,
    computer_move: Move,
    outcome: Outcome,
    strategy: Strategy,
) -> String {
    let summary = match outcome {
        Outcome::Tie => format!("It's a tie! Both chose {}", player_move),
        Outcome::PlayerWins => format!("{} beats {}. Player Wins!", player_move, computer_move),
        Outcome::ComputerWins => {
            format!("{} beats {}. Computer Wins!", computer_move, player_move)
        }
    };
    format!("{} ({})", summary, strategy)
}

/// A session together with the opponent that plays it, for shells that keep
/// both in one place.
pub struct GameSession<R: Rng> {
    state: SessionState,
    opponent: Opponent<R>,
}

impl<R: Rng> GameSession<R> {
    pub fn new(opponent: Opponent<R>) -> Self {
        GameSession {
            state: SessionState::new(),
            opponent,
        }
    }

    pub fn play(&mut self, player_move: Move) -> RoundReport {
        let state = std::mem::take(&mut self.state);
        let (state, report) = play_round(state, player_move, &mut self.opponent);
        self.state = state;
        report
    }

    pub fn play_str(&mut self, player_move: &str) -> Result<RoundReport, InvalidMoveError> {
        let player_move = player_move.parse::<Move>()?;
        Ok(self.play(player_move))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }
}
