use common::model::game::Move;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::strategy::{select_strategy, PlayerProfile, Strategy};

/// The computer player. Owns the random source so callers can inject a
/// seeded or scripted one.
pub struct Opponent<R: Rng> {
    rng: R,
}

impl<R: Rng> Opponent<R> {
    pub fn new(rng: R) -> Self {
        Opponent { rng }
    }

    /// Picks this round's strategy and the move it produces.
    pub fn respond(&mut self, profile: &PlayerProfile, player_move: Move) -> (Strategy, Move) {
        let strategy = select_strategy(&mut self.rng);
        let computer_move = strategy.generate(profile, player_move, &mut self.rng);
        debug!(%strategy, %player_move, %computer_move, "Opponent responded");
        (strategy, computer_move)
    }
}

impl Opponent<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use common::model::game::{resolve, Outcome};
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn same_seed_same_responses() {
        let profile = PlayerProfile::new();
        let mut a = Opponent::seeded(99);
        let mut b = Opponent::seeded(99);
        for player_move in Move::ALL.iter().cycle().take(30) {
            assert_eq!(
                a.respond(&profile, *player_move),
                b.respond(&profile, *player_move)
            );
        }
    }

    #[test]
    fn forced_cheat_beats_the_player() {
        let mut opponent = Opponent::new(StepRng::new(0, 0));
        let profile = PlayerProfile::new();
        for player_move in Move::ALL {
            let (strategy, computer_move) = opponent.respond(&profile, player_move);
            assert_eq!(strategy, Strategy::Cheat);
            assert_eq!(resolve(player_move, computer_move), Outcome::ComputerWins);
        }
    }
}
