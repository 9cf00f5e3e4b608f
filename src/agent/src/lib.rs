//! The computer opponent: picks a strategy every round and derives its move from it.

pub mod opponent;
pub mod strategy;
