use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "game-server",
    about = "Rock Paper Scissors against the computer, over HTTP"
)]
pub struct GameServerConfig {
    /// Address the REST endpoint binds to
    #[arg(long, env = "RPS_ADDRESS", default_value = "0.0.0.0:8082")]
    pub rest_address: String,
    /// Seed for the opponent; omit for a fresh random game
    #[arg(long, env = "RPS_SEED")]
    pub seed: Option<u64>,
}
