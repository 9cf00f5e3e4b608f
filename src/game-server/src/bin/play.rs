use agent::opponent::Opponent;
use clap::Parser;
use common::model::game::Move;
use dialoguer::Select;
use game_server::session::GameSession;
use rand::Rng;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(
    name = "play",
    about = "Rock Paper Scissors against the computer, in the terminal"
)]
struct Args {
    /// Seed for the opponent; omit for a fresh random game
    #[arg(long, env = "RPS_SEED")]
    seed: Option<u64>,
}

const CHOICES: [&str; 4] = ["Rock", "Paper", "Scissors", "Quit"];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(Level::INFO)
        .init();
    let args = Args::parse();
    let opponent = match args.seed {
        Some(seed) => Opponent::seeded(seed),
        None => Opponent::from_entropy(),
    };
    let mut session = GameSession::new(opponent);

    println!("Rock Paper Scissors Game\n");
    println!("{}\n", session.snapshot().scoreboard);
    loop {
        let choice = Select::new()
            .with_prompt("Your move")
            .items(&CHOICES)
            .default(0)
            .interact()?;
        // Anything past the three moves is Quit
        let Some(player_move) = Move::ALL.get(choice).copied() else {
            break;
        };
        let report = session.play(player_move);
        println!("{}\n", report.history_entry);
        println!("{}\n", report.scoreboard);
    }

    print_history(&session);
    info!(
        games_played = session.state().scoreboard.games_played,
        "Session finished"
    );
    Ok(())
}

fn print_history<R: Rng>(session: &GameSession<R>) {
    println!("Game History");
    for line in &session.state().history {
        println!("  {}", line);
    }
}
