use std::sync::Arc;

use agent::opponent::Opponent;
use common::utility::random_address;
use tokio::{
    net::TcpListener,
    sync::{broadcast, oneshot, Mutex},
};
use tracing::{error, info, warn, Level};

use crate::{config::GameServerConfig, service::game_manager::GameManager, session::GameSession};

pub async fn serve(
    config: GameServerConfig,
    mut shutdown_receiver: broadcast::Receiver<()>,
    ready_signal: Option<oneshot::Sender<()>>,
) -> std::io::Result<()> {
    let opponent = match config.seed {
        Some(seed) => {
            info!("Seeding opponent with {}", seed);
            Opponent::seeded(seed)
        }
        None => Opponent::from_entropy(),
    };
    let session = Arc::new(Mutex::new(GameSession::new(opponent)));

    let listener = TcpListener::bind(&config.rest_address).await?;
    info!("Game server listening on {}", config.rest_address);

    // Signal that the server is ready
    if let Some(ready_signal) = ready_signal {
        if ready_signal.send(()).is_err() {
            warn!("Nobody is waiting for the ready signal");
        }
    }

    axum::serve(listener, GameManager::router(session))
        .with_graceful_shutdown(async move {
            let _ = shutdown_receiver.recv().await;
        })
        .await?;
    info!("Game server stopped");
    Ok(())
}

/// A server on a random local port, for tests.
pub struct GameServer {
    pub config: GameServerConfig,
    shutdown_sender: broadcast::Sender<()>,
}

impl GameServer {
    pub async fn new(seed: Option<u64>) -> Self {
        // Init logging, ignore error if already set
        let _ = tracing_subscriber::fmt()
            .with_line_number(true)
            .with_file(true)
            .with_max_level(Level::DEBUG)
            .try_init();

        let config = GameServerConfig {
            rest_address: random_address().await.expect("Failed to get random port"),
            seed,
        };

        // Create server
        let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        let (ready_sender, ready_receiver) = oneshot::channel();
        let moved_cfg = config.clone();
        tokio::spawn(async move {
            if let Err(e) = serve(moved_cfg, shutdown_receiver, Some(ready_sender)).await {
                error!("Game server failed: {}", e);
            }
        });

        // Wait for server to be ready
        ready_receiver.await.expect("Server failed to start");

        GameServer {
            config,
            shutdown_sender,
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("http://{}/{}", self.config.rest_address, endpoint)
    }

    pub async fn shutdown(&self) {
        self.shutdown_sender.send(()).expect("Failed to shutdown");
    }
}
