use clap::Parser;
use common::utility::create_shutdown_channel;
use game_server::{config::GameServerConfig, entrypoint::serve};
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(Level::DEBUG)
        .init();
    let config = GameServerConfig::parse();
    let shutdown_receiver = create_shutdown_channel().await;
    serve(config, shutdown_receiver, None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use common::{model::game::Move, test::TestCase};
    use game_server::{
        entrypoint::GameServer,
        model::external::{ClientRequest, ClientResponse, RoundReport},
    };
    use reqwest::Client;
    use serde_json::{json, Value};

    async fn play(client: &Client, server: &GameServer, value: &str) -> RoundReport {
        let response = client
            .post(server.url("round"))
            .json(&ClientRequest::Move {
                value: value.to_owned(),
            })
            .send()
            .await
            .expect("Request failed");
        assert_eq!(response.status().as_u16(), 200);
        match response
            .json::<ClientResponse>()
            .await
            .expect("Failed to deserialize response")
        {
            ClientResponse::RoundResult(report) => report,
            other => panic!("Expected RoundResult, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn scripted_session() {
        let server = GameServer::new(Some(17)).await;
        let file_path = env!("CARGO_MANIFEST_DIR").to_string() + "/test/data/play_session.json";
        let replacements = vec![("bad_move", "Lizard")];
        let test_case = TestCase::<Value, ClientResponse>::load(file_path, replacements);
        assert!(!test_case.is_empty());

        let base_url = format!("http://{}", server.config.rest_address);
        test_case.run(&base_url).await;
        server.shutdown().await;
    }

    #[tokio::test]
    async fn rounds_update_the_session() {
        let server = GameServer::new(Some(3)).await;
        let client = Client::new();

        let first = play(&client, &server, "Rock").await;
        assert_eq!(first.player_move, Move::Rock);
        assert_eq!(first.scoreboard.games_played, 1);
        play(&client, &server, "rock").await;
        let third = play(&client, &server, "Paper").await;
        assert_eq!(third.scoreboard.games_played, 3);
        assert!(third.scoreboard.is_consistent());

        let response = client
            .get(server.url("session"))
            .send()
            .await
            .expect("Request failed")
            .json::<ClientResponse>()
            .await
            .expect("Failed to deserialize response");
        let snapshot = match response {
            ClientResponse::Session(snapshot) => snapshot,
            other => panic!("Expected Session, got {:?}", other),
        };
        assert_eq!(snapshot.scoreboard, third.scoreboard);
        assert_eq!(snapshot.move_frequency[&Move::Rock], 2);
        assert_eq!(snapshot.move_frequency[&Move::Paper], 1);
        assert_eq!(snapshot.move_frequency[&Move::Scissors], 0);
        assert_eq!(snapshot.last_player_move, Move::Paper);
        assert_eq!(snapshot.last_strategy, third.strategy);
        assert_eq!(snapshot.history.len(), 3);
        assert_eq!(snapshot.history[2], third.history_entry);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn malformed_body_gets_json_error() {
        let server = GameServer::new(Some(3)).await;
        let client = Client::new();

        let response = client
            .post(server.url("round"))
            .json(&json!({"type": "Move", "value": 5}))
            .send()
            .await
            .expect("Request failed");
        assert_eq!(response.status().as_u16(), 422);
        let body = response
            .json::<ClientResponse>()
            .await
            .expect("Error body should be a ClientResponse");
        match body {
            ClientResponse::Error { message } => assert!(message.contains("expected a string")),
            other => panic!("Expected Error, got {:?}", other),
        }

        let snapshot = client
            .get(server.url("session"))
            .send()
            .await
            .expect("Request failed")
            .json::<ClientResponse>()
            .await
            .expect("Failed to deserialize response");
        match snapshot {
            ClientResponse::Session(snapshot) => assert_eq!(snapshot.scoreboard.games_played, 0),
            other => panic!("Expected Session, got {:?}", other),
        }

        server.shutdown().await;
    }
}
