use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_macros::debug_handler;
use rand_chacha::ChaCha8Rng;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    model::external::{ClientRequest, ClientResponse},
    session::GameSession,
};

/// One session per server. The lock turns concurrent requests into one round
/// at a time.
pub type SharedSession = Arc<Mutex<GameSession<ChaCha8Rng>>>;

pub struct GameManager {}

impl GameManager {
    pub fn router(session: SharedSession) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/session", get(get_session))
            .route("/round", post(play_round))
            .layer(TraceLayer::new_for_http())
            .with_state(session)
    }
}

async fn root() -> &'static str {
    "Rock Paper Scissors"
}

#[debug_handler]
async fn get_session(State(session): State<SharedSession>) -> Json<ClientResponse> {
    let snapshot = session.lock().await.snapshot();
    Json(ClientResponse::Session(snapshot))
}

#[debug_handler]
async fn play_round(
    State(session): State<SharedSession>,
    request: Result<Json<ClientRequest>, JsonRejection>,
) -> Response {
    let value = match request {
        Ok(Json(ClientRequest::Move { value })) => value,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return error_response(rejection.status(), rejection.body_text());
        }
    };
    match session.lock().await.play_str(&value) {
        Ok(report) => {
            info!("{}", report.history_entry);
            (StatusCode::OK, Json(ClientResponse::RoundResult(report))).into_response()
        }
        Err(e) => {
            warn!("Rejected round: {}", e);
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ClientResponse::Error { message })).into_response()
}
