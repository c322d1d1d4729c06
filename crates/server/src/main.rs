// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod http_error;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::{
        Path, State as AxumState,
        rejection::{JsonRejection, PathRejection},
    },
    http::{Method, StatusCode, header},
    routing::{delete, get, post, put},
};
use clap::Parser;
use courtside_api::{
    DeleteResponse, GameRequest, GameResponse, ListGamesResponse, ListPlayersResponse,
    ListStatisticsResponse, ListTeamsResponse, PlayerRequest, PlayerResponse, StatisticRequest,
    StatisticResponse, TeamRequest, TeamResponse, TransferPlayerRequest, add_game, add_player,
    add_statistic, add_team, delete_game, delete_player, delete_statistic, delete_team,
    list_games, list_players, list_statistics, list_teams, transfer_player, update_game,
    update_player, update_statistic, update_team,
};
use courtside_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::{Args, DatabaseTarget, ServerConfig};
use crate::http_error::HttpError;

/// Application state shared across handlers.
///
/// Handlers hold the lock for the whole read-validate-write sequence of a
/// record service call.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for league records.
    persistence: Arc<Mutex<Persistence>>,
}

/// Response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type IdPath = Result<Path<i64>, PathRejection>;

/// Handler for GET `/health`.
#[allow(clippy::unused_async)]
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

// ============================================================================
// Teams
// ============================================================================

async fn handle_list_teams(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListTeamsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_teams(&mut persistence)?))
}

async fn handle_add_team(
    AxumState(app_state): AxumState<AppState>,
    body: JsonBody<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), HttpError> {
    let Json(req) = body?;
    debug!(name = %req.name, "Handling add_team request");

    let mut persistence = app_state.persistence.lock().await;
    let response: TeamResponse = add_team(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_update_team(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
    body: JsonBody<TeamRequest>,
) -> Result<Json<TeamResponse>, HttpError> {
    let Path(team_id) = path?;
    let Json(req) = body?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_team(&mut persistence, team_id, &req)?))
}

async fn handle_delete_team(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
) -> Result<Json<DeleteResponse>, HttpError> {
    let Path(team_id) = path?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(delete_team(&mut persistence, team_id)?))
}

// ============================================================================
// Players
// ============================================================================

async fn handle_list_players(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListPlayersResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_players(&mut persistence)?))
}

async fn handle_add_player(
    AxumState(app_state): AxumState<AppState>,
    body: JsonBody<PlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), HttpError> {
    let Json(req) = body?;
    debug!(name = %req.name, team_id = ?req.team_id, "Handling add_player request");

    let mut persistence = app_state.persistence.lock().await;
    let response: PlayerResponse = add_player(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_update_player(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
    body: JsonBody<PlayerRequest>,
) -> Result<Json<PlayerResponse>, HttpError> {
    let Path(player_id) = path?;
    let Json(req) = body?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_player(&mut persistence, player_id, &req)?))
}

/// Handler for PUT `/transfer-player/{player_id}`.
async fn handle_transfer_player(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
    body: JsonBody<TransferPlayerRequest>,
) -> Result<Json<PlayerResponse>, HttpError> {
    let Path(player_id) = path?;
    let Json(req) = body?;
    debug!(player_id, team_id = ?req.team_id, "Handling transfer_player request");

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(transfer_player(&mut persistence, player_id, &req)?))
}

async fn handle_delete_player(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
) -> Result<Json<DeleteResponse>, HttpError> {
    let Path(player_id) = path?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(delete_player(&mut persistence, player_id)?))
}

// ============================================================================
// Games
// ============================================================================

async fn handle_list_games(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListGamesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_games(&mut persistence)?))
}

async fn handle_add_game(
    AxumState(app_state): AxumState<AppState>,
    body: JsonBody<GameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), HttpError> {
    let Json(req) = body?;
    debug!(
        home_team_id = ?req.home_team_id,
        away_team_id = ?req.away_team_id,
        "Handling add_game request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: GameResponse = add_game(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_update_game(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
    body: JsonBody<GameRequest>,
) -> Result<Json<GameResponse>, HttpError> {
    let Path(game_id) = path?;
    let Json(req) = body?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_game(&mut persistence, game_id, &req)?))
}

async fn handle_delete_game(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
) -> Result<Json<DeleteResponse>, HttpError> {
    let Path(game_id) = path?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(delete_game(&mut persistence, game_id)?))
}

// ============================================================================
// Statistics
// ============================================================================

async fn handle_list_statistics(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListStatisticsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(list_statistics(&mut persistence)?))
}

async fn handle_add_statistic(
    AxumState(app_state): AxumState<AppState>,
    body: JsonBody<StatisticRequest>,
) -> Result<(StatusCode, Json<StatisticResponse>), HttpError> {
    let Json(req) = body?;
    debug!(
        player_id = ?req.player_id,
        game_id = ?req.game_id,
        "Handling add_statistic request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: StatisticResponse = add_statistic(&mut persistence, &req)?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn handle_update_statistic(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
    body: JsonBody<StatisticRequest>,
) -> Result<Json<StatisticResponse>, HttpError> {
    let Path(statistic_id) = path?;
    let Json(req) = body?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(update_statistic(&mut persistence, statistic_id, &req)?))
}

async fn handle_delete_statistic(
    AxumState(app_state): AxumState<AppState>,
    path: IdPath,
) -> Result<Json<DeleteResponse>, HttpError> {
    let Path(statistic_id) = path?;

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(delete_statistic(&mut persistence, statistic_id)?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/get-teams", get(handle_list_teams))
        .route("/add-team", post(handle_add_team))
        .route("/update-team/{team_id}", put(handle_update_team))
        .route("/delete-team/{team_id}", delete(handle_delete_team))
        .route("/get-players", get(handle_list_players))
        .route("/add-player", post(handle_add_player))
        .route("/update-player/{player_id}", put(handle_update_player))
        .route("/transfer-player/{player_id}", put(handle_transfer_player))
        .route("/delete-player/{player_id}", delete(handle_delete_player))
        .route("/get-games", get(handle_list_games))
        .route("/add-game", post(handle_add_game))
        .route("/update-game/{game_id}", put(handle_update_game))
        .route("/delete-game/{game_id}", delete(handle_delete_game))
        .route("/get-statistics", get(handle_list_statistics))
        .route("/add-statistic", post(handle_add_statistic))
        .route("/update-statistic/{statistic_id}", put(handle_update_statistic))
        .route("/delete-statistic/{statistic_id}", delete(handle_delete_statistic))
        .with_state(app_state)
}

/// Wraps the router with CORS, request tracing, and the optional static
/// frontend.
fn build_app(app_state: AppState, config: &ServerConfig) -> Router {
    let allow_origin: AllowOrigin = config
        .frontend_origin
        .clone()
        .map_or_else(|| AllowOrigin::from(Any), AllowOrigin::exact);
    let cors: CorsLayer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let mut app: Router = build_router(app_state);
    if let Some(dir) = &config.static_dir {
        info!(static_dir = %dir.display(), "Serving frontend");
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).layer(TraceLayer::new_for_http())
}

/// Opens the configured database and applies migrations.
fn open_persistence(
    target: &DatabaseTarget,
) -> Result<Persistence, courtside_persistence::PersistenceError> {
    match target {
        DatabaseTarget::InMemory => {
            info!("Using in-memory database");
            Persistence::new_in_memory()
        }
        DatabaseTarget::SqliteFile(path) => {
            info!(path = %path.display(), "Using file-based database");
            Persistence::new_with_file(path)
        }
        DatabaseTarget::Mysql(url) => {
            info!("Using MySQL database");
            Persistence::new_with_mysql(url)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Environment fallbacks for the flags may come from .env
    dotenvy::dotenv().ok();
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Courtside Server");

    let config: ServerConfig = ServerConfig::from_args(args)?;

    let mut persistence: Persistence = open_persistence(&config.database)?;
    persistence.verify_foreign_key_enforcement()?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_app(app_state, &config);

    info!("Server listening on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
