// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record service operations.
//!
//! Every write follows the same sequence: read the related records the
//! validator needs, validate, then write. Nothing is written when
//! validation fails. Constraint violations raised by storage at write time
//! are translated into the same errors validation would have produced.
//!
//! The caller holds the persistence lock for the whole call, so the
//! read-validate-write sequence is not interleaved with other requests in
//! this process.

use courtside_domain::{
    DomainError, Game, GameCandidate, Player, PlayerCandidate, Statistic, StatisticCandidate,
    StatisticContext, Team, TeamCandidate, validate_game, validate_game_lines, validate_player,
    validate_player_lines, validate_statistic, validate_team,
};
use courtside_persistence::{Persistence, PersistenceError};
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    DeleteResponse, GameInfo, GameRequest, GameResponse, ListGamesResponse, ListPlayersResponse,
    ListStatisticsResponse, ListTeamsResponse, PlayerInfo, PlayerRequest, PlayerResponse,
    StatisticInfo, StatisticRequest, StatisticResponse, TeamInfo, TeamRequest, TeamResponse,
    TransferPlayerRequest,
};

/// Logs a validation rejection and translates it.
fn rejected(entity: &'static str, err: DomainError) -> ApiError {
    warn!(entity, error = %err, "Validation rejected write");
    translate_domain_error(err)
}

fn not_found(resource_type: &str, id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message: format!("{resource_type} {id} does not exist"),
    }
}

/// Translates a failed player write using the rejected player's values.
fn player_write_error(err: PersistenceError, player: &Player) -> ApiError {
    match (err, player.team_id, player.jersey_num) {
        (PersistenceError::UniqueViolation(_), Some(team_id), Some(jersey_num)) => {
            rejected(
                "Player",
                DomainError::DuplicateJersey {
                    team_id,
                    jersey_num,
                },
            )
        }
        (PersistenceError::ForeignKeyViolation(_), Some(team_id), _) => {
            warn!(team_id, "Player references unknown team");
            ApiError::ForeignKeyViolation {
                message: format!("Team {team_id} does not exist"),
            }
        }
        (err, _, _) => translate_persistence_error(err, "Player"),
    }
}

/// Translates a failed game write using the rejected game's values.
fn game_write_error(err: PersistenceError, game: &Game) -> ApiError {
    match err {
        PersistenceError::TeamAlreadyScheduled {
            team_id,
            scheduled_date,
        } => rejected(
            "Game",
            DomainError::DoubleBooking {
                team_id,
                scheduled_date,
            },
        ),
        PersistenceError::ForeignKeyViolation(_) => {
            warn!(
                home_team_id = game.home_team_id,
                away_team_id = game.away_team_id,
                "Game references unknown team"
            );
            ApiError::ForeignKeyViolation {
                message: format!(
                    "Home team {} or away team {} does not exist",
                    game.home_team_id, game.away_team_id
                ),
            }
        }
        err => translate_persistence_error(err, "Game"),
    }
}

/// Translates a failed statistic write using the rejected line's values.
fn statistic_write_error(err: PersistenceError, statistic: &Statistic) -> ApiError {
    match err {
        PersistenceError::UniqueViolation(_) => rejected(
            "Statistic",
            DomainError::DuplicateStatistic {
                player_id: statistic.player_id,
                game_id: statistic.game_id,
            },
        ),
        PersistenceError::ForeignKeyViolation(_) => ApiError::ForeignKeyViolation {
            message: format!(
                "Player {} or game {} does not exist",
                statistic.player_id, statistic.game_id
            ),
        },
        err => translate_persistence_error(err, "Statistic"),
    }
}

// ============================================================================
// Teams
// ============================================================================

/// Lists every team, ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_teams(persistence: &mut Persistence) -> Result<ListTeamsResponse, ApiError> {
    let teams: Vec<Team> = persistence
        .list_teams()
        .map_err(|e| translate_persistence_error(e, "Team"))?;

    Ok(ListTeamsResponse {
        teams: teams.into_iter().map(TeamInfo::from).collect(),
    })
}

/// Validates and stores a new team.
///
/// # Errors
///
/// Returns an error if validation fails or the write fails.
pub fn add_team(
    persistence: &mut Persistence,
    request: &TeamRequest,
) -> Result<TeamResponse, ApiError> {
    let team: Team =
        validate_team(&TeamCandidate::from(request)).map_err(|e| rejected("Team", e))?;

    let team_id: i64 = persistence
        .insert_team(&team)
        .map_err(|e| translate_persistence_error(e, "Team"))?;
    info!(team_id, name = %team.name, "Added team");

    Ok(TeamResponse {
        message: String::from("Team added successfully"),
        team: TeamInfo::from(team.with_id(team_id)),
    })
}

/// Replaces a team's fields.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the team does not exist, or an error if
/// validation or the write fails.
pub fn update_team(
    persistence: &mut Persistence,
    team_id: i64,
    request: &TeamRequest,
) -> Result<TeamResponse, ApiError> {
    if persistence
        .get_team(team_id)
        .map_err(|e| translate_persistence_error(e, "Team"))?
        .is_none()
    {
        return Err(not_found("Team", team_id));
    }

    let team: Team = validate_team(&TeamCandidate::from(request))
        .map_err(|e| rejected("Team", e))?
        .with_id(team_id);

    persistence
        .update_team(team_id, &team)
        .map_err(|e| translate_persistence_error(e, "Team"))?;
    info!(team_id, "Updated team");

    Ok(TeamResponse {
        message: String::from("Team updated successfully"),
        team: TeamInfo::from(team),
    })
}

/// Deletes a team with its roster, games, and their statistics.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the team does not exist.
pub fn delete_team(
    persistence: &mut Persistence,
    team_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_team(team_id)
        .map_err(|e| translate_persistence_error(e, "Team"))?;
    info!(team_id, "Deleted team");

    Ok(DeleteResponse {
        message: String::from("Team deleted successfully"),
    })
}

// ============================================================================
// Players
// ============================================================================

/// Loads the roster a player candidate is checked against.
///
/// Free agents and unusable team references have no roster.
fn load_roster(
    persistence: &mut Persistence,
    candidate: &PlayerCandidate,
) -> Result<Vec<Player>, ApiError> {
    let Some(team_id) = candidate.team_id.filter(|id| *id > 0) else {
        return Ok(Vec::new());
    };

    let roster: Vec<Player> = persistence
        .list_roster(team_id)
        .map_err(|e| translate_persistence_error(e, "Player"))?;
    debug!(team_id, roster_size = roster.len(), "Loaded roster");
    Ok(roster)
}

/// Lists every player, ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_players(persistence: &mut Persistence) -> Result<ListPlayersResponse, ApiError> {
    let players: Vec<Player> = persistence
        .list_players()
        .map_err(|e| translate_persistence_error(e, "Player"))?;

    Ok(ListPlayersResponse {
        players: players.into_iter().map(PlayerInfo::from).collect(),
    })
}

/// Validates and stores a new player.
///
/// # Errors
///
/// Returns an error if validation fails, the team does not exist, or the
/// write fails.
pub fn add_player(
    persistence: &mut Persistence,
    request: &PlayerRequest,
) -> Result<PlayerResponse, ApiError> {
    let candidate: PlayerCandidate = PlayerCandidate::from(request);
    let roster: Vec<Player> = load_roster(persistence, &candidate)?;

    let player: Player =
        validate_player(&candidate, &roster, None).map_err(|e| rejected("Player", e))?;

    let player_id: i64 = persistence
        .insert_player(&player)
        .map_err(|e| player_write_error(e, &player))?;
    info!(player_id, team_id = ?player.team_id, "Added player");

    Ok(PlayerResponse {
        message: String::from("Player added successfully"),
        player: PlayerInfo::from(player.with_id(player_id)),
    })
}

/// Rejects a team change that would strand the player's recorded
/// statistic lines in games their new team does not play.
fn check_player_lines(
    persistence: &mut Persistence,
    player_id: i64,
    player: &Player,
) -> Result<(), ApiError> {
    let games: Vec<Game> = persistence
        .list_games_with_statistics_for_player(player_id)
        .map_err(|e| translate_persistence_error(e, "Player"))?;
    validate_player_lines(player_id, player, &games).map_err(|e| rejected("Player", e))
}

/// Replaces a player's fields.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the player does not exist, or an error if
/// validation or the write fails.
pub fn update_player(
    persistence: &mut Persistence,
    player_id: i64,
    request: &PlayerRequest,
) -> Result<PlayerResponse, ApiError> {
    if persistence
        .get_player(player_id)
        .map_err(|e| translate_persistence_error(e, "Player"))?
        .is_none()
    {
        return Err(not_found("Player", player_id));
    }

    let candidate: PlayerCandidate = PlayerCandidate::from(request);
    let roster: Vec<Player> = load_roster(persistence, &candidate)?;

    let player: Player = validate_player(&candidate, &roster, Some(player_id))
        .map_err(|e| rejected("Player", e))?;
    check_player_lines(persistence, player_id, &player)?;

    persistence
        .update_player(player_id, &player)
        .map_err(|e| player_write_error(e, &player))?;
    info!(player_id, team_id = ?player.team_id, "Updated player");

    Ok(PlayerResponse {
        message: String::from("Player updated successfully"),
        player: PlayerInfo::from(player),
    })
}

/// Moves a player to another team, or releases them when `team_id` is
/// absent.
///
/// The player's other fields are kept; only the team changes. The jersey
/// number must be free on the new roster, and the new team must play in
/// every game the player already has a statistic line for.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the player does not exist, or an error if
/// validation or the write fails.
pub fn transfer_player(
    persistence: &mut Persistence,
    player_id: i64,
    request: &TransferPlayerRequest,
) -> Result<PlayerResponse, ApiError> {
    let existing: Player = persistence
        .get_player(player_id)
        .map_err(|e| translate_persistence_error(e, "Player"))?
        .ok_or_else(|| not_found("Player", player_id))?;

    let mut candidate: PlayerCandidate = PlayerCandidate::from(&existing);
    candidate.team_id = request.team_id;
    let roster: Vec<Player> = load_roster(persistence, &candidate)?;

    let player: Player = validate_player(&candidate, &roster, Some(player_id))
        .map_err(|e| rejected("Player", e))?;
    check_player_lines(persistence, player_id, &player)?;

    persistence
        .update_player_team(player_id, player.team_id)
        .map_err(|e| player_write_error(e, &player))?;
    info!(
        player_id,
        from_team_id = ?existing.team_id,
        to_team_id = ?player.team_id,
        "Transferred player"
    );

    Ok(PlayerResponse {
        message: String::from("Player transferred successfully"),
        player: PlayerInfo::from(player),
    })
}

/// Deletes a player and their statistics.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the player does not exist.
pub fn delete_player(
    persistence: &mut Persistence,
    player_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_player(player_id)
        .map_err(|e| translate_persistence_error(e, "Player"))?;
    info!(player_id, "Deleted player");

    Ok(DeleteResponse {
        message: String::from("Player deleted successfully"),
    })
}

// ============================================================================
// Games
// ============================================================================

/// Loads the games either team already plays on the candidate's date.
fn load_same_day_games(
    persistence: &mut Persistence,
    candidate: &GameCandidate,
) -> Result<Vec<Game>, ApiError> {
    let (Some(scheduled_date), Some(home_team_id), Some(away_team_id)) = (
        candidate.scheduled_date,
        candidate.home_team_id,
        candidate.away_team_id,
    ) else {
        return Ok(Vec::new());
    };

    let games: Vec<Game> = persistence
        .list_games_on_date_for_teams(scheduled_date, home_team_id, away_team_id)
        .map_err(|e| translate_persistence_error(e, "Game"))?;
    debug!(
        %scheduled_date,
        home_team_id,
        away_team_id,
        same_day_games = games.len(),
        "Loaded same day games"
    );
    Ok(games)
}

/// Lists every game, ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_games(persistence: &mut Persistence) -> Result<ListGamesResponse, ApiError> {
    let games: Vec<Game> = persistence
        .list_games()
        .map_err(|e| translate_persistence_error(e, "Game"))?;

    Ok(ListGamesResponse {
        games: games.into_iter().map(GameInfo::from).collect(),
    })
}

/// Validates and schedules a new game.
///
/// # Errors
///
/// Returns an error if validation fails, either team does not exist, or
/// the write fails.
pub fn add_game(
    persistence: &mut Persistence,
    request: &GameRequest,
) -> Result<GameResponse, ApiError> {
    let candidate: GameCandidate = GameCandidate::from(request);
    let scheduled: Vec<Game> = load_same_day_games(persistence, &candidate)?;

    let game: Game =
        validate_game(&candidate, &scheduled, None).map_err(|e| rejected("Game", e))?;

    let game_id: i64 = persistence
        .insert_game(&game)
        .map_err(|e| game_write_error(e, &game))?;
    info!(game_id, scheduled_date = %game.scheduled_date, "Added game");

    Ok(GameResponse {
        message: String::from("Game added successfully"),
        game: GameInfo::from(game.with_id(game_id)),
    })
}

/// Replaces a game's fields.
///
/// Players with a statistic line in the game must still be on the home or
/// away team afterwards.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the game does not exist, or an error if
/// validation or the write fails.
pub fn update_game(
    persistence: &mut Persistence,
    game_id: i64,
    request: &GameRequest,
) -> Result<GameResponse, ApiError> {
    if persistence
        .get_game(game_id)
        .map_err(|e| translate_persistence_error(e, "Game"))?
        .is_none()
    {
        return Err(not_found("Game", game_id));
    }

    let candidate: GameCandidate = GameCandidate::from(request);
    let scheduled: Vec<Game> = load_same_day_games(persistence, &candidate)?;

    let game: Game = validate_game(&candidate, &scheduled, Some(game_id))
        .map_err(|e| rejected("Game", e))?;

    // Rule: recorded lines must still belong to a team in the game
    let players: Vec<Player> = persistence
        .list_players_with_statistics_in_game(game_id)
        .map_err(|e| translate_persistence_error(e, "Game"))?;
    validate_game_lines(game_id, &game, &players).map_err(|e| rejected("Game", e))?;

    persistence
        .update_game(game_id, &game)
        .map_err(|e| game_write_error(e, &game))?;
    info!(game_id, scheduled_date = %game.scheduled_date, "Updated game");

    Ok(GameResponse {
        message: String::from("Game updated successfully"),
        game: GameInfo::from(game),
    })
}

/// Deletes a game and its statistics.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the game does not exist.
pub fn delete_game(
    persistence: &mut Persistence,
    game_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_game(game_id)
        .map_err(|e| translate_persistence_error(e, "Game"))?;
    info!(game_id, "Deleted game");

    Ok(DeleteResponse {
        message: String::from("Game deleted successfully"),
    })
}

// ============================================================================
// Statistics
// ============================================================================

fn load_statistic_context(
    persistence: &mut Persistence,
    candidate: &StatisticCandidate,
) -> Result<StatisticContext, ApiError> {
    let (Some(player_id), Some(game_id)) = (candidate.player_id, candidate.game_id) else {
        return Ok(StatisticContext::default());
    };

    let context: StatisticContext = persistence
        .get_statistic_context(player_id, game_id)
        .map_err(|e| translate_persistence_error(e, "Statistic"))?;
    debug!(
        player_id,
        game_id,
        game_found = context.game.is_some(),
        player_found = context.player.is_some(),
        existing = context.existing_for_pair.is_some(),
        "Loaded statistic context"
    );
    Ok(context)
}

/// Lists every statistic line, ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_statistics(
    persistence: &mut Persistence,
) -> Result<ListStatisticsResponse, ApiError> {
    let statistics: Vec<Statistic> = persistence
        .list_statistics()
        .map_err(|e| translate_persistence_error(e, "Statistic"))?;

    Ok(ListStatisticsResponse {
        statistics: statistics.into_iter().map(StatisticInfo::from).collect(),
    })
}

/// Validates and records a player's line for a game.
///
/// # Errors
///
/// Returns an error if validation fails or the write fails.
pub fn add_statistic(
    persistence: &mut Persistence,
    request: &StatisticRequest,
) -> Result<StatisticResponse, ApiError> {
    let candidate: StatisticCandidate = StatisticCandidate::from(request);
    let context: StatisticContext = load_statistic_context(persistence, &candidate)?;

    let statistic: Statistic = validate_statistic(&candidate, &context, None)
        .map_err(|e| rejected("Statistic", e))?;

    let statistic_id: i64 = persistence
        .insert_statistic(&statistic)
        .map_err(|e| statistic_write_error(e, &statistic))?;
    info!(
        statistic_id,
        player_id = statistic.player_id,
        game_id = statistic.game_id,
        "Added statistic"
    );

    Ok(StatisticResponse {
        message: String::from("Statistic added successfully"),
        statistic: StatisticInfo::from(statistic.with_id(statistic_id)),
    })
}

/// Replaces a statistic line's fields.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the line does not exist, or an error if
/// validation or the write fails.
pub fn update_statistic(
    persistence: &mut Persistence,
    statistic_id: i64,
    request: &StatisticRequest,
) -> Result<StatisticResponse, ApiError> {
    if persistence
        .get_statistic(statistic_id)
        .map_err(|e| translate_persistence_error(e, "Statistic"))?
        .is_none()
    {
        return Err(not_found("Statistic", statistic_id));
    }

    let candidate: StatisticCandidate = StatisticCandidate::from(request);
    let context: StatisticContext = load_statistic_context(persistence, &candidate)?;

    let statistic: Statistic = validate_statistic(&candidate, &context, Some(statistic_id))
        .map_err(|e| rejected("Statistic", e))?;

    persistence
        .update_statistic(statistic_id, &statistic)
        .map_err(|e| statistic_write_error(e, &statistic))?;
    info!(statistic_id, "Updated statistic");

    Ok(StatisticResponse {
        message: String::from("Statistic updated successfully"),
        statistic: StatisticInfo::from(statistic),
    })
}

/// Deletes a statistic line.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the line does not exist.
pub fn delete_statistic(
    persistence: &mut Persistence,
    statistic_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_statistic(statistic_id)
        .map_err(|e| translate_persistence_error(e, "Statistic"))?;
    info!(statistic_id, "Deleted statistic");

    Ok(DeleteResponse {
        message: String::from("Statistic deleted successfully"),
    })
}
