// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_persistence::Persistence;
use time::Duration;

use super::helpers::{
    add_test_team, create_game_request, create_statistic_request, create_test_date,
    create_test_persistence, seed_league,
};
use crate::{
    ApiError, GameRequest, GameResponse, add_game, add_statistic, delete_game, list_games,
    update_game,
};

#[test]
fn test_add_game_returns_stored_row() {
    let mut persistence: Persistence = create_test_persistence();
    let home: i64 = add_test_team(&mut persistence, "Home");
    let away: i64 = add_test_team(&mut persistence, "Away");

    let response: GameResponse = add_game(
        &mut persistence,
        &create_game_request(create_test_date(), home, away),
    )
    .unwrap();

    assert_eq!(response.message, "Game added successfully");
    assert_eq!(response.game.scheduled_date, create_test_date());
    assert_eq!(list_games(&mut persistence).unwrap().games, vec![response.game]);
}

#[test]
fn test_same_team_game_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let team_id: i64 = add_test_team(&mut persistence, "Solo");

    let result = add_game(
        &mut persistence,
        &create_game_request(create_test_date(), team_id, team_id),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "distinct_teams"
    ));
}

#[test]
fn test_double_booked_team_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, away_team_id, _, _) = seed_league(&mut persistence);
    let other: i64 = add_test_team(&mut persistence, "Other");

    let result = add_game(
        &mut persistence,
        &create_game_request(create_test_date(), other, away_team_id),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "one_game_per_date"
    ));
    assert_eq!(list_games(&mut persistence).unwrap().games.len(), 1);
}

#[test]
fn test_game_missing_date_is_invalid_input() {
    let mut persistence: Persistence = create_test_persistence();
    let home: i64 = add_test_team(&mut persistence, "Home");
    let away: i64 = add_test_team(&mut persistence, "Away");
    let mut request: GameRequest = create_game_request(create_test_date(), home, away);
    request.scheduled_date = None;

    let result = add_game(&mut persistence, &request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "scheduled_date"
    ));
}

#[test]
fn test_game_with_unknown_team_is_foreign_key_violation() {
    let mut persistence: Persistence = create_test_persistence();
    let home: i64 = add_test_team(&mut persistence, "Home");

    let result = add_game(
        &mut persistence,
        &create_game_request(create_test_date(), home, 77),
    );
    assert!(matches!(result, Err(ApiError::ForeignKeyViolation { .. })));
}

#[test]
fn test_update_game_on_its_own_date_is_allowed() {
    let mut persistence: Persistence = create_test_persistence();
    let (home_team_id, away_team_id, _, game_id) = seed_league(&mut persistence);

    let mut request: GameRequest =
        create_game_request(create_test_date(), home_team_id, away_team_id);
    request.home_score = Some(81);
    request.away_score = Some(77);
    let response: GameResponse = update_game(&mut persistence, game_id, &request).unwrap();

    assert_eq!(response.game.id, Some(game_id));
    assert_eq!(response.game.home_score, 81);
}

#[test]
fn test_update_game_into_conflict_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let (home_team_id, away_team_id, _, _) = seed_league(&mut persistence);
    let next_day = create_test_date() + Duration::days(1);
    let third: i64 = add_test_team(&mut persistence, "Third");
    let second_game: i64 = add_game(
        &mut persistence,
        &create_game_request(next_day, home_team_id, third),
    )
    .unwrap()
    .game
    .id
    .unwrap();

    let result = update_game(
        &mut persistence,
        second_game,
        &create_game_request(create_test_date(), away_team_id, third),
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "one_game_per_date"
    ));
}

#[test]
fn test_update_game_away_from_recorded_player_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let (home_team_id, away_team_id, player_id, game_id) = seed_league(&mut persistence);
    add_statistic(
        &mut persistence,
        &create_statistic_request(player_id, game_id),
    )
    .unwrap();
    let third: i64 = add_test_team(&mut persistence, "Third");

    let result = update_game(
        &mut persistence,
        game_id,
        &create_game_request(create_test_date(), third, away_team_id),
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "player_in_game"
    ));

    let games = list_games(&mut persistence).unwrap().games;
    assert_eq!(games[0].home_team_id, home_team_id);
}

#[test]
fn test_update_game_keeping_recorded_players_is_allowed() {
    let mut persistence: Persistence = create_test_persistence();
    let (home_team_id, away_team_id, player_id, game_id) = seed_league(&mut persistence);
    add_statistic(
        &mut persistence,
        &create_statistic_request(player_id, game_id),
    )
    .unwrap();

    let response: GameResponse = update_game(
        &mut persistence,
        game_id,
        &create_game_request(create_test_date(), away_team_id, home_team_id),
    )
    .unwrap();
    assert_eq!(response.game.home_team_id, away_team_id);
    assert_eq!(response.game.away_team_id, home_team_id);
}

#[test]
fn test_update_missing_game_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = update_game(&mut persistence, 12, &GameRequest::default());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_delete_game() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, _, _, game_id) = seed_league(&mut persistence);

    delete_game(&mut persistence, game_id).unwrap();

    assert!(list_games(&mut persistence).unwrap().games.is_empty());
    assert!(matches!(
        delete_game(&mut persistence, game_id),
        Err(ApiError::ResourceNotFound { .. })
    ));
}
