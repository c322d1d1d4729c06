// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_persistence::Persistence;

use super::helpers::{
    add_test_team, create_player_request, create_statistic_request, create_test_persistence,
    seed_league,
};
use crate::{
    ApiError, PlayerRequest, PlayerResponse, TransferPlayerRequest, add_player, add_statistic,
    delete_player, list_players, transfer_player, update_player,
};

#[test]
fn test_add_player_returns_stored_row() {
    let mut persistence: Persistence = create_test_persistence();
    let team_id: i64 = add_test_team(&mut persistence, "Wildcats");

    let response: PlayerResponse = add_player(
        &mut persistence,
        &create_player_request("Jordan", team_id, 23),
    )
    .unwrap();

    assert_eq!(response.message, "Player added successfully");
    assert_eq!(response.player.team_id, Some(team_id));
    assert_eq!(response.player.class_year, Some(2026));
    assert_eq!(list_players(&mut persistence).unwrap().players, vec![response.player]);
}

#[test]
fn test_second_player_with_same_jersey_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let team_id: i64 = add_test_team(&mut persistence, "Wildcats");
    add_player(&mut persistence, &create_player_request("A", team_id, 10)).unwrap();

    let result = add_player(&mut persistence, &create_player_request("B", team_id, 10));

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_jersey"
    ));
    assert_eq!(list_players(&mut persistence).unwrap().players.len(), 1);
}

#[test]
fn test_same_jersey_on_different_teams_is_allowed() {
    let mut persistence: Persistence = create_test_persistence();
    let owls: i64 = add_test_team(&mut persistence, "Owls");
    let bears: i64 = add_test_team(&mut persistence, "Bears");

    add_player(&mut persistence, &create_player_request("A", owls, 10)).unwrap();
    add_player(&mut persistence, &create_player_request("B", bears, 10)).unwrap();

    assert_eq!(list_players(&mut persistence).unwrap().players.len(), 2);
}

#[test]
fn test_player_with_unknown_team_is_foreign_key_violation() {
    let mut persistence: Persistence = create_test_persistence();

    let result = add_player(&mut persistence, &create_player_request("A", 99, 1));
    assert_eq!(
        result,
        Err(ApiError::ForeignKeyViolation {
            message: String::from("Team 99 does not exist"),
        })
    );
}

#[test]
fn test_add_player_rejects_early_class() {
    let mut persistence: Persistence = create_test_persistence();
    let mut request: PlayerRequest = create_player_request("A", 1, 1);
    request.team_id = None;
    request.class_year = Some(2010);

    let result = add_player(&mut persistence, &request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "class"
    ));
}

#[test]
fn test_update_player_keeps_own_jersey() {
    let mut persistence: Persistence = create_test_persistence();
    let team_id: i64 = add_test_team(&mut persistence, "Wildcats");
    let player_id: i64 = add_player(&mut persistence, &create_player_request("A", team_id, 4))
        .unwrap()
        .player
        .id
        .unwrap();

    let mut request: PlayerRequest = create_player_request("A", team_id, 4);
    request.injured = Some(true);
    let response: PlayerResponse = update_player(&mut persistence, player_id, &request).unwrap();

    assert!(response.player.injured);
    assert_eq!(response.player.id, Some(player_id));
}

#[test]
fn test_update_missing_player_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = update_player(&mut persistence, 3, &PlayerRequest::default());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_transfer_player_changes_only_team() {
    let mut persistence: Persistence = create_test_persistence();
    let owls: i64 = add_test_team(&mut persistence, "Owls");
    let bears: i64 = add_test_team(&mut persistence, "Bears");
    let player_id: i64 = add_player(&mut persistence, &create_player_request("A", owls, 8))
        .unwrap()
        .player
        .id
        .unwrap();

    let response: PlayerResponse = transfer_player(
        &mut persistence,
        player_id,
        &TransferPlayerRequest {
            team_id: Some(bears),
        },
    )
    .unwrap();

    assert_eq!(response.message, "Player transferred successfully");
    assert_eq!(response.player.team_id, Some(bears));
    assert_eq!(response.player.jersey_num, Some(8));
    assert_eq!(
        list_players(&mut persistence).unwrap().players[0].team_id,
        Some(bears)
    );
}

#[test]
fn test_transfer_into_taken_jersey_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let owls: i64 = add_test_team(&mut persistence, "Owls");
    let bears: i64 = add_test_team(&mut persistence, "Bears");
    add_player(&mut persistence, &create_player_request("A", bears, 8)).unwrap();
    let player_id: i64 = add_player(&mut persistence, &create_player_request("B", owls, 8))
        .unwrap()
        .player
        .id
        .unwrap();

    let result = transfer_player(
        &mut persistence,
        player_id,
        &TransferPlayerRequest {
            team_id: Some(bears),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_jersey"
    ));
}

#[test]
fn test_transfer_to_no_team_releases_player() {
    let mut persistence: Persistence = create_test_persistence();
    let owls: i64 = add_test_team(&mut persistence, "Owls");
    let player_id: i64 = add_player(&mut persistence, &create_player_request("A", owls, 8))
        .unwrap()
        .player
        .id
        .unwrap();

    let response: PlayerResponse = transfer_player(
        &mut persistence,
        player_id,
        &TransferPlayerRequest::default(),
    )
    .unwrap();
    assert_eq!(response.player.team_id, None);
}

#[test]
fn test_transfer_away_from_recorded_game_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let (home_team_id, _, player_id, game_id) = seed_league(&mut persistence);
    add_statistic(
        &mut persistence,
        &create_statistic_request(player_id, game_id),
    )
    .unwrap();
    let third: i64 = add_test_team(&mut persistence, "Third");

    let result = transfer_player(
        &mut persistence,
        player_id,
        &TransferPlayerRequest {
            team_id: Some(third),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "player_in_game"
    ));
    assert_eq!(
        list_players(&mut persistence).unwrap().players[0].team_id,
        Some(home_team_id)
    );
}

#[test]
fn test_release_of_player_with_recorded_line_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, _, player_id, game_id) = seed_league(&mut persistence);
    add_statistic(
        &mut persistence,
        &create_statistic_request(player_id, game_id),
    )
    .unwrap();

    let result = transfer_player(
        &mut persistence,
        player_id,
        &TransferPlayerRequest::default(),
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "player_in_game"
    ));
}

#[test]
fn test_transfer_to_opponent_in_recorded_game_is_allowed() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, away_team_id, player_id, game_id) = seed_league(&mut persistence);
    add_statistic(
        &mut persistence,
        &create_statistic_request(player_id, game_id),
    )
    .unwrap();

    let response: PlayerResponse = transfer_player(
        &mut persistence,
        player_id,
        &TransferPlayerRequest {
            team_id: Some(away_team_id),
        },
    )
    .unwrap();
    assert_eq!(response.player.team_id, Some(away_team_id));
}

#[test]
fn test_update_player_off_recorded_team_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    let (_, _, player_id, game_id) = seed_league(&mut persistence);
    add_statistic(
        &mut persistence,
        &create_statistic_request(player_id, game_id),
    )
    .unwrap();
    let third: i64 = add_test_team(&mut persistence, "Third");

    let result = update_player(
        &mut persistence,
        player_id,
        &create_player_request("Jordan", third, 23),
    );
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "player_in_game"
    ));
}

#[test]
fn test_transfer_missing_player_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = transfer_player(&mut persistence, 1, &TransferPlayerRequest::default());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_delete_player() {
    let mut persistence: Persistence = create_test_persistence();
    let owls: i64 = add_test_team(&mut persistence, "Owls");
    let player_id: i64 = add_player(&mut persistence, &create_player_request("A", owls, 8))
        .unwrap()
        .player
        .id
        .unwrap();

    let response = delete_player(&mut persistence, player_id).unwrap();

    assert_eq!(response.message, "Player deleted successfully");
    assert!(list_players(&mut persistence).unwrap().players.is_empty());
}
