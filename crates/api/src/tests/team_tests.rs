// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_persistence::Persistence;

use super::helpers::{add_test_team, create_team_request, create_test_persistence, seed_league};
use crate::{
    ApiError, TeamRequest, TeamResponse, add_team, delete_team, list_games, list_players,
    list_teams, update_team,
};

#[test]
fn test_add_team_returns_stored_row() {
    let mut persistence: Persistence = create_test_persistence();
    let request: TeamRequest = TeamRequest {
        name: String::from("Wildcats"),
        division: Some(1),
        wins: Some(10),
        losses: Some(5),
        top_25: Some(true),
        rank: Some(12),
    };

    let response: TeamResponse = add_team(&mut persistence, &request).unwrap();

    assert_eq!(response.message, "Team added successfully");
    assert!(response.team.id.is_some());
    assert_eq!(response.team.rank, Some(12));

    let listed = list_teams(&mut persistence).unwrap().teams;
    assert_eq!(listed, vec![response.team]);
}

#[test]
fn test_add_team_rejects_season_cap_without_writing() {
    let mut persistence: Persistence = create_test_persistence();
    let mut request: TeamRequest = create_team_request("Overbooked");
    request.wins = Some(25);
    request.losses = Some(20);

    let result = add_team(&mut persistence, &request);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "season_cap"
    ));
    assert!(list_teams(&mut persistence).unwrap().teams.is_empty());
}

#[test]
fn test_add_team_requires_rank_when_top_25() {
    let mut persistence: Persistence = create_test_persistence();
    let mut request: TeamRequest = create_team_request("Ranked");
    request.top_25 = Some(true);
    request.rank = None;

    let result = add_team(&mut persistence, &request);
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "top_25_rank"
    ));
}

#[test]
fn test_add_team_missing_name_is_invalid_input() {
    let mut persistence: Persistence = create_test_persistence();
    let request: TeamRequest = TeamRequest {
        division: Some(2),
        ..TeamRequest::default()
    };

    let result = add_team(&mut persistence, &request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "name"
    ));
}

#[test]
fn test_update_team_replaces_fields() {
    let mut persistence: Persistence = create_test_persistence();
    let team_id: i64 = add_test_team(&mut persistence, "Wildcats");

    let mut request: TeamRequest = create_team_request("Wildcats");
    request.wins = Some(20);
    request.top_25 = Some(false);
    request.rank = Some(3);
    let response: TeamResponse = update_team(&mut persistence, team_id, &request).unwrap();

    assert_eq!(response.team.id, Some(team_id));
    assert_eq!(response.team.wins, 20);
    // Rank is dropped for unranked teams.
    assert_eq!(response.team.rank, None);
    assert_eq!(list_teams(&mut persistence).unwrap().teams[0].wins, 20);
}

#[test]
fn test_update_missing_team_is_not_found_before_validation() {
    let mut persistence: Persistence = create_test_persistence();

    let result = update_team(&mut persistence, 42, &TeamRequest::default());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_delete_team_cascades_through_service() {
    let mut persistence: Persistence = create_test_persistence();
    let (home_team_id, _, _, _) = seed_league(&mut persistence);

    delete_team(&mut persistence, home_team_id).unwrap();

    assert_eq!(list_teams(&mut persistence).unwrap().teams.len(), 1);
    assert!(list_players(&mut persistence).unwrap().players.is_empty());
    assert!(list_games(&mut persistence).unwrap().games.is_empty());
}

#[test]
fn test_delete_missing_team_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = delete_team(&mut persistence, 7);
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Team"
    ));
}
