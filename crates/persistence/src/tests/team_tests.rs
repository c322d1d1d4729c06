// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Team;

use super::{create_test_persistence, create_test_team};
use crate::{Persistence, PersistenceError};

#[test]
fn test_insert_and_get_team() {
    let mut persistence: Persistence = create_test_persistence();
    let mut team: Team = create_test_team("Wildcats");
    team.top_25 = true;
    team.rank = Some(10);

    let team_id: i64 = persistence.insert_team(&team).unwrap();

    let stored: Team = persistence.get_team(team_id).unwrap().unwrap();
    assert_eq!(stored, team.with_id(team_id));
}

#[test]
fn test_get_missing_team_returns_none() {
    let mut persistence: Persistence = create_test_persistence();
    assert_eq!(persistence.get_team(42).unwrap(), None);
}

#[test]
fn test_list_teams_in_id_order() {
    let mut persistence: Persistence = create_test_persistence();
    let first: i64 = persistence.insert_team(&create_test_team("Owls")).unwrap();
    let second: i64 = persistence.insert_team(&create_test_team("Bears")).unwrap();

    let teams: Vec<Team> = persistence.list_teams().unwrap();
    let ids: Vec<Option<i64>> = teams.iter().map(|t| t.team_id).collect();
    assert_eq!(ids, vec![Some(first), Some(second)]);
}

#[test]
fn test_update_team_replaces_fields() {
    let mut persistence: Persistence = create_test_persistence();
    let team_id: i64 = persistence.insert_team(&create_test_team("Owls")).unwrap();

    let mut changed: Team = create_test_team("Night Owls");
    changed.wins = 20;
    changed.losses = 20;
    persistence.update_team(team_id, &changed).unwrap();

    let stored: Team = persistence.get_team(team_id).unwrap().unwrap();
    assert_eq!(stored.name, "Night Owls");
    assert_eq!(stored.wins, 20);
    assert_eq!(stored.losses, 20);
}

#[test]
fn test_update_missing_team_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<(), PersistenceError> =
        persistence.update_team(7, &create_test_team("Ghosts"));
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_team() {
    let mut persistence: Persistence = create_test_persistence();
    let team_id: i64 = persistence.insert_team(&create_test_team("Owls")).unwrap();

    persistence.delete_team(team_id).unwrap();

    assert_eq!(persistence.get_team(team_id).unwrap(), None);
    let again: Result<(), PersistenceError> = persistence.delete_team(team_id);
    assert!(matches!(again, Err(PersistenceError::NotFound(_))));
}
