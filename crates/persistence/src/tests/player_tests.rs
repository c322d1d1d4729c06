// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Player;

use super::{
    assert_long_text_is_stored_whole, create_test_persistence, create_test_player,
    create_test_team,
};
use crate::{Persistence, PersistenceError};

#[test]
fn test_insert_and_get_player() {
    let mut persistence: Persistence = create_test_persistence();
    let team_id: i64 = persistence.insert_team(&create_test_team("Owls")).unwrap();
    let mut player: Player = create_test_player("Avery", Some(team_id), Some(4));
    player.injured = true;

    let player_id: i64 = persistence.insert_player(&player).unwrap();

    let stored: Player = persistence.get_player(player_id).unwrap().unwrap();
    assert_eq!(stored, player.with_id(player_id));
}

#[test]
fn test_free_agent_has_no_team() {
    let mut persistence: Persistence = create_test_persistence();
    let player_id: i64 = persistence
        .insert_player(&create_test_player("Free", None, Some(4)))
        .unwrap();

    let stored: Player = persistence.get_player(player_id).unwrap().unwrap();
    assert_eq!(stored.team_id, None);
}

#[test]
fn test_list_roster_returns_only_that_team() {
    let mut persistence: Persistence = create_test_persistence();
    let owls: i64 = persistence.insert_team(&create_test_team("Owls")).unwrap();
    let bears: i64 = persistence.insert_team(&create_test_team("Bears")).unwrap();
    persistence
        .insert_player(&create_test_player("A", Some(owls), Some(1)))
        .unwrap();
    persistence
        .insert_player(&create_test_player("B", Some(bears), Some(1)))
        .unwrap();
    persistence
        .insert_player(&create_test_player("C", Some(owls), Some(2)))
        .unwrap();

    let roster: Vec<Player> = persistence.list_roster(owls).unwrap();
    let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(persistence.list_players().unwrap().len(), 3);
}

#[test]
fn test_update_player_team_changes_only_team() {
    let mut persistence: Persistence = create_test_persistence();
    let owls: i64 = persistence.insert_team(&create_test_team("Owls")).unwrap();
    let bears: i64 = persistence.insert_team(&create_test_team("Bears")).unwrap();
    let player_id: i64 = persistence
        .insert_player(&create_test_player("A", Some(owls), Some(12)))
        .unwrap();

    persistence.update_player_team(player_id, Some(bears)).unwrap();

    let stored: Player = persistence.get_player(player_id).unwrap().unwrap();
    assert_eq!(stored.team_id, Some(bears));
    assert_eq!(stored.jersey_num, Some(12));
    assert_eq!(stored.name, "A");
}

#[test]
fn test_update_player_replaces_fields() {
    let mut persistence: Persistence = create_test_persistence();
    let player_id: i64 = persistence
        .insert_player(&create_test_player("A", None, None))
        .unwrap();

    let mut changed: Player = create_test_player("A. Smith", None, Some(30));
    changed.position = None;
    persistence.update_player(player_id, &changed).unwrap();

    let stored: Player = persistence.get_player(player_id).unwrap().unwrap();
    assert_eq!(stored.name, "A. Smith");
    assert_eq!(stored.jersey_num, Some(30));
    assert_eq!(stored.position, None);
}

#[test]
fn test_long_text_fields_are_stored_whole() {
    let mut persistence: Persistence = create_test_persistence();

    assert_long_text_is_stored_whole(&mut persistence);
}

#[test]
fn test_delete_missing_player_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<(), PersistenceError> = persistence.delete_player(99);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
