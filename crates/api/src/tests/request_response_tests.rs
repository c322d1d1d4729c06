// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON shape of requests and responses.

use serde_json::{Value, json};

use super::helpers::create_test_date;
use crate::{GameInfo, GameRequest, PlayerInfo, PlayerRequest, TeamRequest};

#[test]
fn test_team_request_fields_default_when_absent() {
    let request: TeamRequest = serde_json::from_value(json!({"name": "Wildcats"})).unwrap();

    assert_eq!(request.name, "Wildcats");
    assert_eq!(request.division, None);
    assert_eq!(request.top_25, None);
}

#[test]
fn test_player_request_reads_class() {
    let request: PlayerRequest =
        serde_json::from_value(json!({"name": "Jordan", "class": 2027, "team_id": 1})).unwrap();

    assert_eq!(request.class_year, Some(2027));
    assert_eq!(request.team_id, Some(1));
}

#[test]
fn test_fractional_jersey_number_is_rejected() {
    let result: Result<PlayerRequest, _> =
        serde_json::from_value(json!({"name": "Jordan", "jersey_num": 12.5}));

    assert!(result.is_err());
}

#[test]
fn test_game_request_parses_calendar_date() {
    let request: GameRequest = serde_json::from_value(json!({
        "scheduled_date": "2025-03-01",
        "home_team_id": 1,
        "away_team_id": 2,
    }))
    .unwrap();

    assert_eq!(request.scheduled_date, Some(create_test_date()));
    assert_eq!(request.home_score, None);
}

#[test]
fn test_game_request_rejects_malformed_date() {
    let result: Result<GameRequest, _> =
        serde_json::from_value(json!({"scheduled_date": "03/01/2025"}));

    assert!(result.is_err());
}

#[test]
fn test_game_info_writes_calendar_date() {
    let info: GameInfo = GameInfo {
        id: Some(4),
        scheduled_date: create_test_date(),
        location: None,
        home_score: 60,
        away_score: 58,
        home_team_id: 1,
        away_team_id: 2,
    };

    let value: Value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["id"], json!(4));
    assert_eq!(value["scheduled_date"], json!("2025-03-01"));
}

#[test]
fn test_player_info_uses_wire_names() {
    let info: PlayerInfo = PlayerInfo {
        id: Some(1),
        name: String::from("Jordan"),
        position: None,
        jersey_num: Some(23),
        height_inches: None,
        weight_lbs: None,
        class_year: Some(2026),
        injured: false,
        team_id: None,
    };

    let value: Value = serde_json::to_value(&info).unwrap();
    assert_eq!(value["class"], json!(2026));
    assert!(value.get("class_year").is_none());
    assert_eq!(value["team_id"], Value::Null);
}
