// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use courtside_persistence::Persistence;
use time::{Date, Month};

use crate::{
    GameRequest, PlayerRequest, StatisticRequest, TeamRequest, add_game, add_player, add_team,
};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

/// March 1, 2025.
pub fn create_test_date() -> Date {
    Date::from_calendar_date(2025, Month::March, 1).expect("Valid test date")
}

pub fn create_team_request(name: &str) -> TeamRequest {
    TeamRequest {
        name: name.to_string(),
        division: Some(1),
        wins: Some(12),
        losses: Some(3),
        top_25: Some(false),
        rank: None,
    }
}

pub fn create_player_request(name: &str, team_id: i64, jersey_num: i32) -> PlayerRequest {
    PlayerRequest {
        name: name.to_string(),
        position: Some(String::from("Forward")),
        jersey_num: Some(jersey_num),
        height_inches: Some(80.0),
        weight_lbs: Some(220.0),
        class_year: Some(2026),
        injured: Some(false),
        team_id: Some(team_id),
    }
}

pub fn create_game_request(
    scheduled_date: Date,
    home_team_id: i64,
    away_team_id: i64,
) -> GameRequest {
    GameRequest {
        scheduled_date: Some(scheduled_date),
        location: Some(String::from("Field House")),
        home_score: Some(0),
        away_score: Some(0),
        home_team_id: Some(home_team_id),
        away_team_id: Some(away_team_id),
    }
}

pub fn create_statistic_request(player_id: i64, game_id: i64) -> StatisticRequest {
    StatisticRequest {
        points: Some(21),
        assists: Some(5),
        rebounds: Some(9),
        steals: Some(1),
        blocks: Some(2),
        minutes: Some(34),
        fouls: Some(3),
        turnovers: Some(2),
        fg_pct: Some(52.0),
        three_p_pct: Some(40.0),
        ft_pct: Some(85.0),
        player_id: Some(player_id),
        game_id: Some(game_id),
    }
}

/// Adds a team through the record service and returns its id.
pub fn add_test_team(persistence: &mut Persistence, name: &str) -> i64 {
    add_team(persistence, &create_team_request(name))
        .unwrap()
        .team
        .id
        .unwrap()
}

/// Two teams, a player on the home team wearing 23, and a game between
/// them on the test date.
///
/// Returns `(home_team_id, away_team_id, player_id, game_id)`.
pub fn seed_league(persistence: &mut Persistence) -> (i64, i64, i64, i64) {
    let home_team_id: i64 = add_test_team(persistence, "Wildcats");
    let away_team_id: i64 = add_test_team(persistence, "Hornets");
    let player_id: i64 = add_player(
        persistence,
        &create_player_request("Jordan", home_team_id, 23),
    )
    .unwrap()
    .player
    .id
    .unwrap();
    let game_id: i64 = add_game(
        persistence,
        &create_game_request(create_test_date(), home_team_id, away_team_id),
    )
    .unwrap()
    .game
    .id
    .unwrap();

    (home_team_id, away_team_id, player_id, game_id)
}
