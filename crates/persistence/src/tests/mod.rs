// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod player_tests;
mod team_tests;

use courtside_domain::{Game, Player, Statistic, Team};
use time::{Date, Month};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

/// January 10, 2024.
pub fn create_test_date() -> Date {
    Date::from_calendar_date(2024, Month::January, 10).expect("Valid test date")
}

pub fn create_test_team(name: &str) -> Team {
    Team {
        team_id: None,
        name: name.to_string(),
        division: 1,
        wins: 10,
        losses: 4,
        top_25: false,
        rank: None,
    }
}

pub fn create_test_player(name: &str, team_id: Option<i64>, jersey_num: Option<i32>) -> Player {
    Player {
        player_id: None,
        name: name.to_string(),
        position: Some(String::from("Guard")),
        jersey_num,
        height_inches: Some(75.5),
        weight_lbs: Some(190.0),
        class_year: Some(2025),
        injured: false,
        team_id,
    }
}

pub fn create_test_game(scheduled_date: Date, home_team_id: i64, away_team_id: i64) -> Game {
    Game {
        game_id: None,
        scheduled_date,
        location: Some(String::from("Main Arena")),
        home_score: 70,
        away_score: 65,
        home_team_id,
        away_team_id,
    }
}

pub fn create_test_statistic(player_id: i64, game_id: i64) -> Statistic {
    Statistic {
        statistic_id: None,
        points: 12,
        assists: 3,
        rebounds: 5,
        steals: 1,
        blocks: 0,
        minutes: 28,
        fouls: 2,
        turnovers: 1,
        fg_pct: 45.0,
        three_p_pct: 30.0,
        ft_pct: 75.0,
        player_id,
        game_id,
    }
}

/// Two teams, one player on the home team, and one game between them.
///
/// Returns `(home_team_id, away_team_id, player_id, game_id)`.
pub fn seed_league(persistence: &mut Persistence) -> (i64, i64, i64, i64) {
    let home_team_id: i64 = persistence
        .insert_team(&create_test_team("Wildcats"))
        .unwrap();
    let away_team_id: i64 = persistence
        .insert_team(&create_test_team("Hornets"))
        .unwrap();
    let player_id: i64 = persistence
        .insert_player(&create_test_player("Jordan", Some(home_team_id), Some(23)))
        .unwrap();
    let game_id: i64 = persistence
        .insert_game(&create_test_game(
            create_test_date(),
            home_team_id,
            away_team_id,
        ))
        .unwrap();

    (home_team_id, away_team_id, player_id, game_id)
}

/// Stores a team, player, and game whose free text is longer than any
/// common column width and asserts every value reads back unchanged.
pub fn assert_long_text_is_stored_whole(persistence: &mut Persistence) {
    let long_name: String = "N".repeat(300);
    let long_position: String = "Combo guard and occasional small forward ".repeat(2);
    let long_location: String = "L".repeat(300);

    let team_id: i64 = persistence.insert_team(&create_test_team(&long_name)).unwrap();
    let opponent_id: i64 = persistence
        .insert_team(&create_test_team("Long Text Opponent"))
        .unwrap();

    let mut player: Player = create_test_player(&long_name, Some(team_id), Some(1));
    player.position = Some(long_position.clone());
    let player_id: i64 = persistence.insert_player(&player).unwrap();

    let mut game: Game = create_test_game(create_test_date(), team_id, opponent_id);
    game.location = Some(long_location.clone());
    let game_id: i64 = persistence.insert_game(&game).unwrap();

    assert_eq!(persistence.get_team(team_id).unwrap().unwrap().name, long_name);
    let stored: Player = persistence.get_player(player_id).unwrap().unwrap();
    assert_eq!(stored.name, long_name);
    assert_eq!(stored.position, Some(long_position));
    assert_eq!(
        persistence.get_game(game_id).unwrap().unwrap().location,
        Some(long_location)
    );
}
