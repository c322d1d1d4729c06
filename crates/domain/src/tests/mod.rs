// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use time::{Date, Month};

use crate::{Game, Player, TeamCandidate};

pub fn create_test_date() -> Date {
    Date::from_calendar_date(2024, Month::January, 10).unwrap()
}

pub fn create_valid_team_candidate() -> TeamCandidate {
    TeamCandidate {
        name: String::from("Wildcats"),
        division: Some(1),
        wins: Some(15),
        losses: Some(5),
        top_25: Some(true),
        rank: Some(10),
    }
}

pub fn create_rostered_player(player_id: i64, team_id: i64, jersey_num: Option<i32>) -> Player {
    Player {
        player_id: Some(player_id),
        name: format!("Player {player_id}"),
        position: Some(String::from("Guard")),
        jersey_num,
        height_inches: Some(74.0),
        weight_lbs: Some(190.0),
        class_year: Some(2025),
        injured: false,
        team_id: Some(team_id),
    }
}

pub fn create_scheduled_game(game_id: i64, date: Date, home: i64, away: i64) -> Game {
    Game {
        game_id: Some(game_id),
        scheduled_date: date,
        location: Some(String::from("Main Arena")),
        home_score: 0,
        away_score: 0,
        home_team_id: home,
        away_team_id: away,
    }
}
