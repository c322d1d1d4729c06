// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types read from the league tables and their conversion into
//! domain entities.

use courtside_domain::{Game, Player, Statistic, Team};
use diesel::prelude::*;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::diesel_schema::{games, players, statistics, teams};
use crate::error::PersistenceError;

/// Storage format for calendar dates (`YYYY-MM-DD`).
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Formats a date the way it is stored in `games` and `game_slots`.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|e| PersistenceError::SerializationError(format!("Invalid date {date}: {e}")))
}

/// Parses a stored `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the stored text is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| {
        PersistenceError::SerializationError(format!("Invalid stored date '{value}': {e}"))
    })
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = teams)]
pub struct TeamRow {
    team_id: i64,
    name: String,
    division: i32,
    wins: i32,
    losses: i32,
    top_25: i32,
    national_rank: Option<i32>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            team_id: Some(row.team_id),
            name: row.name,
            division: row.division,
            wins: row.wins,
            losses: row.losses,
            top_25: row.top_25 != 0,
            rank: row.national_rank,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = players)]
pub struct PlayerRow {
    player_id: i64,
    name: String,
    position: Option<String>,
    jersey_num: Option<i32>,
    height_inches: Option<f64>,
    weight_lbs: Option<f64>,
    class_year: Option<i32>,
    injured: i32,
    team_id: Option<i64>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            player_id: Some(row.player_id),
            name: row.name,
            position: row.position,
            jersey_num: row.jersey_num,
            height_inches: row.height_inches,
            weight_lbs: row.weight_lbs,
            class_year: row.class_year,
            injured: row.injured != 0,
            team_id: row.team_id,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = games)]
pub struct GameRow {
    game_id: i64,
    scheduled_date: String,
    location: Option<String>,
    home_score: i32,
    away_score: i32,
    home_team_id: i64,
    away_team_id: i64,
}

impl TryFrom<GameRow> for Game {
    type Error = PersistenceError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        Ok(Self {
            game_id: Some(row.game_id),
            scheduled_date: parse_date(&row.scheduled_date)?,
            location: row.location,
            home_score: row.home_score,
            away_score: row.away_score,
            home_team_id: row.home_team_id,
            away_team_id: row.away_team_id,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = statistics)]
pub struct StatisticRow {
    statistic_id: i64,
    points: i32,
    assists: i32,
    rebounds: i32,
    steals: i32,
    blocks: i32,
    minutes: i32,
    fouls: i32,
    turnovers: i32,
    fg_pct: f64,
    three_p_pct: f64,
    ft_pct: f64,
    player_id: i64,
    game_id: i64,
}

impl From<StatisticRow> for Statistic {
    fn from(row: StatisticRow) -> Self {
        Self {
            statistic_id: Some(row.statistic_id),
            points: row.points,
            assists: row.assists,
            rebounds: row.rebounds,
            steals: row.steals,
            blocks: row.blocks,
            minutes: row.minutes,
            fouls: row.fouls,
            turnovers: row.turnovers,
            fg_pct: row.fg_pct,
            three_p_pct: row.three_p_pct,
            ft_pct: row.ft_pct,
            player_id: row.player_id,
            game_id: row.game_id,
        }
    }
}
