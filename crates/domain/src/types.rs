// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

/// A team in the league.
///
/// Produced by `validate_team`; every field holds its normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the team has not been persisted yet.
    pub team_id: Option<i64>,
    /// The team name (never empty).
    pub name: String,
    /// The division the team plays in (positive).
    pub division: i32,
    /// Wins this season.
    pub wins: i32,
    /// Losses this season.
    pub losses: i32,
    /// Whether the team is nationally ranked.
    pub top_25: bool,
    /// National rank, present exactly when `top_25` is set.
    pub rank: Option<i32>,
}

impl Team {
    /// Returns a copy of this team carrying the given persisted identifier.
    #[must_use]
    pub fn with_id(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

/// A player, optionally on a team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Canonical identifier assigned by the database.
    pub player_id: Option<i64>,
    /// The player's name (never empty).
    pub name: String,
    /// Free-form position (e.g. "Guard").
    pub position: Option<String>,
    /// Jersey number in 0-99, unique within a team.
    pub jersey_num: Option<i32>,
    /// Height in inches.
    pub height_inches: Option<f64>,
    /// Weight in pounds.
    pub weight_lbs: Option<f64>,
    /// Graduating class year (2016 or later).
    pub class_year: Option<i32>,
    /// Whether the player is currently injured.
    pub injured: bool,
    /// The owning team, if any.
    pub team_id: Option<i64>,
}

impl Player {
    /// Returns a copy of this player carrying the given persisted identifier.
    #[must_use]
    pub fn with_id(mut self, player_id: i64) -> Self {
        self.player_id = Some(player_id);
        self
    }
}

/// A scheduled game between two distinct teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Canonical identifier assigned by the database.
    pub game_id: Option<i64>,
    /// The calendar date the game is played on.
    pub scheduled_date: Date,
    /// Venue, if known.
    pub location: Option<String>,
    /// Points scored by the home team.
    pub home_score: i32,
    /// Points scored by the away team.
    pub away_score: i32,
    /// The home team.
    pub home_team_id: i64,
    /// The away team.
    pub away_team_id: i64,
}

impl Game {
    /// Returns a copy of this game carrying the given persisted identifier.
    #[must_use]
    pub fn with_id(mut self, game_id: i64) -> Self {
        self.game_id = Some(game_id);
        self
    }

    /// Returns whether the given team plays in this game, home or away.
    #[must_use]
    pub const fn involves(&self, team_id: i64) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

/// One player's box score line for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    /// Canonical identifier assigned by the database.
    pub statistic_id: Option<i64>,
    pub points: i32,
    pub assists: i32,
    pub rebounds: i32,
    pub steals: i32,
    pub blocks: i32,
    pub minutes: i32,
    pub fouls: i32,
    pub turnovers: i32,
    /// Field goal percentage in [0, 100].
    pub fg_pct: f64,
    /// Three point percentage in [0, 100].
    pub three_p_pct: f64,
    /// Free throw percentage in [0, 100].
    pub ft_pct: f64,
    /// The player this line belongs to.
    pub player_id: i64,
    /// The game this line was recorded in.
    pub game_id: i64,
}

impl Statistic {
    /// Returns a copy of this statistic carrying the given persisted identifier.
    #[must_use]
    pub fn with_id(mut self, statistic_id: i64) -> Self {
        self.statistic_id = Some(statistic_id);
        self
    }
}

/// Unvalidated team input.
///
/// Absent optional fields take their defaults during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamCandidate {
    pub name: String,
    pub division: Option<i32>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub top_25: Option<bool>,
    pub rank: Option<i32>,
}

/// Unvalidated player input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerCandidate {
    pub name: String,
    pub position: Option<String>,
    pub jersey_num: Option<i32>,
    pub height_inches: Option<f64>,
    pub weight_lbs: Option<f64>,
    pub class_year: Option<i32>,
    pub injured: Option<bool>,
    pub team_id: Option<i64>,
}

impl From<&Player> for PlayerCandidate {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position.clone(),
            jersey_num: player.jersey_num,
            height_inches: player.height_inches,
            weight_lbs: player.weight_lbs,
            class_year: player.class_year,
            injured: Some(player.injured),
            team_id: player.team_id,
        }
    }
}

/// Unvalidated game input.
///
/// Every field except `location` is required; they are optional here so
/// that a missing field is reported as a rule failure rather than a parse
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameCandidate {
    pub scheduled_date: Option<Date>,
    pub location: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
}

/// Unvalidated statistic input. Counts and percentages default to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticCandidate {
    pub points: Option<i32>,
    pub assists: Option<i32>,
    pub rebounds: Option<i32>,
    pub steals: Option<i32>,
    pub blocks: Option<i32>,
    pub minutes: Option<i32>,
    pub fouls: Option<i32>,
    pub turnovers: Option<i32>,
    pub fg_pct: Option<f64>,
    pub three_p_pct: Option<f64>,
    pub ft_pct: Option<f64>,
    pub player_id: Option<i64>,
    pub game_id: Option<i64>,
}

/// Related records needed to validate a statistic.
///
/// The caller fetches these before validating; `None` means the lookup
/// found nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticContext {
    /// The game referenced by the candidate.
    pub game: Option<Game>,
    /// The player referenced by the candidate.
    pub player: Option<Player>,
    /// An already recorded statistic for the same player and game.
    pub existing_for_pair: Option<Statistic>,
}
