// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests accept every field as optional so that a missing value is
//! reported by validation with the field name, not as a parse failure.
//! Responses use the wire names of the league tables (`id`, `class`,
//! `rank`).

use courtside_domain::{
    Game, GameCandidate, Player, PlayerCandidate, Statistic, StatisticCandidate, Team,
    TeamCandidate,
};
use serde::{Deserialize, Serialize};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// API request to add or replace a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRequest {
    pub name: String,
    pub division: Option<i32>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub top_25: Option<bool>,
    pub rank: Option<i32>,
}

impl From<&TeamRequest> for TeamCandidate {
    fn from(request: &TeamRequest) -> Self {
        Self {
            name: request.name.clone(),
            division: request.division,
            wins: request.wins,
            losses: request.losses,
            top_25: request.top_25,
            rank: request.rank,
        }
    }
}

/// API request to add or replace a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRequest {
    pub name: String,
    pub position: Option<String>,
    pub jersey_num: Option<i32>,
    pub height_inches: Option<f64>,
    pub weight_lbs: Option<f64>,
    /// Graduating class year.
    #[serde(rename = "class")]
    pub class_year: Option<i32>,
    pub injured: Option<bool>,
    pub team_id: Option<i64>,
}

impl From<&PlayerRequest> for PlayerCandidate {
    fn from(request: &PlayerRequest) -> Self {
        Self {
            name: request.name.clone(),
            position: request.position.clone(),
            jersey_num: request.jersey_num,
            height_inches: request.height_inches,
            weight_lbs: request.weight_lbs,
            class_year: request.class_year,
            injured: request.injured,
            team_id: request.team_id,
        }
    }
}

/// API request to move a player to another team.
///
/// A `null` or absent `team_id` releases the player from their team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferPlayerRequest {
    pub team_id: Option<i64>,
}

/// API request to add or replace a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRequest {
    /// Game date as `YYYY-MM-DD`.
    #[serde(with = "iso_date::option")]
    pub scheduled_date: Option<Date>,
    pub location: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
}

impl From<&GameRequest> for GameCandidate {
    fn from(request: &GameRequest) -> Self {
        Self {
            scheduled_date: request.scheduled_date,
            location: request.location.clone(),
            home_score: request.home_score,
            away_score: request.away_score,
            home_team_id: request.home_team_id,
            away_team_id: request.away_team_id,
        }
    }
}

/// API request to add or replace a statistic line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticRequest {
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

impl From<&StatisticRequest> for StatisticCandidate {
    fn from(request: &StatisticRequest) -> Self {
        Self {
            points: request.points,
            assists: request.assists,
            rebounds: request.rebounds,
            steals: request.steals,
            blocks: request.blocks,
            minutes: request.minutes,
            fouls: request.fouls,
            turnovers: request.turnovers,
            fg_pct: request.fg_pct,
            three_p_pct: request.three_p_pct,
            ft_pct: request.ft_pct,
            player_id: request.player_id,
            game_id: request.game_id,
        }
    }
}

/// A stored team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: Option<i64>,
    pub name: String,
    pub division: i32,
    pub wins: i32,
    pub losses: i32,
    pub top_25: bool,
    pub rank: Option<i32>,
}

impl From<Team> for TeamInfo {
    fn from(team: Team) -> Self {
        Self {
            id: team.team_id,
            name: team.name,
            division: team.division,
            wins: team.wins,
            losses: team.losses,
            top_25: team.top_25,
            rank: team.rank,
        }
    }
}

/// A stored player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: Option<i64>,
    pub name: String,
    pub position: Option<String>,
    pub jersey_num: Option<i32>,
    pub height_inches: Option<f64>,
    pub weight_lbs: Option<f64>,
    #[serde(rename = "class")]
    pub class_year: Option<i32>,
    pub injured: bool,
    pub team_id: Option<i64>,
}

impl From<Player> for PlayerInfo {
    fn from(player: Player) -> Self {
        Self {
            id: player.player_id,
            name: player.name,
            position: player.position,
            jersey_num: player.jersey_num,
            height_inches: player.height_inches,
            weight_lbs: player.weight_lbs,
            class_year: player.class_year,
            injured: player.injured,
            team_id: player.team_id,
        }
    }
}

/// A stored game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: Option<i64>,
    #[serde(with = "iso_date")]
    pub scheduled_date: Date,
    pub location: Option<String>,
    pub home_score: i32,
    pub away_score: i32,
    pub home_team_id: i64,
    pub away_team_id: i64,
}

impl From<Game> for GameInfo {
    fn from(game: Game) -> Self {
        Self {
            id: game.game_id,
            scheduled_date: game.scheduled_date,
            location: game.location,
            home_score: game.home_score,
            away_score: game.away_score,
            home_team_id: game.home_team_id,
            away_team_id: game.away_team_id,
        }
    }
}

/// A stored statistic line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticInfo {
    pub id: Option<i64>,
    pub points: i32,
    pub assists: i32,
    pub rebounds: i32,
    pub steals: i32,
    pub blocks: i32,
    pub minutes: i32,
    pub fouls: i32,
    pub turnovers: i32,
    pub fg_pct: f64,
    pub three_p_pct: f64,
    pub ft_pct: f64,
    pub player_id: i64,
    pub game_id: i64,
}

impl From<Statistic> for StatisticInfo {
    fn from(statistic: Statistic) -> Self {
        Self {
            id: statistic.statistic_id,
            points: statistic.points,
            assists: statistic.assists,
            rebounds: statistic.rebounds,
            steals: statistic.steals,
            blocks: statistic.blocks,
            minutes: statistic.minutes,
            fouls: statistic.fouls,
            turnovers: statistic.turnovers,
            fg_pct: statistic.fg_pct,
            three_p_pct: statistic.three_p_pct,
            ft_pct: statistic.ft_pct,
            player_id: statistic.player_id,
            game_id: statistic.game_id,
        }
    }
}

/// API response for listing teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<TeamInfo>,
}

/// API response for listing players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPlayersResponse {
    pub players: Vec<PlayerInfo>,
}

/// API response for listing games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGamesResponse {
    pub games: Vec<GameInfo>,
}

/// API response for listing statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStatisticsResponse {
    pub statistics: Vec<StatisticInfo>,
}

/// API response for a team write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResponse {
    /// A success message.
    pub message: String,
    /// The team as stored.
    pub team: TeamInfo,
}

/// API response for a player write or transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResponse {
    /// A success message.
    pub message: String,
    /// The player as stored.
    pub player: PlayerInfo,
}

/// API response for a game write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    /// A success message.
    pub message: String,
    /// The game as stored.
    pub game: GameInfo,
}

/// API response for a statistic write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticResponse {
    /// A success message.
    pub message: String,
    /// The statistic as stored.
    pub statistic: StatisticInfo,
}

/// API response for a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// A success message.
    pub message: String,
}
