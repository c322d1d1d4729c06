// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record service for the Courtside league backend.
//!
//! Sits between the HTTP surface and persistence. Each operation reads the
//! records its validator needs, runs the validator from
//! `courtside-domain`, and writes only when validation passes. Request and
//! response types here are the JSON contract; domain types never cross the
//! HTTP boundary directly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    add_game, add_player, add_statistic, add_team, delete_game, delete_player, delete_statistic,
    delete_team, list_games, list_players, list_statistics, list_teams, transfer_player,
    update_game, update_player, update_statistic, update_team,
};
pub use request_response::{
    DeleteResponse, GameInfo, GameRequest, GameResponse, ListGamesResponse, ListPlayersResponse,
    ListStatisticsResponse, ListTeamsResponse, PlayerInfo, PlayerRequest, PlayerResponse,
    StatisticInfo, StatisticRequest, StatisticResponse, TeamInfo, TeamRequest, TeamResponse,
    TransferPlayerRequest,
};
