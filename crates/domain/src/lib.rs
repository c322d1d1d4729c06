// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League entities and the rules every write must satisfy.
//!
//! Validators are pure functions of a candidate record and a read-only
//! snapshot of related records supplied by the caller. They never perform
//! I/O; fetching the snapshot and writing the result belong to the caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{
    Game, GameCandidate, Player, PlayerCandidate, Statistic, StatisticCandidate,
    StatisticContext, Team, TeamCandidate,
};
pub use validation::{
    EARLIEST_CLASS_YEAR, MAX_FOULS, MAX_JERSEY_NUM, MAX_MINUTES, MAX_PERCENTAGE, MAX_RANK,
    SEASON_GAME_CAP, validate_game, validate_game_lines, validate_player, validate_player_lines,
    validate_statistic, validate_team,
};
