// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Statistic;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::StatisticRow;
use crate::diesel_schema::statistics;
use crate::error::PersistenceError;

backend_fn! {
/// Lists every statistic line in id order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_statistics(conn: &mut _) -> Result<Vec<Statistic>, PersistenceError> {
    let rows: Vec<StatisticRow> = statistics::table
        .order(statistics::statistic_id.asc())
        .select(StatisticRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded statistics");
    Ok(rows.into_iter().map(Statistic::from).collect())
}
}

backend_fn! {
/// Retrieves a statistic line by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no statistic has this id.
pub fn get_statistic(
    conn: &mut _,
    statistic_id: i64,
) -> Result<Option<Statistic>, PersistenceError> {
    debug!(statistic_id, "Looking up statistic");

    let row: Option<StatisticRow> = statistics::table
        .find(statistic_id)
        .select(StatisticRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Statistic::from))
}
}

backend_fn! {
/// Retrieves the statistic already recorded for a player in a game, if any.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_statistic_for_pair(
    conn: &mut _,
    player_id: i64,
    game_id: i64,
) -> Result<Option<Statistic>, PersistenceError> {
    let row: Option<StatisticRow> = statistics::table
        .filter(statistics::player_id.eq(player_id))
        .filter(statistics::game_id.eq(game_id))
        .select(StatisticRow::as_select())
        .first(conn)
        .optional()?;

    debug!(player_id, game_id, found = row.is_some(), "Looked up statistic pair");
    Ok(row.map(Statistic::from))
}
}
