// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Statistic;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::statistics;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a validated statistic line and returns the generated id.
///
/// # Errors
///
/// Returns `UniqueViolation` if the player already has a line for the game,
/// `ForeignKeyViolation` if the player or game does not exist, or another
/// error if the insert fails.
pub fn insert_statistic(conn: &mut _, statistic: &Statistic) -> Result<i64, PersistenceError> {
    diesel::insert_into(statistics::table)
        .values((
            statistics::points.eq(statistic.points),
            statistics::assists.eq(statistic.assists),
            statistics::rebounds.eq(statistic.rebounds),
            statistics::steals.eq(statistic.steals),
            statistics::blocks.eq(statistic.blocks),
            statistics::minutes.eq(statistic.minutes),
            statistics::fouls.eq(statistic.fouls),
            statistics::turnovers.eq(statistic.turnovers),
            statistics::fg_pct.eq(statistic.fg_pct),
            statistics::three_p_pct.eq(statistic.three_p_pct),
            statistics::ft_pct.eq(statistic.ft_pct),
            statistics::player_id.eq(statistic.player_id),
            statistics::game_id.eq(statistic.game_id),
        ))
        .execute(conn)?;

    let statistic_id: i64 = conn.get_last_insert_rowid()?;

    info!(
        statistic_id,
        player_id = statistic.player_id,
        game_id = statistic.game_id,
        "Inserted statistic"
    );
    Ok(statistic_id)
}
}

backend_fn! {
/// Replaces every mutable field of a statistic line.
///
/// # Errors
///
/// Returns `NotFound` if no statistic has this id. Constraint violations
/// are reported as for `insert_statistic`.
pub fn update_statistic(
    conn: &mut _,
    statistic_id: i64,
    statistic: &Statistic,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(statistics::table.find(statistic_id))
        .set((
            statistics::points.eq(statistic.points),
            statistics::assists.eq(statistic.assists),
            statistics::rebounds.eq(statistic.rebounds),
            statistics::steals.eq(statistic.steals),
            statistics::blocks.eq(statistic.blocks),
            statistics::minutes.eq(statistic.minutes),
            statistics::fouls.eq(statistic.fouls),
            statistics::turnovers.eq(statistic.turnovers),
            statistics::fg_pct.eq(statistic.fg_pct),
            statistics::three_p_pct.eq(statistic.three_p_pct),
            statistics::ft_pct.eq(statistic.ft_pct),
            statistics::player_id.eq(statistic.player_id),
            statistics::game_id.eq(statistic.game_id),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Statistic {statistic_id} not found"
        )));
    }

    info!(statistic_id, "Updated statistic");
    Ok(())
}
}

backend_fn! {
/// Deletes a statistic line.
///
/// # Errors
///
/// Returns `NotFound` if no statistic has this id.
pub fn delete_statistic(conn: &mut _, statistic_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize =
        diesel::delete(statistics::table.find(statistic_id)).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Statistic {statistic_id} not found"
        )));
    }

    info!(statistic_id, "Deleted statistic");
    Ok(())
}
}
