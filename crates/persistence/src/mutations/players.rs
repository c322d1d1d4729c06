// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Player;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::players;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a validated player and returns the generated id.
///
/// # Errors
///
/// Returns `UniqueViolation` if the jersey number is taken on the team,
/// `ForeignKeyViolation` if the team does not exist, or another error if
/// the insert fails.
pub fn insert_player(conn: &mut _, player: &Player) -> Result<i64, PersistenceError> {
    diesel::insert_into(players::table)
        .values((
            players::name.eq(&player.name),
            players::position.eq(player.position.as_deref()),
            players::jersey_num.eq(player.jersey_num),
            players::height_inches.eq(player.height_inches),
            players::weight_lbs.eq(player.weight_lbs),
            players::class_year.eq(player.class_year),
            players::injured.eq(i32::from(player.injured)),
            players::team_id.eq(player.team_id),
        ))
        .execute(conn)?;

    let player_id: i64 = conn.get_last_insert_rowid()?;

    info!(player_id, team_id = ?player.team_id, "Inserted player");
    Ok(player_id)
}
}

backend_fn! {
/// Replaces every mutable field of a player.
///
/// # Errors
///
/// Returns `NotFound` if no player has this id. Constraint violations are
/// reported as for `insert_player`.
pub fn update_player(
    conn: &mut _,
    player_id: i64,
    player: &Player,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(players::table.find(player_id))
        .set((
            players::name.eq(&player.name),
            players::position.eq(player.position.as_deref()),
            players::jersey_num.eq(player.jersey_num),
            players::height_inches.eq(player.height_inches),
            players::weight_lbs.eq(player.weight_lbs),
            players::class_year.eq(player.class_year),
            players::injured.eq(i32::from(player.injured)),
            players::team_id.eq(player.team_id),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Player {player_id} not found"
        )));
    }

    info!(player_id, "Updated player");
    Ok(())
}
}

backend_fn! {
/// Moves a player to another team, leaving every other field alone.
///
/// # Errors
///
/// Returns `NotFound` if no player has this id. Constraint violations are
/// reported as for `insert_player`.
pub fn update_player_team(
    conn: &mut _,
    player_id: i64,
    team_id: Option<i64>,
) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(players::table.find(player_id))
        .set(players::team_id.eq(team_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Player {player_id} not found"
        )));
    }

    info!(player_id, team_id = ?team_id, "Transferred player");
    Ok(())
}
}

backend_fn! {
/// Deletes a player and, by cascade, their statistics.
///
/// # Errors
///
/// Returns `NotFound` if no player has this id.
pub fn delete_player(conn: &mut _, player_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(players::table.find(player_id)).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Player {player_id} not found"
        )));
    }

    info!(player_id, "Deleted player");
    Ok(())
}
}
