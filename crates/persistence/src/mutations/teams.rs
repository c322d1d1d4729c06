// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Team;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::teams;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a validated team and returns its generated id.
///
/// # Errors
///
/// Returns an error if the insert fails, including CHECK violations.
pub fn insert_team(conn: &mut _, team: &Team) -> Result<i64, PersistenceError> {
    diesel::insert_into(teams::table)
        .values((
            teams::name.eq(&team.name),
            teams::division.eq(team.division),
            teams::wins.eq(team.wins),
            teams::losses.eq(team.losses),
            teams::top_25.eq(i32::from(team.top_25)),
            teams::national_rank.eq(team.rank),
        ))
        .execute(conn)?;

    let team_id: i64 = conn.get_last_insert_rowid()?;

    info!(team_id, name = %team.name, "Inserted team");
    Ok(team_id)
}
}

backend_fn! {
/// Replaces every mutable field of a team.
///
/// # Errors
///
/// Returns `NotFound` if no team has this id, or an error if the update
/// fails.
pub fn update_team(conn: &mut _, team_id: i64, team: &Team) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::update(teams::table.find(team_id))
        .set((
            teams::name.eq(&team.name),
            teams::division.eq(team.division),
            teams::wins.eq(team.wins),
            teams::losses.eq(team.losses),
            teams::top_25.eq(i32::from(team.top_25)),
            teams::national_rank.eq(team.rank),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!("Team {team_id} not found")));
    }

    info!(team_id, "Updated team");
    Ok(())
}
}

backend_fn! {
/// Deletes a team. Its players and games (and their statistics and
/// slots) go with it through `ON DELETE CASCADE`.
///
/// # Errors
///
/// Returns `NotFound` if no team has this id, or an error if the delete
/// fails.
pub fn delete_team(conn: &mut _, team_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(teams::table.find(team_id)).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!("Team {team_id} not found")));
    }

    info!(team_id, "Deleted team");
    Ok(())
}
}
