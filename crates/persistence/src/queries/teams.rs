// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Team;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::TeamRow;
use crate::diesel_schema::teams;
use crate::error::PersistenceError;

backend_fn! {
/// Lists every team in id order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_teams(conn: &mut _) -> Result<Vec<Team>, PersistenceError> {
    let rows: Vec<TeamRow> = teams::table
        .order(teams::team_id.asc())
        .select(TeamRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded teams");
    Ok(rows.into_iter().map(Team::from).collect())
}
}

backend_fn! {
/// Retrieves a team by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no team has this id.
pub fn get_team(conn: &mut _, team_id: i64) -> Result<Option<Team>, PersistenceError> {
    debug!(team_id, "Looking up team");

    let row: Option<TeamRow> = teams::table
        .find(team_id)
        .select(TeamRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Team::from))
}
}
