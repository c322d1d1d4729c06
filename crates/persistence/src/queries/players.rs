// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Player;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::PlayerRow;
use crate::diesel_schema::{players, statistics};
use crate::error::PersistenceError;

backend_fn! {
/// Lists every player in id order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_players(conn: &mut _) -> Result<Vec<Player>, PersistenceError> {
    let rows: Vec<PlayerRow> = players::table
        .order(players::player_id.asc())
        .select(PlayerRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded players");
    Ok(rows.into_iter().map(Player::from).collect())
}
}

backend_fn! {
/// Retrieves a player by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no player has this id.
pub fn get_player(conn: &mut _, player_id: i64) -> Result<Option<Player>, PersistenceError> {
    debug!(player_id, "Looking up player");

    let row: Option<PlayerRow> = players::table
        .find(player_id)
        .select(PlayerRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Player::from))
}
}

backend_fn! {
/// Lists the roster of one team: every player whose `team_id` matches.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_roster(conn: &mut _, team_id: i64) -> Result<Vec<Player>, PersistenceError> {
    let rows: Vec<PlayerRow> = players::table
        .filter(players::team_id.eq(team_id))
        .order(players::player_id.asc())
        .select(PlayerRow::as_select())
        .load(conn)?;

    debug!(team_id, count = rows.len(), "Loaded roster");
    Ok(rows.into_iter().map(Player::from).collect())
}
}

backend_fn! {
/// Lists the players who have a statistic line recorded in a game.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_players_with_statistics_in_game(
    conn: &mut _,
    game_id: i64,
) -> Result<Vec<Player>, PersistenceError> {
    let rows: Vec<PlayerRow> = players::table
        .inner_join(statistics::table)
        .filter(statistics::game_id.eq(game_id))
        .order(players::player_id.asc())
        .select(PlayerRow::as_select())
        .load(conn)?;

    debug!(game_id, count = rows.len(), "Loaded players with statistics in game");
    Ok(rows.into_iter().map(Player::from).collect())
}
}
