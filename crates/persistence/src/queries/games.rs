// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use courtside_domain::Game;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use time::Date;
use tracing::debug;

use crate::data_models::{GameRow, format_date};
use crate::diesel_schema::{games, statistics};
use crate::error::PersistenceError;

backend_fn! {
/// Lists every game in id order.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored date is
/// malformed.
pub fn list_games(conn: &mut _) -> Result<Vec<Game>, PersistenceError> {
    let rows: Vec<GameRow> = games::table
        .order(games::game_id.asc())
        .select(GameRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded games");
    rows.into_iter().map(Game::try_from).collect()
}
}

backend_fn! {
/// Retrieves a game by id.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored date is
/// malformed.
/// Returns `Ok(None)` if no game has this id.
pub fn get_game(conn: &mut _, game_id: i64) -> Result<Option<Game>, PersistenceError> {
    debug!(game_id, "Looking up game");

    let row: Option<GameRow> = games::table
        .find(game_id)
        .select(GameRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Game::try_from).transpose()
}
}

backend_fn! {
/// Lists the games on `scheduled_date` that involve either team, home or
/// away.
///
/// This is the scheduling context for validating a game between the two
/// teams.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_games_on_date_for_teams(
    conn: &mut _,
    scheduled_date: Date,
    first_team_id: i64,
    second_team_id: i64,
) -> Result<Vec<Game>, PersistenceError> {
    let date_text: String = format_date(scheduled_date)?;
    let team_ids: [i64; 2] = [first_team_id, second_team_id];

    let rows: Vec<GameRow> = games::table
        .filter(games::scheduled_date.eq(&date_text))
        .filter(
            games::home_team_id
                .eq_any(team_ids)
                .or(games::away_team_id.eq_any(team_ids)),
        )
        .order(games::game_id.asc())
        .select(GameRow::as_select())
        .load(conn)?;

    debug!(
        scheduled_date = %date_text,
        first_team_id,
        second_team_id,
        count = rows.len(),
        "Loaded games on date"
    );
    rows.into_iter().map(Game::try_from).collect()
}
}

backend_fn! {
/// Lists the games a player has a statistic line recorded in.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored date is
/// malformed.
pub fn list_games_with_statistics_for_player(
    conn: &mut _,
    player_id: i64,
) -> Result<Vec<Game>, PersistenceError> {
    let rows: Vec<GameRow> = games::table
        .inner_join(statistics::table)
        .filter(statistics::player_id.eq(player_id))
        .order(games::game_id.asc())
        .select(GameRow::as_select())
        .load(conn)?;

    debug!(player_id, count = rows.len(), "Loaded games with statistics for player");
    rows.into_iter().map(Game::try_from).collect()
}
}
