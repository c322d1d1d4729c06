// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game mutations.
//!
//! A game occupies one `game_slots` row per team. The game row and its two
//! slots are always written in one transaction, so the slot table's
//! `UNIQUE (team_id, scheduled_date)` constraint rejects a double booking
//! even when two writers pass validation at the same time.

use courtside_domain::Game;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{MysqlConnection, SqliteConnection};
use time::Date;
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::data_models::format_date;
use crate::diesel_schema::{game_slots, games};
use crate::error::PersistenceError;

/// Maps a failed slot insert, naming the team whose slot was taken.
fn slot_error(err: DieselError, team_id: i64, scheduled_date: Date) -> PersistenceError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            warn!(team_id, %scheduled_date, "Game slot already taken");
            PersistenceError::TeamAlreadyScheduled {
                team_id,
                scheduled_date,
            }
        }
        other => PersistenceError::from(other),
    }
}

backend_fn! {
/// Inserts a validated game with its home and away slots and returns the
/// generated id.
///
/// # Errors
///
/// Returns `TeamAlreadyScheduled` if either team already plays that day,
/// `ForeignKeyViolation` if either team does not exist, or another error
/// if the write fails. Nothing is written on error.
pub fn insert_game(conn: &mut _, game: &Game) -> Result<i64, PersistenceError> {
    let date_text: String = format_date(game.scheduled_date)?;

    let game_id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(games::table)
            .values((
                games::scheduled_date.eq(&date_text),
                games::location.eq(game.location.as_deref()),
                games::home_score.eq(game.home_score),
                games::away_score.eq(game.away_score),
                games::home_team_id.eq(game.home_team_id),
                games::away_team_id.eq(game.away_team_id),
            ))
            .execute(conn)?;

        let game_id: i64 = conn.get_last_insert_rowid()?;

        for team_id in [game.home_team_id, game.away_team_id] {
            diesel::insert_into(game_slots::table)
                .values((
                    game_slots::game_id.eq(game_id),
                    game_slots::team_id.eq(team_id),
                    game_slots::scheduled_date.eq(&date_text),
                ))
                .execute(conn)
                .map_err(|e| slot_error(e, team_id, game.scheduled_date))?;
        }

        Ok(game_id)
    })?;

    info!(
        game_id,
        scheduled_date = %date_text,
        home_team_id = game.home_team_id,
        away_team_id = game.away_team_id,
        "Inserted game"
    );
    Ok(game_id)
}
}

backend_fn! {
/// Replaces every mutable field of a game and rebooks its slots.
///
/// # Errors
///
/// Returns `NotFound` if no game has this id. Other failures are reported
/// as for `insert_game`, and nothing is written on error.
pub fn update_game(conn: &mut _, game_id: i64, game: &Game) -> Result<(), PersistenceError> {
    let date_text: String = format_date(game.scheduled_date)?;

    conn.transaction::<(), PersistenceError, _>(|conn| {
        let rows_affected: usize = diesel::update(games::table.find(game_id))
            .set((
                games::scheduled_date.eq(&date_text),
                games::location.eq(game.location.as_deref()),
                games::home_score.eq(game.home_score),
                games::away_score.eq(game.away_score),
                games::home_team_id.eq(game.home_team_id),
                games::away_team_id.eq(game.away_team_id),
            ))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::NotFound(format!("Game {game_id} not found")));
        }

        diesel::delete(game_slots::table.filter(game_slots::game_id.eq(game_id)))
            .execute(conn)?;

        for team_id in [game.home_team_id, game.away_team_id] {
            diesel::insert_into(game_slots::table)
                .values((
                    game_slots::game_id.eq(game_id),
                    game_slots::team_id.eq(team_id),
                    game_slots::scheduled_date.eq(&date_text),
                ))
                .execute(conn)
                .map_err(|e| slot_error(e, team_id, game.scheduled_date))?;
        }

        Ok(())
    })?;

    info!(game_id, scheduled_date = %date_text, "Updated game");
    Ok(())
}
}

backend_fn! {
/// Deletes a game. Its slots and statistics go with it by cascade.
///
/// # Errors
///
/// Returns `NotFound` if no game has this id.
pub fn delete_game(conn: &mut _, game_id: i64) -> Result<(), PersistenceError> {
    let rows_affected: usize = diesel::delete(games::table.find(game_id)).execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!("Game {game_id} not found")));
    }

    info!(game_id, "Deleted game");
    Ok(())
}
}
