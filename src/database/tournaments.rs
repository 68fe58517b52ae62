use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Tournament;

pub fn create_tournament(
    conn: &mut DbConn,
    title: &str,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<Tournament> {
    let sql = "INSERT INTO tournaments (title, date, time) VALUES (?1, ?2, ?3) RETURNING id, title, date, time, created";

    conn.query_row(sql, params![title, date, time], parse_tournament_row)
        .context("Failed to create tournament")
}

/// Deletes the tournament with the given id. Deleting an id that does not
/// exist is a no-op, not an error.
pub fn delete_tournament(conn: &mut DbConn, tournament_id: i32) -> Result<()> {
    conn.execute(
        "DELETE FROM tournaments WHERE id = ?1",
        params![tournament_id],
    )
    .context("Failed to delete tournament")?;

    Ok(())
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        title: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        created: row.get(4)?,
    })
}
