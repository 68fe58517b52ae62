use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::params;

use super::connection::DbConn;
use super::models::{MatchRow, PlayerId};

/// Records one match outcome as two rows in a single statement: the winner
/// with result 1 and the loser with result 0, sharing tournament id and
/// timestamp. Atomicity is the single-statement guarantee of the store.
pub fn report_match(
    conn: &mut DbConn,
    winner_id: PlayerId,
    loser_id: PlayerId,
    tournament_id: i32,
) -> Result<()> {
    let created = Utc::now().naive_utc();
    let sql = "INSERT INTO matches (tournament_id, player_id, result, created) VALUES (?1, ?2, 1, ?4), (?1, ?3, 0, ?4)";

    conn.execute(sql, params![tournament_id, winner_id, loser_id, created])
        .context("Failed to report match result")?;

    Ok(())
}

pub fn count_all(conn: &mut DbConn) -> Result<i32> {
    let sql = "SELECT COUNT(*) FROM matches";

    conn.query_row(sql, [], |row| row.get(0))
        .context("Failed to count match records")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<MatchRow>> {
    let sql = "SELECT tournament_id, player_id, result, created FROM matches";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete match records")?;

    Ok(())
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRow> {
    Ok(MatchRow {
        tournament_id: row.get(0)?,
        player_id: row.get(1)?,
        result: row.get(2)?,
        created: row.get(3)?,
    })
}
