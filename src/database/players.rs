use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Player;

pub fn register_player(
    conn: &mut DbConn,
    name: &str,
    email: Option<&str>,
    username: Option<&str>,
) -> Result<Player> {
    let sql = "INSERT INTO players (name, email, username) VALUES (?1, ?2, ?3) RETURNING id, name, email, username, created";

    conn.query_row(sql, params![name, email, username], parse_player_row)
        .context("Failed to register player")
}

pub fn count_players(conn: &mut DbConn) -> Result<i32> {
    let sql = "SELECT player_count FROM view_player_count";

    conn.query_row(sql, [], |row| row.get(0))
        .context("Failed to read player count view")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, email, username, created FROM players";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Players in random order; the shuffle happens store-side.
pub fn list_random_order(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, email, username, created FROM players ORDER BY RANDOM()";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete player records")?;

    Ok(())
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        username: row.get(3)?,
        created: row.get(4)?,
    })
}
