use anyhow::Result;

use super::connection::DbConn;
use super::models::StandingsRow;

/// Standings as computed by the view, best record first. Row order is
/// returned verbatim; the view orders by wins descending, ties by player id.
pub fn player_standings(conn: &mut DbConn) -> Result<Vec<StandingsRow>> {
    let sql = "SELECT id, name, wins, matches FROM view_player_standings";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_standings_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_standings_row(row: &rusqlite::Row) -> rusqlite::Result<StandingsRow> {
    Ok(StandingsRow {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}
