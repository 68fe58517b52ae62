use anyhow::Result;

use super::connection::DbConn;
use super::models::{Pairing, PlayerId};
use super::{matches, players};
use crate::pairing::{self, PairingError};

/// Pairings for the next round. Once match results exist the pairing view
/// does the adjacent-rank pairing over the standings; with no history yet
/// (first round) a shuffled player list is paired off instead, so seeding
/// does not depend on registration order.
pub fn swiss_pairings(conn: &mut DbConn) -> Result<Vec<Pairing>> {
    let player_count = players::count_players(conn)?;
    if player_count % 2 != 0 {
        return Err(PairingError::OddPlayerCount {
            count: player_count,
        }
        .into());
    }

    if matches::count_all(conn)? > 0 {
        list_from_view(conn)
    } else {
        bootstrap_pairings(conn)
    }
}

fn list_from_view(conn: &mut DbConn) -> Result<Vec<Pairing>> {
    let sql = "SELECT id1, name1, id2, name2 FROM view_swiss_pairings";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_pairing_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn bootstrap_pairings(conn: &mut DbConn) -> Result<Vec<Pairing>> {
    let shuffled = players::list_random_order(conn)?;
    let seeds: Vec<(PlayerId, String)> =
        shuffled.into_iter().map(|p| (p.id, p.name)).collect();

    Ok(pairing::pair_adjacent(&seeds)?)
}

fn parse_pairing_row(row: &rusqlite::Row) -> rusqlite::Result<Pairing> {
    Ok(Pairing {
        id1: row.get(0)?,
        name1: row.get(1)?,
        id2: row.get(2)?,
        name2: row.get(3)?,
    })
}
