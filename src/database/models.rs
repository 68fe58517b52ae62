use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

pub type PlayerId = i32;

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub created: Option<NaiveDateTime>,
}

/// One participant's side of a recorded match. A logical match is stored as
/// two of these rows sharing tournament_id and created, one per player.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    pub tournament_id: i32,
    pub player_id: PlayerId,
    pub result: i32,
    pub created: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tournament {
    pub id: i32,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub created: Option<NaiveDateTime>,
}

/// Row of view_player_standings, ranked by wins.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub matches: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}
