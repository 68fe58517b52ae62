pub mod cli;
pub mod config;
pub mod database;
pub mod pairing;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use log::info;

use crate::cli::{Cli, Command};
use crate::config::settings::AppConfig;
use crate::database::DbConn;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_connection() -> Result<DbConn> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database.path)?;
    database::get_connection(&pool)
}

pub fn handle_init() -> Result<()> {
    let mut conn = open_connection()?;
    database::setup::reset_database(&mut conn)
}

pub fn handle_register(name: &str, email: Option<&str>, username: Option<&str>) -> Result<()> {
    let mut conn = open_connection()?;
    let player = database::players::register_player(&mut conn, name, email, username)?;
    info!("Registered player {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(winner: i32, loser: i32, tournament: i32) -> Result<()> {
    let mut conn = open_connection()?;
    database::matches::report_match(&mut conn, winner, loser, tournament)?;
    info!(
        "Recorded win for player {} over player {} in tournament {}",
        winner, loser, tournament
    );
    Ok(())
}

pub fn handle_standings(json: bool) -> Result<()> {
    let mut conn = open_connection()?;
    let standings = database::standings::player_standings(&mut conn)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    println!("{:>4}  {:<24} {:>5} {:>8}", "id", "name", "wins", "matches");
    for row in &standings {
        println!(
            "{:>4}  {:<24} {:>5} {:>8}",
            row.id, row.name, row.wins, row.matches
        );
    }
    Ok(())
}

pub fn handle_pairings(json: bool) -> Result<()> {
    let mut conn = open_connection()?;
    let pairings = database::pairings::swiss_pairings(&mut conn)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pairings)?);
        return Ok(());
    }

    for pairing in &pairings {
        println!(
            "{} {} vs {} {}",
            pairing.id1, pairing.name1, pairing.id2, pairing.name2
        );
    }
    Ok(())
}

pub fn handle_count() -> Result<()> {
    let mut conn = open_connection()?;
    let count = database::players::count_players(&mut conn)?;
    println!("{count}");
    Ok(())
}

pub fn handle_reset_matches() -> Result<()> {
    let mut conn = open_connection()?;
    database::matches::delete_all(&mut conn)?;
    info!("Deleted all match records");
    Ok(())
}

pub fn handle_reset_players() -> Result<()> {
    let mut conn = open_connection()?;
    database::players::delete_all(&mut conn)?;
    info!("Deleted all player records");
    Ok(())
}

pub fn handle_create_tournament(title: &str, date: &str, time: &str) -> Result<()> {
    let date = parse_tournament_date(date)?;
    let time = parse_tournament_time(time)?;

    let mut conn = open_connection()?;
    let tournament = database::tournaments::create_tournament(&mut conn, title, date, time)?;
    info!("Created tournament {}", tournament.title);
    println!("{}", tournament.id);
    Ok(())
}

pub fn handle_delete_tournament(id: i32) -> Result<()> {
    let mut conn = open_connection()?;
    database::tournaments::delete_tournament(&mut conn, id)?;
    info!("Deleted tournament {id}");
    Ok(())
}

fn parse_tournament_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .with_context(|| format!("Failed to parse tournament date: {date_str}"))
}

fn parse_tournament_time(time_str: &str) -> Result<NaiveTime> {
    if let Ok(time) = NaiveTime::parse_from_str(time_str, "%H:%M:%S") {
        return Ok(time);
    }

    if let Ok(time) = NaiveTime::parse_from_str(time_str, "%H:%M") {
        return Ok(time);
    }

    anyhow::bail!("Failed to parse tournament time: {time_str}")
}
