use anyhow::Result;

use swiss_tournament::cli::Command;
use swiss_tournament::{
    handle_count, handle_create_tournament, handle_delete_tournament, handle_init,
    handle_pairings, handle_register, handle_report, handle_reset_matches, handle_reset_players,
    handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Init => handle_init(),
        Command::Register {
            name,
            email,
            username,
        } => handle_register(name, email.as_deref(), username.as_deref()),
        Command::Report {
            winner,
            loser,
            tournament,
        } => handle_report(*winner, *loser, *tournament),
        Command::Standings { json } => handle_standings(*json),
        Command::Pairings { json } => handle_pairings(*json),
        Command::Count => handle_count(),
        Command::ResetMatches => handle_reset_matches(),
        Command::ResetPlayers => handle_reset_players(),
        Command::CreateTournament { title, date, time } => {
            handle_create_tournament(title, date, time)
        }
        Command::DeleteTournament { id } => handle_delete_tournament(*id),
    }
}
