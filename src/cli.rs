use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "swiss-system tournament tracker")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create or reset the database schema
    Init,
    /// Register a new player
    Register {
        /// Full name (need not be unique)
        name: String,
        /// Email address (optional)
        #[arg(short, long)]
        email: Option<String>,
        /// Username (optional)
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Record the outcome of a single match
    Report {
        /// Id of the winning player
        winner: i32,
        /// Id of the losing player
        loser: i32,
        /// Tournament id (optional, defaults to 0)
        #[arg(short, long, default_value_t = 0)]
        tournament: i32,
    },
    /// Show players ranked by wins
    Standings {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the number of registered players
    Count,
    /// Delete all match records
    ResetMatches,
    /// Delete all player records
    ResetPlayers,
    /// Create a tournament and print its assigned id
    CreateTournament {
        /// Tournament title
        title: String,
        /// Date as YYYY-MM-DD
        date: String,
        /// Time as HH:MM or HH:MM:SS
        time: String,
    },
    /// Delete a tournament by id
    DeleteTournament {
        /// Tournament id
        id: i32,
    },
}
