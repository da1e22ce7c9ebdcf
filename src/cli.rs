use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about = "SQLite-backed user record store")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the sequential CRUD demonstration against the configured database
    Demo,

    /// Add a user record
    Add {
        /// Display name
        name: String,

        /// Email address
        email: String,
    },

    /// List all user records
    List,

    /// Show a single user record by id
    Show {
        /// User id
        id: i64,
    },

    /// Overwrite a user record's name and email
    Update {
        /// User id
        id: i64,

        /// Replacement name
        name: String,

        /// Replacement email
        email: String,
    },

    /// Remove a user record by id
    Remove {
        /// User id
        id: i64,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
