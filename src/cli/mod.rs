// PRDatabase — CLI Module
//
// Command-line interface using clap derive macros. Every invocation starts
// the application shell, which restores the persisted session first.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::execute;

/// PRDatabase — a local vault for client records.
#[derive(Parser, Debug)]
#[command(name = "prdatabase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the vault database (defaults to the platform data directory).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Startup splash delay in milliseconds.
    #[arg(long, global = true, default_value_t = 0)]
    pub splash_ms: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account.
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        /// Stored in plaintext.
        #[arg(long)]
        password: String,
    },

    /// Sign in and remember the session for later commands.
    Signin {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// End the current session. Stored records are kept.
    Signout,

    /// Show the signed-in user.
    Whoami,

    /// Add a client record.
    Add {
        /// Client's full name.
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Date of birth, free-form (e.g. "01/01/90").
        #[arg(long)]
        dob: String,
    },

    /// Delete a client record by ID.
    Delete { id: String },

    /// List all client records, newest first. Passwords are masked.
    List {
        /// Show the password of this record ID (repeatable).
        #[arg(long)]
        reveal: Vec<String>,
    },

    /// List records whose name or email contains the query (case-insensitive).
    Search {
        query: String,

        /// Show the password of this record ID (repeatable).
        #[arg(long)]
        reveal: Vec<String>,
    },

    /// Write a SQL dump of all records.
    ExportSql {
        /// Output directory (defaults to the current directory).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write the Python/SQLite desktop viewer script.
    ExportEngine {
        /// Output directory (defaults to the current directory).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the Python/SQLite desktop viewer script.
    Engine,
}
