use clap::{Parser, Subcommand};

use crate::fetch::{DEFAULT_FUTURES_BASE, DEFAULT_SPOT_BASE};

/// Bitcoin spot vs quarterly-futures premium tracker — serve the dashboard
/// API, fetch one-off quotes, or watch the basis from a terminal.
#[derive(Parser)]
#[command(name = "btc-basis", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value = "8787")]
        port: u16,

        /// Base URL of the spot market REST API
        #[arg(long, default_value = DEFAULT_SPOT_BASE)]
        spot_base: String,

        /// Base URL of the futures market REST API
        #[arg(long, default_value = DEFAULT_FUTURES_BASE)]
        futures_base: String,
    },

    /// Fetch a single price snapshot and print it as JSON
    Quote {
        /// Base URL of the spot market REST API
        #[arg(long, default_value = DEFAULT_SPOT_BASE)]
        spot_base: String,

        /// Base URL of the futures market REST API
        #[arg(long, default_value = DEFAULT_FUTURES_BASE)]
        futures_base: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Poll the exchange and render a terminal dashboard
    Watch {
        /// Seconds between polls
        #[arg(long, default_value = "30")]
        interval_secs: u64,

        /// Base URL of the spot market REST API
        #[arg(long, default_value = DEFAULT_SPOT_BASE)]
        spot_base: String,

        /// Base URL of the futures market REST API
        #[arg(long, default_value = DEFAULT_FUTURES_BASE)]
        futures_base: String,
    },

    /// Output the JSON Schema for the wire payloads
    Schema,
}
