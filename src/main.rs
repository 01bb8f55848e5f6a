use clap::Parser;

use btc_basis::{api, cli, fetch, schema, watch};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Serve {
            host,
            port,
            spot_base,
            futures_base,
        } => api::serve(&host, port, spot_base, futures_base).await,
        cli::Command::Quote {
            spot_base,
            futures_base,
            pretty,
        } => fetch::run(&spot_base, &futures_base, pretty).await,
        cli::Command::Watch {
            interval_secs,
            spot_base,
            futures_base,
        } => watch::run(&spot_base, &futures_base, interval_secs).await,
        cli::Command::Schema => schema::run(),
    }
}
