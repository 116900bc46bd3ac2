//! CLI for the airspace snapshot service.

use airspace_cli::{demo_snapshot, render};
use airspace_core::SnapshotDocument;
use airspace_sdk::AirspaceClient;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query and update an airspace server
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Airspace server URL
    #[arg(long, env = "AIRSPACE_URL", default_value = "http://localhost:8000")]
    url: String,

    /// Print raw JSON instead of tables
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace the live snapshot with a flight array or state-vector file
    Push { file: PathBuf },
    /// List flights, optionally inside a named region
    Flights {
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Look up one flight by callsign or ICAO24
    Get { identifier: String },
    /// List anomaly alerts
    Alerts {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Replace the live snapshot with the built-in demo traffic
    Scenario {
        /// Write the scenario to a file instead of pushing it
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = AirspaceClient::new(&args.url)?;

    match args.command {
        Command::Push { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let document: SnapshotDocument = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", file.display()))?;
            let snapshot = document.into_snapshot()?;
            let reply = client.update_flights(&snapshot).await?;
            println!("Pushed {} flights to {}", reply.count, client.base_url());
        }
        Command::Flights { region, limit } => {
            let flights = client.list_flights(region.as_deref(), limit).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&flights)?);
            } else {
                print!("{}", render::flight_table(&flights));
            }
        }
        Command::Get { identifier } => match client.get_flight(&identifier).await? {
            Some(flight) if args.json => println!("{}", serde_json::to_string_pretty(&flight)?),
            Some(flight) => print!("{}", render::flight_table(std::slice::from_ref(&flight))),
            None => {
                eprintln!("Flight not found: {}", identifier.trim());
                std::process::exit(1);
            }
        },
        Command::Alerts { limit } => {
            let alerts = client.list_alerts(limit).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&alerts)?);
            } else {
                print!("{}", render::alert_table(&alerts));
            }
        }
        Command::Scenario { out: Some(path) } => {
            let snapshot = demo_snapshot();
            std::fs::write(&path, serde_json::to_string_pretty(&snapshot)?)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} flights to {}", snapshot.len(), path.display());
        }
        Command::Scenario { out: None } => {
            let reply = client.update_flights(&demo_snapshot()).await?;
            println!("Pushed {} demo flights to {}", reply.count, client.base_url());
        }
    }

    Ok(())
}
