use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use judge_rounds::config::Config;
use judge_rounds::display::{print_schedule, write_schedule_to_file};
use judge_rounds::export::write_rounds_csv;
use judge_rounds::{generate, web};

#[derive(Parser)]
#[command(name = "judge-rounds", about = "Judge rotation for hackathon judging", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a schedule and print it
    Generate {
        #[arg(long, short = 'j')]
        judges: usize,
        #[arg(long, short = 't')]
        teams: usize,
        /// First round start, e.g. "9:00 AM"
        #[arg(long, short = 's', default_value = "9:00 AM")]
        start: String,
        /// Write the round list to this text file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Write one CSV row per judge visit
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the schedule as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the admin/publication web service
    Serve {
        #[arg(long, short = 'p', env = "JUDGE_ROUNDS_PORT")]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Serve { port } => {
            let config = Config::load().with_port(port);
            println!("Access the service at http://localhost:{}", config.port);
            web::start_server(config).await?;
        }
        Command::Generate { judges, teams, start, output, csv, json } => {
            let schedule = generate(judges, teams, &start)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                print_schedule(&schedule);
            }

            if let Some(path) = output {
                write_schedule_to_file(&schedule, &path)?;
                info!(path = %path.display(), "round list written");
            }
            if let Some(path) = csv {
                write_rounds_csv(&schedule, &path)?;
                info!(path = %path.display(), "csv export written");
            }
        }
    }

    Ok(())
}
