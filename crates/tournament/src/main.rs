//! Tournament CLI
//!
//! Measure Isolation search agents against a fixed roster.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use log::{error, info};
use tournament::{run_gauntlet, run_pairing, TournamentConfig, TournamentError};

#[derive(clap::Parser, Debug)]
#[command(name = "tournament", about = "Isolation agent tournament runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Every challenger against every opponent
    Gauntlet {
        #[command(flatten)]
        run: RunArgs,

        /// Write the results as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// A single match between two roster entries
    Match {
        /// Name of the first agent (results are from its side)
        a: String,
        /// Name of the second agent
        b: String,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Print the default configuration as TOML
    Config,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Tournament configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rounds per pairing (two games each)
    #[arg(long)]
    matches: Option<u32>,

    /// Time per move in milliseconds
    #[arg(long = "time-limit")]
    time_limit: Option<u64>,

    /// Seed for openings and random agents
    #[arg(long)]
    seed: Option<u64>,
}

impl RunArgs {
    fn load(&self) -> Result<TournamentConfig, TournamentError> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)?,
            None => TournamentConfig::default(),
        };
        if let Some(matches) = self.matches {
            config.num_matches = matches;
        }
        if let Some(time_limit) = self.time_limit {
            config.time_limit_ms = time_limit;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), TournamentError> {
    match cli.command {
        Command::Gauntlet { run, output } => {
            let config = run.load()?;
            info!(
                "Gauntlet on {}x{}, {} ms/move, {} rounds per pairing",
                config.width, config.height, config.time_limit_ms, config.num_matches
            );
            let results = run_gauntlet(&config)?;
            results.print_report();
            if let Some(path) = output {
                results.save(&path)?;
                info!("Results written to {}", path.display());
            }
        }
        Command::Match { a, b, run } => {
            let config = run.load()?;
            let result = run_pairing(&config, config.find(&a)?, config.find(&b)?)?;
            println!("=== Final Result ===");
            println!(
                "{}: {} wins, {} losses ({} timeouts, {} forfeits)",
                a, result.wins, result.losses, result.timeouts, result.forfeits
            );
            println!("Win rate: {:.1}%", result.win_rate() * 100.0);
        }
        Command::Config => {
            print!("{}", TournamentConfig::default().to_toml_string()?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
