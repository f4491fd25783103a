use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use bank_sim::simulation::{SimBank, SimConfig};

#[derive(Parser)]
#[command(name = "bank_sim")]
#[command(about = "Discrete-time simulation of customers queueing for bank tellers")]
struct Cli {
    /// Number of customers to visit the bank
    #[arg(allow_negative_numbers = true)]
    c: i64,

    /// Number of tellers at the bank
    #[arg(short = 't', default_value = "1", allow_negative_numbers = true)]
    tellers: i64,

    /// Print a line for every tick
    #[arg(short, long)]
    verbose: bool,

    /// Number of ticks to spread arrivals over (defaults to one per customer)
    #[arg(long)]
    arrival_ticks: Option<usize>,

    /// Ticks a teller stays busy with each customer
    #[arg(long, default_value = "1")]
    service_ticks: u32,

    /// Wait time added to each waiting customer per tick
    #[arg(long, default_value = "1")]
    wait_delta: u64,

    /// Seed for reproducible visit purposes
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> SimConfig {
        let mut config = SimConfig::clamped(self.c, self.tellers)
            .with_service_ticks(self.service_ticks)
            .with_wait_delta(self.wait_delta)
            .with_verbose(self.verbose);
        if let Some(ticks) = self.arrival_ticks {
            config = config.with_arrival_ticks(ticks);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config();

    let default_filter = if config.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let mut bank = SimBank::from_config(&config).context("Failed to set up the bank")?;

    if config.verbose {
        println!("Initial state:");
        bank.print_summary();
        println!();
    }

    let stats = bank.run().context("Simulation aborted")?;
    println!("{}", stats);

    Ok(())
}
