use std::io;

use anyhow::{Context, Result};
use log::info;
use valut_converter::config::Cli;
use valut_converter::shell::{SessionEnd, Shell};
use valut_converter::{Interrupt, LoadError, LoadOutcome, RateLoader};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::load();

    env_logger::Builder::new()
        .parse_filters(&cli.log_level)
        .init();

    info!("valut v{}", env!("CARGO_PKG_VERSION"));

    let interrupt = Interrupt::ctrl_c();
    let loader = RateLoader::spawn(&cli.rates_file);
    let outcome = match loader.wait_or_interrupt(interrupt.clone().fired()).await {
        Ok(outcome) => outcome,
        Err(LoadError::Interrupted) => {
            println!("Loading interrupted.");
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Can't load exchange rates from {}", cli.rates_file.display())
            });
        }
    };

    match &outcome {
        LoadOutcome::Loaded(_) => println!("Exchange rates loaded successfully in the background."),
        LoadOutcome::Missing(path) => println!("File not found: {}", path.display()),
    }

    let shell = Shell::new(
        io::BufReader::new(io::stdin()),
        io::stdout(),
        outcome.into_store(),
        &cli.rates_file,
    );
    match shell.run_until(interrupt.fired()).await.context("Console I/O failed")? {
        SessionEnd::Finished(store) => info!("Leaving with {} rates", store.len()),
        SessionEnd::Interrupted => {
            // The shell's blocking stdin read would hold up runtime shutdown.
            println!("\nInterrupted.");
            std::process::exit(130);
        }
    }

    Ok(())
}
