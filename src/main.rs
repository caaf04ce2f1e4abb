use anyhow::{Context, Result};
use clap::Parser;
use figment::providers::Serialized;
use tracing::error;

use rdg::app::App;
use rdg::cli::Cli;
use rdg::config::Config;
use rdg::logging::setup_logging;

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let config = Config::load(Serialized::defaults(&cli)).context("Could not load configuration")?;

    let app = App::new(config, command);
    match app.run() {
        Ok(path) => {
            println!("{}", path.display());
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Generation failed");
            Err(e).with_context(|| format!("Could not generate {}", command))
        }
    }
}
