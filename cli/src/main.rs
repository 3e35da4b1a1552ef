mod commands;
mod logger;

use anyhow::Result;
use clap::Parser;
use commands::{load_config, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    logger::init_logger(cli.verbose, &config.logging.level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli.command, &config, &mut out)
}
