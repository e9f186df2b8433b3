mod config;
mod csv_io;
mod display;
mod error;
mod ledger;
mod logging;
mod models;
mod parse;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    let args: Vec<String> = std::env::args().collect();
    let (config, args) = config::Config::from_args(&args)?;
    tracing::debug!(path = %config.csv_path.display(), "resolved ledger file");

    match args.len() {
        0 | 1 => run::as_menu(&config),
        _ => run::as_cli(&args, &config),
    }
}
