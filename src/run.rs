mod cli;
mod menu;
mod report;

use anyhow::Result;
use std::io;

use crate::config::Config;

pub(crate) use cli::as_cli;

pub(crate) fn as_menu(config: &Config) -> Result<()> {
    tracing::debug!(path = %config.csv_path.display(), "starting interactive menu");
    let today = chrono::Local::now().date_naive();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = menu::Menu::new(stdin.lock(), stdout.lock(), config.csv_path.clone(), today);
    menu.run()
}
