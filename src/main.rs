use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;
mod sheet;

use cli::Cli;
use services::catalog::Catalog;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = Catalog::load(cli.catalog.as_deref())?;

    if commands::handle_catalog_commands(&cli, &catalog)? {
        return Ok(());
    }
    commands::handle_runtime_commands(&cli, &catalog)
}
