use crate::cli::{CatalogCommands, Cli, Commands};
use crate::domain::models::CatalogEntry;
use crate::services::catalog::{format_cents, Catalog};
use crate::services::output::print_out;

pub fn handle_catalog_commands(cli: &Cli, catalog: &Catalog) -> anyhow::Result<bool> {
    let Commands::Catalog { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        CatalogCommands::List => {
            let entries: Vec<CatalogEntry> = catalog
                .products()
                .map(|p| CatalogEntry {
                    product: p.to_string(),
                    price: format_cents(catalog.price_cents(p).unwrap_or(0)),
                })
                .collect();
            print_out(cli.json, &entries, |e| {
                format!("{}\t{}", e.product, e.price)
            })?;
        }
    }

    Ok(true)
}
