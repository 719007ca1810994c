use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "unitquote", version, about = "Building/unit quote report CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog TOML file overriding the built-in product list"
    )]
    pub catalog: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct the hierarchy and write priced per-building reports
    Process {
        input: String,
        #[arg(long, default_value = "processed")]
        out_dir: String,
    },
    /// Reconstruct and show units/segments without writing anything
    Inspect { input: String },
    /// Check the input's column contract only
    Validate { input: String },
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Print the active catalog in display order
    List,
}
