use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the stored inventory with an uploaded file
    Upload {
        #[arg(help = "Inventory file in Name:Quantity [Alt1 Alt2 ...] format")]
        file: PathBuf,
    },
    /// Search medicines by name prefix (case-insensitive)
    Search {
        #[arg(help = "Name prefix to search for")]
        query: String,

        #[arg(long, help = "Print the results as JSON instead of text")]
        json: bool,
    },
    /// Exact, case-sensitive stock lookup
    Lookup {
        #[arg(help = "Medicine name")]
        name: String,
    },
    /// Clear the stored inventory
    Reset,
    /// Write the example inventory template
    Template {
        #[arg(
            long,
            help = "If specified, writes the template to this file instead of stdout"
        )]
        output: Option<PathBuf>,
    },
    /// Print the stored inventory in upload format
    Export {
        #[arg(
            long,
            help = "If specified, writes the inventory to this file instead of stdout"
        )]
        output: Option<PathBuf>,
    },
}
