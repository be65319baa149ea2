//! Stockroom CLI - local inventory management.
//!
//! # Usage
//!
//! ```bash
//! # Add an item
//! stockroom add --name "Widget" --category electronics --quantity 5 --unit-price 9.99
//!
//! # List the inventory (filter, sort, paginate)
//! stockroom list --category food --sort quantity --direction desc --page 2
//!
//! # Edit an item (omitted flags keep the current values)
//! stockroom edit <ID> --quantity 20
//!
//! # Delete an item
//! stockroom delete <ID>
//! ```
//!
//! # Commands
//!
//! - `add` - Validate and add a new item
//! - `list` - Render the filtered/sorted/paginated table
//! - `edit` - Update an existing item's fields
//! - `delete` - Remove an item

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author, version, about = "Local inventory tracker")]
struct Cli {
    /// Directory holding the inventory data file
    /// (default: $STOCKROOM_DATA_DIR or the current directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new item to the inventory
    Add {
        /// Item name (must be unique, ignoring case)
        #[arg(long)]
        name: String,

        /// Category: electronics, clothing, food or other
        #[arg(long)]
        category: String,

        /// Units on hand
        #[arg(long)]
        quantity: String,

        /// Price per unit
        #[arg(long)]
        unit_price: String,
    },
    /// List inventory items
    List {
        /// Keep only names containing this term (ignoring case)
        #[arg(long, default_value = "")]
        search: String,

        /// Category filter: all, electronics, clothing, food or other
        #[arg(long, default_value = "all")]
        category: String,

        /// Sort column: name, category, quantity, unit-price or last-updated
        #[arg(long, default_value = "name")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "asc")]
        direction: String,

        /// 1-based page number (pages hold 10 rows)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Edit an existing item
    Edit {
        /// Identifier of the item to edit
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New quantity
        #[arg(long)]
        quantity: Option<String>,

        /// New unit price
        #[arg(long)]
        unit_price: Option<String>,
    },
    /// Delete an item
    Delete {
        /// Identifier of the item to delete
        id: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    let data_dir = config::data_dir(cli.data_dir);

    match cli.command {
        Commands::Add {
            name,
            category,
            quantity,
            unit_price,
        } => commands::inventory::add(&data_dir, &name, &category, &quantity, &unit_price),
        Commands::List {
            search,
            category,
            sort,
            direction,
            page,
        } => commands::inventory::list(&data_dir, &search, &category, &sort, &direction, page),
        Commands::Edit {
            id,
            name,
            category,
            quantity,
            unit_price,
        } => commands::inventory::edit(
            &data_dir,
            &id,
            name.as_deref(),
            category.as_deref(),
            quantity.as_deref(),
            unit_price.as_deref(),
        ),
        Commands::Delete { id } => commands::inventory::delete(&data_dir, &id),
    }
}
