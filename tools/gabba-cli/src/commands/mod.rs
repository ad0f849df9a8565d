//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod order;
pub mod products;

use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart lines and totals.
    Show,
    /// Add one unit of a product.
    Add {
        /// Product name.
        name: String,
        /// Unit price in whole pesos. Looked up in the catalog when omitted.
        price: Option<u64>,
        /// Image reference.
        #[arg(long)]
        image: Option<String>,
        /// Product category.
        #[arg(long)]
        category: Option<String>,
        /// Catalog file used for price lookup.
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Remove a line.
    Remove {
        /// Line index (0-based).
        index: usize,
    },
    /// Change a line's quantity by a delta.
    Change {
        /// Line index (0-based).
        index: usize,
        /// Amount to add; negative to take away.
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
    /// Set a line's quantity.
    Set {
        /// Line index (0-based).
        index: usize,
        /// New quantity, as typed. Non-positive or non-numeric input is ignored.
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Catalog file (default: from config).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Only this category.
    #[arg(long)]
    pub category: Option<String>,

    /// Price range, `min-max` or `min-`.
    #[arg(long)]
    pub price: Option<String>,

    /// Only products available in this size.
    #[arg(long)]
    pub size: Option<String>,

    /// Only this age bracket.
    #[arg(long)]
    pub age: Option<String>,

    /// Only this gender (unisex products always match).
    #[arg(long)]
    pub gender: Option<String>,

    /// Free-text search on name and description.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Customer name.
    #[arg(long)]
    pub name: String,

    /// Contact phone.
    #[arg(long)]
    pub phone: String,

    /// Contact email.
    #[arg(long)]
    pub email: Option<String>,

    /// Delivery city.
    #[arg(long)]
    pub city: String,

    /// Delivery address.
    #[arg(long)]
    pub address: String,

    /// Payment method: cash, bank-transfer or online.
    #[arg(long, default_value = "cash")]
    pub payment: String,

    /// Extra delivery notes.
    #[arg(long)]
    pub comments: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
