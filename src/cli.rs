//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "amarshop", version, about = "Mock storefront with a local store")]
pub struct Cli {
    /// Config file (default: platform config dir + amarshop/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory where cart, orders, user and theme are kept
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP storefront
    Serve {
        /// Override the bind address (host:port)
        #[arg(long)]
        bind: Option<String>,
    },
    /// List products
    Catalog {
        /// Category slug or "all"
        #[arg(long, default_value = "all")]
        category: String,
        /// newest, price_low_high or price_high_low
        #[arg(long, default_value = "newest")]
        sort: String,
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one product
    Product { id: String },
    /// Inspect or change the cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Log in (no credentials are checked)
    Login {
        identifier: String,
        /// Log in to the admin panel; the identifier must contain "admin"
        #[arg(long)]
        admin: bool,
    },
    /// Log out
    Logout,
    /// Place an order from the current cart
    Checkout(CheckoutArgs),
    /// List placed orders, newest first
    Orders,
    /// Show the theme, or flip it
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Admin panel operations (requires an admin login). Product changes
    /// last for this invocation only; the catalog is not persisted.
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show cart contents and totals
    Show,
    /// Add one unit of a product
    Add { product_id: String },
    /// Remove a product entirely
    Remove { product_id: String },
    /// Set a product's quantity (must be at least 1)
    Set {
        product_id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    /// bkash, nagad or cod
    #[arg(long, default_value = "bkash")]
    pub payment: String,
    /// Wallet PIN (required for bkash and nagad)
    #[arg(long)]
    pub pin: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Sales, order and product counts
    Stats,
    /// Add a product to the catalog
    AddProduct {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: u64,
        #[arg(long)]
        image: String,
        #[arg(long)]
        stock: Option<u32>,
        /// Category slug
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a product from the catalog
    DeleteProduct { product_id: String },
    /// Set an order's status
    SetStatus { order_id: String, status: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_quantity_parses() {
        let cli = Cli::try_parse_from(["amarshop", "cart", "set", "1", "-1"]).unwrap();
        match cli.command {
            Command::Cart(CartCommand::Set { quantity, .. }) => assert_eq!(quantity, -1),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["amarshop", "orders", "--ephemeral"]).unwrap();
        assert!(cli.ephemeral);
    }
}
