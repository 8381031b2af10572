use clap::{Parser, Subcommand};

/// Command-line interface definition for product-dao
#[derive(Parser)]
#[command(
    name = "product-dao",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage the products table of a SQLite database: add, list, show, update and delete products",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Save a new product
    Add {
        /// Product name
        name: String,

        /// Producer name
        producer: String,

        /// Price as an exact decimal (e.g. 2.50)
        price: String,

        /// Expiration date (YYYY-MM-DD)
        expires: String,
    },

    /// List all products
    List {
        #[arg(long = "json", help = "Print products as a JSON array")]
        json: bool,
    },

    /// Show a single product
    Show {
        id: i64,

        #[arg(long = "json", help = "Print the product as JSON")]
        json: bool,
    },

    /// Change name, producer, price or expiration date of a product
    Update {
        id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "producer")]
        producer: Option<String>,

        #[arg(long = "price", help = "New price (exact decimal)")]
        price: Option<String>,

        #[arg(long = "expires", help = "New expiration date (YYYY-MM-DD)")]
        expires: Option<String>,
    },

    /// Delete a product
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
