use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{init_db, products_table_exists};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;
use tracing::debug;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database file
///  - the `products` table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", db_path.display()));

    let conn = Connection::open(&db_path)?;
    if products_table_exists(&conn)? {
        info("Table 'products' already present, left unchanged.");
    } else {
        init_db(&conn)?;
        debug!(path = %db_path.display(), "products table created");
    }

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
