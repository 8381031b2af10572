pub mod add;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod show;
pub mod update;

use crate::config::Config;
use crate::db::{ProductRepository, SqliteFileProvider};

/// Repository over the configured database file. The file must already exist
/// (created by `init`).
pub(crate) fn repository(cfg: &Config) -> ProductRepository<SqliteFileProvider> {
    ProductRepository::new(SqliteFileProvider::new(&cfg.database))
}
