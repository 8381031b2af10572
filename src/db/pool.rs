//! Connection sources for the repository.
//!
//! The repository never holds a connection between calls: it asks a
//! `ConnectionProvider` for a fresh one at the start of every operation and
//! drops it before returning. Pooling, if any, is the provider's business.

use rusqlite::{Connection, OpenFlags, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Anything able to hand out a usable, independent connection per call.
pub trait ConnectionProvider {
    fn connection(&self) -> Result<Connection>;
}

impl<P: ConnectionProvider + ?Sized> ConnectionProvider for &P {
    fn connection(&self) -> Result<Connection> {
        (**self).connection()
    }
}

impl<P: ConnectionProvider + ?Sized> ConnectionProvider for std::sync::Arc<P> {
    fn connection(&self) -> Result<Connection> {
        (**self).connection()
    }
}

/// Opens a new connection on a SQLite database file for every call.
#[derive(Debug, Clone)]
pub struct SqliteFileProvider {
    path: PathBuf,
    busy_timeout: Duration,
    create: bool,
}

impl SqliteFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_secs(5),
            create: false,
        }
    }

    /// Allow the provider to create the database file if it is missing.
    /// Off by default so a mistyped `--db` fails instead of silently
    /// producing an empty database.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConnectionProvider for SqliteFileProvider {
    fn connection(&self) -> Result<Connection> {
        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.create {
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let conn = Connection::open_with_flags(&self.path, flags)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }
}
