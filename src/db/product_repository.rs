//! CRUD repository for the `products` table.
//!
//! Every operation takes one connection from the provider, runs a single
//! statement and lets the connection go before returning. Statements and row
//! cursors live in an inner scope so they are finalized before the
//! connection closes, on the error path as well.

use crate::db::pool::ConnectionProvider;
use crate::db::queries::{
    DELETE_PRODUCT, INSERT_PRODUCT, SELECT_PRODUCT, SELECT_PRODUCTS, UPDATE_PRODUCT, date_to_db,
    map_row, price_to_db,
};
use crate::errors::{DaoError, DaoResult};
use crate::models::Product;
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, warn};

/// The five persistence operations for products.
pub trait ProductDao {
    /// Insert `product` and write the generated id back into it.
    fn save(&self, product: &mut Product) -> DaoResult<()>;

    /// All rows in the table's natural scan order.
    fn find_all(&self) -> DaoResult<Vec<Product>>;

    fn find_one(&self, id: i64) -> DaoResult<Product>;

    /// Overwrite name, producer, price and expiration date of a stored product.
    fn update(&self, product: &Product) -> DaoResult<()>;

    fn remove(&self, product: &Product) -> DaoResult<()>;
}

pub struct ProductRepository<P> {
    provider: P,
}

impl<P: ConnectionProvider> ProductRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn connect(&self) -> DaoResult<Connection> {
        self.provider
            .connection()
            .map_err(|e| DaoError::storage(format!("Cannot obtain a connection: {}", e), e))
    }

    fn require_id(product: &Product, operation: &str) -> DaoResult<i64> {
        product.id().ok_or_else(|| {
            warn!(operation, "product has no id");
            DaoError::Precondition(format!("Cannot {} a product without ID", operation))
        })
    }
}

impl<P: ConnectionProvider> ProductDao for ProductRepository<P> {
    fn save(&self, product: &mut Product) -> DaoResult<()> {
        if let Some(id) = product.id() {
            warn!(id, "save called on a product that already has an id");
            return Err(DaoError::Precondition(format!(
                "Product already has id = {}; use update instead of save",
                id
            )));
        }

        let saving_failed = |e: rusqlite::Error| {
            DaoError::storage(format!("Error saving product: {}: {}", product, e), e)
        };

        let conn = self.connect()?;
        let affected = {
            let mut stmt = conn.prepare(INSERT_PRODUCT).map_err(saving_failed)?;
            stmt.execute(params![
                product.name,
                product.producer,
                price_to_db(&product.price),
                date_to_db(&product.expiration_date),
            ])
            .map_err(saving_failed)?
        };

        if affected == 0 {
            return Err(DaoError::Storage {
                message: format!("Data was not saved: {}", product),
                source: None,
            });
        }

        let id = conn.last_insert_rowid();
        debug!(id, name = %product.name, "product saved");
        product.assign_id(id);
        Ok(())
    }

    fn find_all(&self) -> DaoResult<Vec<Product>> {
        let loading_failed =
            |e: rusqlite::Error| DaoError::storage(format!("Error loading products: {}", e), e);

        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_PRODUCTS).map_err(loading_failed)?;
        let rows = stmt.query_map([], map_row).map_err(loading_failed)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(loading_failed)?);
        }

        debug!(count = out.len(), "products loaded");
        Ok(out)
    }

    fn find_one(&self, id: i64) -> DaoResult<Product> {
        let loading_failed = |e: rusqlite::Error| {
            DaoError::storage(format!("Error loading product with id = {}: {}", id, e), e)
        };

        let conn = self.connect()?;
        let found = {
            let mut stmt = conn.prepare(SELECT_PRODUCT).map_err(loading_failed)?;
            stmt.query_row([id], map_row)
                .optional()
                .map_err(loading_failed)?
        };

        match found {
            Some(product) => {
                debug!(id, "product loaded");
                Ok(product)
            }
            None => {
                warn!(id, "product not found");
                Err(DaoError::NotFound { id })
            }
        }
    }

    fn update(&self, product: &Product) -> DaoResult<()> {
        let id = Self::require_id(product, "update")?;
        let updating_failed = |e: rusqlite::Error| {
            DaoError::storage(format!("Error updating product with id = {}: {}", id, e), e)
        };

        let conn = self.connect()?;
        let affected = {
            let mut stmt = conn.prepare(UPDATE_PRODUCT).map_err(updating_failed)?;
            stmt.execute(params![
                product.name,
                product.producer,
                price_to_db(&product.price),
                date_to_db(&product.expiration_date),
                id,
            ])
            .map_err(updating_failed)?
        };

        if affected == 0 {
            warn!(id, "update matched no rows");
            return Err(DaoError::NotFound { id });
        }

        debug!(id, "product updated");
        Ok(())
    }

    fn remove(&self, product: &Product) -> DaoResult<()> {
        let id = Self::require_id(product, "remove")?;
        let removing_failed = |e: rusqlite::Error| {
            DaoError::storage(format!("Error removing product with id = {}: {}", id, e), e)
        };

        let conn = self.connect()?;
        let affected = {
            let mut stmt = conn.prepare(DELETE_PRODUCT).map_err(removing_failed)?;
            stmt.execute([id]).map_err(removing_failed)?
        };

        if affected == 0 {
            warn!(id, "remove matched no rows");
            return Err(DaoError::NotFound { id });
        }

        debug!(id, "product removed");
        Ok(())
    }
}
