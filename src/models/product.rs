use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A product as stored in the `products` table.
///
/// `id` and `creation_time` belong to storage: the id is assigned by the
/// repository on save and never changes afterwards, the creation time is
/// defaulted by the database and only ever read back. Both are therefore
/// exposed through getters only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: Option<i64>,                      // ⇔ products.id (INTEGER PK AUTOINCREMENT)
    pub name: String,                     // ⇔ products.name
    pub producer: String,                 // ⇔ products.producer
    pub price: Decimal,                   // ⇔ products.price (TEXT, exact decimal)
    pub expiration_date: NaiveDate,       // ⇔ products.expiration_date (TEXT "YYYY-MM-DD")
    creation_time: Option<NaiveDateTime>, // ⇔ products.creation_time (storage default)
}

impl Product {
    /// Build a product that has not been saved yet.
    pub fn new(
        name: impl Into<String>,
        producer: impl Into<String>,
        price: Decimal,
        expiration_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            producer: producer.into(),
            price,
            expiration_date,
            creation_time: None,
        }
    }

    /// Rebuild a product from a stored row.
    pub(crate) fn from_storage(
        id: i64,
        name: String,
        producer: String,
        price: Decimal,
        expiration_date: NaiveDate,
        creation_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            producer,
            price,
            expiration_date,
            creation_time: Some(creation_time),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn creation_time(&self) -> Option<NaiveDateTime> {
        self.creation_time
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Compare everything the application controls: id and the four mutable
    /// fields. The storage-assigned creation time is ignored.
    pub fn same_values(&self, other: &Product) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.producer == other.producer
            && self.price == other.price
            && self.expiration_date == other.expiration_date
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self
            .id
            .map(|i| i.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "Product{{id={}, name={}, producer={}, price={}, expiration_date={}}}",
            id, self.name, self.producer, self.price, self.expiration_date
        )
    }
}
