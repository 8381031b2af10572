//! SQL statements for the `products` table and the row ⇔ `Product` mapping.
//!
//! Placeholder positions are part of the contract: insert and update bind
//! (name, producer, price, expiration_date) as ?1..?4, update and the keyed
//! statements bind the id last.

use crate::models::Product;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rusqlite::types::Type;
use rusqlite::{Result, Row};
use std::str::FromStr;

pub const INSERT_PRODUCT: &str = "INSERT INTO products (name, producer, price, expiration_date)
     VALUES (?1, ?2, ?3, ?4)";

pub const UPDATE_PRODUCT: &str = "UPDATE products
     SET name = ?1, producer = ?2, price = ?3, expiration_date = ?4
     WHERE id = ?5";

pub const SELECT_PRODUCTS: &str =
    "SELECT id, name, producer, price, expiration_date, creation_time FROM products";

pub const SELECT_PRODUCT: &str = "SELECT id, name, producer, price, expiration_date, creation_time
     FROM products
     WHERE id = ?1";

pub const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = ?1";

// Column positions in SELECT_PRODUCTS / SELECT_PRODUCT, used in error reports.
const COL_PRICE: usize = 3;
const COL_EXPIRATION_DATE: usize = 4;
const COL_CREATION_TIME: usize = 5;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub fn map_row(row: &Row) -> Result<Product> {
    let price_str: String = row.get("price")?;
    let price = Decimal::from_str(&price_str)
        .map_err(|e| conversion_failure(COL_PRICE, Box::new(e)))?;

    let date_str: String = row.get("expiration_date")?;
    let expiration_date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
        .map_err(|e| conversion_failure(COL_EXPIRATION_DATE, Box::new(e)))?;

    let created_str: String = row.get("creation_time")?;
    let creation_time = parse_timestamp(&created_str)
        .map_err(|e| conversion_failure(COL_CREATION_TIME, Box::new(e)))?;

    Ok(Product::from_storage(
        row.get("id")?,
        row.get("name")?,
        row.get("producer")?,
        price,
        expiration_date,
        creation_time,
    ))
}

/// Storage defaults write "YYYY-MM-DD HH:MM:SS.SSS"; rows written by other
/// tools may use the ISO `T` separator or omit the fraction.
fn parse_timestamp(s: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
}

fn conversion_failure(
    column: usize,
    err: Box<dyn std::error::Error + Send + Sync>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, err)
}

/// Canonical text form of a price as bound to the `price` column.
pub fn price_to_db(price: &Decimal) -> String {
    price.to_string()
}

pub fn date_to_db(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
