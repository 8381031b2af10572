use crate::cli::commands::repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::ProductDao;
use crate::errors::{AppError, AppResult};
use crate::models::Product;
use crate::ui::messages::{success, warning};
use crate::utils::{date, price};

/// Save a new product and report the id storage assigned to it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        producer,
        price: price_str,
        expires,
    } = cmd
    {
        let p = price::parse_price(price_str)
            .ok_or_else(|| AppError::InvalidPrice(price_str.to_string()))?;
        let d = date::parse_date(expires).ok_or_else(|| AppError::InvalidDate(expires.into()))?;

        let mut product = Product::new(name.as_str(), producer.as_str(), p, d);
        repository(cfg).save(&mut product)?;

        // save() always assigns an id on success
        let id = product
            .id()
            .ok_or_else(|| AppError::Other("no id assigned after save".into()))?;

        if date::is_expired(&product.expiration_date) {
            warning(format!("{} is already expired ({})", product.name, d));
        }
        success(format!("Product '{}' saved with id {}", product.name, id));
    }
    Ok(())
}
