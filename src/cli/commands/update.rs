use crate::cli::commands::repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::ProductDao;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::{date, price};

/// Load the product, apply the given fields and write it back.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        name,
        producer,
        price: price_str,
        expires,
    } = cmd
    {
        if name.is_none() && producer.is_none() && price_str.is_none() && expires.is_none() {
            info("Nothing to update: pass at least one of --name, --producer, --price, --expires.");
            return Ok(());
        }

        // Validate input before touching the database.
        let new_price = match price_str {
            Some(s) => Some(price::parse_price(s).ok_or_else(|| AppError::InvalidPrice(s.into()))?),
            None => None,
        };
        let new_date = match expires {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?),
            None => None,
        };

        let repo = repository(cfg);
        let mut product = repo.find_one(*id)?;

        if let Some(n) = name {
            product.name = n.clone();
        }
        if let Some(p) = producer {
            product.producer = p.clone();
        }
        if let Some(p) = new_price {
            product.price = p;
        }
        if let Some(d) = new_date {
            product.expiration_date = d;
        }

        repo.update(&product)?;
        success(format!("Product {} updated.", id));
    }
    Ok(())
}
