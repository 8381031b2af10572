use crate::cli::commands::repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::ProductDao;
use crate::errors::{AppError, AppResult};
use crate::models::Product;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let products = repository(cfg).find_all()?;

        if *json {
            let out = serde_json::to_string_pretty(&products)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if products.is_empty() {
            println!("No products.");
            return Ok(());
        }

        print!("{}", render_table(&products));
    }
    Ok(())
}

pub(crate) fn render_table(products: &[Product]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("NAME"),
        Column::new("PRODUCER"),
        Column::new("PRICE"),
        Column::new("EXPIRES"),
        Column::new("CREATED"),
    ]);

    for p in products {
        table.add_row(vec![
            p.id().map(|i| i.to_string()).unwrap_or_default(),
            p.name.clone(),
            p.producer.clone(),
            p.price.to_string(),
            p.expiration_date.to_string(),
            p.creation_time()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        ]);
    }

    table.render()
}
