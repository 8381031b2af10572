use crate::cli::commands::list::render_table;
use crate::cli::commands::repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::ProductDao;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, json } = cmd {
        let product = repository(cfg).find_one(*id)?;

        if *json {
            let out = serde_json::to_string_pretty(&product)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else {
            print!("{}", render_table(std::slice::from_ref(&product)));
        }
    }
    Ok(())
}
