use crate::cli::commands::repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::ProductDao;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let repo = repository(cfg);
        let product = repo.find_one(*id)?;

        let prompt = format!(
            "Delete product #{} '{}' ({})? This action is irreversible.",
            id, product.name, product.producer
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        repo.remove(&product)?;
        success(format!("Product {} has been deleted.", id));
    }
    Ok(())
}
