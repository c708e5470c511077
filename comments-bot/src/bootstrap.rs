use item_db::Database;

use crate::config::BotConfig;
use crate::resolver::LocalItems;

/// Load config and open the item database (fatal on error).
pub fn init_foundation() -> Result<(LocalItems, BotConfig), anyhow::Error> {
    let config = BotConfig::load();

    if let Some(dir) = config.item_db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    tracing::info!("Opening item database at {}", config.item_db_path.display());
    let db = Database::open(&config.item_db_path)?;

    match db.count_items() {
        Ok(0) => tracing::warn!("Item database is empty, only pasted item links will resolve"),
        Ok(count) => tracing::info!(count, "Item database ready"),
        Err(e) => tracing::error!("Failed to count items: {e}"),
    }

    let items = LocalItems::new(db, config.max_search_results);
    Ok((items, config))
}
