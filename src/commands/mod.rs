//! Service Command Wrappers
//!
//! Frontend bindings to the REST service, organized by entity.
//! Every command logs its outcome and reports failures as `String`.

mod target;
mod todo;

use std::cell::OnceCell;

use goal_board_api::ApiClient;

use crate::config::AppConfig;
use crate::models::Board;

thread_local! {
    static CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// Build the shared API client. Later calls keep the first client.
pub fn init(config: &AppConfig) -> Result<(), String> {
    let client = ApiClient::new(&config.api_base_url).map_err(|e| e.to_string())?;
    let base_url = client.base_url().to_string();
    match CLIENT.with(|cell| cell.set(client)) {
        Ok(()) => log::info!("using service at {}", base_url),
        Err(_) => log::warn!("API client already initialized, ignoring {}", base_url),
    }
    Ok(())
}

fn client() -> Result<ApiClient, String> {
    CLIENT
        .with(|cell| cell.get().cloned())
        .ok_or_else(|| "API client not initialized".to_string())
}

/// Fetch targets and todos; `Err` leaves the caller's state untouched
pub async fn load_board() -> Result<Board, String> {
    let board = client()?.load_board().await.map_err(|e| {
        log::error!("request failed: {}", e);
        e.to_string()
    })?;

    let orphans = board.orphaned_todos().len();
    if orphans > 0 {
        log::warn!("{} todos reference a missing target and are hidden", orphans);
    }
    log::debug!("loaded {} targets, {} todos", board.targets.len(), board.todos.len());
    Ok(board)
}

// Re-export all public items
pub use target::*;
pub use todo::*;
