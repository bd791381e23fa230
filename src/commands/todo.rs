//! Todo Commands

use crate::models::{NewTodo, Todo};
use super::client;

pub async fn create_todo(draft: NewTodo) -> Result<Option<Todo>, String> {
    match client()?.create_todo(&draft).await {
        Ok(created) => {
            let id = created.as_ref().map(|todo| todo.id.to_string()).unwrap_or_else(|| "?".to_string());
            log::info!("created todo {} under target {}", id, draft.target_id);
            Ok(created)
        }
        Err(e) => {
            log::error!("failed to create todo: {}", e);
            Err(e.to_string())
        }
    }
}

pub async fn update_todo(todo: Todo) -> Result<(), String> {
    client()?.update_todo(&todo).await.map_err(|e| {
        log::error!("failed to update todo {}: {}", todo.id, e);
        e.to_string()
    })?;
    log::info!("updated todo {}", todo.id);
    Ok(())
}

/// Flip `is_complete` with a full replace
pub async fn toggle_todo(todo: Todo) -> Result<(), String> {
    update_todo(todo.with_completion(!todo.is_complete)).await
}

pub async fn delete_todo(id: u32) -> Result<(), String> {
    client()?.delete_todo(id).await.map_err(|e| {
        log::error!("failed to delete todo {}: {}", id, e);
        e.to_string()
    })?;
    log::info!("deleted todo {}", id);
    Ok(())
}
