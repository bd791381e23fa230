//! Target Commands

use crate::models::{NewTarget, Target};
use super::client;

/// `Ok(None)` when the service accepted the target but echoed nothing readable
pub async fn create_target(draft: NewTarget) -> Result<Option<Target>, String> {
    match client()?.create_target(&draft).await {
        Ok(created) => {
            match &created {
                Some(target) => log::info!("created target {}: {:?}", target.id, target),
                None => log::info!("created target {:?}", draft.title),
            }
            Ok(created)
        }
        Err(e) => {
            log::error!("failed to create target: {}", e);
            Err(e.to_string())
        }
    }
}

pub async fn update_target(target: Target) -> Result<(), String> {
    log::debug!("updating target {}", target.id);
    client()?.update_target(&target).await.map_err(|e| {
        log::error!("failed to update target {}: {}", target.id, e);
        e.to_string()
    })?;
    log::info!("updated target {}", target.id);
    Ok(())
}

/// Flip `is_complete` with a full replace
pub async fn toggle_target(target: Target) -> Result<(), String> {
    let flipped = target.with_completion(!target.is_complete);
    update_target(flipped).await
}

/// Delete a target; the service deletes its todos too
pub async fn delete_target(id: u32) -> Result<(), String> {
    client()?.delete_target(id).await.map_err(|e| {
        log::error!("failed to delete target {}: {}", id, e);
        e.to_string()
    })?;
    log::info!("deleted target {}", id);
    Ok(())
}
