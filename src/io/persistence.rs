use super::storage::KeyValueStore;
use crate::error::Result;
use crate::model::PersistedState;

/// The single key all app data is stored under.
pub const STORAGE_KEY: &str = "dashboardData";

/// Serialize the whole state and overwrite the stored copy.
pub fn save_state(store: &mut dyn KeyValueStore, state: &PersistedState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    store.set(STORAGE_KEY, &json)?;
    tracing::info!(
        "Saved '{}' ({} milestones, {} widget entries)",
        state.display_name(),
        state.milestones.len(),
        state.widgets.total_entries()
    );
    Ok(())
}

/// Load the stored state.
///
/// Returns `None` when nothing has been saved yet. Unreadable or malformed
/// content is logged and also reported as `None` so callers fall back to
/// defaults.
pub fn load_state(store: &dyn KeyValueStore) -> Option<PersistedState> {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No saved data under '{}'", STORAGE_KEY);
            return None;
        }
        Err(e) => {
            tracing::warn!("Failed to read saved data: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(state) => {
            tracing::info!("Loaded '{}'", state.display_name());
            Some(state)
        }
        Err(e) => {
            tracing::warn!("Ignoring malformed saved data: {}", e);
            None
        }
    }
}
