//! App state persistence — JSON save/load across restarts.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use rangepick_core::{Handle, SortKey};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub price_band: Option<(f64, f64)>,
    pub sort: SortKey,
    pub focus: Handle,
    pub search: String,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            price_band: None,
            sort: SortKey::PriceAsc,
            focus: Handle::Low,
            search: String::new(),
        }
    }
}

/// Load persisted state from disk. A missing file yields defaults; an
/// unreadable or corrupt one is an error.
pub fn load(path: &Path) -> anyhow::Result<PersistedState> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PersistedState::default()),
        Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
    };
    serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))
}

/// Load and apply the state saved at `app.state_path`.
///
/// On failure the app keeps its defaults and the error is shown in the
/// status bar.
pub fn restore(app: &mut crate::app::AppState) {
    match load(&app.state_path) {
        Ok(state) => apply(app, state),
        Err(e) => {
            tracing::warn!(error = %e, "state file unusable, using defaults");
            app.set_error(format!("Saved state ignored: {e:#}"));
        }
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &crate::app::AppState) -> PersistedState {
    PersistedState {
        price_band: Some(app.selector.values()),
        sort: app.query.sort,
        focus: app.focus,
        search: app.query.text.clone(),
    }
}

/// Apply persisted state to AppState.
///
/// A saved band is re-snapped into the current catalog's domain, which may
/// have changed since it was saved.
pub fn apply(app: &mut crate::app::AppState, state: PersistedState) {
    if let Some((low, high)) = state.price_band {
        app.set_price_band(low, high);
    }
    app.set_sort(state.sort);
    app.focus = state.focus;
    app.search_input = state.search.clone();
    app.query.text = state.search;
}
