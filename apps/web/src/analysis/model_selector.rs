//! Model Selection: picks a catalog model able to run the analysis prompt.
//!
//! Strategies are tried in order; the first one that names a model wins and
//! `DEFAULT_MODEL` is the final answer when none does. Catalog failures are
//! logged and treated as an empty catalog, so selection always yields a name.
//!
//! When several models match one strategy, catalog order decides. The remote
//! service owns that order, so callers must not rely on which one is picked.

use tracing::{info, warn};

use crate::llm_client::{GenerativeService, ModelInfo};

/// Used when the catalog is unavailable or nothing in it matches.
pub const DEFAULT_MODEL: &str = "models/gemini-pro";

/// Generation method a model must support to be selectable.
pub const GENERATE_CONTENT: &str = "generateContent";

/// One rule for picking a model out of the catalog.
#[derive(Debug, Clone, Copy)]
pub enum SelectionStrategy {
    /// First generation-capable model, in catalog order, whose name contains
    /// any of the markers. One pass: an earlier `pro` beats a later `flash`.
    AnyNameMarker(&'static [&'static str]),
}

impl SelectionStrategy {
    pub fn pick<'a>(&self, catalog: &'a [ModelInfo]) -> Option<&'a ModelInfo> {
        match self {
            SelectionStrategy::AnyNameMarker(markers) => catalog
                .iter()
                .filter(|m| m.supports(GENERATE_CONTENT))
                .find(|m| markers.iter().any(|marker| m.name.contains(marker))),
        }
    }
}

/// Lightweight or general-purpose Gemini models, whichever the catalog lists first.
pub const STRATEGIES: [SelectionStrategy; 1] =
    [SelectionStrategy::AnyNameMarker(&["flash", "pro"])];

/// Applies `STRATEGIES` to an already-fetched catalog.
pub fn choose_model(catalog: &[ModelInfo]) -> String {
    match STRATEGIES.iter().find_map(|s| s.pick(catalog)) {
        Some(model) => {
            info!(
                "Selected model {} ({})",
                model.name,
                model.display_name.as_deref().unwrap_or("no display name")
            );
            model.name.clone()
        }
        None => {
            info!("No catalog model matched; using {DEFAULT_MODEL}");
            DEFAULT_MODEL.to_string()
        }
    }
}

/// Lists the catalog and picks a model. Never fails.
pub async fn select_model(service: &dyn GenerativeService) -> String {
    match service.list_models().await {
        Ok(catalog) => choose_model(&catalog),
        Err(e) => {
            warn!("Model catalog unavailable, falling back to {DEFAULT_MODEL}: {e}");
            DEFAULT_MODEL.to_string()
        }
    }
}
