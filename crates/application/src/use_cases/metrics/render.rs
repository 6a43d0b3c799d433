use crate::services::{render_exposition, EntityCache};
use std::sync::Arc;

/// Serializes the current cache contents for a scrape.
pub struct RenderMetricsUseCase {
    cache: Arc<EntityCache>,
}

impl RenderMetricsUseCase {
    pub fn new(cache: Arc<EntityCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> String {
        render_exposition(self.cache.entities())
    }
}
