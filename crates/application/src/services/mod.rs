pub mod entity_cache;
pub mod exposition;

pub use entity_cache::{CacheEntry, EntityCache, RefreshClaim};
pub use exposition::{render_exposition, EXPOSITION_CONTENT_TYPE};
