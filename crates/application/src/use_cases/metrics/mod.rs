pub mod initialize;
pub mod refresh;
pub mod render;

pub use initialize::InitializeCacheUseCase;
pub use refresh::{
    EntityRefreshOutcome, RefreshMetricsUseCase, RefreshReport, RefreshStatus, REFRESH_BATCH_SIZE,
};
pub use render::RenderMetricsUseCase;
