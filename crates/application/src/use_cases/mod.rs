pub mod metrics;

// Re-export use cases
pub use metrics::{InitializeCacheUseCase, RefreshMetricsUseCase, RenderMetricsUseCase};
