/// Source of the current wall-clock time.
///
/// Staleness and sample timestamps are computed from this, so tests can
/// move across minute boundaries without sleeping.
pub trait Clock: Send + Sync {
    /// Milliseconds since the UNIX epoch.
    fn now_millis(&self) -> u64;
}
