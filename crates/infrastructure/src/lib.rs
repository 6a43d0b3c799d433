//! NS1 Exporter Infrastructure Layer
pub mod ns1;
pub mod system;

pub use ns1::Ns1ApiClient;
pub use system::SystemClock;
