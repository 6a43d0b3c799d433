pub mod client;
pub mod wire;

pub use client::{Ns1ApiClient, API_KEY_HEADER};
