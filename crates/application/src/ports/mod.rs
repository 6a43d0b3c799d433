pub mod clock;
pub mod ns1_gateway;

pub use clock::Clock;
pub use ns1_gateway::Ns1Gateway;
