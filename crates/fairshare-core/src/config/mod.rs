pub mod defaults;
pub mod pool_config;

pub use pool_config::{FairshareConfig, PoolConfig};
