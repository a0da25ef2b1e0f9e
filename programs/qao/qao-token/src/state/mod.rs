pub mod config;
pub mod pool_kind;

pub use config::*;
pub use pool_kind::*;
