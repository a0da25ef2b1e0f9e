pub mod attendance;
pub mod engine_config;
pub mod reward_curve;
pub mod vote;
pub mod vote_rules;

pub use attendance::*;
pub use engine_config::*;
pub use reward_curve::*;
pub use vote::*;
pub use vote_rules::*;
