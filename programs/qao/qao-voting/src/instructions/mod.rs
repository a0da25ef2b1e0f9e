pub mod admin;
pub mod cast_vote;
pub mod create_vote;
pub mod initialize;
pub mod withdraw_from_vote;

pub use admin::*;
pub use cast_vote::*;
pub use create_vote::*;
pub use initialize::*;
pub use withdraw_from_vote::*;
