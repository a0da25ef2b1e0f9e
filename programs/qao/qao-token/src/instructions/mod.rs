pub mod activate_minting;
pub mod admin;
pub mod allowance;
pub mod burn_tokens;
pub mod catch_up_minting;
pub mod initialize;
pub mod mint_reward;
pub mod set_pool;
pub mod transfer_from;
pub mod transfer_tokens;
pub mod unlock_treasury;
pub mod withdraw_from_treasury;

pub use activate_minting::*;
pub use admin::*;
pub use allowance::*;
pub use burn_tokens::*;
pub use catch_up_minting::*;
pub use initialize::*;
pub use mint_reward::*;
pub use set_pool::*;
pub use transfer_from::*;
pub use transfer_tokens::*;
pub use unlock_treasury::*;
pub use withdraw_from_treasury::*;
