mod stakeout;
mod store;
mod token;

pub use stakeout::StakeoutError;
pub use store::StoreError;
pub use token::TokenError;
