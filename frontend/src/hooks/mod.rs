pub mod use_balance;
pub mod use_live_drops;

pub use use_balance::*;
pub use use_live_drops::*;
