pub mod batch_fill_limit_orders;
pub mod cancel_order;
pub mod create_market;
pub mod place_order;

pub use batch_fill_limit_orders::*;
pub use cancel_order::*;
pub use create_market::*;
pub use place_order::*;

pub const MARKET_SEED: &[u8] = b"market";
pub const ORDER_SEED: &[u8] = b"order";
pub const ESCROW_SEED: &[u8] = b"escrow";
