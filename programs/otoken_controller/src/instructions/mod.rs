pub mod create_settlement;
pub mod deposit_payout;
pub mod finalize_settlement;
pub mod redeem;
pub mod settlement;

// Glob imports are required for Anchor's #[program] macro
#[allow(ambiguous_glob_reexports)]
pub use create_settlement::*;
#[allow(ambiguous_glob_reexports)]
pub use deposit_payout::*;
#[allow(ambiguous_glob_reexports)]
pub use finalize_settlement::*;
#[allow(ambiguous_glob_reexports)]
pub use redeem::*;
#[allow(ambiguous_glob_reexports)]
pub use settlement::*;
