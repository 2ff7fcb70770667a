pub mod claim_proceeds;
pub mod create_wrapper;
pub mod mint_wrapper;
pub mod redeem;
pub mod wrapper;

// Glob imports are required for Anchor's #[program] macro
#[allow(ambiguous_glob_reexports)]
pub use claim_proceeds::*;
#[allow(ambiguous_glob_reexports)]
pub use create_wrapper::*;
#[allow(ambiguous_glob_reexports)]
pub use mint_wrapper::*;
#[allow(ambiguous_glob_reexports)]
pub use redeem::*;
#[allow(ambiguous_glob_reexports)]
pub use wrapper::*;
