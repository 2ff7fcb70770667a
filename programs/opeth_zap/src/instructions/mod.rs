pub mod create_vault;
pub mod mint;
pub mod zap;

// Glob imports are required for Anchor's #[program] macro
#[allow(ambiguous_glob_reexports)]
pub use create_vault::*;
#[allow(ambiguous_glob_reexports)]
pub use mint::*;
#[allow(ambiguous_glob_reexports)]
pub use zap::*;
