pub mod add_liquidity;
pub mod initialize_pool;
pub mod liquidity;
pub mod remove_liquidity;
pub mod swap_sol_for_exact_tokens;

// Every module exports a `handler`; instructions call them by module path
#[allow(ambiguous_glob_reexports)]
pub use add_liquidity::*;
#[allow(ambiguous_glob_reexports)]
pub use initialize_pool::*;
#[allow(ambiguous_glob_reexports)]
pub use liquidity::*;
#[allow(ambiguous_glob_reexports)]
pub use remove_liquidity::*;
#[allow(ambiguous_glob_reexports)]
pub use swap_sol_for_exact_tokens::*;

pub const POOL_SEED: &[u8] = b"pool";
pub const SOL_VAULT_SEED: &[u8] = b"pool_sol_vault";
pub const TOKEN_VAULT_SEED: &[u8] = b"pool_token_vault";
