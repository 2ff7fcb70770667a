pub mod math;
pub mod pda;
pub mod token;
pub mod validation;

pub use math::*;
pub use pda::*;
pub use token::*;
pub use validation::*;
