pub mod constants;
pub mod pda;
pub mod percentage;
pub mod pool_utils;
pub mod position_utils;
pub mod swap_utils;
pub mod tick_utils;

pub use percentage::Percentage;
