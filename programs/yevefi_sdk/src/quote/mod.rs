pub mod collect_fees_quote;
pub mod collect_rewards_quote;
pub mod decrease_liquidity_quote;
pub mod dev_fee_swap_quote;
pub mod fetcher;
pub mod increase_liquidity_quote;
pub mod swap_manager;
pub mod swap_quote;
pub mod tick_array_sequence;

pub use collect_fees_quote::{collect_fees_quote, CollectFeesQuote};
pub use collect_rewards_quote::{collect_rewards_quote, CollectRewardsQuote};
pub use decrease_liquidity_quote::*;
pub use dev_fee_swap_quote::*;
pub use fetcher::{AccountFetcher, InMemoryAccountFetcher};
pub use increase_liquidity_quote::*;
pub use swap_manager::{compute_swap, CrossedTick, SwapResult};
pub use swap_quote::*;
pub use tick_array_sequence::{TickArrayIndex, TickArraySequence};
