use crate::quote::collect_fees_quote::{growth_inside, owed_since_checkpoint};
use crate::state::{Position, Tick, Yevefi};
use crate::utils::constants::NUM_REWARDS;
use anchor_lang::prelude::*;
use std::time::{SystemTime, UNIX_EPOCH};

/// Rewards owed per reward slot. Slots the pool never initialized are `None`.
pub type CollectRewardsQuote = [Option<u64>; NUM_REWARDS];

/// Rewards owed to `position` as of `timestamp` (unix seconds).
///
/// The pool's reward growth is first advanced from its last update to
/// `timestamp`. Without a timestamp the system clock is used, floored at the
/// pool's last update.
///
/// # Errors
/// * `InvalidTimestamp` if an explicit `timestamp` is before the pool's last update.
/// * `MultiplicationShiftRightOverflow` if an owed amount does not fit in a u64.
pub fn collect_rewards_quote(
    yevefi: &Yevefi,
    position: &Position,
    tick_lower: &Tick,
    tick_upper: &Tick,
    timestamp: Option<u64>,
) -> Result<CollectRewardsQuote> {
    let timestamp = match timestamp {
        Some(timestamp) => timestamp,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
            .max(yevefi.reward_last_updated_timestamp),
    };
    let reward_infos = yevefi.next_reward_infos(timestamp)?;

    let mut rewards_owed: CollectRewardsQuote = [None; NUM_REWARDS];
    for (i, reward_info) in reward_infos.iter().enumerate() {
        if !reward_info.initialized() {
            continue;
        }

        let reward_growth_inside = growth_inside(
            yevefi.tick_current_index,
            position.tick_lower_index,
            position.tick_upper_index,
            reward_info.growth_global_x64,
            tick_lower
                .initialized
                .then_some(tick_lower.reward_growths_outside[i]),
            tick_upper
                .initialized
                .then_some(tick_upper.reward_growths_outside[i]),
        );
        let position_reward = &position.reward_infos[i];
        let accrued = owed_since_checkpoint(
            position.liquidity,
            reward_growth_inside,
            position_reward.growth_inside_checkpoint,
        )?;
        rewards_owed[i] = Some(position_reward.amount_owed.wrapping_add(accrued));
    }

    Ok(rewards_owed)
}
