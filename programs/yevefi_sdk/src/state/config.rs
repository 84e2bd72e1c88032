use anchor_lang::prelude::*;

/// Protocol-wide authorities and defaults a pool is created under.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct YevefisConfig {
    pub fee_authority: Pubkey,
    pub collect_protocol_fees_authority: Pubkey,
    pub reward_emissions_super_authority: Pubkey,

    pub default_protocol_fee_rate: u16,
}

impl YevefisConfig {
    pub const LEN: usize = 8 + 96 + 4;
}

/// Default fee rate for pools of one tick spacing under a config.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct FeeTier {
    pub yevefis_config: Pubkey,
    pub tick_spacing: u16,
    pub default_fee_rate: u16,
}

impl FeeTier {
    pub const LEN: usize = 8 + 32 + 4;
}
