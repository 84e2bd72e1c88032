use crate::state::Yevefi;
use anchor_lang::prelude::*;

/// Which side of the pair a mint is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenType {
    TokenA,
    TokenB,
}

pub struct PoolUtils;

impl PoolUtils {
    /// `None` when the mint belongs to neither side of the pool.
    pub fn get_token_type(pool: &Yevefi, mint: &Pubkey) -> Option<TokenType> {
        if pool.token_mint_a == *mint {
            Some(TokenType::TokenA)
        } else if pool.token_mint_b == *mint {
            Some(TokenType::TokenB)
        } else {
            None
        }
    }

    /// Mint of the token the pool pays out for the given direction.
    pub fn get_output_mint(pool: &Yevefi, a_to_b: bool) -> Pubkey {
        if a_to_b {
            pool.token_mint_b
        } else {
            pool.token_mint_a
        }
    }
}
