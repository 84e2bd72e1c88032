//! Read-only account access for quoting.
//!
//! Quotes only need decoded pool, tick array and position data. Where that data
//! comes from (an RPC client, a cache, a test fixture) sits behind `AccountFetcher`.

use crate::error::SwapError;
use crate::state::{decode_as, Position, Tick, TickArray, Yevefi};
use crate::utils::pda::PdaManager;
use anchor_lang::prelude::*;
use std::collections::HashMap;

pub trait AccountFetcher {
    fn get_pool(&self, address: &Pubkey) -> Result<Option<Yevefi>>;

    fn get_tick_array(&self, address: &Pubkey) -> Result<Option<TickArray>>;

    fn get_position(&self, address: &Pubkey) -> Result<Option<Position>>;

    /// One entry per address, in order. Missing accounts are `None`.
    fn get_tick_arrays(&self, addresses: &[Pubkey]) -> Result<Vec<Option<TickArray>>> {
        addresses
            .iter()
            .map(|address| self.get_tick_array(address))
            .collect()
    }

    /// The pool's ticks at `position`'s lower and upper bounds, as needed by the
    /// fee and reward quotes.
    ///
    /// # Errors
    /// * `InvalidTickSpacing` if `tick_spacing` is zero.
    /// * `TickArrayIndexNotInitialized` if a bound's tick array does not exist.
    fn get_position_ticks(
        &self,
        program_id: &Pubkey,
        position: &Position,
        tick_spacing: u16,
    ) -> Result<(Tick, Tick)> {
        require!(tick_spacing != 0, SwapError::InvalidTickSpacing);

        let fetch_tick = |tick_index: i32| -> Result<Tick> {
            let address = PdaManager::tick_array_from_tick_index(
                program_id,
                &position.yevefi,
                tick_index,
                tick_spacing,
                0,
            )?
            .address;
            let array = self
                .get_tick_array(&address)?
                .ok_or(SwapError::TickArrayIndexNotInitialized)?;
            Ok(*array.get_tick(tick_index, tick_spacing)?)
        };

        Ok((
            fetch_tick(position.tick_lower_index)?,
            fetch_tick(position.tick_upper_index)?,
        ))
    }
}

/// Fetcher over raw account bytes held in memory, as an RPC `getAccountInfo`
/// would return them.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAccountFetcher {
    accounts: HashMap<Pubkey, Vec<u8>>,
}

impl InMemoryAccountFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_raw(&mut self, address: Pubkey, data: Vec<u8>) {
        self.accounts.insert(address, data);
    }

    /// Stores an account in its on-chain encoding.
    pub fn insert<T: AccountSerialize>(&mut self, address: Pubkey, account: &T) -> Result<()> {
        let mut data = Vec::new();
        account.try_serialize(&mut data)?;
        self.insert_raw(address, data);
        Ok(())
    }

    pub fn remove(&mut self, address: &Pubkey) -> Option<Vec<u8>> {
        self.accounts.remove(address)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn decode<T: AccountDeserialize>(&self, kind: &str, address: &Pubkey) -> Result<Option<T>> {
        self.accounts
            .get(address)
            .map(|data| decode_as::<T>(kind, data))
            .transpose()
    }
}

impl AccountFetcher for InMemoryAccountFetcher {
    fn get_pool(&self, address: &Pubkey) -> Result<Option<Yevefi>> {
        self.decode("Yevefi", address)
    }

    fn get_tick_array(&self, address: &Pubkey) -> Result<Option<TickArray>> {
        self.decode("TickArray", address)
    }

    fn get_position(&self, address: &Pubkey) -> Result<Option<Position>> {
        self.decode("Position", address)
    }
}
