use serde::{Deserialize, Serialize};

use finance::duration::Duration;
use sdk::{
    cosmwasm_std::{Addr, Storage, Timestamp},
    cw_storage_plus::Map,
};

use crate::{
    api::Amount,
    error::{ContractError, Result},
};

/// A staker account
///
/// Invariant: `locked <= staked`. Accounts are never removed, a zero balance is valid.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Staker {
    staked: Amount,
    locked: Amount,
    last_stake_time: Timestamp,
}

impl Staker {
    const STORAGE: Map<'static, &'static Addr, Self> = Map::new("stakers");

    pub fn load(storage: &dyn Storage, addr: &Addr) -> Result<Self> {
        Self::STORAGE.load(storage, addr).map_err(Into::into)
    }

    pub fn may_load(storage: &dyn Storage, addr: &Addr) -> Result<Option<Self>> {
        Self::STORAGE.may_load(storage, addr).map_err(Into::into)
    }

    pub fn load_or_default(storage: &dyn Storage, addr: &Addr) -> Result<Self> {
        Self::may_load(storage, addr).map(Option::unwrap_or_default)
    }

    pub fn store(&self, storage: &mut dyn Storage, addr: &Addr) -> Result<()> {
        Self::STORAGE.save(storage, addr, self).map_err(Into::into)
    }

    pub const fn staked(&self) -> Amount {
        self.staked
    }

    pub const fn locked(&self) -> Amount {
        self.locked
    }

    pub const fn last_stake_time(&self) -> Timestamp {
        self.last_stake_time
    }

    pub fn free(&self) -> Amount {
        self.staked - self.locked
    }

    /// Top up the stake restarting the waiting period
    pub fn stake(&mut self, amount: Amount, now: Timestamp) -> Result<()> {
        debug_assert!(!amount.is_zero());

        self.staked = self.staked.checked_add(amount)?;
        self.last_stake_time = now;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<()> {
        self.ensure_free(amount)
            .map(|()| self.staked -= amount)
    }

    pub fn lock(&mut self, amount: Amount) -> Result<()> {
        self.ensure_free(amount)
            .map(|()| self.locked += amount)
    }

    pub fn release(&mut self, amount: Amount) -> Result<()> {
        self.locked = self.locked.checked_sub(amount)?;
        Ok(())
    }

    /// Release a locked amount and take it out of the stake
    pub fn write_off(&mut self, amount: Amount) -> Result<()> {
        self.release(amount)
            .and_then(|()| self.staked.checked_sub(amount).map_err(Into::into))
            .map(|staked| self.staked = staked)
    }

    pub fn eligible(&self, now: &Timestamp, min_stake_time: Duration) -> bool {
        !self.staked.is_zero()
            && min_stake_time
                .after(&self.last_stake_time)
                .map_or(false, |eligible_since| &eligible_since <= now)
    }

    fn ensure_free(&self, amount: Amount) -> Result<()> {
        if amount <= self.free() {
            Ok(())
        } else {
            Err(ContractError::InsufficientFreeStake)
        }
    }
}
