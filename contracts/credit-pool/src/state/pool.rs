use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::Storage,
    cw_storage_plus::Item,
    schemars::{self, JsonSchema},
};

use crate::{
    api::{Amount, RequestId},
    error::Result,
};

/// The pool-wide ledger
///
/// The contract balance in the stake denomination equals `total_staked` minus
/// `total_locked` plus `undistributed`. The locked amounts are out with
/// the borrowers.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Pool {
    total_staked: Amount,
    total_locked: Amount,
    next_request_id: RequestId,
    /// The accumulated rounding dust of repayment distributions
    undistributed: Amount,
}

impl Pool {
    const STORAGE: Item<'static, Self> = Item::new("pool");

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> Result<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }

    pub const fn total_staked(&self) -> Amount {
        self.total_staked
    }

    pub const fn total_locked(&self) -> Amount {
        self.total_locked
    }

    pub const fn undistributed(&self) -> Amount {
        self.undistributed
    }

    pub fn stake(&mut self, amount: Amount) -> Result<()> {
        self.total_staked = self.total_staked.checked_add(amount)?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<()> {
        self.total_staked = self.total_staked.checked_sub(amount)?;
        Ok(())
    }

    pub fn lock(&mut self, amount: Amount) -> Result<()> {
        self.total_locked = self.total_locked.checked_add(amount)?;
        debug_assert!(self.total_locked <= self.total_staked);
        Ok(())
    }

    /// Remove a locked amount out of the pool
    pub fn write_off(&mut self, amount: Amount) -> Result<()> {
        self.total_locked = self.total_locked.checked_sub(amount)?;
        self.total_staked = self.total_staked.checked_sub(amount)?;
        Ok(())
    }

    pub fn add_undistributed(&mut self, dust: Amount) -> Result<()> {
        self.undistributed = self.undistributed.checked_add(dust)?;
        Ok(())
    }

    /// Reserve the id of the next loan request
    pub fn next_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// The amount the contract is expected to hold
    #[cfg(any(test, feature = "testing"))]
    pub fn balance(&self) -> Result<Amount> {
        self.total_staked
            .checked_sub(self.total_locked)
            .and_then(|free| free.checked_add(self.undistributed))
            .map_err(Into::into)
    }
}
