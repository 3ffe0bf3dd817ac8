use sdk::{
    cosmwasm_std::{Addr, Storage, Timestamp},
    cw_storage_plus::Map,
};

use crate::error::{ContractError, Result};

/// Borrowers who have defaulted, with the time of listing
///
/// There is no way out of the list.
pub struct Blacklist;

impl Blacklist {
    const STORAGE: Map<'static, &'static Addr, Timestamp> = Map::new("blacklist");

    pub fn add(storage: &mut dyn Storage, borrower: &Addr, now: Timestamp) -> Result<()> {
        if Self::STORAGE.has(storage, borrower) {
            Ok(())
        } else {
            Self::STORAGE
                .save(storage, borrower, &now)
                .map_err(Into::into)
        }
    }

    pub fn listed_since(storage: &dyn Storage, addr: &Addr) -> Result<Option<Timestamp>> {
        Self::STORAGE.may_load(storage, addr).map_err(Into::into)
    }

    pub fn ensure_not_listed(storage: &dyn Storage, addr: &Addr) -> Result<()> {
        if Self::STORAGE.has(storage, addr) {
            Err(ContractError::Blacklisted)
        } else {
            Ok(())
        }
    }
}
