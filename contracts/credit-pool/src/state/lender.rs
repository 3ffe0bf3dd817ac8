use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::{Addr, Order, Storage},
    cw_storage_plus::Map,
};

use crate::{
    api::{Amount, LenderShareResponse, LoanId},
    error::Result,
};

/// The share of a lender in a loan, snapshotted at the time the quorum is reached
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenderShare {
    /// The lender stake at the time of the loan opening
    weight: Amount,
    /// The part of the principal locked from the lender stake
    locked: Amount,
}

impl LenderShare {
    const STORAGE: Map<'static, (LoanId, &'static Addr), Self> = Map::new("lender_shares");

    pub const fn new(weight: Amount, locked: Amount) -> Self {
        Self { weight, locked }
    }

    pub fn store(&self, storage: &mut dyn Storage, loan: LoanId, lender: &Addr) -> Result<()> {
        Self::STORAGE
            .save(storage, (loan, lender), self)
            .map_err(Into::into)
    }

    pub fn iter(
        storage: &dyn Storage,
        loan: LoanId,
    ) -> impl Iterator<Item = Result<(Addr, Self)>> + '_ {
        Self::STORAGE
            .prefix(loan)
            .range(storage, None, None, Order::Ascending)
            .map(|record| record.map_err(Into::into))
    }

    pub const fn weight(&self) -> Amount {
        self.weight
    }

    pub const fn locked(&self) -> Amount {
        self.locked
    }

    pub fn into_response(self, lender: Addr) -> LenderShareResponse {
        LenderShareResponse {
            lender,
            weight: self.weight,
            locked: self.locked,
        }
    }
}
