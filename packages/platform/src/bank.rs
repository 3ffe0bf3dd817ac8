use sdk::cosmwasm_std::{Addr, Coin as CwCoin, Uint128};

use crate::{
    batch::Batch,
    error::{Error, Result},
};

/// Schedule transfers of a single denomination out of the contract account
///
/// The transfers are executed after the contract call returns, within the same
/// transaction. Should any of them fail, the whole transaction is reverted.
pub trait BankAccount
where
    Self: Into<Batch>,
{
    fn send(&mut self, amount: Uint128, to: Addr);
}

pub struct BankStub {
    denom: String,
    batch: Batch,
}

impl BankStub {
    fn new(denom: String) -> Self {
        Self {
            denom,
            batch: Batch::default(),
        }
    }
}

pub fn account<D>(denom: D) -> BankStub
where
    D: Into<String>,
{
    BankStub::new(denom.into())
}

impl BankAccount for BankStub {
    fn send(&mut self, amount: Uint128, to: Addr) {
        if !amount.is_zero() {
            self.batch = std::mem::take(&mut self.batch)
                .schedule_transfer(to, CwCoin::new(amount.u128(), self.denom.clone()));
        }
    }
}

impl From<BankStub> for Batch {
    fn from(stub: BankStub) -> Self {
        stub.batch
    }
}

/// Ensure a single coin of the specified denomination is received by a contract and return its amount
pub fn received_one(cw_amount: &[CwCoin], denom: &str) -> Result<Uint128> {
    match cw_amount {
        [] => Err(Error::NoFunds(denom.into())),
        [coin] if coin.denom == denom => Ok(coin.amount),
        _ => Err(Error::UnexpectedFunds(denom.into())),
    }
}
