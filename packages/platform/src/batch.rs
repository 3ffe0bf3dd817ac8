use std::vec;

use sdk::{
    cosmwasm_ext::SubMsg,
    cosmwasm_std::{Addr, BankMsg, Coin as CwCoin},
};

pub use crate::emit::{Emit, Emitter};

/// Bank transfers to be dispatched, in order, after a contract call
///
/// None of them expects a reply, so a failing transfer aborts the transaction.
#[must_use]
#[derive(Default)]
#[cfg_attr(
    any(debug_assertions, test, feature = "testing"),
    derive(Debug, PartialEq, Eq)
)]
pub struct Batch {
    transfers: Vec<SubMsg>,
}

impl Batch {
    pub fn schedule_transfer(mut self, to: Addr, amount: CwCoin) -> Self {
        debug_assert!(!amount.amount.is_zero());

        self.transfers.push(SubMsg::new(BankMsg::Send {
            to_address: to.into_string(),
            amount: vec![amount],
        }));
        self
    }

    pub fn merge(mut self, mut other: Batch) -> Self {
        self.transfers.append(&mut other.transfers);
        self
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}

impl IntoIterator for Batch {
    type Item = SubMsg;

    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.transfers.into_iter()
    }
}
