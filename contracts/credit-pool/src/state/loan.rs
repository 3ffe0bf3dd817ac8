use serde::{Deserialize, Serialize};

use finance::duration::Duration;
use sdk::{
    cosmwasm_std::{Addr, Storage, Timestamp},
    cw_storage_plus::Map,
    schemars::{self, JsonSchema},
};

use crate::{
    api::{Amount, LoanId},
    error::{ContractError, Result},
    state::LoanRequest,
};

/// A loan opened out of an executed request
///
/// A loan starts active and is closed exactly once, either repaid or defaulted.
/// Closed loans are kept for audit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Loan {
    id: LoanId,
    borrower: Addr,
    amount: Amount,
    interest: Amount,
    duration: Duration,
    opened_at: Timestamp,
    deadline: Timestamp,
    closed_at: Option<Timestamp>,
    active: bool,
    repaid: bool,
    /// The sum of the lender shares
    total_yes_votes: Amount,
}

impl Loan {
    const STORAGE: Map<'static, LoanId, Self> = Map::new("loans");

    pub fn open(request: &LoanRequest, total_yes_votes: Amount, now: Timestamp) -> Result<Self> {
        debug_assert!(request.executed());

        let deadline = request.duration().after(&now)?;
        Ok(Self {
            id: request.id(),
            borrower: request.borrower().clone(),
            amount: request.amount(),
            interest: request.interest(),
            duration: request.duration(),
            opened_at: now,
            deadline,
            closed_at: None,
            active: true,
            repaid: false,
            total_yes_votes,
        })
    }

    pub fn load(storage: &dyn Storage, id: LoanId) -> Result<Self> {
        Self::may_load(storage, id)
            .and_then(|may_loan| may_loan.ok_or(ContractError::NoLoan(id)))
    }

    pub fn may_load(storage: &dyn Storage, id: LoanId) -> Result<Option<Self>> {
        Self::STORAGE.may_load(storage, id).map_err(Into::into)
    }

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE
            .save(storage, self.id, self)
            .map_err(Into::into)
    }

    pub const fn id(&self) -> LoanId {
        self.id
    }

    pub const fn borrower(&self) -> &Addr {
        &self.borrower
    }

    pub const fn amount(&self) -> Amount {
        self.amount
    }

    pub const fn interest(&self) -> Amount {
        self.interest
    }

    pub const fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }

    pub const fn closed_at(&self) -> Option<Timestamp> {
        self.closed_at
    }

    pub const fn active(&self) -> bool {
        self.active
    }

    pub const fn repaid(&self) -> bool {
        self.repaid
    }

    pub const fn defaulted(&self) -> bool {
        !self.active && !self.repaid
    }

    pub const fn total_yes_votes(&self) -> Amount {
        self.total_yes_votes
    }

    /// The principal plus the interest
    pub fn due(&self) -> Result<Amount> {
        self.amount.checked_add(self.interest).map_err(Into::into)
    }

    pub fn ensure_active(&self) -> Result<()> {
        if self.active {
            Ok(())
        } else {
            Err(ContractError::LoanNotActive)
        }
    }

    pub fn repay(&mut self, now: Timestamp) -> Result<()> {
        self.ensure_active().map(|()| {
            self.repaid = true;
            self.close(now);
        })
    }

    /// Close an active loan past its deadline as defaulted
    pub fn mark_defaulted(&mut self, now: Timestamp) -> Result<()> {
        self.ensure_active().and_then(|()| {
            if now <= self.deadline {
                Err(ContractError::NotYetExpired)
            } else {
                self.close(now);
                Ok(())
            }
        })
    }

    fn close(&mut self, now: Timestamp) {
        self.active = false;
        self.closed_at = Some(now);
    }
}
