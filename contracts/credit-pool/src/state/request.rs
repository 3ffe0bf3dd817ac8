use serde::{Deserialize, Serialize};

use finance::duration::Duration;
use sdk::{
    cosmwasm_std::{Addr, Storage, Timestamp},
    cw_storage_plus::Map,
    schemars::{self, JsonSchema},
};

use crate::{
    api::{Amount, LoanApplication, RequestId},
    error::{ContractError, Result},
    state::Config,
};

/// A loan request open for a stake-weighted voting
///
/// The request is executed at most once, on the vote that brings `yes_votes`
/// up to `required_votes`. A request not executed before its voting deadline
/// stays stored and inert.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct LoanRequest {
    id: RequestId,
    borrower: Addr,
    amount: Amount,
    interest: Amount,
    duration: Duration,
    purpose: String,
    proof_refs: Vec<String>,
    risk_note: String,
    created_at: Timestamp,
    voting_deadline: Timestamp,
    yes_votes: Amount,
    required_votes: Amount,
    yes_voter_count: u32,
    executed: bool,
}

impl LoanRequest {
    const STORAGE: Map<'static, RequestId, Self> = Map::new("loan_requests");

    pub fn new(
        id: RequestId,
        borrower: Addr,
        application: LoanApplication,
        now: Timestamp,
        config: &Config,
    ) -> Result<Self> {
        let duration = Duration::try_from_secs(application.duration)
            .map_err(|_| ContractError::InvalidDuration)?;
        let voting_deadline = config.voting_period().after(&now)?;
        // a loan opened by the last vote should still have a representable deadline
        duration
            .after(&voting_deadline)
            .map_err(|_| ContractError::InvalidDuration)?;

        Ok(Self {
            id,
            borrower,
            amount: application.amount,
            interest: application.interest,
            duration,
            purpose: application.purpose,
            proof_refs: application.proof_refs,
            risk_note: application.risk_note,
            created_at: now,
            voting_deadline,
            yes_votes: Amount::zero(),
            required_votes: config.quorum().of(application.amount),
            yes_voter_count: 0,
            executed: false,
        })
    }

    pub fn load(storage: &dyn Storage, id: RequestId) -> Result<Self> {
        Self::may_load(storage, id)
            .and_then(|may_request| may_request.ok_or(ContractError::NoRequest(id)))
    }

    pub fn may_load(storage: &dyn Storage, id: RequestId) -> Result<Option<Self>> {
        Self::STORAGE.may_load(storage, id).map_err(Into::into)
    }

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE
            .save(storage, self.id, self)
            .map_err(Into::into)
    }

    pub const fn id(&self) -> RequestId {
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

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn proof_refs(&self) -> &[String] {
        &self.proof_refs
    }

    pub fn risk_note(&self) -> &str {
        &self.risk_note
    }

    pub const fn voting_deadline(&self) -> Timestamp {
        self.voting_deadline
    }

    pub const fn yes_votes(&self) -> Amount {
        self.yes_votes
    }

    pub const fn required_votes(&self) -> Amount {
        self.required_votes
    }

    pub const fn yes_voter_count(&self) -> u32 {
        self.yes_voter_count
    }

    pub const fn executed(&self) -> bool {
        self.executed
    }

    pub fn quorum_reached(&self) -> bool {
        self.yes_votes >= self.required_votes
    }

    /// Check the request accepts votes at `now`
    pub fn ensure_open(&self, now: &Timestamp) -> Result<()> {
        if self.executed {
            Err(ContractError::AlreadyExecuted)
        } else if now >= &self.voting_deadline {
            Err(ContractError::VotingClosed)
        } else {
            Ok(())
        }
    }

    /// Count a yes vote with the given stake weight
    ///
    /// Return the position of the voter in the ordered set of yes voters.
    pub fn add_yes(&mut self, weight: Amount) -> Result<u32> {
        let position = self.yes_voter_count;
        self.yes_voter_count = position
            .checked_add(1)
            .ok_or(ContractError::TooManyVoters)?;
        self.yes_votes = self.yes_votes.checked_add(weight)?;
        Ok(position)
    }

    pub fn execute(&mut self) -> Result<()> {
        if self.executed {
            Err(ContractError::AlreadyExecuted)
        } else if !self.quorum_reached() {
            Err(ContractError::QuorumNotMet)
        } else {
            self.executed = true;
            Ok(())
        }
    }
}
