use serde::{Deserialize, Serialize};

use finance::{duration::Seconds, percent::Percent100};
use sdk::{
    cosmwasm_std::{Addr, Timestamp, Uint128},
    schemars::{self, JsonSchema},
};

pub use crate::state::{Ballot, Config, Loan, LoanRequest, Pool};

pub type Amount = Uint128;
pub type RequestId = u64;
/// A loan is identified by the id of the request it has been opened from
pub type LoanId = RequestId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// The denomination stakes, loans and repayments are made in
    pub stake_denom: String,
    /// The staking period in seconds before a staker becomes eligible to vote
    ///
    /// Defaults to 7 days.
    #[serde(default)]
    pub min_stake_time: Option<Seconds>,
    /// The time in seconds a loan request stays open for voting
    ///
    /// Defaults to 3 days.
    #[serde(default)]
    pub voting_period: Option<Seconds>,
    /// The share of the requested amount the stake-weighted yes votes should reach
    ///
    /// Defaults to 60%.
    #[serde(default)]
    pub quorum: Option<Percent100>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Stake the single coin of the stake denomination attached
    Stake {},

    /// Withdraw the specified amount out of the free stake
    Withdraw { amount: Amount },

    /// Request an uncollateralized loan on behalf of the sender
    ///
    /// The id of the new request is returned as response data.
    RequestLoan(LoanApplication),

    Vote { request_id: RequestId, support: bool },

    /// Repay an active loan with the coin attached
    ///
    /// Anyone may repay a loan. The payment above the due amount is refunded.
    RepayLoan { loan_id: LoanId },

    /// Close an overdue loan and blacklist its borrower
    MarkDefaulted { loan_id: LoanId },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct LoanApplication {
    pub amount: Amount,
    pub interest: Amount,
    /// The loan term in seconds counted from the loan opening
    pub duration: Seconds,
    pub purpose: String,
    #[serde(default)]
    pub proof_refs: Vec<String>,
    /// An opaque attestation issued by the verification oracle
    pub risk_note: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum SudoMsg {
    UpdateConfig {
        #[serde(default)]
        min_stake_time: Option<Seconds>,
        #[serde(default)]
        voting_period: Option<Seconds>,
        #[serde(default)]
        quorum: Option<Percent100>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Return a [ConfigResponse]
    Config {},
    /// Return a [PoolResponse]
    Pool {},
    /// Return a [StakerResponse]
    Staker { address: String },
    /// Return a [RequestResponse]
    Request { id: RequestId },
    /// Return a [BallotResponse]
    Ballot { request_id: RequestId, voter: String },
    /// Return a [LoanResponse]
    Loan { id: LoanId },
    /// Return a [LenderSharesResponse]
    LenderShares { loan_id: LoanId },
    /// Return a [BlacklistedResponse]
    Blacklisted { address: String },
}

pub type ConfigResponse = Config;

pub type PoolResponse = Pool;

pub type RequestResponse = Option<LoanRequest>;

pub type BallotResponse = Option<Ballot>;

pub type LoanResponse = Option<Loan>;

pub type LenderSharesResponse = Vec<LenderShareResponse>;

/// The time the address has been blacklisted at, if ever
pub type BlacklistedResponse = Option<Timestamp>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct StakerResponse {
    pub staked: Amount,
    pub locked: Amount,
    pub free: Amount,
    pub last_stake_time: Timestamp,
    /// Whether the staker may vote on loan requests at the current block time
    pub eligible: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct LenderShareResponse {
    pub lender: Addr,
    /// The lender stake at the time the quorum has been reached
    pub weight: Amount,
    /// The part of the principal locked from the lender stake
    pub locked: Amount,
}
