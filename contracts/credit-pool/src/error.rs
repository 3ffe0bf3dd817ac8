use thiserror::Error;

use sdk::cosmwasm_std::{OverflowError, StdError};

use crate::api::{Amount, LoanId, RequestId};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[CreditPool] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[CreditPool] {0}")]
    Overflow(#[from] OverflowError),

    #[error("[CreditPool] {0}")]
    Finance(#[from] finance::error::Error),

    #[error("[CreditPool] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[CreditPool] The stake denomination should not be empty")]
    EmptyStakeDenom,

    #[error("[CreditPool] The voting period should not be zero")]
    ZeroVotingPeriod,

    #[error("[CreditPool] Zero stake amount")]
    ZeroStake,

    #[error("[CreditPool] Zero withdraw amount")]
    ZeroWithdraw,

    #[error("[CreditPool] Insufficient free stake")]
    InsufficientFreeStake,

    #[error("[CreditPool] The borrower is blacklisted")]
    Blacklisted,

    #[error("[CreditPool] The requested amount {requested} exceeds the pool total stake {available}")]
    AmountExceedsPool { requested: Amount, available: Amount },

    #[error("[CreditPool] Zero loan amount")]
    ZeroLoanAmount,

    #[error("[CreditPool] The loan duration should be positive and end within the timestamp range")]
    InvalidDuration,

    #[error("[CreditPool] The loan request {0} does not exist")]
    NoRequest(RequestId),

    #[error("[CreditPool] The loan request has already been executed")]
    AlreadyExecuted,

    #[error("[CreditPool] The voting on the loan request is closed")]
    VotingClosed,

    #[error("[CreditPool] The loan request has reached the maximum number of yes voters")]
    TooManyVoters,

    #[error("[CreditPool] The voter has already voted on this request")]
    DuplicateVote,

    #[error("[CreditPool] The voter is not eligible to vote")]
    NotEligible,

    #[error("[CreditPool] The quorum has not been met")]
    QuorumNotMet,

    #[error("[CreditPool] The loan {0} does not exist")]
    NoLoan(LoanId),

    #[error("[CreditPool] The loan is not active")]
    LoanNotActive,

    #[error("[CreditPool] Insufficient payment {paid}, due {due}")]
    InsufficientPayment { paid: Amount, due: Amount },

    #[error("[CreditPool] The loan has not expired yet")]
    NotYetExpired,
}

pub type Result<T> = std::result::Result<T, ContractError>;
