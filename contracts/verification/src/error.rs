use thiserror::Error;

use sdk::cosmwasm_std::StdError;

use crate::api::RiskScore;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[Verification] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[Verification] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[Verification] The sender is not the verifier")]
    NotVerifier,

    #[error("[Verification] The sender is not the contract owner")]
    NotOwner,

    #[error("[Verification] The risk score {0} is out of the [0, 100] range")]
    InvalidScore(RiskScore),

    #[error("[Verification] A verification has already been requested")]
    AlreadyRequested,

    #[error("[Verification] The documents reference should not be empty")]
    EmptyDocuments,

    #[error("[Verification] No verification request")]
    NoRequest,

    #[error("[Verification] The applicant has already been verified")]
    AlreadyVerified,
}

impl ContractError {
    pub(crate) fn not_verifier(err: access_control::error::Error) -> Self {
        match err {
            access_control::error::Error::Unauthorized {} => Self::NotVerifier,
            access_control::error::Error::Std(err) => Self::Std(err),
        }
    }

    pub(crate) fn not_owner(err: access_control::error::Error) -> Self {
        match err {
            access_control::error::Error::Unauthorized {} => Self::NotOwner,
            access_control::error::Error::Std(err) => Self::Std(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContractError>;
