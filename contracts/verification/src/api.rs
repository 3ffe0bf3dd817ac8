use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::Addr,
    schemars::{self, JsonSchema},
};

pub use crate::state::{Status, VerificationRequest};

/// A risk score in the [0, 100] range, the higher the riskier
pub type RiskScore = u8;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// Unchecked address of the user that scores the applicants
    pub verifier: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Apply for a verification of the sender
    RequestVerification {
        /// A reference to the supporting documents, e.g. a content hash
        documents: String,
    },

    /// Score a pending application, allowed only to the verifier
    Verify {
        applicant: String,
        risk_score: RiskScore,
    },

    /// Replace the verifier, allowed only to the contract owner
    SetVerifier { verifier: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Return a [VerificationResponse]
    Verification { applicant: String },
    /// Return a [RiskNoteResponse]
    RiskNote { applicant: String },
    /// Return a [VerifierResponse]
    Verifier {},
}

pub type VerificationResponse = Option<VerificationRequest>;

/// An opaque attestation of a verified applicant, `None` while not verified
pub type RiskNoteResponse = Option<String>;

pub type VerifierResponse = Addr;
