use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::{Addr, Storage, Timestamp},
    cw_storage_plus::Map,
    schemars::{self, JsonSchema},
};

use crate::{
    api::RiskScore,
    error::{ContractError, Result},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    Verified {
        risk_score: RiskScore,
        verified_at: Timestamp,
        verifier: Addr,
    },
}

/// An application for a verification, at most one per applicant
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct VerificationRequest {
    applicant: Addr,
    documents: String,
    requested_at: Timestamp,
    status: Status,
}

impl VerificationRequest {
    const STORAGE: Map<'static, &'static Addr, Self> = Map::new("verification_requests");

    const MAX_SCORE: RiskScore = 100;

    pub fn new(applicant: Addr, documents: String, requested_at: Timestamp) -> Result<Self> {
        if documents.trim().is_empty() {
            Err(ContractError::EmptyDocuments)
        } else {
            Ok(Self {
                applicant,
                documents,
                requested_at,
                status: Status::Pending,
            })
        }
    }

    pub fn load(storage: &dyn Storage, applicant: &Addr) -> Result<Self> {
        Self::may_load(storage, applicant)
            .and_then(|may_request| may_request.ok_or(ContractError::NoRequest))
    }

    pub fn may_load(storage: &dyn Storage, applicant: &Addr) -> Result<Option<Self>> {
        Self::STORAGE
            .may_load(storage, applicant)
            .map_err(Into::into)
    }

    pub fn ensure_not_requested(storage: &dyn Storage, applicant: &Addr) -> Result<()> {
        if Self::STORAGE.has(storage, applicant) {
            Err(ContractError::AlreadyRequested)
        } else {
            Ok(())
        }
    }

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE
            .save(storage, &self.applicant, self)
            .map_err(Into::into)
    }

    pub const fn applicant(&self) -> &Addr {
        &self.applicant
    }

    pub fn documents(&self) -> &str {
        &self.documents
    }

    pub const fn requested_at(&self) -> Timestamp {
        self.requested_at
    }

    pub const fn status(&self) -> &Status {
        &self.status
    }

    pub fn validate_score(risk_score: RiskScore) -> Result<RiskScore> {
        if risk_score > Self::MAX_SCORE {
            Err(ContractError::InvalidScore(risk_score))
        } else {
            Ok(risk_score)
        }
    }

    pub fn verify(&mut self, risk_score: RiskScore, verifier: Addr, now: Timestamp) -> Result<()> {
        Self::validate_score(risk_score).and_then(|risk_score| {
            if matches!(self.status, Status::Verified { .. }) {
                Err(ContractError::AlreadyVerified)
            } else {
                self.status = Status::Verified {
                    risk_score,
                    verified_at: now,
                    verifier,
                };
                Ok(())
            }
        })
    }

    /// The attestation handed over to the credit pool along with a loan request
    ///
    /// It is opaque to its consumers.
    pub fn risk_note(&self) -> Option<String> {
        match &self.status {
            Status::Pending => None,
            Status::Verified {
                risk_score,
                verified_at,
                ..
            } => Some(format!(
                "{}:{}:{}",
                self.applicant,
                risk_score,
                verified_at.seconds()
            )),
        }
    }
}
