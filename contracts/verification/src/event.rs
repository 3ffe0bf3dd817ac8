use platform::batch::{Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Env};

use crate::api::{RiskScore, VerificationRequest};

pub fn emit_request(env: &Env, request: &VerificationRequest) -> Emitter {
    Emitter::of_type("verification-request")
        .emit_tx_info(env)
        .emit_addr("applicant", request.applicant())
        .emit("documents", request.documents())
}

pub fn emit_verify(env: &Env, applicant: &Addr, risk_score: RiskScore, verifier: &Addr) -> Emitter {
    Emitter::of_type("verification-verify")
        .emit_tx_info(env)
        .emit_addr("applicant", applicant)
        .emit_to_string_value("risk-score", risk_score)
        .emit_addr("verifier", verifier)
}

pub fn emit_verifier(env: &Env, verifier: &Addr) -> Emitter {
    Emitter::of_type("verification-verifier")
        .emit_tx_info(env)
        .emit_addr("verifier", verifier)
}
