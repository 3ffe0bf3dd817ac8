use sdk::{
    cosmwasm_std::Addr,
    testing::{self, App, AppResponse, ContractWrapper, Executor},
};
use ::verification::{
    api::{
        ExecuteMsg, InstantiateMsg, QueryMsg, RiskNoteResponse, RiskScore, VerificationResponse,
    },
    contract::{execute, instantiate as instantiate_fn, query},
};

use super::{ADMIN, VERIFIER};

pub fn instantiate(app: &mut App) -> Addr {
    let code_id = app.store_code(Box::new(ContractWrapper::new(
        execute,
        instantiate_fn,
        query,
    )));
    app.instantiate_contract(
        code_id,
        testing::user(ADMIN),
        &InstantiateMsg {
            verifier: VERIFIER.into(),
        },
        &[],
        "verification",
        None,
    )
    .expect("the verification contract should instantiate")
}

pub fn request_verification(
    app: &mut App,
    verification: &Addr,
    applicant: &str,
    documents: &str,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        testing::user(applicant),
        verification.clone(),
        &ExecuteMsg::RequestVerification {
            documents: documents.into(),
        },
        &[],
    )
}

pub fn verify(
    app: &mut App,
    verification: &Addr,
    sender: &str,
    applicant: &str,
    risk_score: RiskScore,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        testing::user(sender),
        verification.clone(),
        &ExecuteMsg::Verify {
            applicant: applicant.into(),
            risk_score,
        },
        &[],
    )
}

pub fn verification(app: &App, verification: &Addr, applicant: &str) -> VerificationResponse {
    app.wrap()
        .query_wasm_smart(
            verification,
            &QueryMsg::Verification {
                applicant: applicant.into(),
            },
        )
        .expect("the verification query should succeed")
}

pub fn risk_note(app: &App, verification: &Addr, applicant: &str) -> RiskNoteResponse {
    app.wrap()
        .query_wasm_smart(
            verification,
            &QueryMsg::RiskNote {
                applicant: applicant.into(),
            },
        )
        .expect("the risk note query should succeed")
}
