use std::ops::DerefMut;

use platform::{error as platform_error, message::Response as PlatformResponse, response};
use sdk::{
    cosmwasm_ext::Response as CwResponse,
    cosmwasm_std::{
        entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Storage,
    },
};

use crate::{
    api::{
        ExecuteMsg, InstantiateMsg, QueryMsg, RiskNoteResponse, RiskScore, VerificationRequest,
        VerificationResponse,
    },
    error::{ContractError, Result},
    event, permissions,
};

#[entry_point]
pub fn instantiate(
    mut deps: DepsMut<'_>,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<CwResponse> {
    deps.api
        .addr_validate(&msg.verifier)
        .map_err(ContractError::from)
        .and_then(|verifier| {
            access_control::contract_owner(deps.storage.deref_mut())
                .grant_to(&info.sender)
                .map_err(ContractError::not_owner)?;
            permissions::verifier(deps.storage.deref_mut())
                .grant_to(&verifier)
                .map_err(ContractError::not_verifier)
        })
        .map(|()| response::empty_response())
        .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn execute(
    mut deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<CwResponse> {
    match msg {
        ExecuteMsg::RequestVerification { documents } => {
            try_request_verification(deps.storage.deref_mut(), &env, info.sender, documents)
        }
        ExecuteMsg::Verify {
            applicant,
            risk_score,
        } => deps
            .api
            .addr_validate(&applicant)
            .map_err(ContractError::from)
            .and_then(|applicant| {
                try_verify(
                    deps.storage.deref_mut(),
                    &env,
                    info.sender,
                    applicant,
                    risk_score,
                )
            }),
        ExecuteMsg::SetVerifier { verifier } => deps
            .api
            .addr_validate(&verifier)
            .map_err(ContractError::from)
            .and_then(|verifier| {
                try_set_verifier(deps.storage.deref_mut(), &env, &info.sender, verifier)
            }),
    }
    .map(response::response_only_messages)
    .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn query(deps: Deps<'_>, _env: Env, msg: QueryMsg) -> Result<Binary> {
    match msg {
        QueryMsg::Verification { applicant } => deps
            .api
            .addr_validate(&applicant)
            .map_err(ContractError::from)
            .and_then(|applicant| VerificationRequest::may_load(deps.storage, &applicant))
            .and_then(|resp: VerificationResponse| to_json_binary(&resp).map_err(Into::into)),
        QueryMsg::RiskNote { applicant } => deps
            .api
            .addr_validate(&applicant)
            .map_err(ContractError::from)
            .and_then(|applicant| VerificationRequest::may_load(deps.storage, &applicant))
            .map(|may_request| -> RiskNoteResponse {
                may_request.and_then(|request| request.risk_note())
            })
            .and_then(|resp| to_json_binary(&resp).map_err(Into::into)),
        QueryMsg::Verifier {} => permissions::verifier(deps.storage)
            .granted_to()
            .map_err(ContractError::not_verifier)
            .and_then(|verifier| to_json_binary(&verifier).map_err(Into::into)),
    }
    .inspect_err(platform_error::log(deps.api))
}

fn try_request_verification(
    storage: &mut dyn Storage,
    env: &Env,
    applicant: Addr,
    documents: String,
) -> Result<PlatformResponse> {
    VerificationRequest::ensure_not_requested(storage, &applicant)
        .and_then(|()| VerificationRequest::new(applicant, documents, env.block.time))
        .and_then(|request| {
            request
                .store(storage)
                .map(|()| event::emit_request(env, &request).into())
        })
}

fn try_verify(
    storage: &mut dyn Storage,
    env: &Env,
    verifier: Addr,
    applicant: Addr,
    risk_score: RiskScore,
) -> Result<PlatformResponse> {
    permissions::verifier(&*storage)
        .check(&verifier)
        .map_err(ContractError::not_verifier)?;
    let risk_score = VerificationRequest::validate_score(risk_score)?;
    let mut request = VerificationRequest::load(storage, &applicant)?;
    request.verify(risk_score, verifier.clone(), env.block.time)?;
    request
        .store(storage)
        .map(|()| event::emit_verify(env, &applicant, risk_score, &verifier).into())
}

fn try_set_verifier(
    storage: &mut dyn Storage,
    env: &Env,
    sender: &Addr,
    verifier: Addr,
) -> Result<PlatformResponse> {
    access_control::contract_owner(&*storage)
        .check(sender)
        .map_err(ContractError::not_owner)?;
    permissions::verifier(storage)
        .grant_to(&verifier)
        .map_err(ContractError::not_verifier)
        .map(|()| event::emit_verifier(env, &verifier).into())
}
