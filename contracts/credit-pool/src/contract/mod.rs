use platform::{error as platform_error, response};
use sdk::{
    cosmwasm_ext::Response as CwResponse,
    cosmwasm_std::{
        entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Storage,
    },
};

use crate::{
    api::{
        BallotResponse, BlacklistedResponse, ExecuteMsg, InstantiateMsg, LenderSharesResponse,
        LoanId, LoanResponse, QueryMsg, RequestResponse, StakerResponse, SudoMsg,
    },
    error::{ContractError, Result},
    state::{Ballot, Blacklist, Config, LenderShare, Loan, LoanRequest, Pool, Staker},
};

mod loans;
mod stake;
mod voting;

#[entry_point]
pub fn instantiate(
    deps: DepsMut<'_>,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<CwResponse> {
    Config::try_from(msg)
        .and_then(|config| config.store(deps.storage))
        .and_then(|()| Pool::default().store(deps.storage))
        .map(|()| response::empty_response())
        .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn execute(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<CwResponse> {
    match msg {
        ExecuteMsg::Stake {} => stake::try_stake(deps.storage, &env, info)
            .map(response::response_only_messages),
        ExecuteMsg::Withdraw { amount } => stake::try_withdraw(deps.storage, &env, info, amount)
            .map(response::response_only_messages),
        ExecuteMsg::RequestLoan(application) => {
            voting::try_request_loan(deps.storage, &env, info.sender, application).and_then(
                |(request_id, message_response)| {
                    response::response_with_messages::<_, _, ContractError>(
                        request_id,
                        message_response,
                    )
                },
            )
        }
        ExecuteMsg::Vote {
            request_id,
            support,
        } => voting::try_vote(deps.storage, &env, info.sender, request_id, support)
            .map(response::response_only_messages),
        ExecuteMsg::RepayLoan { loan_id } => loans::try_repay(deps.storage, &env, info, loan_id)
            .map(response::response_only_messages),
        ExecuteMsg::MarkDefaulted { loan_id } => {
            loans::try_mark_defaulted(deps.storage, &env, loan_id)
                .map(response::response_only_messages)
        }
    }
    .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn sudo(deps: DepsMut<'_>, _env: Env, msg: SudoMsg) -> Result<CwResponse> {
    match msg {
        SudoMsg::UpdateConfig {
            min_stake_time,
            voting_period,
            quorum,
        } => Config::load(deps.storage)
            .and_then(|config| config.update(min_stake_time, voting_period, quorum))
            .and_then(|config| config.store(deps.storage)),
    }
    .map(|()| response::empty_response())
    .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn query(deps: Deps<'_>, env: Env, msg: QueryMsg) -> Result<Binary> {
    match msg {
        QueryMsg::Config {} => Config::load(deps.storage).and_then(|config| to_binary(&config)),
        QueryMsg::Pool {} => Pool::load(deps.storage).and_then(|pool| to_binary(&pool)),
        QueryMsg::Staker { address } => deps
            .api
            .addr_validate(&address)
            .map_err(ContractError::from)
            .and_then(|addr| Staker::load_or_default(deps.storage, &addr))
            .and_then(|staker| {
                Config::load(deps.storage).map(|config| StakerResponse {
                    staked: staker.staked(),
                    locked: staker.locked(),
                    free: staker.free(),
                    last_stake_time: staker.last_stake_time(),
                    eligible: staker.eligible(&env.block.time, config.min_stake_time()),
                })
            })
            .and_then(|resp| to_binary(&resp)),
        QueryMsg::Request { id } => LoanRequest::may_load(deps.storage, id)
            .and_then(|resp: RequestResponse| to_binary(&resp)),
        QueryMsg::Ballot { request_id, voter } => deps
            .api
            .addr_validate(&voter)
            .map_err(ContractError::from)
            .and_then(|voter| Ballot::may_load(deps.storage, request_id, &voter))
            .and_then(|resp: BallotResponse| to_binary(&resp)),
        QueryMsg::Loan { id } => {
            Loan::may_load(deps.storage, id).and_then(|resp: LoanResponse| to_binary(&resp))
        }
        QueryMsg::LenderShares { loan_id } => {
            lender_shares(deps.storage, loan_id).and_then(|resp| to_binary(&resp))
        }
        QueryMsg::Blacklisted { address } => deps
            .api
            .addr_validate(&address)
            .map_err(ContractError::from)
            .and_then(|addr| Blacklist::listed_since(deps.storage, &addr))
            .and_then(|resp: BlacklistedResponse| to_binary(&resp)),
    }
    .inspect_err(platform_error::log(deps.api))
}

fn lender_shares(storage: &dyn Storage, loan_id: LoanId) -> Result<LenderSharesResponse> {
    LenderShare::iter(storage, loan_id)
        .map(|record| record.map(|(lender, share)| share.into_response(lender)))
        .collect()
}

fn to_binary<T>(resp: &T) -> Result<Binary>
where
    T: serde::Serialize,
{
    to_json_binary(resp).map_err(Into::into)
}
