use ::credit_pool::{
    api::{
        BallotResponse, BlacklistedResponse, ExecuteMsg, InstantiateMsg, LenderSharesResponse,
        LoanApplication, LoanId, LoanResponse, PoolResponse, QueryMsg, RequestId,
        RequestResponse, StakerResponse,
    },
    contract::{execute, instantiate as instantiate_fn, query as query_fn, sudo},
};
use platform::tests as platform_tests;
use sdk::{
    cosmwasm_std::{Addr, Uint128},
    testing::{self, App, AppResponse, ContractWrapper, Executor},
};
use serde::de::DeserializeOwned;

use super::{cwcoin, ADMIN, DENOM};

pub const MONTH: u64 = 30 * super::DAY;

pub fn instantiate(app: &mut App) -> Addr {
    let code_id = app.store_code(Box::new(
        ContractWrapper::new(execute, instantiate_fn, query_fn).with_sudo(sudo),
    ));
    app.instantiate_contract(
        code_id,
        testing::user(ADMIN),
        &InstantiateMsg {
            stake_denom: DENOM.into(),
            min_stake_time: None,
            voting_period: None,
            quorum: None,
        },
        &[],
        "credit-pool",
        None,
    )
    .expect("the pool should instantiate")
}

pub fn application(amount: u128, interest: u128, risk_note: &str) -> LoanApplication {
    LoanApplication {
        amount: Uint128::new(amount),
        interest: Uint128::new(interest),
        duration: MONTH,
        purpose: "working capital".into(),
        proof_refs: vec!["ipfs://invoice".into()],
        risk_note: risk_note.into(),
    }
}

pub fn stake(app: &mut App, pool: &Addr, staker: &str, amount: u128) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        testing::user(staker),
        pool.clone(),
        &ExecuteMsg::Stake {},
        &[cwcoin(amount)],
    )
}

pub fn withdraw(
    app: &mut App,
    pool: &Addr,
    staker: &str,
    amount: u128,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        testing::user(staker),
        pool.clone(),
        &ExecuteMsg::Withdraw {
            amount: Uint128::new(amount),
        },
        &[],
    )
}

pub fn request_loan(
    app: &mut App,
    pool: &Addr,
    borrower: &str,
    application: LoanApplication,
) -> anyhow::Result<RequestId> {
    app.execute_contract(
        testing::user(borrower),
        pool.clone(),
        &ExecuteMsg::RequestLoan(application),
        &[],
    )
    .map(|resp| {
        platform_tests::parse_resp(&resp.data).expect("the request id should be returned")
    })
}

pub fn vote(
    app: &mut App,
    pool: &Addr,
    voter: &str,
    request_id: RequestId,
    support: bool,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        testing::user(voter),
        pool.clone(),
        &ExecuteMsg::Vote {
            request_id,
            support,
        },
        &[],
    )
}

pub fn repay(
    app: &mut App,
    pool: &Addr,
    payer: &str,
    loan_id: LoanId,
    amount: u128,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        testing::user(payer),
        pool.clone(),
        &ExecuteMsg::RepayLoan { loan_id },
        &[cwcoin(amount)],
    )
}

pub fn mark_defaulted(
    app: &mut App,
    pool: &Addr,
    caller: &str,
    loan_id: LoanId,
) -> anyhow::Result<AppResponse> {
    app.execute_contract(
        testing::user(caller),
        pool.clone(),
        &ExecuteMsg::MarkDefaulted { loan_id },
        &[],
    )
}

pub fn pool(app: &App, pool: &Addr) -> PoolResponse {
    query(app, pool, &QueryMsg::Pool {})
}

pub fn staker(app: &App, pool: &Addr, address: &str) -> StakerResponse {
    query(
        app,
        pool,
        &QueryMsg::Staker {
            address: address.into(),
        },
    )
}

pub fn request(app: &App, pool: &Addr, id: RequestId) -> RequestResponse {
    query(app, pool, &QueryMsg::Request { id })
}

pub fn ballot(app: &App, pool: &Addr, request_id: RequestId, voter: &str) -> BallotResponse {
    query(
        app,
        pool,
        &QueryMsg::Ballot {
            request_id,
            voter: voter.into(),
        },
    )
}

pub fn loan(app: &App, pool: &Addr, id: LoanId) -> LoanResponse {
    query(app, pool, &QueryMsg::Loan { id })
}

pub fn lender_shares(app: &App, pool: &Addr, loan_id: LoanId) -> LenderSharesResponse {
    query(app, pool, &QueryMsg::LenderShares { loan_id })
}

pub fn blacklisted(app: &App, pool: &Addr, address: &str) -> BlacklistedResponse {
    query(
        app,
        pool,
        &QueryMsg::Blacklisted {
            address: address.into(),
        },
    )
}

fn query<Resp>(app: &App, pool: &Addr, msg: &QueryMsg) -> Resp
where
    Resp: DeserializeOwned,
{
    app.wrap()
        .query_wasm_smart(pool, msg)
        .expect("the pool query should succeed")
}
