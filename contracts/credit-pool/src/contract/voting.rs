use platform::message::Response as PlatformResponse;
use sdk::cosmwasm_std::{Addr, Env, Storage};

use crate::{
    api::{Amount, LoanApplication, RequestId},
    contract::loans,
    error::{ContractError, Result},
    event,
    state::{Ballot, Blacklist, Config, LoanRequest, Pool, Staker, YesVoters},
};

pub(super) fn try_request_loan(
    storage: &mut dyn Storage,
    env: &Env,
    borrower: Addr,
    application: LoanApplication,
) -> Result<(RequestId, PlatformResponse)> {
    Blacklist::ensure_not_listed(storage, &borrower)?;

    let mut pool = Pool::load(storage)?;
    if application.amount > pool.total_staked() {
        return Err(ContractError::AmountExceedsPool {
            requested: application.amount,
            available: pool.total_staked(),
        });
    }
    if application.amount.is_zero() {
        return Err(ContractError::ZeroLoanAmount);
    }
    if application.duration == 0 {
        return Err(ContractError::InvalidDuration);
    }

    let config = Config::load(storage)?;
    let request = LoanRequest::new(
        pool.next_request_id(),
        borrower,
        application,
        env.block.time,
        &config,
    )?;
    request.store(storage)?;
    pool.store(storage)?;

    Ok((
        request.id(),
        event::emit_loan_request(env, &request).into(),
    ))
}

/// Record a vote and open the loan on the vote that reaches the quorum
pub(super) fn try_vote(
    storage: &mut dyn Storage,
    env: &Env,
    voter: Addr,
    request_id: RequestId,
    support: bool,
) -> Result<PlatformResponse> {
    let now = env.block.time;

    let mut request = LoanRequest::load(storage, request_id)?;
    request.ensure_open(&now)?;
    if Ballot::exists(storage, request_id, &voter) {
        return Err(ContractError::DuplicateVote);
    }

    let config = Config::load(storage)?;
    let staker = Staker::may_load(storage, &voter)?
        .filter(|staker| staker.eligible(&now, config.min_stake_time()))
        .ok_or(ContractError::NotEligible)?;

    let weight = if support {
        staker.staked()
    } else {
        Amount::zero()
    };
    let ballot = if support {
        Ballot::yes(weight, now)
    } else {
        Ballot::no(now)
    };
    ballot.store(storage, request_id, &voter)?;

    if support {
        let position = request.add_yes(weight)?;
        YesVoters::append(storage, request_id, position, &voter)?;
    }

    let vote_response = PlatformResponse::from(event::emit_vote(
        env,
        request_id,
        &voter,
        support,
        weight,
        request.yes_votes(),
    ));
    let response = if support && request.quorum_reached() {
        loans::open(storage, env, &config, &mut request)
            .map(|loan_response| vote_response.merge_with(loan_response))?
    } else {
        vote_response
    };
    request.store(storage)?;

    Ok(response)
}
