use finance::fraction::SimpleFraction;
use platform::{
    bank::{self, BankAccount},
    message::Response as PlatformResponse,
};
use sdk::cosmwasm_std::{Addr, Env, MessageInfo, Storage};

use crate::{
    api::{Amount, LoanId},
    error::{ContractError, Result},
    event::{self, Repayment},
    state::{Blacklist, Config, LenderShare, Loan, LoanRequest, Pool, Staker, YesVoters},
};

/// Turn a request that has reached the quorum into an active loan
///
/// The lender shares are the stakes the yes voters hold at the moment. The principal
/// is locked from the free lender stakes pro rata to them and disbursed to the borrower.
/// Fail if the lenders do not have enough free stake in total.
pub(super) fn open(
    storage: &mut dyn Storage,
    env: &Env,
    config: &Config,
    request: &mut LoanRequest,
) -> Result<PlatformResponse> {
    request.execute()?;

    let lenders = YesVoters::iter(storage, request.id())
        .map(|voter| {
            voter.and_then(|voter| Staker::load(storage, &voter).map(|staker| (voter, staker)))
        })
        .collect::<Result<Vec<_>>>()?;
    let total_yes_votes = sum(lenders.iter().map(|(_, staker)| staker.staked()))?;
    let free: Vec<Amount> = lenders.iter().map(|(_, staker)| staker.free()).collect();
    let total_free = sum(free.iter().copied())?;
    if total_free < request.amount() {
        return Err(ContractError::InsufficientFreeStake);
    }
    let contributions = split(request.amount(), &free, total_free)?;

    let lenders_count = lenders.len();
    for ((lender, mut staker), locked) in lenders.into_iter().zip(contributions) {
        LenderShare::new(staker.staked(), locked).store(storage, request.id(), &lender)?;
        staker.lock(locked)?;
        staker.store(storage, &lender)?;
    }

    let mut pool = Pool::load(storage)?;
    pool.lock(request.amount())?;
    pool.store(storage)?;

    let loan = Loan::open(request, total_yes_votes, env.block.time)?;
    loan.store(storage)?;

    let mut bank = bank::account(config.stake_denom());
    bank.send(loan.amount(), loan.borrower().clone());

    Ok(PlatformResponse::messages_with_events(
        bank.into(),
        event::emit_loan_open(env, &loan, lenders_count),
    ))
}

/// Close an active loan distributing the due amount to its lenders
///
/// Each lender receives the floor of its pro rata part. The rounding dust stays with
/// the pool, the excess payment is refunded to the payer.
pub(super) fn try_repay(
    storage: &mut dyn Storage,
    env: &Env,
    info: MessageInfo,
    loan_id: LoanId,
) -> Result<PlatformResponse> {
    let mut loan = Loan::load(storage, loan_id)?;
    loan.ensure_active()?;

    let config = Config::load(storage)?;
    let paid = bank::received_one(&info.funds, config.stake_denom())?;
    let due = loan.due()?;
    if paid < due {
        return Err(ContractError::InsufficientPayment { paid, due });
    }

    loan.repay(env.block.time)?;
    loan.store(storage)?;

    let mut bank = bank::account(config.stake_denom());
    let distributed = write_off_lenders(storage, loan_id)?
        .into_iter()
        .try_fold(Amount::zero(), |distributed, (lender, share)| {
            SimpleFraction::new(share.weight(), loan.total_yes_votes())
                .and_then(|fraction| fraction.of(due))
                .map_err(ContractError::from)
                .and_then(|payout| {
                    bank.send(payout, lender);
                    distributed.checked_add(payout).map_err(Into::into)
                })
        })?;
    let undistributed = due.checked_sub(distributed)?;
    let refund = paid.checked_sub(due)?;
    bank.send(refund, info.sender.clone());

    let mut pool = Pool::load(storage)?;
    pool.write_off(loan.amount())?;
    pool.add_undistributed(undistributed)?;
    pool.store(storage)?;

    let repayment = Repayment {
        paid,
        distributed,
        undistributed,
        refund,
    };
    Ok(PlatformResponse::messages_with_events(
        bank.into(),
        event::emit_repay(env, &loan, &info.sender, &repayment),
    ))
}

/// Close an overdue loan and blacklist its borrower
///
/// The principal locked from the lender stakes is lost.
pub(super) fn try_mark_defaulted(
    storage: &mut dyn Storage,
    env: &Env,
    loan_id: LoanId,
) -> Result<PlatformResponse> {
    let mut loan = Loan::load(storage, loan_id)?;
    loan.mark_defaulted(env.block.time)?;
    loan.store(storage)?;

    write_off_lenders(storage, loan_id)?;

    let mut pool = Pool::load(storage)?;
    pool.write_off(loan.amount())?;
    pool.store(storage)?;

    Blacklist::add(storage, loan.borrower(), env.block.time)?;

    Ok(event::emit_default(env, &loan).into())
}

fn write_off_lenders(
    storage: &mut dyn Storage,
    loan_id: LoanId,
) -> Result<Vec<(Addr, LenderShare)>> {
    let shares = LenderShare::iter(storage, loan_id).collect::<Result<Vec<_>>>()?;

    shares.iter().try_for_each(|(lender, share)| {
        Staker::load(storage, lender).and_then(|mut staker| {
            staker.write_off(share.locked())?;
            staker.store(storage, lender)
        })
    })?;

    Ok(shares)
}

fn sum<I>(amounts: I) -> Result<Amount>
where
    I: IntoIterator<Item = Amount>,
{
    amounts
        .into_iter()
        .try_fold(Amount::zero(), |total, amount| total.checked_add(amount))
        .map_err(Into::into)
}

/// Split `whole` pro rata to `weights`
///
/// The parts are rounded down. The remainder is assigned one unit at a time to
/// the non-zero weights in their order. No part exceeds its weight as long as
/// `whole` does not exceed `total`.
fn split(whole: Amount, weights: &[Amount], total: Amount) -> Result<Vec<Amount>> {
    let mut parts = weights
        .iter()
        .map(|&weight| {
            SimpleFraction::new(weight, total)
                .and_then(|fraction| fraction.of(whole))
                .map_err(Into::into)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut remainder = whole.checked_sub(sum(parts.iter().copied())?)?;
    for (part, _) in parts
        .iter_mut()
        .zip(weights)
        .filter(|(_, weight)| !weight.is_zero())
    {
        if remainder.is_zero() {
            break;
        }
        *part += Amount::one();
        remainder -= Amount::one();
    }
    debug_assert!(remainder.is_zero());

    Ok(parts)
}
