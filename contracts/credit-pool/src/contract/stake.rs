use platform::{
    bank::{self, BankAccount},
    message::Response as PlatformResponse,
};
use sdk::cosmwasm_std::{Env, MessageInfo, Storage};

use crate::{
    api::Amount,
    error::{ContractError, Result},
    event,
    state::{Config, Pool, Staker},
};

pub(super) fn try_stake(
    storage: &mut dyn Storage,
    env: &Env,
    info: MessageInfo,
) -> Result<PlatformResponse> {
    let config = Config::load(storage)?;
    let amount = bank::received_one(&info.funds, config.stake_denom())?;
    if amount.is_zero() {
        return Err(ContractError::ZeroStake);
    }

    let mut staker = Staker::load_or_default(storage, &info.sender)?;
    staker.stake(amount, env.block.time)?;
    staker.store(storage, &info.sender)?;

    let mut pool = Pool::load(storage)?;
    pool.stake(amount)?;
    pool.store(storage)?;

    Ok(event::emit_stake(env, &info.sender, amount, &staker).into())
}

pub(super) fn try_withdraw(
    storage: &mut dyn Storage,
    env: &Env,
    info: MessageInfo,
    amount: Amount,
) -> Result<PlatformResponse> {
    if amount.is_zero() {
        return Err(ContractError::ZeroWithdraw);
    }

    let mut staker = Staker::load_or_default(storage, &info.sender)?;
    staker.withdraw(amount)?;
    staker.store(storage, &info.sender)?;

    let mut pool = Pool::load(storage)?;
    pool.withdraw(amount)?;
    pool.store(storage)?;

    let config = Config::load(storage)?;
    let mut bank = bank::account(config.stake_denom());
    bank.send(amount, info.sender.clone());

    Ok(PlatformResponse::messages_with_events(
        bank.into(),
        event::emit_withdraw(env, &info.sender, amount, &staker),
    ))
}
