use platform::batch::{Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Env};

use crate::{
    api::{Amount, RequestId},
    state::{Loan, LoanRequest, Staker},
};

pub fn emit_stake(env: &Env, staker_addr: &Addr, amount: Amount, staker: &Staker) -> Emitter {
    Emitter::of_type("credit-stake")
        .emit_tx_info(env)
        .emit_addr("staker", staker_addr)
        .emit_amount("amount", amount)
        .emit_amount("staked", staker.staked())
}

pub fn emit_withdraw(env: &Env, staker_addr: &Addr, amount: Amount, staker: &Staker) -> Emitter {
    Emitter::of_type("credit-withdraw")
        .emit_tx_info(env)
        .emit_addr("staker", staker_addr)
        .emit_amount("amount", amount)
        .emit_amount("staked", staker.staked())
}

pub fn emit_loan_request(env: &Env, request: &LoanRequest) -> Emitter {
    Emitter::of_type("credit-loan-request")
        .emit_tx_info(env)
        .emit_to_string_value("id", request.id())
        .emit_addr("borrower", request.borrower())
        .emit_amount("amount", request.amount())
        .emit_amount("interest", request.interest())
        .emit_amount("required-votes", request.required_votes())
        .emit_timestamp("voting-deadline", &request.voting_deadline())
}

pub fn emit_vote(
    env: &Env,
    request: RequestId,
    voter: &Addr,
    support: bool,
    weight: Amount,
    yes_votes: Amount,
) -> Emitter {
    Emitter::of_type("credit-vote")
        .emit_tx_info(env)
        .emit_to_string_value("request", request)
        .emit_addr("voter", voter)
        .emit_to_string_value("support", support)
        .emit_amount("weight", weight)
        .emit_amount("yes-votes", yes_votes)
}

pub fn emit_loan_open(env: &Env, loan: &Loan, lenders: usize) -> Emitter {
    Emitter::of_type("credit-loan-open")
        .emit_tx_info(env)
        .emit_to_string_value("id", loan.id())
        .emit_addr("borrower", loan.borrower())
        .emit_amount("amount", loan.amount())
        .emit_amount("interest", loan.interest())
        .emit_timestamp("deadline", &loan.deadline())
        .emit_to_string_value("lenders", lenders)
}

pub struct Repayment {
    pub paid: Amount,
    pub distributed: Amount,
    pub undistributed: Amount,
    pub refund: Amount,
}

pub fn emit_repay(env: &Env, loan: &Loan, payer: &Addr, repayment: &Repayment) -> Emitter {
    Emitter::of_type("credit-repay")
        .emit_tx_info(env)
        .emit_to_string_value("id", loan.id())
        .emit_addr("payer", payer)
        .emit_amount("paid", repayment.paid)
        .emit_amount("distributed", repayment.distributed)
        .emit_amount("undistributed", repayment.undistributed)
        .emit_amount("refund", repayment.refund)
}

pub fn emit_default(env: &Env, loan: &Loan) -> Emitter {
    Emitter::of_type("credit-default")
        .emit_tx_info(env)
        .emit_to_string_value("id", loan.id())
        .emit_addr("borrower", loan.borrower())
        .emit_amount("amount", loan.amount())
}
