pub use self::{
    ballot::{Ballot, YesVoters},
    blacklist::Blacklist,
    config::Config,
    lender::LenderShare,
    loan::Loan,
    pool::Pool,
    request::LoanRequest,
    staker::Staker,
};

mod ballot;
mod blacklist;
mod config;
mod lender;
mod loan;
mod pool;
mod request;
mod staker;
