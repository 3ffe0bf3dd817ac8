use std::fmt::Debug;

use thiserror::Error;

use sdk::cosmwasm_std::{Api, StdError};

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Platform] Expecting funds of {0} but found none")]
    NoFunds(String),

    #[error("[Platform] Expecting funds of {0} but found extra ones")]
    UnexpectedFunds(String),

    #[error("[Platform] [Std] An error occured on data serialization: {0}")]
    Serialization(StdError),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn log<Err>(api: &dyn Api) -> impl FnOnce(&Err) + '_
where
    Err: Debug,
{
    |err| api.debug(&format!("{:?}", err))
}
