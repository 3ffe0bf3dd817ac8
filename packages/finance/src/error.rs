use thiserror::Error;

use crate::percent::Units as PercentUnits;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Finance] Fraction multiplication overflow when evaluating `{details}`")]
    MultiplicationOverflow { details: String },

    #[error("[Finance] The fraction total should not be zero")]
    ZeroTotal,

    #[error("[Finance] [Duration] {0} seconds overflow the nanoseconds range")]
    DurationOverflow(u64),

    #[error("[Finance] [Duration] Adding {nanos}ns to the timestamp {start}ns overflows")]
    TimestampOverflow { start: u64, nanos: u64 },

    #[error(
        "[Finance] [Percent] Upper bound has been crossed! Upper bound is: {bound}, but got: {value}!"
    )]
    UpperBoundCrossed {
        bound: PercentUnits,
        value: PercentUnits,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
