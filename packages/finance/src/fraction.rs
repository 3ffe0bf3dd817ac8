use sdk::cosmwasm_std::Uint128;

use crate::error::{Error, Result};

/// A `parts / total` ratio applied with a floor rounding
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SimpleFraction {
    parts: Uint128,
    total: Uint128,
}

impl SimpleFraction {
    pub fn new(parts: Uint128, total: Uint128) -> Result<Self> {
        if total.is_zero() {
            Err(Error::ZeroTotal)
        } else {
            Ok(Self { parts, total })
        }
    }

    pub const fn parts(&self) -> Uint128 {
        self.parts
    }

    pub const fn total(&self) -> Uint128 {
        self.total
    }

    /// `whole * parts / total`, rounded down
    ///
    /// The intermediate product is computed in 256 bits, the error is reported
    /// only if the end result does not fit.
    pub fn of(&self, whole: Uint128) -> Result<Uint128> {
        whole
            .checked_multiply_ratio(self.parts, self.total)
            .map_err(|_| Error::MultiplicationOverflow {
                details: format!("({}/{}).of({})", self.parts, self.total, whole),
            })
    }
}
