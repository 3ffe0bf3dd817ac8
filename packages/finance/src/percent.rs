use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::Uint128,
    schemars::{self, JsonSchema},
};

use crate::error::{Error, Result};

pub type Units = u32;

/// A percentage in the [0%, 100%] range with a permille precision
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "Units", into = "Units")]
pub struct Percent100(Units);

impl Percent100 {
    const PERMILLE: Units = 1000;

    pub const ZERO: Self = Self::from_permille(0);
    pub const HUNDRED: Self = Self::from_permille(Self::PERMILLE);

    pub const fn from_percent(percent: u16) -> Self {
        Self::from_permille(percent as Units * 10)
    }

    pub const fn from_permille(permille: Units) -> Self {
        assert!(permille <= Self::PERMILLE);

        Self(permille)
    }

    pub const fn units(&self) -> Units {
        self.0
    }

    /// The floor of the percentage of `whole`
    pub fn of(&self, whole: Uint128) -> Uint128 {
        whole.multiply_ratio(self.0, Self::PERMILLE)
    }
}

impl TryFrom<Units> for Percent100 {
    type Error = Error;

    fn try_from(permille: Units) -> Result<Self> {
        if permille <= Self::PERMILLE {
            Ok(Self(permille))
        } else {
            Err(Error::UpperBoundCrossed {
                bound: Self::PERMILLE,
                value: permille,
            })
        }
    }
}

impl From<Percent100> for Units {
    fn from(percent: Percent100) -> Self {
        percent.0
    }
}

impl Display for Percent100 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let whole = self.0 / 10;
        let fractional = self.0 % 10;

        if fractional == 0 {
            write!(f, "{whole}%")
        } else {
            write!(f, "{whole}.{fractional}%")
        }
    }
}
