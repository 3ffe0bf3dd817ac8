use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::Timestamp,
    schemars::{self, JsonSchema},
};

use crate::error::{Error, Result};

pub type Units = u64;

pub type Seconds = u64;

/// A timespan between `cosmwasm_std::Timestamp`-s in nanoseconds
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(transparent)]
pub struct Duration(Units);

impl Duration {
    const UNITS_IN_SECOND: Units = 1000 * 1000 * 1000;
    const SECONDS_IN_DAY: Seconds = 24 * 60 * 60;

    pub const ZERO: Duration = Self::from_nanos(0);
    pub const DAY: Duration = Self::from_days(1);

    pub const fn from_nanos(nanos: Units) -> Self {
        Self(nanos)
    }

    pub const fn from_secs(secs: Seconds) -> Self {
        Self::from_nanos(secs * Self::UNITS_IN_SECOND)
    }

    /// Same as [`Duration::from_secs`] failing instead of overflowing
    pub fn try_from_secs(secs: Seconds) -> Result<Self> {
        secs.checked_mul(Self::UNITS_IN_SECOND)
            .map(Self::from_nanos)
            .ok_or(Error::DurationOverflow(secs))
    }

    pub const fn from_days(days: u16) -> Self {
        Self::from_secs(days as Seconds * Self::SECONDS_IN_DAY)
    }

    pub const fn nanos(&self) -> Units {
        self.0
    }

    pub const fn secs(&self) -> Seconds {
        self.0 / Self::UNITS_IN_SECOND
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The moment this timespan after `start`
    pub fn after(&self, start: &Timestamp) -> Result<Timestamp> {
        start
            .nanos()
            .checked_add(self.0)
            .map(Timestamp::from_nanos)
            .ok_or(Error::TimestampOverflow {
                start: start.nanos(),
                nanos: self.0,
            })
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}s", self.secs())
    }
}
