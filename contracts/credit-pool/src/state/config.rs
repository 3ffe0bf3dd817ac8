use serde::{Deserialize, Serialize};

use finance::{
    duration::{Duration, Seconds},
    percent::Percent100,
};
use sdk::{
    cosmwasm_std::Storage,
    cw_storage_plus::Item,
    schemars::{self, JsonSchema},
};

use crate::{
    api::InstantiateMsg,
    error::{ContractError, Result},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    stake_denom: String,
    min_stake_time: Duration,
    voting_period: Duration,
    quorum: Percent100,
}

impl Config {
    const STORAGE: Item<'static, Self> = Item::new("config");

    pub const DEFAULT_MIN_STAKE_TIME: Duration = Duration::from_days(7);
    pub const DEFAULT_VOTING_PERIOD: Duration = Duration::from_days(3);
    pub const DEFAULT_QUORUM: Percent100 = Percent100::from_percent(60);

    pub fn new(
        stake_denom: String,
        min_stake_time: Duration,
        voting_period: Duration,
        quorum: Percent100,
    ) -> Result<Self> {
        Self {
            stake_denom,
            min_stake_time,
            voting_period,
            quorum,
        }
        .validate()
    }

    pub fn store(&self, storage: &mut dyn Storage) -> Result<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> Result<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }

    pub fn update(
        self,
        min_stake_time: Option<Seconds>,
        voting_period: Option<Seconds>,
        quorum: Option<Percent100>,
    ) -> Result<Self> {
        let min_stake_time =
            min_stake_time.map_or(Ok(self.min_stake_time), Duration::try_from_secs)?;
        let voting_period = voting_period.map_or(Ok(self.voting_period), Duration::try_from_secs)?;

        Self {
            min_stake_time,
            voting_period,
            quorum: quorum.unwrap_or(self.quorum),
            ..self
        }
        .validate()
    }

    pub fn stake_denom(&self) -> &str {
        &self.stake_denom
    }

    pub const fn min_stake_time(&self) -> Duration {
        self.min_stake_time
    }

    pub const fn voting_period(&self) -> Duration {
        self.voting_period
    }

    pub const fn quorum(&self) -> Percent100 {
        self.quorum
    }

    fn validate(self) -> Result<Self> {
        if self.stake_denom.is_empty() {
            Err(ContractError::EmptyStakeDenom)
        } else if self.voting_period.is_zero() {
            Err(ContractError::ZeroVotingPeriod)
        } else {
            Ok(self)
        }
    }
}

impl TryFrom<InstantiateMsg> for Config {
    type Error = ContractError;

    fn try_from(msg: InstantiateMsg) -> Result<Self> {
        let min_stake_time = msg
            .min_stake_time
            .map_or(Ok(Self::DEFAULT_MIN_STAKE_TIME), Duration::try_from_secs)?;
        let voting_period = msg
            .voting_period
            .map_or(Ok(Self::DEFAULT_VOTING_PERIOD), Duration::try_from_secs)?;

        Self::new(
            msg.stake_denom,
            min_stake_time,
            voting_period,
            msg.quorum.unwrap_or(Self::DEFAULT_QUORUM),
        )
    }
}
