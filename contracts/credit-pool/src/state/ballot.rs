use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::{Addr, Order, Storage, Timestamp},
    cw_storage_plus::Map,
    schemars::{self, JsonSchema},
};

use crate::{
    api::{Amount, RequestId},
    error::Result,
};

/// A vote cast on a loan request
///
/// The presence of a ballot marks the voter as having voted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Ballot {
    support: bool,
    /// The voter stake counted at cast time, zero for a "no" vote
    weight: Amount,
    cast_at: Timestamp,
}

impl Ballot {
    const STORAGE: Map<'static, (RequestId, &'static Addr), Self> = Map::new("ballots");

    pub fn yes(weight: Amount, cast_at: Timestamp) -> Self {
        Self {
            support: true,
            weight,
            cast_at,
        }
    }

    pub fn no(cast_at: Timestamp) -> Self {
        Self {
            support: false,
            weight: Amount::zero(),
            cast_at,
        }
    }

    pub fn may_load(storage: &dyn Storage, request: RequestId, voter: &Addr) -> Result<Option<Self>> {
        Self::STORAGE
            .may_load(storage, (request, voter))
            .map_err(Into::into)
    }

    pub fn exists(storage: &dyn Storage, request: RequestId, voter: &Addr) -> bool {
        Self::STORAGE.has(storage, (request, voter))
    }

    pub fn store(&self, storage: &mut dyn Storage, request: RequestId, voter: &Addr) -> Result<()> {
        Self::STORAGE
            .save(storage, (request, voter), self)
            .map_err(Into::into)
    }

    pub const fn support(&self) -> bool {
        self.support
    }

    pub const fn weight(&self) -> Amount {
        self.weight
    }

    pub const fn cast_at(&self) -> Timestamp {
        self.cast_at
    }
}

/// The yes voters of a loan request in the order of their votes
pub struct YesVoters;

impl YesVoters {
    const STORAGE: Map<'static, (RequestId, u32), Addr> = Map::new("yes_voters");

    pub fn append(
        storage: &mut dyn Storage,
        request: RequestId,
        position: u32,
        voter: &Addr,
    ) -> Result<()> {
        debug_assert!(!Self::STORAGE.has(storage, (request, position)));

        Self::STORAGE
            .save(storage, (request, position), voter)
            .map_err(Into::into)
    }

    pub fn iter(storage: &dyn Storage, request: RequestId) -> impl Iterator<Item = Result<Addr>> + '_ {
        Self::STORAGE
            .prefix(request)
            .range(storage, None, None, Order::Ascending)
            .map(|record| record.map(|(_position, voter)| voter).map_err(Into::into))
    }
}
