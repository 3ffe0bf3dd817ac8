use std::ops::{Deref, DerefMut};

use sdk::{
    cosmwasm_std::{Addr, Storage},
    cw_storage_plus::Item,
};

pub use self::contract_owner::contract_owner;
use self::error::{Error, Result};

mod contract_owner;
pub mod error;

pub fn check(permitted_to: &Addr, accessed_by: &Addr) -> Result {
    if permitted_to == accessed_by {
        Ok(())
    } else {
        Err(Error::Unauthorized {})
    }
}

/// A permission granted to exactly one address, persisted under a namespace
pub struct SingleUserAccess<'storage, 'namespace, S>
where
    S: Deref<Target = dyn Storage + 'storage>,
{
    storage: S,
    storage_item: Item<'namespace, Addr>,
}

impl<'storage, 'namespace, S> SingleUserAccess<'storage, 'namespace, S>
where
    S: Deref<Target = dyn Storage + 'storage>,
{
    pub const fn new(storage: S, storage_namespace: &'namespace str) -> Self {
        Self {
            storage,
            storage_item: Item::new(storage_namespace),
        }
    }

    pub fn check(&self, user: &Addr) -> Result {
        self.granted_to()
            .and_then(|granted_to| check(&granted_to, user))
    }

    pub fn granted_to(&self) -> Result<Addr> {
        self.storage_item
            .load(self.storage.deref())
            .map_err(Into::into)
    }
}

impl<'storage, 'namespace, S> SingleUserAccess<'storage, 'namespace, S>
where
    S: Deref<Target = dyn Storage + 'storage> + DerefMut,
{
    pub fn grant_to(&mut self, user: &Addr) -> Result {
        self.storage_item
            .save(self.storage.deref_mut(), user)
            .map_err(Into::into)
    }
}
