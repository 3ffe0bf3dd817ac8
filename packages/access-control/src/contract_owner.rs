use std::ops::Deref;

use sdk::cosmwasm_std::Storage;

use crate::SingleUserAccess;

const CONTRACT_OWNER_NAMESPACE: &str = "contract_owner";

/// The permission held by the contract owner, usually granted on instantiation
pub fn contract_owner<'storage, S>(storage: S) -> SingleUserAccess<'storage, 'static, S>
where
    S: Deref<Target = dyn Storage + 'storage>,
{
    SingleUserAccess::new(storage, CONTRACT_OWNER_NAMESPACE)
}
