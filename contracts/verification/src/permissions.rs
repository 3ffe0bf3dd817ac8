use std::ops::Deref;

use access_control::SingleUserAccess;
use sdk::cosmwasm_std::Storage;

const VERIFIER_KEY: &str = "verifier";

pub(crate) fn verifier<'storage, S>(storage: S) -> SingleUserAccess<'storage, 'static, S>
where
    S: Deref<Target = dyn Storage + 'storage>,
{
    SingleUserAccess::new(storage, VERIFIER_KEY)
}
