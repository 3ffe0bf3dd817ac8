pub mod api;
#[cfg(any(feature = "contract", test))]
pub mod contract;
pub mod error;
#[cfg(any(feature = "contract", test))]
mod event;
pub mod state;
