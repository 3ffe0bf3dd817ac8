#![cfg(all(test, not(target_arch = "wasm32")))]

mod common;


mod verification_tests;
