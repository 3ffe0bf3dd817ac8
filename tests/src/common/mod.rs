use sdk::{
    cosmwasm_std::{coin, Addr, Coin as CwCoin, Uint128},
    testing::{self, App},
};

pub mod credit_pool;
pub mod verification;

pub const DENOM: &str = "ucredit";
pub const ADMIN: &str = "admin";
pub const VERIFIER: &str = "verifier";
pub const LENDER: &str = "lender";
pub const CO_LENDER: &str = "colender";
pub const BORROWER: &str = "borrower";

pub const DAY: u64 = 24 * 60 * 60;

pub fn cwcoin(amount: u128) -> CwCoin {
    coin(amount, DENOM)
}

pub fn balance(app: &App, addr: &Addr) -> Uint128 {
    app.wrap()
        .query_balance(addr, DENOM)
        .expect("balance query should succeed")
        .amount
}

/// An application with funded lenders and borrower, and both contracts deployed
pub struct TestCase {
    pub app: App,
    pub pool: Addr,
    pub verification: Addr,
}

impl TestCase {
    pub fn new(lender: u128, co_lender: u128, borrower: u128) -> Self {
        let mut app = testing::new_app(
            [(LENDER, lender), (CO_LENDER, co_lender), (BORROWER, borrower)]
                .into_iter()
                .filter(|&(_, amount)| amount != 0)
                .map(|(owner, amount)| (owner, vec![cwcoin(amount)])),
        );
        let pool = credit_pool::instantiate(&mut app);
        let verification = verification::instantiate(&mut app);

        Self {
            app,
            pool,
            verification,
        }
    }

    pub fn balance(&self, addr: &str) -> Uint128 {
        balance(&self.app, &testing::user(addr))
    }
}
