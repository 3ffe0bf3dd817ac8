use cosmwasm_std::{testing::mock_env, Addr, BlockInfo, Coin, Timestamp};
use cw_multi_test::BasicApp;
pub use cw_multi_test::{AppResponse, ContractWrapper, Executor};

pub type App = BasicApp;

pub const CHAIN_ID: &str = "credit-testnet-1";

pub fn user(addr: &str) -> Addr {
    Addr::unchecked(addr)
}

/// Build an application whose accounts are pre-funded with the given balances
pub fn new_app<'a, I>(balances: I) -> App
where
    I: IntoIterator<Item = (&'a str, Vec<Coin>)>,
{
    let mut app = App::new(|router, _api, storage| {
        balances.into_iter().for_each(|(owner, funds)| {
            router
                .bank
                .init_balance(storage, &user(owner), funds)
                .expect("initial balances should be accepted");
        })
    });

    app.set_block(BlockInfo {
        height: 12_345,
        time: mock_env().block.time,
        chain_id: CHAIN_ID.into(),
    });

    app
}

pub trait AppExt {
    fn time_shift(&mut self, seconds: u64);

    fn block_time(&self) -> Timestamp;
}

impl AppExt for App {
    fn time_shift(&mut self, seconds: u64) {
        self.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += 1;
        })
    }

    fn block_time(&self) -> Timestamp {
        self.block_info().time
    }
}
