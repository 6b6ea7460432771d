use amm_pool::msg as PoolMsg;
use amm_pool::msg::{
    LiquidityResponse, PoolInfoResponse, PoolKindMsg, ProvidersResponse, ReservesResponse,
    SimulateSwapResponse,
};
use amm_pool::pool::SwapDirection;
use amm_pool::state::AssetInfo;
use cosmwasm_std::{coin, Addr, Coin, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, BankSudo, Contract, ContractWrapper, Executor};
use pool_factory::msg as FactoryMsg;
use pool_factory::state::{Config, PoolRecord};

const NATIVE: &str = "uatom";
const INITIAL_BALANCE: u128 = 1_000_000;

// Helper to create contract wrapper for the Factory contract
fn factory_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        pool_factory::contract::execute,
        pool_factory::contract::instantiate,
        pool_factory::contract::query,
    )
    .with_reply(pool_factory::contract::reply);
    Box::new(contract)
}

// Helper to create contract wrapper for the Pool contract
fn pool_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        amm_pool::contract::execute,
        amm_pool::contract::instantiate,
        amm_pool::contract::query,
    );
    Box::new(contract)
}

// Use cw20-base's contract for the pooled tokens
fn cw20_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    factory: Addr,
    owner: Addr,
    user1: Addr,
    user2: Addr,
    token_a: Addr,
    token_b: Addr,
}

/// Sets up app, users, native and cw20 balances, and instantiates the factory
fn setup_app() -> Suite {
    let mut app = App::default();
    let cw20_code_id = app.store_code(cw20_contract());
    let factory_code_id = app.store_code(factory_contract());
    let pool_code_id = app.store_code(pool_contract());

    let owner = app.api().addr_make("owner");
    let user1 = app.api().addr_make("user1");
    let user2 = app.api().addr_make("user2");

    for user in [&user1, &user2] {
        app.sudo(cw_multi_test::SudoMsg::Bank(BankSudo::Mint {
            to_address: user.to_string(),
            amount: vec![Coin {
                denom: NATIVE.into(),
                amount: Uint128::new(INITIAL_BALANCE),
            }],
        }))
        .unwrap();
    }

    let mut instantiate_token = |name: &str, symbol: &str| {
        app.instantiate_contract(
            cw20_code_id,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: name.to_string(),
                symbol: symbol.to_string(),
                decimals: 18,
                initial_balances: vec![
                    Cw20Coin {
                        address: user1.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                    Cw20Coin {
                        address: user2.to_string(),
                        amount: Uint128::new(INITIAL_BALANCE),
                    },
                ],
                mint: None,
                marketing: None,
            },
            &[],
            name,
            None,
        )
        .unwrap()
    };
    let token_a = instantiate_token("Token Alpha", "TKNA");
    let token_b = instantiate_token("Token Beta", "TKNB");

    let factory = app
        .instantiate_contract(
            factory_code_id,
            owner.clone(),
            &FactoryMsg::InstantiateMsg {
                pool_code_id,
                admin: owner.to_string(),
            },
            &[],
            "PoolFactoryContract",
            None,
        )
        .unwrap();

    Suite {
        app,
        factory,
        owner,
        user1,
        user2,
        token_a,
        token_b,
    }
}

impl Suite {
    fn create_pool(&mut self, kind: PoolKindMsg) -> anyhow::Result<()> {
        self.app.execute_contract(
            self.user1.clone(),
            self.factory.clone(),
            &FactoryMsg::ExecuteMsg::CreatePool {
                kind,
                fee: None,
                seed_shares: None,
            },
            &[],
        )?;
        Ok(())
    }

    fn pool_for(&self, asset_x: AssetInfo, asset_y: AssetInfo) -> Addr {
        let record: PoolRecord = self
            .app
            .wrap()
            .query_wasm_smart(
                self.factory.clone(),
                &FactoryMsg::QueryMsg::PoolAddress { asset_x, asset_y },
            )
            .unwrap();
        record.address
    }

    fn create_single_asset_pool(&mut self) -> Addr {
        self.create_pool(PoolKindMsg::SingleAsset {
            native_denom: NATIVE.to_string(),
            token: self.token_a.to_string(),
        })
        .unwrap();
        self.pool_for(native(), cw20(&self.token_a))
    }

    fn create_pair_pool(&mut self) -> Addr {
        self.create_pool(PoolKindMsg::Pair {
            token_a: self.token_a.to_string(),
            token_b: self.token_b.to_string(),
        })
        .unwrap();
        self.pool_for(cw20(&self.token_a), cw20(&self.token_b))
    }

    fn approve(&mut self, owner: &Addr, token: &Addr, spender: &Addr) {
        self.app
            .execute_contract(
                owner.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: spender.to_string(),
                    amount: Uint128::new(INITIAL_BALANCE),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    fn execute_pool(
        &mut self,
        sender: &Addr,
        pool: &Addr,
        msg: PoolMsg::ExecuteMsg,
        funds: &[Coin],
    ) -> anyhow::Result<cw_multi_test::AppResponse> {
        self.app
            .execute_contract(sender.clone(), pool.clone(), &msg, funds)
    }

    fn reserves(&self, pool: &Addr) -> ReservesResponse {
        self.app
            .wrap()
            .query_wasm_smart(pool.clone(), &PoolMsg::QueryMsg::GetReserves {})
            .unwrap()
    }

    fn shares(&self, pool: &Addr, provider: &Addr) -> Uint128 {
        let resp: LiquidityResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                pool.clone(),
                &PoolMsg::QueryMsg::GetLiquidity {
                    provider: provider.to_string(),
                },
            )
            .unwrap();
        resp.shares
    }

    fn total_shares(&self, pool: &Addr) -> Uint128 {
        let resp: LiquidityResponse = self
            .app
            .wrap()
            .query_wasm_smart(pool.clone(), &PoolMsg::QueryMsg::TotalLiquidity {})
            .unwrap();
        resp.shares
    }

    fn token_balance(&self, token: &Addr, address: &Addr) -> Uint128 {
        let resp: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token.clone(),
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        resp.balance
    }

    fn native_balance(&self, address: &Addr) -> Uint128 {
        self.app
            .wrap()
            .query_balance(address.clone(), NATIVE)
            .unwrap()
            .amount
    }

    /// Checks that provider balances add up to the total and that the pool holds its reserves.
    fn assert_pool_consistent(&self, pool: &Addr, asset_x: &AssetInfo, asset_y: &AssetInfo) {
        let providers: ProvidersResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                pool.clone(),
                &PoolMsg::QueryMsg::Providers {
                    start_after: None,
                    limit: Some(30),
                },
            )
            .unwrap();
        let sum = providers
            .providers
            .iter()
            .fold(Uint128::zero(), |acc, p| acc + p.shares);
        assert_eq!(sum, self.total_shares(pool));

        let reserves = self.reserves(pool);
        assert_eq!(self.held(pool, asset_x), reserves.reserve_x);
        assert_eq!(self.held(pool, asset_y), reserves.reserve_y);
    }

    fn held(&self, pool: &Addr, asset: &AssetInfo) -> Uint128 {
        match asset {
            AssetInfo::Native { .. } => self.native_balance(pool),
            AssetInfo::Cw20 { contract_addr } => self.token_balance(contract_addr, pool),
        }
    }
}

fn native() -> AssetInfo {
    AssetInfo::Native {
        denom: NATIVE.to_string(),
    }
}

fn cw20(addr: &Addr) -> AssetInfo {
    AssetInfo::Cw20 {
        contract_addr: addr.clone(),
    }
}

fn has_event(res: &cw_multi_test::AppResponse, ty: &str) -> bool {
    res.events.iter().any(|e| e.ty == format!("wasm-{}", ty))
}

#[test]
fn test_single_asset_full_flow() {
    let mut suite = setup_app();
    let pool = suite.create_single_asset_pool();
    let (user1, user2, token) = (suite.user1.clone(), suite.user2.clone(), suite.token_a.clone());
    let (asset_x, asset_y) = (native(), cw20(&token));

    let info: PoolInfoResponse = suite
        .app
        .wrap()
        .query_wasm_smart(pool.clone(), &PoolMsg::QueryMsg::PoolInfo {})
        .unwrap();
    assert!(!info.initialized);
    assert_eq!(info.factory, Some(suite.factory.clone()));

    suite.approve(&user1, &token, &pool);
    let res = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Init {
                amount_x: Uint128::new(1000),
                amount_y: Uint128::new(2000),
            },
            &[coin(1000, NATIVE)],
        )
        .unwrap();
    assert!(has_event(&res, "pool_initialized"));
    assert_eq!(suite.shares(&pool, &user1), Uint128::new(1000));
    suite.assert_pool_consistent(&pool, &asset_x, &asset_y);

    // 1000/2000 at 0.3%: 10 in, 19 out
    let simulated: SimulateSwapResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            pool.clone(),
            &PoolMsg::QueryMsg::SimulateSwap {
                direction: SwapDirection::XToY,
                amount: Uint128::new(10),
            },
        )
        .unwrap();
    assert_eq!(simulated.output, Uint128::new(19));

    let res = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::EthToToken {
                amount: Uint128::new(10),
                min_output: Some(Uint128::new(19)),
            },
            &[coin(10, NATIVE)],
        )
        .unwrap();
    assert!(has_event(&res, "eth_to_token_swap"));
    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::new(1010));
    assert_eq!(reserves.reserve_y, Uint128::new(1981));
    assert_eq!(
        suite.token_balance(&token, &user1),
        Uint128::new(INITIAL_BALANCE - 2000 + 19)
    );
    assert_eq!(
        suite.native_balance(&user1),
        Uint128::new(INITIAL_BALANCE - 1000 - 10)
    );
    suite.assert_pool_consistent(&pool, &asset_x, &asset_y);

    let res = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::TokenToEth {
                amount: Uint128::new(20),
                min_output: None,
            },
            &[],
        )
        .unwrap();
    assert!(has_event(&res, "token_to_eth_swap"));
    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::new(1000));
    assert_eq!(reserves.reserve_y, Uint128::new(2001));
    suite.assert_pool_consistent(&pool, &asset_x, &asset_y);

    // Second provider deposits X and lets the pool derive Y
    suite.approve(&user2, &token, &pool);
    let res = suite
        .execute_pool(
            &user2,
            &pool,
            PoolMsg::ExecuteMsg::Deposit {
                amount_x: Uint128::new(100),
                amount_y: None,
            },
            &[coin(100, NATIVE)],
        )
        .unwrap();
    assert!(has_event(&res, "liquidity_added"));
    assert_eq!(suite.shares(&pool, &user2), Uint128::new(100));
    assert_eq!(suite.total_shares(&pool), Uint128::new(1100));
    assert_eq!(
        suite.token_balance(&token, &user2),
        Uint128::new(INITIAL_BALANCE - 200)
    );
    suite.assert_pool_consistent(&pool, &asset_x, &asset_y);

    let res = suite
        .execute_pool(
            &user2,
            &pool,
            PoolMsg::ExecuteMsg::Withdraw {
                shares: Uint128::new(100),
            },
            &[],
        )
        .unwrap();
    assert!(has_event(&res, "liquidity_removed"));
    assert_eq!(suite.shares(&pool, &user2), Uint128::zero());
    // Never more than was put in
    assert_eq!(
        suite.token_balance(&token, &user2),
        Uint128::new(INITIAL_BALANCE)
    );
    assert_eq!(suite.native_balance(&user2), Uint128::new(INITIAL_BALANCE));
    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::new(1000));
    assert_eq!(reserves.reserve_y, Uint128::new(2001));
    suite.assert_pool_consistent(&pool, &asset_x, &asset_y);
}

#[test]
fn test_pair_pool_flow() {
    let mut suite = setup_app();
    let pool = suite.create_pair_pool();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());
    let (token_a, token_b) = (suite.token_a.clone(), suite.token_b.clone());
    let (asset_x, asset_y) = (cw20(&token_a), cw20(&token_b));

    for user in [&user1, &user2] {
        suite.approve(user, &token_a, &pool);
        suite.approve(user, &token_b, &pool);
    }

    // Native funds are refused by a pool without a native side
    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Init {
                amount_x: Uint128::new(500),
                amount_y: Uint128::new(500),
            },
            &[coin(1, NATIVE)],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Invalid funds"));

    suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Init {
                amount_x: Uint128::new(500),
                amount_y: Uint128::new(500),
            },
            &[],
        )
        .unwrap();

    suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Withdraw {
                shares: Uint128::new(50),
            },
            &[],
        )
        .unwrap();
    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::new(450));
    assert_eq!(reserves.reserve_y, Uint128::new(450));
    assert_eq!(suite.total_shares(&pool), Uint128::new(450));
    suite.assert_pool_consistent(&pool, &asset_x, &asset_y);

    let res = suite
        .execute_pool(
            &user2,
            &pool,
            PoolMsg::ExecuteMsg::TokenAToTokenB {
                amount: Uint128::new(45),
                min_output: None,
            },
            &[],
        )
        .unwrap();
    assert!(has_event(&res, "token_a_to_token_b_swap"));
    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::new(495));
    assert_eq!(reserves.reserve_y, Uint128::new(410));
    assert_eq!(
        suite.token_balance(&token_b, &user2),
        Uint128::new(INITIAL_BALANCE + 40)
    );

    let res = suite
        .execute_pool(
            &user2,
            &pool,
            PoolMsg::ExecuteMsg::TokenBToTokenA {
                amount: Uint128::new(10),
                min_output: None,
            },
            &[],
        )
        .unwrap();
    assert!(has_event(&res, "token_b_to_token_a_swap"));
    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::new(484));
    assert_eq!(reserves.reserve_y, Uint128::new(420));
    suite.assert_pool_consistent(&pool, &asset_x, &asset_y);

    // The Y cap is checked against the ratio-derived amount
    let err = suite
        .execute_pool(
            &user2,
            &pool,
            PoolMsg::ExecuteMsg::Deposit {
                amount_x: Uint128::new(100),
                amount_y: Some(Uint128::new(1)),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Insufficient amount"));

    let balance_b_before = suite.token_balance(&token_b, &user2);
    suite
        .execute_pool(
            &user2,
            &pool,
            PoolMsg::ExecuteMsg::Deposit {
                amount_x: Uint128::new(100),
                amount_y: Some(Uint128::new(100)),
            },
            &[],
        )
        .unwrap();
    assert_eq!(suite.shares(&pool, &user2), Uint128::new(92));
    assert_eq!(
        suite.token_balance(&token_b, &user2),
        balance_b_before - Uint128::new(86)
    );
    suite.assert_pool_consistent(&pool, &asset_x, &asset_y);
}

#[test]
fn test_create_pool_errors() {
    let mut suite = setup_app();
    let (token_a, token_b) = (suite.token_a.clone(), suite.token_b.clone());
    suite.create_pair_pool();

    // Registry key does not depend on asset order
    let err = suite
        .create_pool(PoolKindMsg::Pair {
            token_a: token_b.to_string(),
            token_b: token_a.to_string(),
        })
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Pool already exists"));

    let err = suite
        .create_pool(PoolKindMsg::Pair {
            token_a: token_a.to_string(),
            token_b: token_a.to_string(),
        })
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Pool assets must be different"
    );

    let err = suite
        .create_pool(PoolKindMsg::SingleAsset {
            native_denom: String::new(),
            token: token_a.to_string(),
        })
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("must not be empty"));

    let err = suite
        .app
        .execute_contract(
            suite.user1.clone(),
            suite.factory.clone(),
            &FactoryMsg::ExecuteMsg::CreatePool {
                kind: PoolKindMsg::SingleAsset {
                    native_denom: NATIVE.to_string(),
                    token: token_b.to_string(),
                },
                fee: None,
                seed_shares: None,
            },
            &[coin(100, NATIVE)],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("Cannot send funds when calling CreatePool"));

    suite.create_single_asset_pool();
    let pools: FactoryMsg::PoolsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            suite.factory.clone(),
            &FactoryMsg::QueryMsg::Pools {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(pools.pools.len(), 2);
    let next: FactoryMsg::PoolsResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            suite.factory.clone(),
            &FactoryMsg::QueryMsg::Pools {
                start_after: Some((pools.pools[0].asset_x.clone(), pools.pools[0].asset_y.clone())),
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(next.pools, vec![pools.pools[1].clone()]);
}

#[test]
fn test_factory_admin() {
    let mut suite = setup_app();
    let (owner, user1) = (suite.owner.clone(), suite.user1.clone());

    let err = suite
        .app
        .execute_contract(
            user1.clone(),
            suite.factory.clone(),
            &FactoryMsg::ExecuteMsg::UpdatePoolCodeId { new_code_id: 42 },
            &[],
        )
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "Unauthorized");

    suite
        .app
        .execute_contract(
            owner,
            suite.factory.clone(),
            &FactoryMsg::ExecuteMsg::UpdateAdmin {
                new_admin: user1.to_string(),
            },
            &[],
        )
        .unwrap();
    suite
        .app
        .execute_contract(
            user1.clone(),
            suite.factory.clone(),
            &FactoryMsg::ExecuteMsg::UpdatePoolCodeId { new_code_id: 42 },
            &[],
        )
        .unwrap();
    let cfg: Config = suite
        .app
        .wrap()
        .query_wasm_smart(suite.factory.clone(), &FactoryMsg::QueryMsg::Config {})
        .unwrap();
    assert_eq!(cfg.admin, user1);
    assert_eq!(cfg.pool_code_id, 42);
}

#[test]
fn test_lifecycle_errors() {
    let mut suite = setup_app();
    let pool = suite.create_single_asset_pool();
    let (user1, token) = (suite.user1.clone(), suite.token_a.clone());

    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Deposit {
                amount_x: Uint128::new(100),
                amount_y: None,
            },
            &[coin(100, NATIVE)],
        )
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "Pool is not initialized");
    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::zero());
    assert_eq!(reserves.reserve_y, Uint128::zero());

    // Without an allowance the token pull fails and nothing is committed
    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Init {
                amount_x: Uint128::new(1000),
                amount_y: Uint128::new(2000),
            },
            &[coin(1000, NATIVE)],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("No allowance"));
    assert_eq!(suite.total_shares(&pool), Uint128::zero());
    assert_eq!(suite.native_balance(&user1), Uint128::new(INITIAL_BALANCE));

    suite.approve(&user1, &token, &pool);
    let init = PoolMsg::ExecuteMsg::Init {
        amount_x: Uint128::new(1000),
        amount_y: Uint128::new(2000),
    };
    suite
        .execute_pool(&user1, &pool, init.clone(), &[coin(1000, NATIVE)])
        .unwrap();
    let err = suite
        .execute_pool(&user1, &pool, init, &[coin(1000, NATIVE)])
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), "Pool is already initialized");
    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::new(1000));
    assert_eq!(reserves.reserve_y, Uint128::new(2000));
}

#[test]
fn test_swap_errors() {
    let mut suite = setup_app();
    let pool = suite.create_single_asset_pool();
    let (user1, user2, token) = (suite.user1.clone(), suite.user2.clone(), suite.token_a.clone());
    suite.approve(&user1, &token, &pool);
    suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Init {
                amount_x: Uint128::new(1000),
                amount_y: Uint128::new(2000),
            },
            &[coin(1000, NATIVE)],
        )
        .unwrap();

    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::TokenAToTokenB {
                amount: Uint128::new(10),
                min_output: None,
            },
            &[],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("is not supported by a single-asset pool"));

    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::EthToToken {
                amount: Uint128::new(10),
                min_output: Some(Uint128::new(20)),
            },
            &[coin(10, NATIVE)],
        )
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .contains("less than minimum requested"));

    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::EthToToken {
                amount: Uint128::new(10),
                min_output: None,
            },
            &[coin(9, NATIVE)],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Invalid funds"));

    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::EthToToken {
                amount: Uint128::zero(),
                min_output: None,
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Invalid amount"));

    // 1 in against 1000/2000 rounds down to nothing
    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::TokenToEth {
                amount: Uint128::new(1),
                min_output: None,
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Insufficient liquidity"));

    let err = suite
        .execute_pool(
            &user2,
            &pool,
            PoolMsg::ExecuteMsg::TokenToEth {
                amount: Uint128::new(100),
                min_output: None,
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("No allowance"));

    let reserves = suite.reserves(&pool);
    assert_eq!(reserves.reserve_x, Uint128::new(1000));
    assert_eq!(reserves.reserve_y, Uint128::new(2000));
}

#[test]
fn test_withdraw_errors_and_drained_pool() {
    let mut suite = setup_app();
    let pool = suite.create_single_asset_pool();
    let (user1, user2, token) = (suite.user1.clone(), suite.user2.clone(), suite.token_a.clone());
    suite.approve(&user1, &token, &pool);
    suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Init {
                amount_x: Uint128::new(1000),
                amount_y: Uint128::new(2000),
            },
            &[coin(1000, NATIVE)],
        )
        .unwrap();

    let err = suite
        .execute_pool(
            &user2,
            &pool,
            PoolMsg::ExecuteMsg::Withdraw {
                shares: Uint128::new(1),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Insufficient shares"));

    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Withdraw {
                shares: Uint128::zero(),
            },
            &[],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Invalid amount"));

    suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Withdraw {
                shares: Uint128::new(1000),
            },
            &[],
        )
        .unwrap();
    assert_eq!(suite.total_shares(&pool), Uint128::zero());
    assert_eq!(suite.native_balance(&user1), Uint128::new(INITIAL_BALANCE));
    assert_eq!(
        suite.token_balance(&token, &user1),
        Uint128::new(INITIAL_BALANCE)
    );
    suite.assert_pool_consistent(&pool, &native(), &cw20(&token));

    // A drained pool stays initialized but cannot price anything
    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::EthToToken {
                amount: Uint128::new(10),
                min_output: None,
            },
            &[coin(10, NATIVE)],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Insufficient liquidity"));
    let err = suite
        .execute_pool(
            &user1,
            &pool,
            PoolMsg::ExecuteMsg::Deposit {
                amount_x: Uint128::new(10),
                amount_y: None,
            },
            &[coin(10, NATIVE)],
        )
        .unwrap_err();
    assert!(err.root_cause().to_string().contains("Insufficient liquidity"));
}
