use crate::bindings::weth::Weth;
use crate::types::call::Call;
use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, Bytes, U256, address};
use alloy::sol_types::SolCall;
use eyre::{Result, eyre};

/// Receives the plain transfer and the WETH allowance.
pub const SPENDER: Address = address!("0x009f61dEB7909675F1330257499ac0C2428E2E1B");

/// Vault passed to `optIn`.
pub const OPT_IN_WHERE: Address = address!("0xbfa7d94ad2f107abc0eb929fd3a8e55928c48c2a");

pub fn ether(amount: &str) -> Result<U256> {
    parse_ether(amount).map_err(|e| eyre!("invalid ether amount {amount}: {e}"))
}

pub fn weth_deposit(weth: Address, value: U256) -> Call {
    Call::new(weth, Bytes::from(Weth::depositCall {}.abi_encode()), value)
}

pub fn weth_approve_max(weth: Address, spender: Address) -> Call {
    let data = Weth::approveCall {
        guy: spender,
        wad: U256::MAX,
    }
    .abi_encode();
    Call::new(weth, Bytes::from(data), U256::ZERO)
}

/// Deposit, plain transfer and unlimited approve: the batch most scenarios send.
pub fn deposit_transfer_approve(weth: Address) -> Result<Vec<Call>> {
    Ok(vec![
        weth_deposit(weth, ether("0.0001")?),
        Call::transfer(SPENDER, ether("0.00002")?),
        weth_approve_max(weth, SPENDER),
    ])
}
