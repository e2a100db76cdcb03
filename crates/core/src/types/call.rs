use alloy::primitives::{Address, Bytes, U256};
use serde::Serialize;

/// One leg of a batch executed by the delegated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call {
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

impl Call {
    pub fn new(to: Address, data: impl Into<Bytes>, value: U256) -> Self {
        Self {
            to,
            data: data.into(),
            value,
        }
    }

    /// Plain native-currency transfer.
    pub fn transfer(to: Address, value: U256) -> Self {
        Self::new(to, Bytes::new(), value)
    }
}
