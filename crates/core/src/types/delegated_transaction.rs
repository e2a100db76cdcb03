use alloy::eips::eip7702::SignedAuthorization;
use alloy::network::{TransactionBuilder, TransactionBuilder7702};
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use serde_json::{Value, json};

/// A transaction carrying zero or more signed authorizations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatedTransaction {
    pub sender: Address,
    pub authorizations: Vec<SignedAuthorization>,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
}

impl DelegatedTransaction {
    pub fn new(sender: Address, to: Address, data: Bytes) -> Self {
        Self {
            sender,
            authorizations: Vec::new(),
            to,
            data,
            value: U256::ZERO,
        }
    }

    pub fn with_authorization(mut self, authorization: SignedAuthorization) -> Self {
        self.authorizations.push(authorization);
        self
    }

    pub fn with_authorizations(
        mut self,
        authorizations: impl IntoIterator<Item = SignedAuthorization>,
    ) -> Self {
        self.authorizations.extend(authorizations);
        self
    }

    /// Gas, fees, nonce and chain id are left for the provider fillers.
    pub fn into_rpc_request(self) -> TransactionRequest {
        let request = TransactionRequest::default()
            .with_from(self.sender)
            .with_to(self.to)
            .with_input(self.data)
            .with_value(self.value);

        if self.authorizations.is_empty() {
            request
        } else {
            request.with_authorization_list(self.authorizations)
        }
    }

    pub fn describe(&self) -> Value {
        let authorizations: Vec<Value> = self
            .authorizations
            .iter()
            .map(|auth| {
                json!({
                    "address": auth.address.to_string(),
                    "chainId": auth.chain_id.to_string(),
                    "nonce": auth.nonce,
                    "yParity": auth.y_parity(),
                    "r": format!("{:#x}", auth.r()),
                    "s": format!("{:#x}", auth.s()),
                })
            })
            .collect();

        json!({
            "from": self.sender.to_string(),
            "to": self.to.to_string(),
            "value": self.value.to_string(),
            "data": format!("0x{}", hex::encode(&self.data)),
            "authorizationList": authorizations,
        })
    }
}
