use crate::bindings::batch_call_delegation::BatchCallDelegation;
use crate::error::{Error, Result};
use crate::types::call::Call;
use alloy::dyn_abi::{DynSolValue, JsonAbiExt};
use alloy::json_abi::JsonAbi;
use alloy::primitives::Bytes;
use alloy::sol_types::SolCall;

/// Encodes `execute((bytes,address,uint256)[])` for the batch delegation contract.
pub fn encode_batch(calls: &[Call]) -> Result<Bytes> {
    if calls.is_empty() {
        return Err(Error::EmptyBatch);
    }

    let calls: Vec<BatchCallDelegation::Call> = calls
        .iter()
        .map(|call| BatchCallDelegation::Call {
            data: call.data.clone(),
            to: call.to,
            value: call.value,
        })
        .collect();

    let execute_data = BatchCallDelegation::executeCall { calls }.abi_encode();

    Ok(Bytes::from(execute_data))
}

pub fn decode_batch(data: &[u8]) -> Result<Vec<Call>> {
    let decoded = BatchCallDelegation::executeCall::abi_decode(data)
        .map_err(|e| Error::Abi(format!("not an execute payload: {e}")))?;

    Ok(decoded
        .calls
        .into_iter()
        .map(|call| Call::new(call.to, call.data, call.value))
        .collect())
}

/// Batch encoder checked against the interface loaded from disk.
#[derive(Debug, Clone)]
pub struct BatchEncoder {
    selector: [u8; 4],
}

impl BatchEncoder {
    pub fn from_abi(abi: &JsonAbi) -> Result<Self> {
        let selector = BatchCallDelegation::executeCall::SELECTOR;
        let declared = abi
            .function("execute")
            .ok_or_else(|| Error::Abi("interface has no execute function".to_string()))?;

        if !declared.iter().any(|f| f.selector().0 == selector) {
            return Err(Error::Abi(format!(
                "execute selector mismatch, expected 0x{}",
                hex::encode(selector)
            )));
        }

        Ok(Self { selector })
    }

    pub fn selector(&self) -> [u8; 4] {
        self.selector
    }

    pub fn encode(&self, calls: &[Call]) -> Result<Bytes> {
        encode_batch(calls)
    }
}

/// Encodes a call to `name` using a loaded interface.
pub fn encode_function(abi: &JsonAbi, name: &str, args: &[DynSolValue]) -> Result<Bytes> {
    let function = abi
        .function(name)
        .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == args.len()))
        .ok_or_else(|| {
            Error::Abi(format!(
                "no function {name} taking {} argument(s)",
                args.len()
            ))
        })?;

    let input = function
        .abi_encode_input(args)
        .map_err(|e| Error::Abi(format!("failed to encode {name}: {e}")))?;

    Ok(Bytes::from(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::utils::parse_ether;
    use alloy::primitives::{Address, U256, address, bytes};

    const EXECUTE_ABI: &str = r#"[{"type":"function","name":"execute","stateMutability":"payable","inputs":[{"name":"calls","type":"tuple[]","internalType":"struct BatchCallDelegation.Call[]","components":[{"name":"data","type":"bytes"},{"name":"to","type":"address"},{"name":"value","type":"uint256"}]}],"outputs":[]}]"#;

    fn weth() -> Address {
        address!("0x7b79995e5f793a07bc00c21412e50ecae098e7f9")
    }

    #[test]
    fn test_empty_batch() {
        assert!(matches!(encode_batch(&[]), Err(Error::EmptyBatch)));
    }

    #[test]
    fn test_batch_decodes_back() {
        let calls = vec![
            Call::new(weth(), bytes!("d0e30db0"), parse_ether("0.0001").unwrap()),
            Call::transfer(
                address!("0x009f61dEB7909675F1330257499ac0C2428E2E1B"),
                parse_ether("0.00002").unwrap(),
            ),
            Call::new(
                weth(),
                bytes!("095ea7b3000000000000000000000000009f61deb7909675f1330257499ac0c2428e2e1bffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
                U256::ZERO,
            ),
        ];

        let data = encode_batch(&calls).unwrap();
        assert_eq!(&data[..4], &BatchCallDelegation::executeCall::SELECTOR);
        assert_eq!(decode_batch(&data).unwrap(), calls);
    }

    #[test]
    fn test_matches_replayed_calldata() {
        let calls = [Call::new(
            address!("0x6b5817e7091bc0c747741e96820b0199388245ea"),
            bytes!("d0e30db0"),
            parse_ether("0.001").unwrap(),
        )];
        let expected = bytes!(
            "a6d0ad61"
            "0000000000000000000000000000000000000000000000000000000000000020"
            "0000000000000000000000000000000000000000000000000000000000000001"
            "0000000000000000000000000000000000000000000000000000000000000020"
            "0000000000000000000000000000000000000000000000000000000000000060"
            "0000000000000000000000006b5817e7091bc0c747741e96820b0199388245ea"
            "00000000000000000000000000000000000000000000000000038d7ea4c68000"
            "0000000000000000000000000000000000000000000000000000000000000004"
            "d0e30db000000000000000000000000000000000000000000000000000000000"
        );

        assert_eq!(encode_batch(&calls).unwrap(), expected);
    }

    #[test]
    fn test_decode_rejects_foreign_payload() {
        assert!(matches!(decode_batch(&bytes!("d0e30db0")), Err(Error::Abi(_))));
    }

    #[test]
    fn test_encoder_checks_declared_interface() {
        let abi: JsonAbi = serde_json::from_str(EXECUTE_ABI).unwrap();
        let encoder = BatchEncoder::from_abi(&abi).unwrap();
        assert_eq!(encoder.selector(), [0xa6, 0xd0, 0xad, 0x61]);

        let wrong: JsonAbi = serde_json::from_str(
            r#"[{"type":"function","name":"execute","stateMutability":"payable","inputs":[{"name":"calls","type":"address[]"}],"outputs":[]}]"#,
        )
        .unwrap();
        assert!(matches!(BatchEncoder::from_abi(&wrong), Err(Error::Abi(_))));
        assert!(matches!(
            BatchEncoder::from_abi(&JsonAbi::new()),
            Err(Error::Abi(_))
        ));
    }

    #[test]
    fn test_encode_function_from_abi() {
        let registry: JsonAbi = serde_json::from_str(
            r#"[{"type":"function","name":"registerOperator","stateMutability":"nonpayable","inputs":[],"outputs":[]}]"#,
        )
        .unwrap();
        assert_eq!(
            encode_function(&registry, "registerOperator", &[]).unwrap(),
            bytes!("2acde098")
        );

        let opt_in: JsonAbi = serde_json::from_str(
            r#"[{"type":"function","name":"optIn","stateMutability":"nonpayable","inputs":[{"name":"where","type":"address"}],"outputs":[]}]"#,
        )
        .unwrap();
        let data = encode_function(
            &opt_in,
            "optIn",
            &[DynSolValue::Address(address!(
                "0xbfa7d94ad2f107abc0eb929fd3a8e55928c48c2a"
            ))],
        )
        .unwrap();
        assert_eq!(
            data,
            bytes!("b1138ad1000000000000000000000000bfa7d94ad2f107abc0eb929fd3a8e55928c48c2a")
        );

        assert!(matches!(
            encode_function(&opt_in, "optOut", &[]),
            Err(Error::Abi(_))
        ));
    }
}
