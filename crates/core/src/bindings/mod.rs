pub mod batch_call_delegation;
pub mod weth;
