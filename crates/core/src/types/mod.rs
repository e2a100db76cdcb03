pub mod call;
pub mod config;
pub mod delegated_transaction;
pub mod network_config;
