pub mod account;
pub mod client;
