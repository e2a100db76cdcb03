pub mod account;
pub mod authorization;
pub mod batch;
pub mod bindings;
pub mod dispatch;
pub mod error;
pub mod scenarios;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
