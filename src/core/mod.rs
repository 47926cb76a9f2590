pub mod collection;
pub mod confirm;
pub mod filter;
pub mod forms;
pub mod login;
pub mod seed;
pub mod stats;
pub mod tags;
pub mod view;

#[cfg(test)]
mod tests;

pub use crate::domain::model::{FilterState, Record, RecordId};
pub use crate::domain::ports::{ConfigProvider, LoginGateway};
pub use crate::utils::error::Result;
