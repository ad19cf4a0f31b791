//! Coding Hub library exports

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod page;
pub mod selection;

pub use error::{HubError, Result};
