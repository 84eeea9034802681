//! # Warehouse Core Types
//!
//! The vocabulary shared by every other crate in the workspace: the `Roll`
//! entity, the payload used to create one, and the range filter used to
//! query the inventory. This crate has no knowledge of storage or transport.

pub mod error;
pub mod filter;
pub mod roll;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use filter::{Range, RangeFilter};
pub use roll::{NewRoll, Roll, RollId};
