//! # Warehouse Analytics
//!
//! The decision core of the inventory: range filtering over the roll
//! collection and aggregate statistics over a date window.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** `FilterEngine` works on the rolls it is given.
//!   `StatisticsEngine` reads three snapshots through `RollStore` and then
//!   computes from those alone.
//! - **Stateless Calculation:** Both engines hold no state between calls.
//!   Neither logs nor retries; failures come back as `AnalyticsError`.
//!
//! ## Public API
//!
//! - `FilterEngine`: validates and applies a `RangeFilter`.
//! - `StatisticsEngine`: produces a `PeriodStatistics` for `[start, end]`.
//! - `PeriodStatistics`, `DayOccupancy`: the computed results.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;
pub mod filter;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::StatisticsEngine;
pub use error::AnalyticsError;
pub use filter::FilterEngine;
pub use report::{DayOccupancy, PeriodStatistics};
