//! # Warehouse Database Crate
//!
//! This crate is the inventory's persistence layer. It defines the
//! `RollStore` port that the rest of the application talks to and ships two
//! adapters for it.
//!
//! ## Architectural Principles
//!
//! - **Port and Adapters:** Callers depend on `RollStore` only. SQL and
//!   locking details stay inside the adapters.
//! - **Asynchronous & Pooled:** The PostgreSQL adapter uses a `PgPool`; each
//!   call is one statement, so every operation is independently consistent.
//!
//! ## Public API
//!
//! - `RollStore`: insert, lookup, update and the three date range queries.
//! - `DbRepository`: the PostgreSQL adapter.
//! - `MemoryRollStore`: an in-process adapter for tests and throwaway runs.
//! - `connect`, `run_migrations`, `open_store`: wiring helpers.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, open_store, run_migrations};
pub use error::DbError;
pub use memory::MemoryRollStore;
pub use repository::DbRepository;
pub use store::RollStore;
