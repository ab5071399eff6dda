//! Record Storage Module
//!
//! Implements the in-memory product record store.
//!
//! ## Core Concepts
//! - **Slot table**: records live in a dense table indexed by id. A slot can
//!   be allocated but hold no record (`None`), which is distinct from "never
//!   allocated".
//! - **Free ids**: deleted or backfilled ids are tracked in an ascending set
//!   and reused lowest-first before the table grows.
//! - **Seeding**: the store is populated once at startup from a JSON file and
//!   never written back. All mutations are memory-only.

pub mod records;
pub mod seed;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use parking_lot::RwLock;

use self::records::ProductStore;

/// Store handle shared across request handlers.
pub type SharedStore = Arc<RwLock<ProductStore>>;
