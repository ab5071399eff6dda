//! Product Tracker Service Library
//!
//! This library crate defines the modules behind the product-tracking REST API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of two subsystems:
//!
//! - **`store`**: The record storage layer. Implements an in-memory slot table
//!   with an id-recycling allocation policy (freed ids are reused lowest-first,
//!   out-of-order writes backfill the id space), plus one-time seed loading
//!   from a JSON file.
//! - **`product`**: The HTTP surface. Contains the record types, request
//!   payload validation, and the Axum handlers for the CRUD endpoints.

pub mod product;
pub mod store;
