//! Product API Module
//!
//! The HTTP surface of the service: record types, payload validation, and
//! the Axum request handlers mounted under `/api/product`.
//!
//! ## Responsibilities
//! - **Types**: the `ProductRecord` wire/storage shape and the error body
//!   returned on rejected requests.
//! - **Validation**: field-by-field shape checks on incoming JSON payloads,
//!   applied before any typed use (see `types::parse_record`).
//! - **Handlers**: CRUD endpoints over the shared record store, plus the
//!   `/api/hello` health check.

pub mod handlers;
pub mod types;
