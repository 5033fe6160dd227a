//! Service layer for the supplier resource.
//! - `fornecedor::context` is the per-request unit of work over the table.
//! - `fornecedor::service` holds the five CRUD operations used by the HTTP handlers.
//! - Validation lives with the entity in the `models` crate.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod fornecedor;
