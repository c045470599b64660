//! Resource services for the finance / cell-group backend.
//! - One module per resource family, one function per operation.
//! - Every function builds a path, performs exactly one request through
//!   `common::ApiClient` and returns the decoded body.
//! - No retries, caching or fallbacks; failures surface as `ServiceError`.

pub mod errors;
pub mod categories;
pub mod celulas;
pub mod members;
pub mod expenses;
pub mod permissions;
pub mod reports;
pub mod users;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
