//! Records exchanged with the finance / cell-group backend.
//! - Plain serde structs, `camelCase` on the wire.
//! - Update payloads skip `None` fields so omitted values stay omitted.
//! - Identifiers are assigned by the backend; nothing here mutates them.

pub mod category;
pub mod celula;
pub mod member;
pub mod expense;
pub mod report;
pub mod permission;
pub mod user;
