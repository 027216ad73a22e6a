//! Data Transfer Objects for the CRM REST API
//!
//! Typed request and response bodies for the endpoints the client talks to.
//! Field names follow the vendor's JSON exactly.

pub mod bulk_read;
pub mod field;
pub mod user;
