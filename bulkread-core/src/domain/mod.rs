//! Core domain types
//!
//! These types describe what a caller asks for (a bulk read of a module) and
//! what comes back (a vendor job handle, or the users-export sentinel).

pub mod field;
pub mod job;
pub mod request;
