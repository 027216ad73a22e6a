//! Bulkread Core
//!
//! Core types for submitting CRM bulk-read jobs.
//!
//! This crate contains:
//! - Domain types: requests, job identifiers, field metadata
//! - DTOs: wire shapes exchanged with the CRM REST API

pub mod domain;
pub mod dto;
