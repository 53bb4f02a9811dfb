//! Core types shared across the astroreg facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging:
//!
//! - **Correlation types**: RequestId, one per menu command
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
