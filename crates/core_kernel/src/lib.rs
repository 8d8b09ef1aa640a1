//! Core Kernel - Foundational types shared by the fraud scoring crates
//!
//! This crate provides the building blocks used across the domain and
//! interface crates:
//! - The core error type for validation, lookup, and configuration failures
//! - The port error taxonomy used by external collaborators
//! - Strongly-typed identifiers

pub mod identifiers;
pub mod ports;
pub mod error;

pub use identifiers::BatchId;
pub use ports::{DomainPort, PortError};
pub use error::CoreError;
