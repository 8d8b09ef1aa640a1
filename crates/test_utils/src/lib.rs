//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! fraud scoring test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claims and analyses
//! - `builders`: Builder patterns for claim construction
//! - `analyzers`: Scripted analyzer adapters standing in for remote services
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod analyzers;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use analyzers::*;
pub use assertions::*;
pub use generators::*;
