//! Fraud Scoring Demo Harness
//!
//! This crate drives the fraud scoring domain from the command line:
//! it loads claims, compares heuristic scores with a claim analyzer,
//! runs a batch analysis, and renders the results.
//!
//! # Architecture
//!
//! - **Config**: Environment-driven settings
//! - **Samples**: Built-in demonstration claims
//! - **Loader**: Claims from JSON files
//! - **Report**: Text and JSON rendering
//! - **App**: The end-to-end demo run
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_fraud::HeuristicAnalyzer;
//! use interface_cli::{app, config::DemoConfig};
//!
//! let config = DemoConfig::from_env()?;
//! let output = app::run(&config, &HeuristicAnalyzer::new()).await?;
//! println!("{output}");
//! ```

pub mod config;
pub mod error;
pub mod samples;
pub mod loader;
pub mod report;
pub mod app;

pub use error::CliError;
