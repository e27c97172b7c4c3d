//! Opscheck - an operational maturity self-assessment checklist
//!
//! This library provides the core functionality for Opscheck, including:
//! - Schema loading for the process and stage catalogs
//! - Selection state (growth-stage selectors and the derived stage)
//! - The response store for per-dimension scores and notes
//! - Pure view derivation for the timeline and the process checklist
//! - Snapshot persistence as a single JSON blob
//! - CSV export and the CLI command surface
//!
//! # Example
//!
//! ```no_run
//! use opscheck::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod app;
pub mod cli;
pub mod export;
pub mod models;
pub mod schema;
pub mod state;
pub mod store;
pub mod view;
