//! # Gradebook
//!
//! Records students and their letter grades and computes reports over them.
//!
//! ## Modules
//!
//! - `grading` - Letter grades and their fixed numeric tables
//! - `reports` - Average, top-student and distribution reports
//! - `storage` - Repository trait with SQLite and in-memory backends
//! - `service` - Validation and report assembly shared by API and CLI
//! - `api` - axum HTTP API
//! - `config` - Layered configuration (defaults, TOML, environment)
//! - `cli` - Command-line parsing and dispatch
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod grading;
pub mod models;
pub mod reports;
pub mod service;
pub mod storage;

pub use error::{GradebookError, Result};
