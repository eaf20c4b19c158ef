// Baserow Dump - incremental Baserow table exporter
// Copyright (c) 2025 Baserow Dump Contributors
// Licensed under the MIT License

//! # Baserow Dump
//!
//! Baserow Dump copies every row of a Baserow table into a local JSON file,
//! one page at a time, and remembers which page comes next so an interrupted
//! run can pick up where it stopped.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Reading** a flat `key = value` configuration file
//! - **Fetching** pages of rows from the Baserow REST API
//! - **Accumulating** records into a single JSON array file
//! - **Checkpointing** the next page number after every stored page
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (page sequence, driver loop, state)
//! - [`adapters`] - External integrations (Baserow API, file stores)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use baserow_dump::config::load_config;
//! use baserow_dump::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("config.txt")?;
//!
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!     let coordinator = ExportCoordinator::new(&config, shutdown_rx)?;
//!
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Exported {} records", summary.records_exported);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All library functions return [`domain::Result`], whose error type is
//! [`domain::DumpError`]. [`domain::DumpError::exit_code`] maps an error to
//! the process exit code the CLI reports.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
