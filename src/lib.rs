//! # Glix - GitLab Issues Exporter
//!
//! A command-line utility for fetching the issues of a GitLab project
//! and exporting them to formatted reports.
//!
//! ## Features
//!
//! - **Paginated Fetching**: Drains the issues endpoint page by page,
//!   keeping partial results when a request fails
//! - **Date Filtering**: Optional creation-date window, from flags or
//!   interactive prompts
//! - **Report Export**: Excel with styled header and sized columns, or
//!   CSV/JSON renditions of the same rows
//! - **Terminal View**: Quick table listing without writing a file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use glix::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
