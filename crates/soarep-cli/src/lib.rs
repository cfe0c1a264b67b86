//! # soarep-cli
//!
//! Command-line client for an SOA repository server.
//!
//! This crate provides the `soarep` binary:
//! - Listing the registered resources and their URL templates
//! - Running a resource's `query` and printing the decoded JSON
//! - Resolving request URLs without sending them
//! - Creating and inspecting the config file

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
