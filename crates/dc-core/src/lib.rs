//! Decision Cognizant Core Library
//!
//! This library provides the driver around the divergence engine:
//! - Exit codes for CLI operations
//! - Vector-file pairing and line parsing
//! - Unified error type with human-readable formatting
//! - Structured logging setup
//! - Run-report rendering
//!
//! The binary entry point is in `main.rs`.

pub mod compare;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod output;
