//! # Printer Module
//!
//! This module provides printer-specific configurations and utilities.
//!
//! ## Modules
//!
//! - [`config`]: Printer resolution and millimeter to dot conversion

pub mod config;

pub use config::{DOTS_PER_MM, PrinterConfig, mm_to_dots};
