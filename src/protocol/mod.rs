//! # ZPL Protocol Implementation
//!
//! This module provides low-level command builders for the ZPL II protocol
//! used by thermal label printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Format brackets, label dimensions, field primitives
//! - [`text`]: Default font and word-wrapped text blocks
//! - [`barcode`]: Barcode defaults and Code 128
//!
//! ## Usage Example
//!
//! ```
//! use etiqueta::protocol::{barcode, commands, text};
//!
//! let lines = vec![
//!     commands::start_format(),
//!     commands::print_width(320),
//!     commands::label_length(160),
//!     text::default_font('0', 20),
//!     format!(
//!         "{}{}{}",
//!         commands::field_origin(16, 16),
//!         text::field_block(288, 2, 12, text::Justify::Left, 0),
//!         commands::field("HELLO"),
//!     ),
//!     barcode::barcode_defaults(2, 3, 64),
//!     commands::end_format(),
//! ];
//!
//! let zpl = lines.join("\n");
//! assert!(zpl.starts_with("^XA\n^PW320\n^LL160"));
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation is based on the "ZPL II Programming Guide"
//! by Zebra Technologies.

pub mod barcode;
pub mod commands;
pub mod text;
