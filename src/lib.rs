//! # Etiqueta - Product Label Generator
//!
//! Etiqueta lays out product labels (name + SKU barcode) for thermal label
//! printers and generates the ZPL document that prints them. It provides:
//!
//! - **Layout**: millimeter to dot conversion and multi-column geometry
//! - **Protocol implementation**: ZPL II command builders
//! - **IR**: an inspectable command program, compiled to and read from ZPL
//! - **Preview**: PNG rendering that matches the printed geometry
//! - **Server**: an HTTP API over all of the above
//!
//! ## Quick Start
//!
//! ```
//! use etiqueta::{generate_labels, query_dimensions, LabelItem, LayoutConfig};
//!
//! let items = vec![
//!     LabelItem::new("ABC123", "Produto Teste"),
//!     LabelItem::new("XYZ789", "Outro Produto"),
//! ];
//! let config = LayoutConfig::new(40.0, 25.0).columns(2).column_gap_mm(3.0);
//!
//! // Reserve space for a preview without generating anything
//! let dims = query_dimensions(&config);
//! assert_eq!((dims.width, dims.height), (664, 200));
//!
//! // Generate the document for the printer
//! let zpl = generate_labels(&items, &config);
//! assert!(zpl.starts_with("^XA\n^PW664\n^LL200"));
//! assert!(zpl.ends_with("^XZ"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`printer`] | Printer resolution, mm to dots |
//! | [`layout`] | Layout configuration and geometry |
//! | [`fields`] | Label items and field normalization |
//! | [`protocol`] | ZPL command builders |
//! | [`ir`] | Command program, codegen and reader |
//! | [`components`] | Declarative label components |
//! | [`labels`] | Generation and dimension entry points |
//! | [`preview`] | PNG preview renderer |
//! | [`job`] | JSON job files |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! ZPL II printers at 203 DPI (8 dots/mm).

pub mod components;
pub mod error;
pub mod fields;
pub mod ir;
pub mod job;
pub mod labels;
pub mod layout;
pub mod preview;
pub mod printer;
pub mod protocol;
pub mod server;

// Re-exports for convenience
pub use error::EtiquetaError;
pub use fields::LabelItem;
pub use labels::{generate_labels, query_dimensions};
pub use layout::{Dimensions, Geometry, LayoutConfig, compute_geometry};
pub use printer::PrinterConfig;
