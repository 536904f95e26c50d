//! # Layout Engine
//!
//! Turns a physical label description into dot geometry.
//!
//! ```text
//! ├─ pad ─┬──── text box ────┬─ pad ─┼─ gap ─┼─ pad ─┬──── ...
//! │       │ NAME LINE 1      │       │       │       │
//! │       │ NAME LINE 2      │       │       │       │
//! │       │ ||||| ||| |||||  │       │       │       │
//! │       │     SKU          │       │       │       │
//! ├────────── column 0 ──────────────┤       ├────────── column 1
//! ```
//!
//! ## Example
//!
//! ```
//! use etiqueta::layout::{compute_geometry, query_dimensions, LayoutConfig};
//!
//! let config = LayoutConfig::new(40.0, 25.0).columns(2);
//! let geometry = compute_geometry(&config);
//!
//! assert_eq!(geometry.column_offset(1), 344);
//! assert_eq!(query_dimensions(&config), geometry.dimensions());
//! ```

mod config;
mod geometry;

pub use config::*;
pub use geometry::*;
