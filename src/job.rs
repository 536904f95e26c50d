//! # Label Jobs
//!
//! A job bundles the items and layout of one label row. It is the JSON shape
//! accepted by the HTTP API and by `etiqueta generate --job`.
//!
//! ```
//! use etiqueta::job::LabelJob;
//!
//! let job: LabelJob = serde_json::from_str(r#"{
//!     "items": [{"sku": "ABC123", "name": "Produto Teste"}],
//!     "layout": {"columns": 2, "heightMm": 25}
//! }"#).unwrap();
//!
//! assert_eq!(job.items.len(), 1);
//! assert_eq!(job.layout.height_mm, 25.0);
//! assert!(job.to_zpl().starts_with("^XA\n^PW664\n^LL200"));
//! ```

use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::EtiquetaError;
use crate::fields::LabelItem;
use crate::labels::{generate_labels, query_dimensions};
use crate::layout::{Dimensions, LayoutConfig};
use crate::preview::render_preview;

/// File extension for generated documents.
pub const ZPL_EXTENSION: &str = "zpl";

/// Items and layout of one label row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelJob {
    pub items: Vec<LabelItem>,
    pub layout: LayoutConfig,
}

impl LabelJob {
    pub fn new(items: Vec<LabelItem>, layout: LayoutConfig) -> Self {
        Self { items, layout }
    }

    /// Read a job from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, EtiquetaError> {
        let text = std::fs::read_to_string(path)?;
        let job = serde_json::from_str(&text)?;
        log::debug!("loaded job from {}", path.display());
        Ok(job)
    }

    /// Generate the ZPL document.
    pub fn to_zpl(&self) -> String {
        generate_labels(&self.items, &self.layout)
    }

    /// Size of the ZPL document in dots.
    pub fn dimensions(&self) -> Dimensions {
        query_dimensions(&self.layout)
    }

    /// Render the PNG preview.
    pub fn to_preview_png(&self) -> Result<Vec<u8>, EtiquetaError> {
        Ok(render_preview(&self.items, &self.layout)?)
    }
}

/// Timestamped file name for a generated document,
/// e.g. `etiquetas-20261019-142501.zpl`.
pub fn default_file_name(at: DateTime<Local>) -> String {
    format!("etiquetas-{}.{}", at.format("%Y%m%d-%H%M%S"), ZPL_EXTENSION)
}
