//! Layout configuration: the physical footprint of one label and how many
//! labels are printed side by side.

use serde::{Deserialize, Serialize};

/// Default label width in millimeters.
pub const DEFAULT_WIDTH_MM: f64 = 40.0;
/// Default label height in millimeters.
pub const DEFAULT_HEIGHT_MM: f64 = 20.0;
/// Default number of labels across the liner.
pub const DEFAULT_COLUMNS: i32 = 1;
/// Default gap between adjacent labels in millimeters.
pub const DEFAULT_COLUMN_GAP_MM: f64 = 3.0;

/// Physical description of one label row.
///
/// Every field is optional in JSON and falls back to its default:
///
/// ```
/// use etiqueta::layout::LayoutConfig;
///
/// let config: LayoutConfig = serde_json::from_str(r#"{"columns": 2}"#).unwrap();
/// assert_eq!(config.columns, 2);
/// assert_eq!(config.width_mm, 40.0);
/// assert_eq!(config.column_gap_mm, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Width of a single label.
    pub width_mm: f64,
    /// Height of a single label.
    pub height_mm: f64,
    /// Labels across. Values below 1 are treated as 1.
    pub columns: i32,
    /// Gap between adjacent labels. Ignored for a single column.
    pub column_gap_mm: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_WIDTH_MM,
            height_mm: DEFAULT_HEIGHT_MM,
            columns: DEFAULT_COLUMNS,
            column_gap_mm: DEFAULT_COLUMN_GAP_MM,
        }
    }
}

impl LayoutConfig {
    /// Create a layout for a single column of `width_mm` x `height_mm` labels.
    pub fn new(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_mm,
            height_mm,
            ..Default::default()
        }
    }

    /// Set the number of labels across.
    pub fn columns(mut self, columns: i32) -> Self {
        self.columns = columns;
        self
    }

    /// Set the gap between adjacent labels.
    pub fn column_gap_mm(mut self, gap_mm: f64) -> Self {
        self.column_gap_mm = gap_mm;
        self
    }

    /// Column count after coercion to at least 1.
    #[inline]
    pub fn effective_columns(&self) -> u32 {
        self.columns.max(1) as u32
    }
}
