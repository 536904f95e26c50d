//! Label geometry in device dots.
//!
//! Everything here is recomputed from a [`LayoutConfig`] on every call. The
//! protocol assembler, the dimensions query and the preview renderer all go
//! through [`compute_geometry`], which keeps the printed header and any
//! preview the same size.

use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use crate::printer::mm_to_dots;

// ============================================================================
// LAYOUT POLICY
// ============================================================================

/// Left and right padding inside each label.
pub const HORIZONTAL_PADDING_MM: f64 = 2.0;
/// Padding above the text block.
pub const TOP_PADDING_MM: f64 = 2.0;
/// Padding below the barcode.
pub const BOTTOM_PADDING_MM: f64 = 3.0;
/// Height of the barcode bars.
pub const BARCODE_HEIGHT_MM: f64 = 8.0;
/// Space reserved for the text block before the barcode may start.
pub const TEXT_REGION_MM: f64 = 4.0;
/// Extra space between the two lines of the name.
pub const LINE_SPACING_MM: f64 = 1.5;

/// Computed geometry of one label row, in dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Coerced column count the geometry was computed for.
    pub columns: u32,
    pub column_width_dots: u32,
    /// Zero for a single column.
    pub gap_dots: u32,
    pub total_width_dots: u32,
    pub height_dots: u32,
    pub horizontal_padding_dots: u32,
    pub top_padding_dots: u32,
    pub bottom_padding_dots: u32,
    /// Never below 1, even when the padding eats the whole label.
    pub text_box_width_dots: u32,
    pub barcode_height_dots: u32,
    pub barcode_top_dots: u32,
    pub line_spacing_dots: u32,
}

/// Printable size of a label row, in dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Geometry {
    /// Horizontal offset of column `index` (0-based) from the left edge.
    #[inline]
    pub fn column_offset(&self, index: u32) -> u32 {
        index.saturating_mul(self.column_width_dots.saturating_add(self.gap_dots))
    }

    /// Left edge of the text block and barcode in column `index`.
    #[inline]
    pub fn content_x(&self, index: u32) -> u32 {
        self.column_offset(index)
            .saturating_add(self.horizontal_padding_dots)
    }

    /// Total printable size.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.total_width_dots,
            height: self.height_dots,
        }
    }
}

/// Compute the geometry of a label row.
///
/// ## Example
///
/// ```
/// use etiqueta::layout::{compute_geometry, LayoutConfig};
///
/// let geometry = compute_geometry(&LayoutConfig::default());
/// assert_eq!(geometry.total_width_dots, 320);
/// assert_eq!(geometry.text_box_width_dots, 288);
/// assert_eq!(geometry.barcode_top_dots, 72);
/// ```
pub fn compute_geometry(config: &LayoutConfig) -> Geometry {
    let columns = config.effective_columns();

    let column_width_dots = mm_to_dots(config.width_mm);
    let height_dots = mm_to_dots(config.height_mm);
    let gap_dots = if columns > 1 {
        mm_to_dots(config.column_gap_mm)
    } else {
        0
    };

    let total_width_dots = column_width_dots
        .saturating_mul(columns)
        .saturating_add(gap_dots.saturating_mul(columns - 1));

    let horizontal_padding_dots = mm_to_dots(HORIZONTAL_PADDING_MM);
    let top_padding_dots = mm_to_dots(TOP_PADDING_MM);
    let bottom_padding_dots = mm_to_dots(BOTTOM_PADDING_MM);

    let text_box_width_dots = column_width_dots
        .saturating_sub(2 * horizontal_padding_dots)
        .max(1);

    let barcode_height_dots = mm_to_dots(BARCODE_HEIGHT_MM);

    // The floor keeps the barcode clear of the text even when the label is
    // too short for it, at the cost of running into the bottom padding.
    let barcode_top_dots = (top_padding_dots + mm_to_dots(TEXT_REGION_MM)).max(
        height_dots
            .saturating_sub(bottom_padding_dots)
            .saturating_sub(barcode_height_dots),
    );

    Geometry {
        columns,
        column_width_dots,
        gap_dots,
        total_width_dots,
        height_dots,
        horizontal_padding_dots,
        top_padding_dots,
        bottom_padding_dots,
        text_box_width_dots,
        barcode_height_dots,
        barcode_top_dots,
        line_spacing_dots: mm_to_dots(LINE_SPACING_MM),
    }
}

/// Printable size of a label row without generating any protocol text.
///
/// ## Example
///
/// ```
/// use etiqueta::layout::{query_dimensions, Dimensions, LayoutConfig};
///
/// let config = LayoutConfig::new(40.0, 25.0).columns(2).column_gap_mm(3.0);
/// assert_eq!(query_dimensions(&config), Dimensions { width: 664, height: 200 });
/// ```
pub fn query_dimensions(config: &LayoutConfig) -> Dimensions {
    compute_geometry(config).dimensions()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: f64, height: f64, columns: i32, gap: f64) -> LayoutConfig {
        LayoutConfig::new(width, height)
            .columns(columns)
            .column_gap_mm(gap)
    }

    #[test]
    fn test_single_column_ignores_gap() {
        let dims = query_dimensions(&config(40.0, 20.0, 1, 3.0));
        assert_eq!(dims, Dimensions { width: 320, height: 160 });
    }

    #[test]
    fn test_two_columns_with_gap() {
        let dims = query_dimensions(&config(40.0, 25.0, 2, 3.0));
        assert_eq!(dims, Dimensions { width: 664, height: 200 });
    }

    #[test]
    fn test_default_geometry() {
        let g = compute_geometry(&LayoutConfig::default());
        assert_eq!(
            g,
            Geometry {
                columns: 1,
                column_width_dots: 320,
                gap_dots: 0,
                total_width_dots: 320,
                height_dots: 160,
                horizontal_padding_dots: 16,
                top_padding_dots: 16,
                bottom_padding_dots: 24,
                text_box_width_dots: 288,
                barcode_height_dots: 64,
                barcode_top_dots: 72,
                line_spacing_dots: 12,
            }
        );
    }

    #[test]
    fn test_columns_coerced_before_computation() {
        for columns in [0, -1, -100] {
            let g = compute_geometry(&config(40.0, 20.0, columns, 3.0));
            assert_eq!(g.columns, 1);
            assert_eq!(g.gap_dots, 0);
            assert_eq!(g.total_width_dots, 320);
        }
    }

    #[test]
    fn test_negative_gap_clamps_to_zero() {
        let g = compute_geometry(&config(40.0, 20.0, 3, -2.0));
        assert_eq!(g.gap_dots, 0);
        assert_eq!(g.total_width_dots, 960);
    }

    #[test]
    fn test_total_width_identity() {
        for columns in 1..=6 {
            let g = compute_geometry(&config(33.3, 18.0, columns, 2.2));
            let c = columns as u32;
            assert_eq!(
                g.total_width_dots,
                g.column_width_dots * c + g.gap_dots * (c - 1)
            );
        }
    }

    #[test]
    fn test_column_offsets() {
        let g = compute_geometry(&config(40.0, 25.0, 3, 3.0));
        assert_eq!(g.column_offset(0), 0);
        assert_eq!(g.column_offset(1), 344);
        assert_eq!(g.column_offset(2), 688);
        assert_eq!(g.content_x(1), 360);
    }

    #[test]
    fn test_text_box_width_clamped_to_one() {
        // 3mm wide: 24 dots minus 2 * 16 dots of padding
        let g = compute_geometry(&config(3.0, 20.0, 1, 0.0));
        assert_eq!(g.text_box_width_dots, 1);

        let g = compute_geometry(&config(0.0, 20.0, 1, 0.0));
        assert_eq!(g.text_box_width_dots, 1);
    }

    #[test]
    fn test_barcode_sits_above_bottom_padding_on_tall_labels() {
        let g = compute_geometry(&config(40.0, 30.0, 1, 0.0));
        // 240 - 24 - 64
        assert_eq!(g.barcode_top_dots, 152);
        assert_eq!(
            g.barcode_top_dots + g.barcode_height_dots + g.bottom_padding_dots,
            g.height_dots
        );
    }

    #[test]
    fn test_barcode_floor_on_short_labels() {
        // Boundary case: a 10mm label has 80 dots, less than the 16 + 32 + 64 + 24
        // needed. The floor wins and the barcode runs past the bottom padding.
        let g = compute_geometry(&config(40.0, 10.0, 1, 0.0));
        assert_eq!(g.barcode_top_dots, 48);
        assert!(g.barcode_top_dots + g.barcode_height_dots > g.height_dots - g.bottom_padding_dots);
    }

    #[test]
    fn test_barcode_floor_on_zero_height() {
        let g = compute_geometry(&config(40.0, 0.0, 1, 0.0));
        assert_eq!(g.height_dots, 0);
        assert_eq!(g.barcode_top_dots, 48);
    }

    #[test]
    fn test_fractional_millimeters_round() {
        // 40.06mm = 320.48 dots, 25.07mm = 200.56 dots
        let dims = query_dimensions(&config(40.06, 25.07, 1, 0.0));
        assert_eq!(dims, Dimensions { width: 320, height: 201 });
    }

    #[test]
    fn test_deterministic() {
        let c = config(57.0, 32.0, 4, 2.5);
        assert_eq!(compute_geometry(&c), compute_geometry(&c));
    }

    #[test]
    fn test_huge_inputs_saturate() {
        let g = compute_geometry(&config(f64::INFINITY, 20.0, i32::MAX, 3.0));
        assert_eq!(g.total_width_dots, u32::MAX);
    }
}
