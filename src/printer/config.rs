//! # Printer Configuration
//!
//! This module defines the resolution of the label printers we target and
//! the millimeter to dot conversion every layout computation goes through.
//!
//! ## Supported Printers
//!
//! | Class | Resolution | Dots per mm |
//! |-------|------------|-------------|
//! | ZPL 203 DPI (GC420, ZD220, ZD420...) | 203 DPI | 8 |
//!
//! ## Usage
//!
//! ```
//! use etiqueta::printer::{mm_to_dots, PrinterConfig};
//!
//! let config = PrinterConfig::ZPL_203;
//! assert_eq!(config.mm_to_dots(40.0), 320);
//! assert_eq!(mm_to_dots(1.5), 12);
//! ```

/// Dots per millimeter at 203 DPI.
///
/// 203 / 25.4 is 7.99, but ZPL printers of this class address exactly 8 dots
/// per millimeter and label stock is specified against that grid.
pub const DOTS_PER_MM: u32 = 8;

/// # Printer Configuration
///
/// Hardware characteristics of a thermal label printer.
///
/// ## Calculations
///
/// ```text
/// dots = round(mm * dots_per_mm)
///
/// For a 40mm x 20mm label at 203 DPI:
///   width  = 40 * 8 = 320 dots
///   height = 20 * 8 = 160 dots
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Printer class name
    pub name: &'static str,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Addressable dots per millimeter
    pub dots_per_mm: u32,
}

impl PrinterConfig {
    /// # ZPL printer at 203 DPI
    ///
    /// The standard resolution for desktop thermal label printers.
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Resolution | 203 DPI |
    /// | Grid | 8 dots/mm |
    /// | Protocol | ZPL II |
    pub const ZPL_203: Self = Self {
        name: "ZPL 203 DPI",
        dpi: 203,
        dots_per_mm: DOTS_PER_MM,
    };

    /// Convert millimeters to dots, rounding half away from zero.
    ///
    /// Negative and NaN inputs produce 0; infinite inputs saturate.
    ///
    /// ## Example
    ///
    /// ```
    /// use etiqueta::printer::PrinterConfig;
    ///
    /// let config = PrinterConfig::ZPL_203;
    /// assert_eq!(config.mm_to_dots(2.0), 16);
    /// assert_eq!(config.mm_to_dots(0.0625), 1);
    /// ```
    #[inline]
    pub fn mm_to_dots(&self, mm: f64) -> u32 {
        // `as` saturates: NaN -> 0, negatives -> 0, +inf -> u32::MAX
        (mm * self.dots_per_mm as f64).round() as u32
    }

    /// Convert dots to millimeters
    #[inline]
    pub fn dots_to_mm(&self, dots: u32) -> f64 {
        dots as f64 / self.dots_per_mm as f64
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::ZPL_203
    }
}

/// Convert millimeters to dots on the default 8 dots/mm grid.
#[inline]
pub fn mm_to_dots(mm: f64) -> u32 {
    PrinterConfig::ZPL_203.mm_to_dots(mm)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zpl_203_grid() {
        let config = PrinterConfig::ZPL_203;
        assert_eq!(config.dpi, 203);
        assert_eq!(config.dots_per_mm, 8);
    }

    #[test]
    fn test_mm_to_dots_whole_mm() {
        assert_eq!(mm_to_dots(40.0), 320);
        assert_eq!(mm_to_dots(20.0), 160);
        assert_eq!(mm_to_dots(3.0), 24);
        assert_eq!(mm_to_dots(8.0), 64);
    }

    #[test]
    fn test_mm_to_dots_fractional() {
        assert_eq!(mm_to_dots(1.5), 12);
        // 0.3 * 8 = 2.4
        assert_eq!(mm_to_dots(0.3), 2);
        // 0.35 * 8 = 2.8
        assert_eq!(mm_to_dots(0.35), 3);
    }

    #[test]
    fn test_mm_to_dots_rounds_half_away_from_zero() {
        // 0.0625 * 8 = 0.5 exactly
        assert_eq!(mm_to_dots(0.0625), 1);
        // 0.1875 * 8 = 1.5 exactly
        assert_eq!(mm_to_dots(0.1875), 2);
        // 0.3125 * 8 = 2.5 exactly (banker's rounding would give 2)
        assert_eq!(mm_to_dots(0.3125), 3);
    }

    #[test]
    fn test_mm_to_dots_degenerate_inputs() {
        assert_eq!(mm_to_dots(0.0), 0);
        assert_eq!(mm_to_dots(-5.0), 0);
        assert_eq!(mm_to_dots(f64::NAN), 0);
        assert_eq!(mm_to_dots(f64::INFINITY), u32::MAX);
    }

    #[test]
    fn test_dots_to_mm() {
        let config = PrinterConfig::ZPL_203;
        assert_eq!(config.dots_to_mm(320), 40.0);
        assert_eq!(config.dots_to_mm(12), 1.5);
    }

    #[test]
    fn test_default_is_zpl_203() {
        assert_eq!(PrinterConfig::default(), PrinterConfig::ZPL_203);
    }
}
