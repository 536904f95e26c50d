//! # ZPL Barcode Commands
//!
//! This module implements the 1D barcode commands used for the SKU on
//! every label.
//!
//! ## Usage
//!
//! A barcode field is configured by `^BY` (module width, ratio, default
//! height) and then placed with `^FO` + a barcode type command such as `^BC`
//! (Code 128):
//!
//! ```
//! use etiqueta::protocol::{barcode, commands};
//!
//! let config = barcode::barcode_defaults(2, 3, 64);
//! let field = format!(
//!     "{}{}{}",
//!     commands::field_origin(16, 72),
//!     barcode::code128(barcode::Orientation::Normal, 64, true, false, false),
//!     commands::field("ABC123"),
//! );
//!
//! assert_eq!(config, "^BY2,3,64");
//! assert_eq!(field, "^FO16,72^BCN,64,Y,N,N^FDABC123^FS");
//! ```

/// Field orientation for barcode commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Normal
    #[default]
    Normal,
    /// Rotated 90 degrees clockwise
    Rotated,
    /// Inverted 180 degrees
    Inverted,
    /// Read from bottom up, 270 degrees
    Bottom,
}

impl Orientation {
    /// The single-letter ZPL code for this orientation.
    pub fn code(self) -> char {
        match self {
            Orientation::Normal => 'N',
            Orientation::Rotated => 'R',
            Orientation::Inverted => 'I',
            Orientation::Bottom => 'B',
        }
    }

    /// Parse a ZPL orientation code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(Orientation::Normal),
            'R' => Some(Orientation::Rotated),
            'I' => Some(Orientation::Inverted),
            'B' => Some(Orientation::Bottom),
            _ => None,
        }
    }
}

#[inline]
fn yes_no(flag: bool) -> char {
    if flag { 'Y' } else { 'N' }
}

/// # Barcode Field Defaults (^BY)
///
/// Sets module width, wide-to-narrow ratio and default height for the
/// barcodes that follow.
///
/// | Format | Example |
/// |--------|---------|
/// | `^BYw,r,h` | `^BY2,3,64` |
///
/// - `w`: narrow module width in dots (1-10)
/// - `r`: wide bar to narrow bar ratio (2.0-3.0; ignored by Code 128)
/// - `h`: bar height in dots
#[inline]
pub fn barcode_defaults(module_width: u32, ratio: u32, height: u32) -> String {
    format!("^BY{},{},{}", module_width, ratio, height)
}

/// # Code 128 Barcode (^BC)
///
/// Selects Code 128 for the current field.
///
/// | Format | Example |
/// |--------|---------|
/// | `^BCo,h,f,g,e` | `^BCN,64,Y,N,N` |
///
/// - `o`: orientation
/// - `h`: bar height in dots
/// - `f`: print interpretation line (human readable text)
/// - `g`: interpretation line above the code
/// - `e`: UCC check digit
#[inline]
pub fn code128(
    orientation: Orientation,
    height: u32,
    interpretation_line: bool,
    interpretation_above: bool,
    check_digit: bool,
) -> String {
    format!(
        "^BC{},{},{},{},{}",
        orientation.code(),
        height,
        yes_no(interpretation_line),
        yes_no(interpretation_above),
        yes_no(check_digit)
    )
}
