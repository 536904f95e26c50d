//! # ZPL Format and Field Commands
//!
//! This module implements the structural ZPL II commands: the format
//! brackets, label dimensions, and the field primitives every text or
//! barcode block is built from.
//!
//! ## Protocol Overview
//!
//! ZPL is a plain ASCII command language. Every command starts with the
//! caret `^` followed by a two-letter mnemonic and comma-separated decimal
//! parameters. A label format is bracketed by `^XA` ... `^XZ`. Inside it,
//! each printable element is a *field*:
//!
//! ```text
//! ^FO<x>,<y>   field origin (top-left corner, in dots)
//! <modifiers>  e.g. ^FB (text block) or ^BC (barcode type)
//! ^FD<data>    field data
//! ^FS          field separator (closes the field)
//! ```
//!
//! ## Units
//!
//! All numeric parameters are dots at the printer resolution
//! (8 dots/mm for 203 DPI printers).
//!
//! ## Reference
//!
//! Based on the "ZPL II Programming Guide" by Zebra Technologies.

// ============================================================================
// FORMAT BRACKETS
// ============================================================================

/// # Start Format (^XA)
///
/// Opens a label format. Every command up to the matching `^XZ` belongs to
/// the same label.
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::commands;
///
/// assert_eq!(commands::start_format(), "^XA");
/// ```
#[inline]
pub fn start_format() -> String {
    "^XA".to_string()
}

/// # End Format (^XZ)
///
/// Closes the label format and triggers printing.
#[inline]
pub fn end_format() -> String {
    "^XZ".to_string()
}

// ============================================================================
// LABEL DIMENSIONS
// ============================================================================

/// # Print Width (^PW)
///
/// Sets the printable width of the label in dots.
///
/// | Format | Example |
/// |--------|---------|
/// | `^PWa` | `^PW664` |
///
/// ## Example
///
/// ```
/// use etiqueta::protocol::commands;
///
/// assert_eq!(commands::print_width(320), "^PW320");
/// ```
#[inline]
pub fn print_width(dots: u32) -> String {
    format!("^PW{}", dots)
}

/// # Label Length (^LL)
///
/// Sets the length of the label (feed direction) in dots.
///
/// | Format | Example |
/// |--------|---------|
/// | `^LLy` | `^LL160` |
#[inline]
pub fn label_length(dots: u32) -> String {
    format!("^LL{}", dots)
}

// ============================================================================
// FIELD PRIMITIVES
// ============================================================================

/// # Field Origin (^FO)
///
/// Positions the upper-left corner of the next field, relative to the label
/// home position.
///
/// | Format | Example |
/// |--------|---------|
/// | `^FOx,y` | `^FO16,16` |
#[inline]
pub fn field_origin(x: u32, y: u32) -> String {
    format!("^FO{},{}", x, y)
}

/// # Field Data (^FD)
///
/// Carries the content of the current field. The data runs until the next
/// `^FS`.
#[inline]
pub fn field_data(data: &str) -> String {
    format!("^FD{}", data)
}

/// # Field Separator (^FS)
///
/// Closes the current field.
#[inline]
pub fn field_separator() -> String {
    "^FS".to_string()
}

/// Field data immediately followed by its separator (`^FD<data>^FS`).
#[inline]
pub fn field(data: &str) -> String {
    format!("{}{}", field_data(data), field_separator())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brackets() {
        assert_eq!(start_format(), "^XA");
        assert_eq!(end_format(), "^XZ");
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(print_width(664), "^PW664");
        assert_eq!(label_length(200), "^LL200");
        assert_eq!(print_width(0), "^PW0");
    }

    #[test]
    fn test_field_origin() {
        assert_eq!(field_origin(16, 72), "^FO16,72");
        assert_eq!(field_origin(0, 0), "^FO0,0");
    }

    #[test]
    fn test_field_data_and_separator() {
        assert_eq!(field_data("ABC123"), "^FDABC123");
        assert_eq!(field_separator(), "^FS");
        assert_eq!(field("ABC123"), "^FDABC123^FS");
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(field(""), "^FD^FS");
    }

    #[test]
    fn test_every_command_starts_with_caret() {
        for cmd in [
            start_format(),
            end_format(),
            print_width(1),
            label_length(1),
            field_origin(1, 1),
            field_data("x"),
            field_separator(),
        ] {
            assert!(cmd.starts_with('^'), "{} lacks the caret prefix", cmd);
        }
    }
}
