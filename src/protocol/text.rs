//! # ZPL Text Commands
//!
//! Font selection and multi-line text blocks.
//!
//! ## Usage
//!
//! ```
//! use etiqueta::protocol::{commands, text};
//!
//! let mut zpl = String::new();
//! zpl.push_str(&text::default_font('0', 20));
//! zpl.push('\n');
//! zpl.push_str(&commands::field_origin(16, 16));
//! zpl.push_str(&text::field_block(288, 2, 12, text::Justify::Left, 0));
//! zpl.push_str(&commands::field("PRODUTO TESTE"));
//!
//! assert_eq!(zpl, "^CF0,20\n^FO16,16^FB288,2,12,L,0^FDPRODUTO TESTE^FS");
//! ```

/// Text justification inside a field block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Left aligned (default)
    #[default]
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
    /// Justified
    Justified,
}

impl Justify {
    /// The single-letter ZPL code for this justification.
    pub fn code(self) -> char {
        match self {
            Justify::Left => 'L',
            Justify::Center => 'C',
            Justify::Right => 'R',
            Justify::Justified => 'J',
        }
    }

    /// Parse a ZPL justification code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'L' => Some(Justify::Left),
            'C' => Some(Justify::Center),
            'R' => Some(Justify::Right),
            'J' => Some(Justify::Justified),
            _ => None,
        }
    }
}

/// # Change Default Font (^CF)
///
/// Selects the font used by every following text field that does not pick
/// its own.
///
/// | Format | Example |
/// |--------|---------|
/// | `^CFf,h` | `^CF0,20` |
///
/// - `f`: font name (`0` is the scalable CG Triumvirate font)
/// - `h`: character height in dots
#[inline]
pub fn default_font(font: char, height: u32) -> String {
    format!("^CF{},{}", font, height)
}

/// # Field Block (^FB)
///
/// Turns the next text field into a word-wrapped block.
///
/// | Format | Example |
/// |--------|---------|
/// | `^FBa,b,c,d,e` | `^FB288,2,12,L,0` |
///
/// - `a`: block width in dots
/// - `b`: maximum number of lines (excess text overwrites the last line)
/// - `c`: extra space between lines in dots
/// - `d`: justification
/// - `e`: hanging indent of the second and following lines
#[inline]
pub fn field_block(width: u32, max_lines: u32, line_spacing: u32, justify: Justify, hanging_indent: u32) -> String {
    format!(
        "^FB{},{},{},{},{}",
        width,
        max_lines,
        line_spacing,
        justify.code(),
        hanging_indent
    )
}
