//! # ZPL Reader
//!
//! Recovers an IR program from ZPL text. The reader understands the command
//! groups that codegen emits, one per line; anything else is preserved
//! verbatim as [`Op::Raw`], so reading never fails.

use super::ops::{Op, Program};
use crate::protocol::barcode::Orientation;
use crate::protocol::text::Justify;

impl Program {
    /// Read ZPL text into a program.
    ///
    /// ## Example
    ///
    /// ```
    /// use etiqueta::ir::{Op, Program};
    /// use etiqueta::layout::Dimensions;
    ///
    /// let program = Program::parse("^XA\n^PW320\n^LL160\n^XZ");
    /// assert_eq!(program.ops[1], Op::PrintWidth(320));
    /// assert_eq!(program.dimensions(), Some(Dimensions { width: 320, height: 160 }));
    /// ```
    pub fn parse(zpl: &str) -> Self {
        let ops = zpl
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(parse_line)
            .collect();
        Program { ops }
    }
}

/// Read one line of ZPL.
pub fn parse_line(line: &str) -> Op {
    match line {
        "^XA" => return Op::StartFormat,
        "^XZ" => return Op::EndFormat,
        _ => {}
    }

    let parsed = if let Some(rest) = line.strip_prefix("^PW") {
        rest.parse().ok().map(Op::PrintWidth)
    } else if let Some(rest) = line.strip_prefix("^LL") {
        rest.parse().ok().map(Op::LabelLength)
    } else if let Some(rest) = line.strip_prefix("^CF") {
        parse_default_font(rest)
    } else if let Some(rest) = line.strip_prefix("^BY") {
        parse_barcode_defaults(rest)
    } else if let Some(rest) = line.strip_prefix("^FO") {
        parse_field(rest)
    } else {
        None
    };

    parsed.unwrap_or_else(|| Op::Raw(line.to_string()))
}

/// Split `a,b,c` into exactly `N` parts.
fn params<const N: usize>(s: &str) -> Option<[&str; N]> {
    let parts: Vec<&str> = s.split(',').collect();
    parts.try_into().ok()
}

fn parse_u32(s: &str) -> Option<u32> {
    s.parse().ok()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn parse_flag(s: &str) -> Option<bool> {
    match s {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

fn parse_default_font(rest: &str) -> Option<Op> {
    let [font, height] = params::<2>(rest)?;
    Some(Op::DefaultFont {
        font: single_char(font)?,
        height: parse_u32(height)?,
    })
}

fn parse_barcode_defaults(rest: &str) -> Option<Op> {
    let [module_width, ratio, height] = params::<3>(rest)?;
    Some(Op::BarcodeDefaults {
        module_width: parse_u32(module_width)?,
        ratio: parse_u32(ratio)?,
        height: parse_u32(height)?,
    })
}

/// `x,y^XXparams^FDdata^FS` after the leading `^FO`.
fn parse_field(rest: &str) -> Option<Op> {
    let body = rest.strip_suffix("^FS")?;
    let (head, data) = body.split_once("^FD")?;
    let (origin, modifier) = head.split_once('^')?;

    let [x, y] = params::<2>(origin)?;
    let (x, y) = (parse_u32(x)?, parse_u32(y)?);
    let data = data.to_string();

    if let Some(block) = modifier.strip_prefix("FB") {
        let [width, max_lines, line_spacing, justify, indent] = params::<5>(block)?;
        // Hanging indents are not modeled; keep such lines raw.
        if parse_u32(indent)? != 0 {
            return None;
        }
        Some(Op::TextBlock {
            x,
            y,
            width: parse_u32(width)?,
            max_lines: parse_u32(max_lines)?,
            line_spacing: parse_u32(line_spacing)?,
            justify: Justify::from_code(single_char(justify)?)?,
            data,
        })
    } else if let Some(code) = modifier.strip_prefix("BC") {
        let [orientation, height, line, above, check] = params::<5>(code)?;
        Some(Op::Code128 {
            x,
            y,
            orientation: Orientation::from_code(single_char(orientation)?)?,
            height: parse_u32(height)?,
            interpretation_line: parse_flag(line)?,
            interpretation_above: parse_flag(above)?,
            check_digit: parse_flag(check)?,
            data,
        })
    } else {
        None
    }
}
