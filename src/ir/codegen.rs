//! # Code Generation
//!
//! Converts IR programs to ZPL text.

use super::ops::{Op, Program};
use crate::protocol::{barcode, commands, text};

impl Op {
    /// Compile a single op to its line of ZPL.
    pub fn to_zpl(&self) -> String {
        match self {
            // ===== Format =====
            Op::StartFormat => commands::start_format(),
            Op::EndFormat => commands::end_format(),

            // ===== Label Setup =====
            Op::PrintWidth(dots) => commands::print_width(*dots),
            Op::LabelLength(dots) => commands::label_length(*dots),
            Op::DefaultFont { font, height } => text::default_font(*font, *height),

            // ===== Fields =====
            Op::TextBlock {
                x,
                y,
                width,
                max_lines,
                line_spacing,
                justify,
                data,
            } => format!(
                "{}{}{}",
                commands::field_origin(*x, *y),
                text::field_block(*width, *max_lines, *line_spacing, *justify, 0),
                commands::field(data)
            ),
            Op::BarcodeDefaults {
                module_width,
                ratio,
                height,
            } => barcode::barcode_defaults(*module_width, *ratio, *height),
            Op::Code128 {
                x,
                y,
                orientation,
                height,
                interpretation_line,
                interpretation_above,
                check_digit,
                data,
            } => format!(
                "{}{}{}",
                commands::field_origin(*x, *y),
                barcode::code128(
                    *orientation,
                    *height,
                    *interpretation_line,
                    *interpretation_above,
                    *check_digit
                ),
                commands::field(data)
            ),

            // ===== Passthrough =====
            Op::Raw(line) => line.clone(),
        }
    }
}

impl Program {
    /// Compile the program to ZPL text: one line per op, joined by `\n`,
    /// without a trailing newline.
    pub fn to_zpl(&self) -> String {
        self.ops
            .iter()
            .map(Op::to_zpl)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
