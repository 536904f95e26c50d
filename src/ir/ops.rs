//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for label
//! printing. The IR is a sequence of opcodes that can be inspected, compiled
//! to ZPL text, and recovered from ZPL text.
//!
//! ## Design Philosophy
//!
//! ```text
//! Components → IR (inspectable) → Codegen → ZPL text
//!                     ▲
//! ZPL text ──► Parser ┘
//! ```
//!
//! Each opcode compiles to exactly one line of ZPL. Fields (origin, modifiers,
//! data, separator) are kept together in a single op since they are only
//! meaningful as a unit.

use crate::layout::Dimensions;
use crate::protocol::barcode::Orientation;
use crate::protocol::text::Justify;

/// IR opcodes - one line of ZPL each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // ========== Format ==========
    /// Open the label format (^XA).
    StartFormat,

    /// Close the label format (^XZ).
    EndFormat,

    // ========== Label Setup ==========
    /// Printable width in dots (^PW).
    PrintWidth(u32),

    /// Label length in dots (^LL).
    LabelLength(u32),

    /// Default font for text fields (^CF).
    DefaultFont { font: char, height: u32 },

    // ========== Fields ==========
    /// Word-wrapped text field (^FO + ^FB + ^FD/^FS).
    TextBlock {
        x: u32,
        y: u32,
        width: u32,
        max_lines: u32,
        line_spacing: u32,
        justify: Justify,
        data: String,
    },

    /// Barcode defaults for following barcodes (^BY).
    BarcodeDefaults {
        module_width: u32,
        ratio: u32,
        height: u32,
    },

    /// Code 128 barcode field (^FO + ^BC + ^FD/^FS).
    Code128 {
        x: u32,
        y: u32,
        orientation: Orientation,
        height: u32,
        interpretation_line: bool,
        interpretation_above: bool,
        check_digit: bool,
        data: String,
    },

    // ========== Passthrough ==========
    /// A line of ZPL the IR does not model.
    Raw(String),
}

impl Op {
    /// Whether this op places a field on the label.
    pub fn is_field(&self) -> bool {
        match self {
            Op::TextBlock { .. } | Op::Code128 { .. } => true,
            Op::Raw(line) => line.starts_with("^FO"),
            _ => false,
        }
    }
}

/// A sequence of IR ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an op.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Number of ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Label size declared by the `^PW` / `^LL` header.
    ///
    /// Only the header is read: the first of each command before the first
    /// field. Returns `None` unless both are present there.
    pub fn dimensions(&self) -> Option<Dimensions> {
        let mut width = None;
        let mut height = None;
        for op in self.ops.iter().take_while(|op| !op.is_field()) {
            match op {
                Op::PrintWidth(w) => width = width.or(Some(*w)),
                Op::LabelLength(h) => height = height.or(Some(*h)),
                _ => {}
            }
        }
        Some(Dimensions {
            width: width?,
            height: height?,
        })
    }

    /// Number of text block fields.
    pub fn text_block_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::TextBlock { .. }))
            .count()
    }

    /// Number of barcode fields.
    pub fn barcode_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Code128 { .. }))
            .count()
    }

    /// Payloads of all barcode fields, in order.
    pub fn barcode_payloads(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Code128 { data, .. } => Some(data.as_str()),
                _ => None,
            })
            .collect()
    }
}
