//! # Label Components
//!
//! [`Label`] emits the three-line block for one column; [`LabelSheet`]
//! emits the header and one block per rendered column.
//!
//! ## Document Shape
//!
//! ```text
//! ^XA                                  START
//! ^PW<total width>  ^LL<height>  ^CF   HEADER
//! ^FO..^FB..^FD<NAME>^FS               ┐
//! ^BY2,3,<barcode height>              │ BODY_BLOCK x min(items, columns)
//! ^FO..^BCN,..^FD<SKU>^FS              ┘
//! ^XZ                                  FOOTER
//! ```

use super::Component;
use crate::fields::LabelItem;
use crate::ir::Op;
use crate::layout::{Geometry, LayoutConfig, compute_geometry};
use crate::protocol::barcode::Orientation;
use crate::protocol::text::Justify;

/// Scalable ZPL font used for the product name.
pub const NAME_FONT: char = '0';
/// Character height of the product name in dots.
pub const NAME_FONT_HEIGHT_DOTS: u32 = 20;
/// Lines the product name may wrap to.
pub const NAME_MAX_LINES: u32 = 2;
/// Narrow bar width of the SKU barcode in dots.
pub const BARCODE_MODULE_WIDTH: u32 = 2;
/// Wide to narrow bar ratio of the SKU barcode.
pub const BARCODE_RATIO: u32 = 3;

/// One label: the name block and SKU barcode in a single column.
pub struct Label {
    name: String,
    sku: String,
    column: u32,
    geometry: Geometry,
}

impl Label {
    /// Place `item` in column `column` of a row with the given geometry.
    pub fn new(item: &LabelItem, column: u32, geometry: Geometry) -> Self {
        Self {
            name: item.encoded_name(),
            sku: item.encoded_sku(),
            column,
            geometry,
        }
    }
}

impl Component for Label {
    fn emit(&self, ops: &mut Vec<Op>) {
        let g = &self.geometry;
        let x = g.content_x(self.column);

        ops.push(Op::TextBlock {
            x,
            y: g.top_padding_dots,
            width: g.text_box_width_dots,
            max_lines: NAME_MAX_LINES,
            line_spacing: g.line_spacing_dots,
            justify: Justify::Left,
            data: self.name.clone(),
        });
        ops.push(Op::BarcodeDefaults {
            module_width: BARCODE_MODULE_WIDTH,
            ratio: BARCODE_RATIO,
            height: g.barcode_height_dots,
        });
        ops.push(Op::Code128 {
            x,
            y: g.barcode_top_dots,
            orientation: Orientation::Normal,
            height: g.barcode_height_dots,
            interpretation_line: true,
            interpretation_above: false,
            check_digit: false,
            data: self.sku.clone(),
        });
    }
}

/// A row of labels printed side by side.
///
/// Items beyond the configured column count are dropped; columns without an
/// item are left blank.
pub struct LabelSheet<'a> {
    items: &'a [LabelItem],
    config: LayoutConfig,
}

impl<'a> LabelSheet<'a> {
    pub fn new(items: &'a [LabelItem], config: LayoutConfig) -> Self {
        Self { items, config }
    }

    /// Geometry of the row.
    pub fn geometry(&self) -> Geometry {
        compute_geometry(&self.config)
    }

    /// Items that get a body block, in column order.
    pub fn rendered_items(&self) -> &'a [LabelItem] {
        let columns = self.config.effective_columns() as usize;
        &self.items[..self.items.len().min(columns)]
    }
}

impl Component for LabelSheet<'_> {
    fn emit(&self, ops: &mut Vec<Op>) {
        let geometry = self.geometry();

        ops.push(Op::PrintWidth(geometry.total_width_dots));
        ops.push(Op::LabelLength(geometry.height_dots));
        ops.push(Op::DefaultFont {
            font: NAME_FONT,
            height: NAME_FONT_HEIGHT_DOTS,
        });

        for (column, item) in self.rendered_items().iter().enumerate() {
            Label::new(item, column as u32, geometry).emit(ops);
        }
    }
}
