//! # Label Preview Renderer
//!
//! Renders a row of labels to a PNG with one pixel per printer dot, so the
//! image is exactly the size [`query_dimensions`](crate::layout::query_dimensions)
//! reports for the same layout.
//!
//! ## Architecture
//!
//! ```text
//! LayoutConfig ──► compute_geometry ──► slots (filled / placeholder)
//!                                            │
//!                                            ▼
//!                       PreviewRenderer ──► GrayImage ──► PNG bytes
//! ```
//!
//! Unlike the ZPL document, which simply omits empty columns, the preview
//! draws a dashed placeholder for every column without an item.
//!
//! ## Example
//!
//! ```
//! use etiqueta::fields::LabelItem;
//! use etiqueta::layout::LayoutConfig;
//! use etiqueta::preview::render_preview;
//!
//! let png = render_preview(
//!     &[LabelItem::new("ABC123", "Produto Teste")],
//!     &LayoutConfig::default().columns(2),
//! )
//! .unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```

mod barcode;
mod font;

pub use font::{GLYPH_HEIGHT, GLYPH_WIDTH, generate_glyph, wrap_lines};

use image::{GrayImage, Luma};
use thiserror::Error;

use crate::components::{BARCODE_MODULE_WIDTH, NAME_MAX_LINES};
use crate::fields::LabelItem;
use crate::layout::{Geometry, LayoutConfig, compute_geometry};

use barcode::encode_code128;

/// Largest preview we agree to allocate, in pixels.
pub const MAX_PREVIEW_PIXELS: u64 = 32 * 1024 * 1024;

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);
/// Liner between adjacent labels.
const GAP_GRAY: Luma<u8> = Luma([210]);
/// Placeholder outline.
const PLACEHOLDER_GRAY: Luma<u8> = Luma([150]);

const DASH_ON: u32 = 6;
const DASH_OFF: u32 = 4;
/// Space between the barcode and its interpretation line.
const INTERPRETATION_GAP: u32 = 2;

/// Errors that can occur during preview rendering.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Label has no printable area ({width}x{height} dots)")]
    Empty { width: u32, height: u32 },

    #[error("Preview too large: {width}x{height} dots")]
    TooLarge { width: u32, height: u32 },

    #[error("Image encoding error: {0}")]
    ImageEncode(String),
}

/// One column of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    /// Column index, 0-based.
    pub column: u32,
    /// Left edge of the column in dots.
    pub x: u32,
    /// The item printed in this column, `None` for a placeholder.
    pub item: Option<&'a LabelItem>,
}

impl Slot<'_> {
    pub fn is_placeholder(&self) -> bool {
        self.item.is_none()
    }
}

/// Every column of the row, in order, with the item it shows.
///
/// Items are assigned to columns in order; items beyond the column count are
/// dropped, and columns beyond the item count are placeholders.
pub fn layout_slots<'a>(
    items: &'a [LabelItem],
    config: &LayoutConfig,
) -> impl Iterator<Item = Slot<'a>> + use<'a> {
    let geometry = compute_geometry(config);
    (0..geometry.columns).map(move |column| Slot {
        column,
        x: geometry.column_offset(column),
        item: items.get(column as usize),
    })
}

/// Render a row of labels to PNG bytes.
pub fn render_preview(items: &[LabelItem], config: &LayoutConfig) -> Result<Vec<u8>, PreviewError> {
    let image = PreviewRenderer::new(config)?.render(items);
    encode_png(&image)
}

/// Rasterizes label rows onto a grayscale canvas.
pub struct PreviewRenderer {
    config: LayoutConfig,
    geometry: Geometry,
}

impl PreviewRenderer {
    /// Prepare a renderer, refusing empty or oversized canvases.
    pub fn new(config: &LayoutConfig) -> Result<Self, PreviewError> {
        let geometry = compute_geometry(config);
        let (width, height) = (geometry.total_width_dots, geometry.height_dots);

        if width == 0 || height == 0 {
            return Err(PreviewError::Empty { width, height });
        }
        if width as u64 * height as u64 > MAX_PREVIEW_PIXELS {
            return Err(PreviewError::TooLarge { width, height });
        }

        Ok(Self {
            config: *config,
            geometry,
        })
    }

    /// Render the row to an image the size of the printed label row.
    pub fn render(&self, items: &[LabelItem]) -> GrayImage {
        let g = &self.geometry;
        let mut img = GrayImage::from_pixel(g.total_width_dots, g.height_dots, WHITE);

        for slot in layout_slots(items, &self.config) {
            if slot.column > 0 {
                fill_rect(&mut img, slot.x - g.gap_dots, 0, g.gap_dots, g.height_dots, GAP_GRAY);
            }
            match slot.item {
                Some(item) => self.draw_label(&mut img, slot.x, item),
                None => self.draw_placeholder(&mut img, slot.x),
            }
        }

        img
    }

    fn draw_label(&self, img: &mut GrayImage, column_x: u32, item: &LabelItem) {
        let g = &self.geometry;
        let x = column_x + g.horizontal_padding_dots;
        let right_edge = x + g.text_box_width_dots;

        let lines = wrap_lines(&item.encoded_name(), g.text_box_width_dots, NAME_MAX_LINES as usize);
        let line_pitch = GLYPH_HEIGHT as u32 + g.line_spacing_dots;
        for (i, line) in lines.iter().enumerate() {
            let y = g.top_padding_dots + i as u32 * line_pitch;
            draw_text(img, x, y, line, right_edge);
        }

        let sku = item.encoded_sku();
        let bars = encode_code128(&sku, BARCODE_MODULE_WIDTH as usize);
        for (dx, &is_bar) in bars.iter().enumerate() {
            if is_bar {
                fill_rect(img, x + dx as u32, g.barcode_top_dots, 1, g.barcode_height_dots, BLACK);
            }
        }

        // Interpretation line, centered under the bars like ^BC...,Y,N
        let text_width = (sku.chars().count() * GLYPH_WIDTH) as u32;
        let bars_width = bars.len() as u32;
        let text_x = x + bars_width.saturating_sub(text_width) / 2;
        let text_y = g.barcode_top_dots + g.barcode_height_dots + INTERPRETATION_GAP;
        draw_text(img, text_x, text_y, &sku, column_x + g.column_width_dots);
    }

    fn draw_placeholder(&self, img: &mut GrayImage, column_x: u32) {
        let g = &self.geometry;
        let inset = g.horizontal_padding_dots / 2;
        let left = column_x + inset;
        let right = (column_x + g.column_width_dots).saturating_sub(inset + 1);
        let top = inset;
        let bottom = g.height_dots.saturating_sub(inset + 1);
        if right <= left || bottom <= top {
            return;
        }

        for x in left..=right {
            if dash_on(x - left) {
                put(img, x, top, PLACEHOLDER_GRAY);
                put(img, x, bottom, PLACEHOLDER_GRAY);
            }
        }
        for y in top..=bottom {
            if dash_on(y - top) {
                put(img, left, y, PLACEHOLDER_GRAY);
                put(img, right, y, PLACEHOLDER_GRAY);
            }
        }
    }
}

#[inline]
fn dash_on(offset: u32) -> bool {
    offset % (DASH_ON + DASH_OFF) < DASH_ON
}

/// Set a pixel, ignoring coordinates outside the image.
#[inline]
fn put(img: &mut GrayImage, x: u32, y: u32, color: Luma<u8>) {
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}

fn fill_rect(img: &mut GrayImage, x: u32, y: u32, width: u32, height: u32, color: Luma<u8>) {
    let x_end = x.saturating_add(width).min(img.width());
    let y_end = y.saturating_add(height).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Draw a line of text, clipping glyph columns at `right_edge`.
fn draw_text(img: &mut GrayImage, x: u32, y: u32, text: &str, right_edge: u32) {
    for (i, ch) in text.chars().enumerate() {
        let gx = x + (i * GLYPH_WIDTH) as u32;
        if gx >= right_edge {
            break;
        }
        let glyph = generate_glyph(ch);
        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                let px = gx + col as u32;
                if glyph[row * GLYPH_WIDTH + col] != 0 && px < right_edge {
                    put(img, px, y + row as u32, BLACK);
                }
            }
        }
    }
}

fn encode_png(img: &GrayImage) -> Result<Vec<u8>, PreviewError> {
    let mut png_bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut png_bytes),
        image::ImageFormat::Png,
    )
    .map_err(|e| PreviewError::ImageEncode(e.to_string()))?;
    Ok(png_bytes)
}

// ============================================================================
// TESTS
// ============================================================================
