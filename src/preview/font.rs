//! Glyphs and line wrapping for preview rendering.
//!
//! Uses the Spleen 12x24 bitmap font scaled to the 10x20 cell the printed
//! name approximately occupies (`^CF0,20`).

use spleen_font::{FONT_12X24, PSF2Font};

/// Preview glyph cell width in dots.
pub const GLYPH_WIDTH: usize = 10;
/// Preview glyph cell height in dots.
pub const GLYPH_HEIGHT: usize = 20;

const SPLEEN_WIDTH: usize = 12;
const SPLEEN_HEIGHT: usize = 24;

/// Generate a glyph bitmap for a character.
/// Returns `GLYPH_WIDTH * GLYPH_HEIGHT` bytes, each 0 (white) or 1 (black).
pub fn generate_glyph(ch: char) -> Vec<u8> {
    let mut glyph = vec![0u8; GLYPH_WIDTH * GLYPH_HEIGHT];
    if ch == ' ' {
        return glyph;
    }

    let mut src = vec![0u8; SPLEEN_WIDTH * SPLEEN_HEIGHT];
    let found = match PSF2Font::new(FONT_12X24) {
        Ok(mut spleen) => {
            let utf8 = ch.to_string();
            match spleen.glyph_for_utf8(utf8.as_bytes()) {
                Some(rows) => {
                    for (row_y, row) in rows.enumerate() {
                        for (col_x, on) in row.enumerate() {
                            if row_y < SPLEEN_HEIGHT && col_x < SPLEEN_WIDTH {
                                src[row_y * SPLEEN_WIDTH + col_x] = on as u8;
                            }
                        }
                    }
                    true
                }
                None => false,
            }
        }
        Err(_) => false,
    };

    if found {
        scale_bitmap(&src, SPLEEN_WIDTH, SPLEEN_HEIGHT, &mut glyph, GLYPH_WIDTH, GLYPH_HEIGHT);
    } else {
        // Unknown characters render as a box
        draw_box(&mut glyph, GLYPH_WIDTH, GLYPH_HEIGHT);
    }
    glyph
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(src: &[u8], src_w: usize, src_h: usize, dst: &mut [u8], dst_w: usize, dst_h: usize) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            dst[dy * dst_w + dx] = src[sy * src_w + sx];
        }
    }
}

/// Draw a box outline in the glyph buffer.
fn draw_box(glyph: &mut [u8], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = 1;
        glyph[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        glyph[y * width] = 1;
        glyph[y * width + width - 1] = 1;
    }
}

/// Word-wrap `text` into at most `max_lines` lines of `width_dots`.
///
/// Mirrors how `^FB` fills a block: words move to the next line when they
/// do not fit, words longer than a line are split, and whatever does not fit
/// in the last line is cut off.
pub fn wrap_lines(text: &str, width_dots: u32, max_lines: usize) -> Vec<String> {
    let per_line = (width_dots as usize / GLYPH_WIDTH).max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        loop {
            let used = current.chars().count();
            let needed = if used == 0 { word.len() } else { used + 1 + word.len() };
            if needed <= per_line {
                if used > 0 {
                    current.push(' ');
                }
                current.extend(word.iter());
                break;
            }
            if used > 0 {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            // Word alone is too long for a line
            let rest = word.split_off(per_line);
            lines.push(word.iter().collect());
            word = rest;
            if word.is_empty() {
                break;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.truncate(max_lines);
    lines
}
