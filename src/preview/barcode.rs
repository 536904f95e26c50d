//! Barcode encoding for preview rendering.
//!
//! Uses the barcoders crate for Code 128 encoding.

use barcoders::sym::code128::Code128;

/// Encode data as Code 128 barcode bars, `module_width` dots per module.
/// Returns a Vec<bool> where true = bar (black), false = space (white).
///
/// Data Code 128 cannot carry (empty, non-ASCII) yields no bars.
pub fn encode_code128(data: &str, module_width: usize) -> Vec<bool> {
    if data.is_empty() {
        return Vec::new();
    }

    // Character Set B covers upper and lower case letters, digits and
    // punctuation, which is what SKUs are made of.
    let prefixed_data = format!("\u{0181}{}", data);

    let barcode = match Code128::new(&prefixed_data) {
        Ok(b) => b,
        Err(_) => return Vec::new(),
    };

    let encoded = barcode.encode();

    let mut bars = Vec::with_capacity(encoded.len() * module_width);
    for &module in &encoded {
        let is_bar = module == 1;
        for _ in 0..module_width {
            bars.push(is_bar);
        }
    }

    bars
}
