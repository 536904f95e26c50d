//! # Label Fields
//!
//! The content of one physical label and the normalization applied before
//! it is placed into a ZPL field.
//!
//! ```
//! use etiqueta::fields::{encode_name, encode_sku};
//!
//! assert_eq!(encode_name("Produto Teste"), "PRODUTO TESTE");
//! assert_eq!(encode_sku("  abc-123 "), "abc-123");
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Maximum length of the encoded name, ellipsis included.
pub const MAX_NAME_CHARS: usize = 60;

/// Marker that replaces the tail of a truncated name.
pub const ELLIPSIS: &str = "...";

/// Content of one label.
///
/// Missing or `null` fields deserialize to empty strings:
///
/// ```
/// use etiqueta::fields::LabelItem;
///
/// let item: LabelItem = serde_json::from_str(r#"{"sku": null}"#).unwrap();
/// assert_eq!(item, LabelItem::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelItem {
    /// Stock keeping unit, also the barcode payload.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub sku: String,
    /// Product name.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
}

impl LabelItem {
    pub fn new(sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
        }
    }

    /// Name as it is printed.
    pub fn encoded_name(&self) -> String {
        encode_name(&self.name)
    }

    /// SKU as it is printed and encoded in the barcode.
    pub fn encoded_sku(&self) -> String {
        encode_sku(&self.sku)
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Replace line breaks with spaces. Each ZPL command group sits on its own
/// line, so field data must stay on one.
fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

/// Truncate a product name to [`MAX_NAME_CHARS`] and upper-case it.
///
/// Line breaks become spaces first. Names longer than the limit keep their
/// first 57 characters followed by [`ELLIPSIS`]. Length is counted in
/// characters, not bytes.
pub fn encode_name(name: &str) -> String {
    let name = single_line(name);
    let truncated = if name.chars().count() > MAX_NAME_CHARS {
        let keep = MAX_NAME_CHARS - ELLIPSIS.len();
        let mut out: String = name.chars().take(keep).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        name
    };
    truncated.to_uppercase()
}

/// Trim surrounding whitespace from a SKU, with inner line breaks turned
/// into spaces. Case is preserved since the SKU is also the barcode payload.
pub fn encode_sku(sku: &str) -> String {
    single_line(sku).trim().to_string()
}
