//! # Label Generation
//!
//! The two entry points used by the rest of the application: generating the
//! ZPL document for a row of labels, and querying its size without
//! generating anything.
//!
//! Both are pure. The same inputs always produce byte-identical output, and
//! the header of the generated document always matches the dimensions query.

use crate::components::{ComponentExt, LabelSheet};
use crate::fields::LabelItem;
use crate::layout::{self, Dimensions, LayoutConfig};

/// Generate the ZPL document for a row of labels.
///
/// One body block is emitted for each of the first `columns` items.
///
/// ## Example
///
/// ```
/// use etiqueta::{generate_labels, LabelItem, LayoutConfig};
///
/// let zpl = generate_labels(
///     &[LabelItem::new("ABC123", "Produto Teste")],
///     &LayoutConfig::default().column_gap_mm(0.0),
/// );
///
/// assert_eq!(
///     zpl,
///     "^XA\n\
///      ^PW320\n\
///      ^LL160\n\
///      ^CF0,20\n\
///      ^FO16,16^FB288,2,12,L,0^FDPRODUTO TESTE^FS\n\
///      ^BY2,3,64\n\
///      ^FO16,72^BCN,64,Y,N,N^FDABC123^FS\n\
///      ^XZ"
/// );
/// ```
pub fn generate_labels(items: &[LabelItem], config: &LayoutConfig) -> String {
    let sheet = LabelSheet::new(items, *config);
    let rendered = sheet.rendered_items().len();
    if rendered < items.len() {
        log::debug!(
            "dropping {} label(s) beyond {} column(s)",
            items.len() - rendered,
            config.effective_columns()
        );
    }
    sheet.build()
}

/// Size of the document [`generate_labels`] would produce, in dots.
///
/// ## Example
///
/// ```
/// use etiqueta::{query_dimensions, LayoutConfig};
///
/// let dims = query_dimensions(&LayoutConfig::new(40.0, 20.0).columns(1).column_gap_mm(3.0));
/// assert_eq!((dims.width, dims.height), (320, 160));
/// ```
pub fn query_dimensions(config: &LayoutConfig) -> Dimensions {
    layout::query_dimensions(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Program;

    #[test]
    fn test_deterministic() {
        let items = vec![
            LabelItem::new("A-1", "Arroz"),
            LabelItem::new("B-2", "Feijão"),
        ];
        let config = LayoutConfig::new(50.0, 30.0).columns(2);
        assert_eq!(
            generate_labels(&items, &config),
            generate_labels(&items, &config)
        );
    }

    #[test]
    fn test_header_matches_query() {
        let config = LayoutConfig::new(40.0, 25.0).columns(2).column_gap_mm(3.0);
        let zpl = generate_labels(&[LabelItem::new("X", "Y")], &config);
        assert_eq!(
            Program::parse(&zpl).dimensions(),
            Some(query_dimensions(&config))
        );
    }

    #[test]
    fn test_empty_items_with_three_columns() {
        let zpl = generate_labels(&[], &LayoutConfig::default().columns(3));
        assert_eq!(zpl, "^XA\n^PW1008\n^LL160\n^CF0,20\n^XZ");
        assert!(!zpl.contains("^BC"));
        assert!(!zpl.contains("^BY"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let zpl = generate_labels(&[LabelItem::default()], &LayoutConfig::default());
        assert!(zpl.contains("^FB288,2,12,L,0^FD^FS"));
        assert!(zpl.contains("^BCN,64,Y,N,N^FD^FS"));
    }

    #[test]
    fn test_negative_columns_coerced() {
        let config = LayoutConfig::default().columns(-3);
        let zpl = generate_labels(&[LabelItem::new("A", "a"), LabelItem::new("B", "b")], &config);
        assert_eq!(Program::parse(&zpl).barcode_payloads(), vec!["A"]);
        assert!(zpl.starts_with("^XA\n^PW320\n"));
    }
}
