//! # Geometry Properties
//!
//! Sweeps a grid of layouts and checks the invariants that tie the ZPL
//! header, the dimensions query and the preview together.

use etiqueta::ir::Program;
use etiqueta::preview::{PreviewRenderer, layout_slots};
use etiqueta::{LabelItem, LayoutConfig, compute_geometry, generate_labels, query_dimensions};

const WIDTHS_MM: &[f64] = &[0.0, 1.0, 3.9, 4.0, 25.0, 40.0, 50.8, 62.5, 101.6];
const HEIGHTS_MM: &[f64] = &[0.0, 5.0, 12.7, 20.0, 25.0, 30.0, 76.2];
const COLUMNS: &[i32] = &[-2, 0, 1, 2, 3, 5];
const GAPS_MM: &[f64] = &[-1.0, 0.0, 0.3125, 2.0, 3.0, 4.75];

/// Every layout in the sweep.
fn layouts() -> impl Iterator<Item = LayoutConfig> {
    WIDTHS_MM.iter().flat_map(|&w| {
        HEIGHTS_MM.iter().flat_map(move |&h| {
            COLUMNS.iter().flat_map(move |&c| {
                GAPS_MM
                    .iter()
                    .map(move |&g| LayoutConfig::new(w, h).columns(c).column_gap_mm(g))
            })
        })
    })
}

/// A smaller sweep for the preview, which rasterizes every layout.
fn preview_layouts() -> impl Iterator<Item = LayoutConfig> {
    [0.0, 3.9, 40.0, 50.8].into_iter().flat_map(|w| {
        [0.0, 5.0, 20.0].into_iter().flat_map(move |h| {
            [0, 1, 3].into_iter().flat_map(move |c| {
                [-1.0, 3.0]
                    .into_iter()
                    .map(move |g| LayoutConfig::new(w, h).columns(c).column_gap_mm(g))
            })
        })
    })
}

fn items(n: usize) -> Vec<LabelItem> {
    (0..n)
        .map(|i| LabelItem::new(format!("SKU-{}", i), format!("Produto {}", i)))
        .collect()
}

#[test]
fn test_header_always_matches_dimensions_query() {
    let items = items(4);
    for config in layouts() {
        let zpl = generate_labels(&items, &config);
        assert_eq!(
            Program::parse(&zpl).dimensions(),
            Some(query_dimensions(&config)),
            "{:?}",
            config
        );
    }
}

#[test]
fn test_line_breaks_in_fields_cannot_change_header() {
    let items = vec![
        LabelItem::new("A1\n^PW8\n", "leite\n^PW8\nintegral"),
        LabelItem::new("B2", "arroz\r\n^LL8\r\ntipo 1"),
    ];
    for config in layouts() {
        let zpl = generate_labels(&items, &config);
        let program = Program::parse(&zpl);
        assert_eq!(program.dimensions(), Some(query_dimensions(&config)), "{:?}", config);

        let expected = items.len().min(config.effective_columns() as usize);
        assert_eq!(program.text_block_count(), expected, "{:?}", config);
        assert_eq!(program.barcode_count(), expected, "{:?}", config);
    }
}

#[test]
fn test_geometry_invariants() {
    for config in layouts() {
        let g = compute_geometry(&config);
        let c = g.columns;

        assert!(c >= 1);
        assert_eq!(
            g.total_width_dots,
            g.column_width_dots * c + g.gap_dots * (c - 1),
            "{:?}",
            config
        );
        if c == 1 {
            assert_eq!(g.gap_dots, 0, "{:?}", config);
        }
        assert!(g.text_box_width_dots >= 1, "{:?}", config);
        assert!(g.barcode_top_dots >= g.top_padding_dots + 32, "{:?}", config);
        assert_eq!(g.column_offset(0), 0);
    }
}

#[test]
fn test_body_block_count_is_min_of_items_and_columns() {
    for n in 0..5 {
        let items = items(n);
        for config in layouts() {
            let program = Program::parse(&generate_labels(&items, &config));
            let expected = n.min(config.effective_columns() as usize);
            assert_eq!(program.text_block_count(), expected, "{} items, {:?}", n, config);
            assert_eq!(program.barcode_count(), expected, "{} items, {:?}", n, config);
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let items = items(3);
    for config in layouts() {
        assert_eq!(generate_labels(&items, &config), generate_labels(&items, &config));
        assert_eq!(compute_geometry(&config), compute_geometry(&config));
    }
}

#[test]
fn test_document_is_bracketed() {
    let items = items(2);
    for config in layouts() {
        let zpl = generate_labels(&items, &config);
        assert!(zpl.starts_with("^XA\n"));
        assert!(zpl.ends_with("\n^XZ"));
    }
}

#[test]
fn test_preview_matches_dimensions_query() {
    let items = items(1);
    for config in preview_layouts() {
        let dims = query_dimensions(&config);
        let Ok(renderer) = PreviewRenderer::new(&config) else {
            // Zero-area layouts have nothing to preview
            assert!(dims.width == 0 || dims.height == 0, "{:?}", config);
            continue;
        };
        let img = renderer.render(&items);
        assert_eq!((img.width(), img.height()), (dims.width, dims.height), "{:?}", config);
    }
}

#[test]
fn test_preview_slots_cover_every_column() {
    let items = items(2);
    for config in layouts() {
        let slots: Vec<_> = layout_slots(&items, &config).collect();
        let columns = config.effective_columns() as usize;
        assert_eq!(slots.len(), columns);
        assert_eq!(
            slots.iter().filter(|s| !s.is_placeholder()).count(),
            items.len().min(columns)
        );
    }
}
