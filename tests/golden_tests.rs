//! # Golden Tests
//!
//! These tests ensure that label generation produces byte-identical ZPL.
//!
//! ## Test Coverage
//!
//! - **ZPL tests** (`.zpl`): documents generated from the JSON jobs next to
//!   them in `tests/golden/`.
//! - **Inline scenarios**: small documents spelled out in full.
//!
//! ## Regenerating Golden Files
//!
//! ```bash
//! cargo test --test golden_tests generate_golden_files -- --ignored --nocapture
//! ```

use etiqueta::ir::Program;
use etiqueta::job::LabelJob;
use etiqueta::{LabelItem, LayoutConfig, generate_labels, query_dimensions};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

/// Path to golden test directory
const GOLDEN_DIR: &str = "tests/golden";

/// Jobs with a golden document
const GOLDEN_JOBS: &[&str] = &["two_column"];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn load_job(name: &str) -> LabelJob {
    let path = format!("{}/{}.json", GOLDEN_DIR, name);
    LabelJob::from_file(Path::new(&path)).expect("Invalid golden job JSON")
}

/// Compare generated text against a golden file
fn check_golden(name: &str, zpl: &str) {
    let path = format!("{}/{}.zpl", GOLDEN_DIR, name);
    let golden = fs::read_to_string(&path).unwrap_or_else(|_| {
        panic!(
            "Golden file not found: {}. Run generate_golden_files to create it.",
            path
        )
    });
    assert_eq!(golden, zpl, "Golden file content mismatch for {}", path);
}

// ============================================================================
// GOLDEN FILE GENERATOR
// ============================================================================

#[test]
#[ignore]
fn generate_golden_files() {
    for name in GOLDEN_JOBS {
        let zpl = load_job(name).to_zpl();
        let path = format!("{}/{}.zpl", GOLDEN_DIR, name);
        fs::write(&path, &zpl).unwrap_or_else(|_| panic!("Failed to write {}", path));
        println!("Wrote {} ({} bytes)", path, zpl.len());
    }
}

// ============================================================================
// GOLDEN COMPARISONS
// ============================================================================

#[test]
fn test_golden_two_column() {
    check_golden("two_column", &load_job("two_column").to_zpl());
}

#[test]
fn test_golden_header_matches_dimensions() {
    for name in GOLDEN_JOBS {
        let job = load_job(name);
        let golden = fs::read_to_string(format!("{}/{}.zpl", GOLDEN_DIR, name)).unwrap();
        assert_eq!(Program::parse(&golden).dimensions(), Some(job.dimensions()));
    }
}

#[test]
fn test_golden_round_trips_through_reader() {
    for name in GOLDEN_JOBS {
        let golden = fs::read_to_string(format!("{}/{}.zpl", GOLDEN_DIR, name)).unwrap();
        assert_eq!(Program::parse(&golden).to_zpl(), golden);
    }
}

// ============================================================================
// INLINE SCENARIOS
// ============================================================================

#[test]
fn test_single_label_scenario() {
    let zpl = generate_labels(
        &[LabelItem::new("ABC123", "Produto Teste")],
        &LayoutConfig::new(40.0, 20.0).columns(1).column_gap_mm(0.0),
    );

    assert_eq!(
        zpl,
        "^XA\n\
         ^PW320\n\
         ^LL160\n\
         ^CF0,20\n\
         ^FO16,16^FB288,2,12,L,0^FDPRODUTO TESTE^FS\n\
         ^BY2,3,64\n\
         ^FO16,72^BCN,64,Y,N,N^FDABC123^FS\n\
         ^XZ"
    );

    let program = Program::parse(&zpl);
    assert_eq!(program.text_block_count(), 1);
    assert_eq!(program.barcode_count(), 1);
    assert_eq!(program.barcode_payloads(), vec!["ABC123"]);

    let dims = query_dimensions(&LayoutConfig::new(40.0, 20.0).columns(1).column_gap_mm(3.0));
    assert_eq!(program.dimensions(), Some(dims));
}

#[test]
fn test_empty_three_column_sheet() {
    let zpl = generate_labels(&[], &LayoutConfig::default().columns(3));
    assert_eq!(zpl, "^XA\n^PW1008\n^LL160\n^CF0,20\n^XZ");
}

#[test]
fn test_short_label_barcode_floor() {
    // 8mm is shorter than padding + text + barcode; the barcode stays at the
    // 48-dot floor and runs past the bottom edge.
    let zpl = generate_labels(
        &[LabelItem::new("S1", "Short")],
        &LayoutConfig::new(40.0, 8.0),
    );
    assert_eq!(
        zpl,
        "^XA\n\
         ^PW320\n\
         ^LL64\n\
         ^CF0,20\n\
         ^FO16,16^FB288,2,12,L,0^FDSHORT^FS\n\
         ^BY2,3,64\n\
         ^FO16,48^BCN,64,Y,N,N^FDS1^FS\n\
         ^XZ"
    );
}

#[test]
fn test_truncated_name_in_document() {
    let long_name = "Chocolate ao leite com amendoim e caramelo salgado edição especial";
    let zpl = generate_labels(&[LabelItem::new("C1", long_name)], &LayoutConfig::default());

    let expected: String = long_name.chars().take(57).collect::<String>().to_uppercase() + "...";
    assert_eq!(expected.chars().count(), 60);
    assert!(zpl.contains(&format!("^FD{}^FS", expected)));
}
