use std::fs;
use std::path::PathBuf;

use fabrica::{Fabricator, TableOptions};

fn temp_xlsx(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fabrica_{label}_{}.xlsx", uuid::Uuid::new_v4()))
}

#[test]
fn excel_export_writes_a_workbook_and_returns_the_table() {
    let path = temp_xlsx("basic");
    let mut factory = Fabricator::with_seed(42).unwrap();

    let table = factory
        .export_excel(
            6,
            &["name", "email", "phone", "latitude"],
            &TableOptions::default(),
            Some(&path),
        )
        .unwrap();

    assert_eq!(table.num_rows(), 6);
    assert_eq!(
        table.header(),
        vec!["name", "email", "phone-number", "latitude"]
    );

    let metadata = fs::metadata(&path).expect("workbook written");
    assert!(metadata.len() > 0);

    fs::remove_file(path).ok();
}

#[test]
fn excel_export_matches_an_in_memory_build_with_the_same_seed() {
    let path = temp_xlsx("parity");
    let fields = ["name", "city", "email"];

    let mut exporter = Fabricator::with_seed(5).unwrap();
    let exported = exporter
        .export_excel(9, &fields, &TableOptions::default(), Some(&path))
        .unwrap();

    let mut builder = Fabricator::with_seed(5).unwrap();
    let built = builder
        .build_table(9, &fields, &TableOptions::default())
        .unwrap();

    assert_eq!(exported, built);

    fs::remove_file(path).ok();
}

#[test]
fn excel_export_validates_its_arguments() {
    let mut factory = Fabricator::with_seed(1).unwrap();
    assert!(
        factory
            .export_excel(0, &["name"], &TableOptions::default(), None)
            .is_err()
    );
    assert!(
        factory
            .export_excel(4, &[], &TableOptions::default(), None)
            .is_err()
    );
}
