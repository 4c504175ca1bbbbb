use std::fs;
use std::path::PathBuf;

use atl_ingest::{IngestError, read_sheet};
use atl_model::CellValue;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("atl_ingest_{}_{stamp}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_file(path);
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn reads_inventory_csv() {
    let path = temp_file(
        "inventory.csv",
        "Item Name,Category,Notes,Stock\nWidget,A,desc,3\n,,,\n,B,desc2,5\n",
    );
    let table = read_sheet(&path).expect("read sheet");

    assert_eq!(table.headers, vec!["Item Name", "Category", "Notes", "Stock"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0][0], CellValue::Text("Widget".to_string()));
    assert_eq!(table.rows[0][3], CellValue::Number(3.0));
    assert_eq!(table.rows[1][0], CellValue::Empty);

    cleanup(&path);
}

#[test]
fn leading_blank_lines_are_skipped() {
    let path = temp_file("blank_top.csv", ",,\nName,Type,Qty\nBolt,Fastener,2\n");
    let table = read_sheet(&path).expect("read sheet");

    assert_eq!(table.headers, vec!["Name", "Type", "Qty"]);
    assert_eq!(table.row_count(), 1);

    cleanup(&path);
}

#[test]
fn header_without_data_is_rejected() {
    let path = temp_file("header_only.csv", "Name,Type\n");
    let result = read_sheet(&path);
    assert!(matches!(result, Err(IngestError::EmptySheet { .. })));

    cleanup(&path);
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let path = temp_file("inventory.txt", "Name\nBolt\n");
    let err = read_sheet(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    assert_eq!(
        err.user_message(),
        "Please upload a valid spreadsheet file (.xlsx, .xls, .csv)"
    );

    cleanup(&path);
}
