use std::fs;
use std::path::PathBuf;

use atl_cli::import::{FieldOverride, load_session, parse_override};
use atl_ingest::IngestError;
use atl_map::{CommitError, DEFAULT_PREVIEW_LIMIT, MapError};
use atl_model::CanonicalField;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn overrides(values: &[&str]) -> Vec<FieldOverride> {
    values.iter().map(|v| parse_override(v).unwrap()).collect()
}

#[test]
fn detects_and_maps_inventory_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "inventory.csv",
        "Name,Category,Notes,Qty\nWidget,Tool,Blue,3\nGadget,,,\n",
    );

    let session = load_session(&path, &[]).unwrap();

    assert_eq!(session.row_count(), 2);
    assert_eq!(session.mapping().get(CanonicalField::Quantity), Some(3));
    assert_eq!(session.records()[0].name, "Widget");
    assert_eq!(session.records()[0].quantity, 3);
    assert_eq!(session.records()[1].quantity, 0);
}

#[test]
fn overrides_apply_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "stock.csv",
        "Part,Stock Level,On Hand\nBolt,12,4\nNut,7,9\n",
    );

    let session = load_session(
        &path,
        &overrides(&["quantity=Stock Level", "quantity=3", "type=skip"]),
    )
    .unwrap();

    assert_eq!(session.mapping().get(CanonicalField::Quantity), Some(2));
    assert_eq!(session.mapping().get(CanonicalField::Type), None);
    let quantities: Vec<u64> = session.records().iter().map(|r| r.quantity).collect();
    assert_eq!(quantities, vec![4, 9]);
}

#[test]
fn unknown_override_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "parts.csv", "Name,Qty\nBolt,1\n");

    let err = load_session(&path, &overrides(&["quantity=Weight"])).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MapError>(),
        Some(MapError::UnknownColumn(_))
    ));
}

#[test]
fn header_only_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "empty.csv", "Name,Qty\n");

    let err = load_session(&path, &[]).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::EmptySheet { .. })
    ));
}

#[test]
fn nameless_rows_never_commit() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "blank.csv", "Name,Qty\n ,1\n,2\n");

    let session = load_session(&path, &[]).unwrap();
    let preview = session.preview(DEFAULT_PREVIEW_LIMIT);
    assert_eq!(preview.invalid_visible(), 2);

    let err = session.commit().unwrap_err();
    assert_eq!(err, CommitError::EmptyBatch { rejected: 2 });
}

#[test]
fn preview_limit_bounds_visible_rows() {
    let dir = TempDir::new().unwrap();
    let mut contents = String::from("Name,Qty\n");
    for i in 0..25 {
        contents.push_str(&format!("Part {i},{i}\n"));
    }
    let path = write_csv(&dir, "many.csv", &contents);

    let session = load_session(&path, &[]).unwrap();
    let preview = session.preview(DEFAULT_PREVIEW_LIMIT);

    assert_eq!(preview.visible.len(), 10);
    assert_eq!(preview.remainder, 15);
}
