use std::path::PathBuf;
use tempfile::TempDir;

use travelrec_core::traits::NeighborSearch;
use travelrec_core::Error;
use travelrec_knn::NeighborIndex;

fn fixture_path() -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().to_path_buf();
    root.join("test_data/travel_recommendation_model.json")
}

#[test]
fn loads_fixture_index() {
    let index = NeighborIndex::load(&fixture_path()).expect("load fixture");
    assert_eq!(index.len(), 12);
    assert_eq!(index.dim(), 7);
    assert_eq!(index.default_k(), 3);
    // a fitted row is its own nearest neighbor
    let row = index.row(4).unwrap().to_vec();
    let hits = index.search_vec(&row, 1).unwrap();
    assert_eq!(hits[0].index, 4);
    assert_eq!(hits[0].distance, 0.0);
}

#[test]
fn missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    assert!(matches!(
        NeighborIndex::load(&tmp.path().join("absent.json")),
        Err(Error::NotFound(_))
    ));
}
