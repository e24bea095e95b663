use std::collections::HashMap;

use travelrec_core::traits::FeatureEncoder;
use travelrec_core::types::RecommendationQuery;
use travelrec_core::Error;
use travelrec_encode::{EncoderSet, LabelEncoder};

fn classes(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn sample_map() -> HashMap<String, Vec<String>> {
    HashMap::from([
        ("Zone".to_string(), classes(&["East", "North", "South", "West"])),
        ("State".to_string(), classes(&["Goa", "Kerala", "Punjab"])),
        ("City".to_string(), classes(&["Amritsar", "Munnar", "Panaji"])),
        ("Age Group".to_string(), classes(&["18-25", "26-35", "36-50", "50+"])),
        ("Gender".to_string(), classes(&["Female", "Male"])),
        ("Ideal Travel Months".to_string(), classes(&["Jul-Sep", "Mar-Jun", "Oct-Feb"])),
        ("Budget".to_string(), classes(&["High", "Low", "Medium"])),
        ("Category".to_string(), classes(&["Beach", "Nature"])),
    ])
}

fn query() -> RecommendationQuery {
    RecommendationQuery {
        zone: "South".into(),
        state: "Kerala".into(),
        city: "Munnar".into(),
        age_group: "50+".into(),
        gender: "Male".into(),
        ideal_months: "Jul-Sep".into(),
        budget: "Medium".into(),
    }
}

#[test]
fn label_encoder_codes_are_positions() {
    let enc = LabelEncoder::from_classes("Budget", classes(&["High", "Low", "Medium"])).unwrap();
    assert_eq!(enc.transform("High").unwrap(), 0);
    assert_eq!(enc.transform("Medium").unwrap(), 2);
    assert_eq!(enc.inverse_transform(1).unwrap(), "Low");
}

#[test]
fn label_encoder_rejects_unseen_label() {
    let enc = LabelEncoder::from_classes("Budget", classes(&["High", "Low"])).unwrap();
    match enc.transform("low") {
        Err(Error::UnknownCategory { column, value }) => {
            assert_eq!(column, "Budget");
            assert_eq!(value, "low");
        }
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
}

#[test]
fn out_of_range_code_is_an_artifact_error() {
    let enc = LabelEncoder::from_classes("Budget", classes(&["High", "Low"])).unwrap();
    assert!(matches!(enc.inverse_transform(2), Err(Error::InvalidArtifact(ref m)) if m.contains("Budget")));

    let set = EncoderSet::from_map(sample_map()).unwrap();
    assert!(matches!(
        set.decode(&[9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        Err(Error::InvalidArtifact(_))
    ));
}

#[test]
fn label_encoder_requires_sorted_unique_classes() {
    assert!(matches!(
        LabelEncoder::from_classes("Gender", classes(&["Male", "Female"])),
        Err(Error::InvalidArtifact(_))
    ));
    assert!(matches!(
        LabelEncoder::from_classes("Gender", classes(&["Female", "Female"])),
        Err(Error::InvalidArtifact(_))
    ));
    assert!(LabelEncoder::from_classes("Gender", Vec::new()).is_err());
}

#[test]
fn encode_follows_feature_column_order() {
    let set = EncoderSet::from_map(sample_map()).unwrap();
    assert_eq!(set.dim(), 7);
    let v = set.encode(&query()).unwrap();
    assert_eq!(v, vec![2.0, 1.0, 1.0, 3.0, 1.0, 0.0, 2.0]);
}

#[test]
fn encode_fails_on_first_unknown_value() {
    let set = EncoderSet::from_map(sample_map()).unwrap();
    let mut q = query();
    q.city = "Atlantis".into();
    let err = set.encode(&q).expect_err("unknown city");
    assert!(matches!(err, Error::UnknownCategory { ref column, .. } if column == "City"), "got {err:?}");
}

#[test]
fn decode_reverses_encode() {
    let set = EncoderSet::from_map(sample_map()).unwrap();
    let v = set.encode(&query()).unwrap();
    assert_eq!(
        set.decode(&v).unwrap(),
        vec!["South", "Kerala", "Munnar", "50+", "Male", "Jul-Sep", "Medium"]
    );
    assert!(matches!(set.decode(&[0.0; 3]), Err(Error::DimensionMismatch { expected: 7, actual: 3 })));
    assert!(set.decode(&[0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).is_err());
}

#[test]
fn missing_feature_column_is_rejected() {
    let mut map = sample_map();
    map.remove("Gender");
    let err = EncoderSet::from_map(map).expect_err("missing column");
    assert!(matches!(err, Error::InvalidArtifact(ref m) if m.contains("Gender")), "got {err:?}");
}

#[test]
fn extra_columns_are_not_exposed() {
    let set = EncoderSet::from_map(sample_map()).unwrap();
    assert!(set.encoder("Category").is_none());
    assert_eq!(set.encoder("Zone").unwrap().classes().len(), 4);
}
