use super::*;

#[test]
fn exact_set_needs_targets() {
    let policy = ClassifyPolicy::exact(Vec::new(), None);
    assert!(policy.validate().is_err());
}

#[test]
fn exact_set_rejects_duplicate_target_colors() {
    let rgb = Rgb::new(128, 32, 192);
    let policy = ClassifyPolicy::exact(
        vec![TargetColor::new("body", rgb), TargetColor::new("eyes", rgb)],
        None,
    );
    let err = policy.validate().unwrap_err();
    assert!(err.to_string().contains("RGB(128, 32, 192)"));
}

#[test]
fn exact_set_rejects_empty_labels() {
    let policy = ClassifyPolicy::exact(vec![TargetColor::new(" ", Rgb::new(1, 2, 3))], None);
    assert!(policy.validate().is_err());
}

#[test]
fn auto_distinct_is_always_valid() {
    assert!(ClassifyPolicy::auto(DistinctOrder::AscendingRgb).validate().is_ok());
    assert!(
        ClassifyPolicy::auto(DistinctOrder::DescendingFrequency)
            .validate()
            .is_ok()
    );
}

#[test]
fn policies_round_trip_through_json() {
    let policy = ClassifyPolicy::exact(
        vec![TargetColor::new("body", Rgb::new(128, 32, 192))],
        Some(FallbackPolicy::MergeIntoLargestGroup),
    );
    let json = serde_json::to_string(&policy).unwrap();
    let back: ClassifyPolicy = serde_json::from_str(&json).unwrap();
    assert!(back.validate().is_ok());
    match back {
        ClassifyPolicy::ExactSet { targets, fallback } => {
            assert_eq!(targets.len(), 1);
            assert_eq!(targets[0].label, "body");
            assert_eq!(fallback, Some(FallbackPolicy::MergeIntoLargestGroup));
        }
        ClassifyPolicy::AutoDistinct { .. } => panic!("wrong variant after round trip"),
    }
}
