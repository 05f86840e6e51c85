use folding_core::{FoldingConfig, LineRange, ResizePolicy};
use folding_core_json::{BridgeError, FoldingSession};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const REFERENCES: &str = r#"[
    { "id": "1", "range": { "startLine": 20, "endLine": 25 } },
    { "id": "2", "range": { "startLine": 60, "endLine": 65 } },
    { "id": "3" }
]"#;

fn parse(snapshot: &str) -> Value {
    serde_json::from_str(snapshot).unwrap()
}

#[test]
fn test_snapshot_shape() {
    let session = FoldingSession::open(REFERENCES, 100, FoldingConfig::default()).unwrap();
    let snapshot = parse(&session.snapshot_json().unwrap());

    assert_eq!(snapshot["version"], json!(0));
    assert_eq!(snapshot["state"]["totalLines"], json!(100));
    assert_eq!(snapshot["state"]["padding"], json!(3));
    assert_eq!(
        snapshot["state"]["visibleRanges"],
        json!([
            { "startLine": 17, "endLine": 28 },
            { "startLine": 57, "endLine": 68 }
        ])
    );
    assert_eq!(
        snapshot["state"]["hiddenRegions"],
        json!([
            { "startLine": 1, "endLine": 16, "canExpandUp": true, "canExpandDown": false },
            { "startLine": 29, "endLine": 56, "canExpandUp": true, "canExpandDown": true },
            { "startLine": 69, "endLine": 100, "canExpandUp": false, "canExpandDown": true }
        ])
    );
}

#[test]
fn test_dispatch_expand_then_update() {
    let mut session = FoldingSession::open(REFERENCES, 100, FoldingConfig::default()).unwrap();

    let snapshot = parse(
        &session
            .dispatch(
                r#"{ "effects": [
                    { "type": "expandRegion", "regionIndex": 1, "direction": "down", "linesToExpand": 20 }
                ] }"#,
            )
            .unwrap(),
    );
    assert_eq!(snapshot["version"], json!(1));
    assert_eq!(
        snapshot["state"]["visibleRanges"],
        json!([
            { "startLine": 17, "endLine": 48 },
            { "startLine": 57, "endLine": 68 }
        ])
    );

    let snapshot = parse(
        &session
            .dispatch(r#"{ "effects": [{ "type": "updateReferences", "references": [] }] }"#)
            .unwrap(),
    );
    assert_eq!(snapshot["version"], json!(2));
    assert_eq!(
        snapshot["state"]["visibleRanges"],
        json!([{ "startLine": 1, "endLine": 100 }])
    );
    assert_eq!(snapshot["state"]["hiddenRegions"], json!([]));
}

#[test]
fn test_dispatch_noop_keeps_version() {
    let mut session = FoldingSession::open(REFERENCES, 100, FoldingConfig::default()).unwrap();
    let before = session.snapshot_json().unwrap();

    let after = session
        .dispatch(r#"{ "effects": [{ "type": "expandRegion", "regionIndex": 9, "direction": "up" }] }"#)
        .unwrap();
    assert_eq!(after, before);
}

#[test]
fn test_dispatch_resize_with_preserve_policy() {
    let mut session = FoldingSession::from_config_json(
        r#"{ "resizePolicy": "preserveExpansions", "expandStep": 5 }"#,
        REFERENCES,
        100,
    )
    .unwrap();

    session
        .dispatch(r#"{ "effects": [{ "type": "expandRegion", "regionIndex": 2, "direction": "down" }] }"#)
        .unwrap();
    assert_eq!(
        session.manager().state().visible_ranges(),
        &[LineRange::new(17, 28), LineRange::new(57, 88)]
    );

    session.dispatch(r#"{ "totalLines": 120 }"#).unwrap();
    assert_eq!(session.manager().config().resize_policy, ResizePolicy::PreserveExpansions);
    assert_eq!(
        session.manager().state().visible_ranges(),
        &[LineRange::new(17, 28), LineRange::new(57, 88)]
    );
    assert_eq!(session.manager().state().total_lines(), 120);
}

#[test]
fn test_placeholders_json() {
    let session = FoldingSession::open(REFERENCES, 100, FoldingConfig::default()).unwrap();
    let placeholders: Value = serde_json::from_str(&session.placeholders_json().unwrap()).unwrap();
    assert_eq!(
        placeholders[1],
        json!({
            "regionIndex": 1,
            "startLine": 29,
            "endLine": 56,
            "hiddenLineCount": 28,
            "canExpandUp": true,
            "canExpandDown": true
        })
    );
}

#[test]
fn test_open_rejects_bad_input() {
    let err = FoldingSession::open("{ not json", 10, FoldingConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, BridgeError::Json(_)));

    let err = FoldingSession::from_config_json(r#"{ "expandStep": 0 }"#, "[]", 10)
        .err()
        .unwrap();
    assert!(matches!(err, BridgeError::Folding(_)));
}
