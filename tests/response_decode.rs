use score_dashboard_wasm::domain::errors::FetchError;
use score_dashboard_wasm::infrastructure::http::decode_scores_payload;

#[test]
fn ok_payload_is_sorted_by_created_at() {
    let body = r#"{
        "status": "OK",
        "data": [
            {"id": 2, "created_at": "2024-05-01T10:00:00", "score": -5},
            {"id": 1, "created_at": "2024-05-01T09:00:00", "score": 10},
            {"id": 3, "created_at": "2024-05-01 11:00:00.500", "score": 0}
        ]
    }"#;

    let records = decode_scores_payload(body).unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(records.records()[1].score, -5);
}

#[test]
fn empty_data_is_a_valid_empty_set() {
    let records = decode_scores_payload(r#"{"status":"OK","data":[]}"#).unwrap();
    assert!(records.is_empty());
}

#[test]
fn error_status_is_distinguishable() {
    let err = decode_scores_payload(r#"{"status":"ERROR","data":[]}"#).unwrap_err();
    assert_eq!(err, FetchError::UnexpectedStatus("ERROR".to_string()));
    assert!(err.to_string().contains("ERROR"));
    assert!(err.user_message().contains("ERROR"));
}

#[test]
fn error_status_wins_over_missing_data() {
    let err = decode_scores_payload(r#"{"status":"MAINTENANCE"}"#).unwrap_err();
    assert!(matches!(err, FetchError::UnexpectedStatus(status) if status == "MAINTENANCE"));
}

#[test]
fn malformed_bodies() {
    let cases = [
        "not json",
        r#"{"data":[]}"#,
        r#"{"status":"OK"}"#,
        r#"{"status":"OK","data":{}}"#,
        r#"{"status":"OK","data":[{"id":1,"created_at":"2024-05-01T09:00:00"}]}"#,
        r#"{"status":"OK","data":[{"id":1,"created_at":"someday","score":1}]}"#,
        r#"{"status":"OK","data":[{"id":1,"created_at":"2024-05-01T09:00:00","score":1.5}]}"#,
    ];

    for body in cases {
        let err = decode_scores_payload(body).unwrap_err();
        assert!(
            matches!(err, FetchError::MalformedPayload(_)),
            "{} decoded to {:?}",
            body,
            err
        );
    }
}

#[test]
fn offset_timestamps_are_normalized_to_utc() {
    let body = r#"{"status":"OK","data":[
        {"id":1,"created_at":"2024-05-01T18:00:00+09:00","score":1},
        {"id":2,"created_at":"2024-05-01T08:30:00","score":1}
    ]}"#;

    let records = decode_scores_payload(body).unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(records.records()[1].created_at.to_string(), "2024-05-01 09:00:00");
}
