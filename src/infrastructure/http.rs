use crate::domain::{
    errors::{FetchError, FetchResult},
    logging::{LogComponent, get_logger},
    scores::{RecordSet, ScoreRecord, ScoreRepository},
};
use chrono::{DateTime, NaiveDateTime};
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;

/// Payload status the API uses for success.
pub const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
struct ScoreRecordDto {
    id: i64,
    created_at: String,
    score: i64,
}

/// HTTP client for the score API, built on gloo-net
#[derive(Clone, Debug)]
pub struct ScoreApiClient {
    endpoint: String,
}

impl ScoreApiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET against the endpoint, decoded and sorted.
    pub async fn get_records(&self) -> FetchResult<RecordSet> {
        get_logger().debug(
            LogComponent::Infrastructure("ScoreApi"),
            &format!("📡 Fetching scores from {}", self.endpoint),
        );

        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to send request: {:?}", e)))?;

        if !response.ok() {
            return Err(FetchError::Transport(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read body: {:?}", e)))?;

        let records = decode_scores_payload(&body)?;

        get_logger().info(
            LogComponent::Infrastructure("ScoreApi"),
            &format!("✅ Loaded {} score records", records.len()),
        );

        Ok(records)
    }
}

impl ScoreRepository for ScoreApiClient {
    fn fetch_records(&self) -> LocalBoxFuture<'_, FetchResult<RecordSet>> {
        self.get_records().boxed_local()
    }
}

/// Decode `{ status, data: [{ id, created_at, score }] }`.
///
/// The status is checked before the records are looked at, so an error
/// answer without a usable `data` field still reports its status.
pub fn decode_scores_payload(body: &str) -> FetchResult<RecordSet> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedPayload(format!("Failed to parse JSON: {}", e)))?;

    let status = payload
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| FetchError::MalformedPayload("Missing \"status\" field".to_string()))?;

    if status != STATUS_OK {
        return Err(FetchError::UnexpectedStatus(status.to_string()));
    }

    let data = payload
        .get("data")
        .cloned()
        .ok_or_else(|| FetchError::MalformedPayload("Missing \"data\" field".to_string()))?;

    let rows: Vec<ScoreRecordDto> = serde_json::from_value(data)
        .map_err(|e| FetchError::MalformedPayload(format!("Invalid record list: {}", e)))?;

    let records = rows
        .into_iter()
        .map(|row| {
            let created_at = parse_created_at(&row.created_at).ok_or_else(|| {
                FetchError::MalformedPayload(format!(
                    "Invalid created_at '{}' on record {}",
                    row.created_at, row.id
                ))
            })?;
            Ok(ScoreRecord::new(row.id, created_at, row.score))
        })
        .collect::<Result<Vec<_>, FetchError>>()?;

    Ok(RecordSet::from_unsorted(records))
}

/// Parse an API timestamp as naive UTC.
///
/// Offset-less values are taken as UTC; a value carrying an offset is
/// converted to UTC first.
pub fn parse_created_at(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    let value = value.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_endpoint() {
        let client = ScoreApiClient::new("http://localhost:8000/scores");
        assert_eq!(client.endpoint(), "http://localhost:8000/scores");
    }

    #[test]
    fn parses_offsetless_and_offset_timestamps() {
        let plain = parse_created_at("2024-05-01T03:04:05").unwrap();
        assert_eq!(plain.to_string(), "2024-05-01 03:04:05");

        let fractional = parse_created_at("2024-05-01 03:04:05.250000").unwrap();
        assert_eq!(fractional.and_utc().timestamp_subsec_millis(), 250);

        let zoned = parse_created_at("2024-05-01T12:04:05+09:00").unwrap();
        assert_eq!(zoned, plain);

        assert!(parse_created_at("yesterday").is_none());
    }
}
