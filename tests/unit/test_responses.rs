use assert_json_diff::assert_json_eq;
use chrono::{TimeZone, Utc};
use pingdom_client::model::requests::{CreateCheckRequest, ModifyCheckRequest};
use pingdom_client::model::responses::{
    ChecksResponse, CheckResponse, ServerTimeResponse, SharedReportsResponse,
    SummaryPerformanceResponse,
};
use pingdom_client::presentation::check::{CheckStatus, CheckType};
use pingdom_client::presentation::report::BannerType;
use serde_json::json;

#[test]
fn check_list_decodes_typed_fields() {
    let body = r#"{
        "checks": [
            {
                "id": 85975,
                "name": "My check 1",
                "type": "http",
                "hostname": "example.com",
                "status": "up",
                "resolution": 1,
                "lasterrortime": 1297446423,
                "lasttesttime": 1300977363,
                "lastresponsetime": 355
            },
            {
                "id": 161748,
                "name": "My check 2",
                "type": "ping",
                "hostname": "mydomain.com",
                "status": "unconfirmed_down",
                "resolution": 5
            }
        ],
        "counts": {"total": 2, "limited": 2, "filtered": 2}
    }"#;

    let response: ChecksResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.checks.len(), 2);

    let first = &response.checks[0];
    assert_eq!(first.check_type, CheckType::Http);
    assert_eq!(first.status, CheckStatus::Up);
    assert_eq!(
        first.last_test_time,
        Some(Utc.timestamp_opt(1300977363, 0).unwrap())
    );
    assert_eq!(first.last_response_time, Some(355));
    // Version-tagged field not present in this API version.
    assert!(first.created.is_none());

    let second = &response.checks[1];
    assert_eq!(second.status, CheckStatus::UnconfirmedDown);
    assert!(second.last_error_time.is_none());
    assert_eq!(response.counts.unwrap().total, Some(2));
}

#[test]
fn check_details_carries_per_type_object() {
    let body = r#"{
        "check": {
            "id": 85975,
            "name": "My check",
            "hostname": "example.com",
            "status": "up",
            "resolution": 1,
            "type": {
                "http": {
                    "url": "/",
                    "port": 80,
                    "requestheaders": {"User-Agent": "Pingdom.com_bot"}
                }
            },
            "sendtoemail": true,
            "sendnotificationwhendown": 2
        }
    }"#;

    let response: CheckResponse = serde_json::from_str(body).unwrap();
    let http = response.check.check_type.http.expect("http details");
    assert_eq!(http.url.as_deref(), Some("/"));
    assert_eq!(http.port, Some(80));
    assert!(response.check.check_type.tcp.is_none());
    assert_eq!(response.check.send_to_email, Some(true));
}

#[test]
fn malformed_required_field_is_a_decoding_error() {
    // "id" must be a number; a string must fail, not default.
    let body = r#"{"checks": [{"id": "oops", "name": "x", "type": "http", "status": "up", "resolution": 1}]}"#;
    let result = serde_json::from_str::<ChecksResponse>(body);
    assert!(result.is_err());
}

#[test]
fn banner_version_tagged_fields_decode_as_absent() {
    let body = r#"{
        "shared": {
            "banners": [
                {"id": 1, "name": "uptime banner", "checkid": 85975, "type": "uptime"}
            ]
        }
    }"#;

    let response: SharedReportsResponse = serde_json::from_str(body).unwrap();
    let banners = response.shared.banners.expect("banners");
    let banner = &banners[0];
    assert_eq!(banner.banner_type, Some(BannerType::Uptime));
    assert_eq!(banner.check_id, Some(85975));
    // Fields omitted by the live API decode as absent, not as zero values.
    assert!(banner.from_year.is_none());
    assert!(banner.to_day.is_none());
    assert!(banner.auto.is_none());
}

#[test]
fn server_time_decodes_unix_timestamp() {
    let body = r#"{"servertime": 1300977599}"#;
    let response: ServerTimeResponse = serde_json::from_str(body).unwrap();
    assert_eq!(
        response.server_time,
        Utc.timestamp_opt(1300977599, 0).unwrap()
    );
}

#[test]
fn performance_summary_populates_only_requested_resolution() {
    let body = r#"{
        "summary": {
            "hours": [
                {"starttime": 1294245600, "avgresponse": 91, "uptime": 3600, "downtime": 0, "unmonitored": 0}
            ]
        }
    }"#;

    let response: SummaryPerformanceResponse = serde_json::from_str(body).unwrap();
    let hours = response.summary.hours.expect("hours");
    assert_eq!(hours.len(), 1);
    assert_eq!(hours[0].avg_response, Some(91));
    assert!(response.summary.days.is_none());
    assert!(response.summary.weeks.is_none());
}

#[test]
fn create_check_request_serializes_only_populated_fields() {
    let mut request = CreateCheckRequest::new("My check", "example.com", CheckType::Http);
    request.resolution = Some(5);

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "My check",
            "host": "example.com",
            "type": "http",
            "resolution": 5
        })
    );
}

#[test]
fn modify_check_request_defaults_to_empty_object() {
    let request = ModifyCheckRequest::default();
    assert_json_eq!(serde_json::to_value(&request).unwrap(), json!({}));
}
