use mockito::Matcher;
use pingdom_client::error::PingdomError;
use pingdom_client::manager::ServiceManager;
use pingdom_client::model::requests::{CreateCheckRequest, ResultsQuery};
use pingdom_client::presentation::check::CheckType;
use pingdom_client::services::{CheckService, ResultsService, TracerouteService};
use pingdom_client::transport::PingdomService;

#[tokio::test]
async fn list_checks_sends_credentials_and_decodes_entities() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/checks")
        .match_header("App-Key", "K1")
        .match_header("authorization", Matcher::Regex("^Basic .+".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"checks": [{"id": 1, "name": "web", "type": "http", "status": "up", "resolution": 1}]}"#,
        )
        .create_async()
        .await;

    let mut manager = ServiceManager::new();
    manager
        .set_app_key("K1")
        .set_authentication("user@example.com", "secret")
        .set_base_url(&server.url());

    let checks = manager.check_service().list().await.unwrap();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].name, "web");

    mock.assert_async().await;
}

#[tokio::test]
async fn query_parameters_reach_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/results/85975")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".to_string(), "5".to_string()),
            Matcher::UrlEncoded("offset".to_string(), "10".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"results": [{"probeid": 32, "time": 1300977299, "status": "up", "responsetime": 91}], "activeprobes": [32]}"#,
        )
        .create_async()
        .await;

    let mut service = ResultsService::new();
    service.set_base_url(&server.url());

    let params = ResultsQuery {
        limit: Some(5),
        offset: Some(10),
        ..ResultsQuery::default()
    };
    let response = service.list_with(85975, &params).await.unwrap();
    assert_eq!(response.results[0].probe_id, 32);
    assert_eq!(response.active_probes, Some(vec![32]));

    mock.assert_async().await;
}

#[tokio::test]
async fn create_check_posts_form_encoded_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/checks")
        .match_header(
            "content-type",
            Matcher::Regex("application/x-www-form-urlencoded".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".to_string(), "My check".to_string()),
            Matcher::UrlEncoded("host".to_string(), "example.com".to_string()),
            Matcher::UrlEncoded("type".to_string(), "http".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"check": {"id": 138631, "name": "My check"}}"#)
        .create_async()
        .await;

    let mut service = CheckService::new();
    service.set_base_url(&server.url());

    let request = CreateCheckRequest::new("My check", "example.com", CheckType::Http);
    let created = service.create(&request).await.unwrap();
    assert_eq!(created.id, 138631);

    mock.assert_async().await;
}

#[tokio::test]
async fn remote_error_envelope_becomes_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/checks")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"statuscode": 403, "statusdesc": "Forbidden", "errormessage": "Something went wrong!"}}"#,
        )
        .create_async()
        .await;

    let mut service = CheckService::new();
    service.set_base_url(&server.url());

    match service.list().await {
        Err(PingdomError::Api(e)) => {
            assert_eq!(e.status_code, 403);
            assert_eq!(e.status_desc, "Forbidden");
            assert_eq!(e.error_message, "Something went wrong!");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_without_envelope_is_unexpected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/checks")
        .with_status(500)
        .with_body("internal server error")
        .create_async()
        .await;

    let mut service = CheckService::new();
    service.set_base_url(&server.url());

    match service.list().await {
        Err(PingdomError::Unexpected(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("Expected Unexpected error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decoding_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/checks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"checks": "not-a-list"}"#)
        .create_async()
        .await;

    let mut service = CheckService::new();
    service.set_base_url(&server.url());

    match service.list().await {
        Err(PingdomError::Json(_)) => (),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn traceroute_query_reaches_the_wire() {
    tokio_test::block_on(async {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/traceroute")
            .match_query(Matcher::UrlEncoded(
                "host".to_string(),
                "example.com".to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"traceroute": {"result": "traceroute to example.com...", "probeid": 32, "probedescription": "Stockholm, Sweden"}}"#,
            )
            .create_async()
            .await;

        let mut service = TracerouteService::new();
        service.set_base_url(&server.url());

        let query = pingdom_client::model::requests::TracerouteQuery::new("example.com");
        let traceroute = service.trace(&query).await.unwrap();
        assert_eq!(traceroute.probe_id, 32);
        assert!(traceroute.result.starts_with("traceroute to"));

        mock.assert_async().await;
    });
}
