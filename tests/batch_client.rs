use ban_checker::batch::{BatchClient, Platform};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn client(server: &MockServer) -> BatchClient {
    BatchClient::new(&server.uri(), Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn reddit_batch_partitions_in_input_order() {
    let server = MockServer::start().await;
    for (name, status) in [("alice", "good"), ("bob", "bad"), ("carol", "good")] {
        Mock::given(method("GET"))
            .and(path("/api/check-reddit"))
            .and(query_param("username", name))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "status": status, "username": name })),
            )
            .mount(&server)
            .await;
    }

    let report = client(&server)
        .check_all(Platform::Reddit, &ids(&["alice", "bob", "carol"]))
        .await;
    assert_eq!(report.good, vec!["alice", "carol"]);
    assert_eq!(report.bad, vec!["bob"]);
    assert!(report.first_error.is_none());
}

#[tokio::test]
async fn unreachable_server_marks_everything_bad() {
    let client = BatchClient::new("http://127.0.0.1:9", Duration::from_secs(2)).expect("client");
    let report = client.check_all(Platform::Steam, &ids(&["a", "b"])).await;
    assert!(report.good.is_empty());
    assert_eq!(report.bad, vec!["a", "b"]);
}

#[tokio::test]
async fn twitter_strips_at_and_surfaces_first_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check-twitter"))
        .and(query_param("username", "jack"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "active" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/check-twitter"))
        .and(query_param("username", "limited"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Twitter API Error: Too Many Requests"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/check-twitter"))
        .and(query_param("username", "gone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "terminated" })))
        .mount(&server)
        .await;

    let report = client(&server)
        .check_all(Platform::Twitter, &ids(&["@jack", "limited", "gone"]))
        .await;
    assert_eq!(report.good, vec!["@jack"]);
    assert_eq!(report.bad, vec!["limited", "gone"]);
    assert_eq!(report.first_error.as_deref(), Some("Twitter API Error: Too Many Requests"));
}

#[tokio::test]
async fn tiktok_handles_lose_leading_at() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check-tiktok"))
        .and(query_param("username", "charli"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "active", "username": "charli" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/check-tiktok"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "status": "error", "error": "Invalid username" })),
        )
        .mount(&server)
        .await;

    let report = client(&server).check_all(Platform::Tiktok, &ids(&["@charli"])).await;
    assert_eq!(report.good, vec!["@charli"]);
    assert!(report.bad.is_empty());
}

#[tokio::test]
async fn roblox_is_checked_one_at_a_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check-roblox"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "good",
            "reason": "Account is active (verified)"
        })))
        .expect(3)
        .mount(&server)
        .await;

    let started = Instant::now();
    let report = client(&server)
        .check_all(Platform::Roblox, &ids(&["a", "b", "c"]))
        .await;

    // Two gaps between three checks.
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(
        report.good,
        vec![
            "a (Account is active (verified))",
            "b (Account is active (verified))",
            "c (Account is active (verified))",
        ]
    );
}

#[tokio::test]
async fn minecraft_taken_versus_available() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/check-minecraft"))
        .and(query_param("username", "Notch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "good",
            "username": "Notch",
            "uuid": "069a79f444e94726a5befca90e38aaf5",
            "name_history": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/check-minecraft"))
        .and(query_param("username", "free_name"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "status": "bad", "reason": "User not found" })),
        )
        .mount(&server)
        .await;

    let report = client(&server)
        .check_all(Platform::Minecraft, &ids(&["Notch", "free_name", "waytoolongforminecraft"]))
        .await;
    assert_eq!(report.good, vec!["Notch"]);
    assert_eq!(report.bad, vec!["free_name", "waytoolongforminecraft"]);
}
