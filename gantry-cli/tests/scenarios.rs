use std::time::Duration;

use gantry_cli::app;
use gantry_cli::config::Config;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
}

fn config(server: &MockServer) -> Config {
    let mut config = Config::new(format!("{}/job/demo", server.uri()));
    config.interval = Duration::from_millis(20);
    config.timeout = Duration::from_secs(5);
    config
}

async fn mount_buildable(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/job/demo/api/json"))
        .and(query_param_is_missing("tree"))
        .respond_with(json(r#"{"buildable":true}"#))
        .mount(server)
        .await;
}

/// Trigger succeeds, two polls find nothing, the third sees the build
/// running, the fourth sees SUCCESS.
#[tokio::test]
async fn run_bubbles_a_successful_build() {
    let server = MockServer::start().await;
    mount_buildable(&server).await;

    Mock::given(method("POST"))
        .and(path("/job/demo/build"))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", "/queue/item/42/"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/job/demo/api/json"))
        .and(query_param("tree", "builds[url,id,result,queueId]"))
        .respond_with(json(r#"{"builds":[]}"#))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/job/demo/api/json"))
        .and(query_param("tree", "builds[url,id,result,queueId]"))
        .respond_with(json(
            r#"{"builds":[{"id":"17","url":"u","queueId":42,"result":null}]}"#,
        ))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/job/demo/api/json"))
        .and(query_param("tree", "builds[url,id,result,queueId]"))
        .respond_with(json(
            r#"{"builds":[{"id":"17","url":"u","queueId":42,"result":"SUCCESS"}]}"#,
        ))
        .mount(&server)
        .await;

    assert_eq!(app::run(config(&server)).await, 0);
}

#[tokio::test]
async fn run_bubbles_a_failed_build() {
    let server = MockServer::start().await;
    mount_buildable(&server).await;

    Mock::given(method("POST"))
        .and(path("/job/demo/build"))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", "/queue/item/5/"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/job/demo/api/json"))
        .and(query_param("tree", "builds[url,id,result,queueId]"))
        .respond_with(json(
            r#"{"builds":[{"id":"9","url":"u","queueId":5,"result":"FAILURE"}]}"#,
        ))
        .mount(&server)
        .await;

    assert_eq!(app::run(config(&server)).await, 100);
}

/// A trigger response without a Location header is fatal; no poll is ever
/// issued.
#[tokio::test]
async fn run_fails_without_polling_when_the_queue_ref_is_missing() {
    let server = MockServer::start().await;
    mount_buildable(&server).await;

    Mock::given(method("POST"))
        .and(path("/job/demo/build"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/job/demo/api/json"))
        .and(query_param("tree", "builds[url,id,result,queueId]"))
        .respond_with(json(r#"{"builds":[]}"#))
        .expect(0)
        .mount(&server)
        .await;

    assert_eq!(app::run(config(&server)).await, 1);
}

/// No-wait mode exits 0 right after the trigger; zero poll calls.
#[tokio::test]
async fn run_in_no_wait_mode_skips_the_poll_loop() {
    let server = MockServer::start().await;
    mount_buildable(&server).await;

    Mock::given(method("POST"))
        .and(path("/job/demo/build"))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", "/queue/item/42/"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/job/demo/api/json"))
        .and(query_param("tree", "builds[url,id,result,queueId]"))
        .respond_with(json(r#"{"builds":[]}"#))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = config(&server);
    config.no_wait = true;

    assert_eq!(app::run(config).await, 0);
}

#[tokio::test]
async fn run_fails_when_the_job_is_not_buildable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/job/demo/api/json"))
        .respond_with(json(r#"{"buildable":false}"#))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/job/demo/build"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    assert_eq!(app::run(config(&server)).await, 1);
}

#[tokio::test]
async fn run_rejects_an_invalid_configuration_without_any_request() {
    let config = Config::new("not-a-url");
    assert_eq!(app::run(config).await, 1);
}
