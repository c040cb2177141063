/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use connect::error::ErrorKind;
use connect::input::{
    GetMetricDataInput, ListUsersInput, StartOutboundVoiceContactInput, StopContactInput,
};
use connect::model::{Filters, Grouping, HistoricalMetric, Statistic, Unit};
use connect::{Client, Config, IdempotencyTokenProvider, Instant, Region, SdkError};
use pretty_assertions::assert_eq;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use tower::Service;

type Requests = Arc<Mutex<Vec<http::Request<Bytes>>>>;

/// A transport that records every request and answers each with the same canned response.
fn stub(
    status: u16,
    body: &'static str,
) -> (
    impl Service<http::Request<Bytes>, Response = http::Response<Bytes>, Error = Infallible> + Clone,
    Requests,
) {
    let requests: Requests = Default::default();
    let captured = requests.clone();
    let transport = tower::service_fn(move |request: http::Request<Bytes>| {
        captured.lock().unwrap().push(request);
        let response = http::Response::builder()
            .status(status)
            .header("x-amzn-RequestId", "8f3a1c2e-request")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap();
        async move { Ok::<_, Infallible>(response) }
    });
    (transport, requests)
}

fn conf() -> Config {
    Config::builder()
        .region(Region::from_static("eu-west-2"))
        .idempotency_token_provider(IdempotencyTokenProvider::with_seed(7))
        .build()
}

#[tokio::test]
async fn get_metric_data_round_trip() {
    let (transport, requests) = stub(
        200,
        r#"{"MetricResults": [{"Dimensions": {"Queue": {"Id": "q1"}}, "Collections": [{"Metric": {"Name": "HANDLE_TIME", "Statistic": "AVG", "Unit": "SECONDS"}, "Value": 93.5}]}]}"#,
    );
    let client = Client::new(conf(), transport);
    let input = GetMetricDataInput::builder()
        .instance_id("inst-1")
        .start_time(Instant::from_epoch_seconds(1_600_000_200))
        .end_time(Instant::from_epoch_seconds(1_600_003_800))
        .filters(Filters::builder().queues("q1").build())
        .groupings(Grouping::Queue)
        .historical_metrics(
            HistoricalMetric::builder()
                .name("HANDLE_TIME")
                .statistic(Statistic::Avg)
                .unit(Unit::Seconds)
                .build(),
        )
        .build();
    let success = client.get_metric_data(input).await.expect("request succeeds");

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(
        request.uri().to_string(),
        "https://connect.eu-west-2.amazonaws.com/metrics/historical/inst-1"
    );
    let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
    assert_eq!(body["Groupings"], serde_json::json!(["QUEUE"]));
    assert_eq!(body["StartTime"], serde_json::json!(1600000200));
    assert!(body.get("InstanceId").is_none());

    let results = success.parsed.metric_results().unwrap();
    assert_eq!(results.len(), 1);
    let data = &results[0].collections().unwrap()[0];
    assert_eq!(data.value(), Some(93.5));
    assert_eq!(success.raw.status(), http::StatusCode::OK);
}

#[tokio::test]
async fn service_errors_carry_kind_and_request_id() {
    let (transport, _) = stub(
        429,
        r#"{"__type": "ThrottlingException", "Message": "Rate exceeded"}"#,
    );
    let client = Client::new(conf(), transport);
    let err = client
        .list_users(ListUsersInput::builder().instance_id("inst-1").build())
        .await
        .expect_err("throttled");
    let raw_status = err.raw_response().map(|raw| raw.status().as_u16());
    assert_eq!(raw_status, Some(429));
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(matches!(err.kind, ErrorKind::ThrottlingException));
            assert!(err.is_throttling());
            assert_eq!(err.message(), Some("Rate exceeded"));
            assert_eq!(err.request_id(), Some("8f3a1c2e-request"));
            assert_eq!(err.meta().request_id(), Some("8f3a1c2e-request"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_input_is_never_sent() {
    let (transport, requests) = stub(200, "{}");
    let client = Client::new(conf(), transport);
    let err = client
        .list_users(
            ListUsersInput::builder()
                .instance_id("inst-1")
                .max_results(0)
                .build(),
        )
        .await
        .expect_err("max_results below range");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(err.to_string().contains("max_results"));

    let err = client
        .stop_contact(StopContactInput::builder().contact_id("c-1").build())
        .await
        .expect_err("instance_id is required");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn dispatch_failures_are_reported() {
    let transport = tower::service_fn(|_request: http::Request<Bytes>| async {
        Err::<http::Response<Bytes>, _>(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    });
    let client = Client::new(conf(), transport);
    let err = client
        .stop_contact(
            StopContactInput::builder()
                .contact_id("c-1")
                .instance_id("inst-1")
                .build(),
        )
        .await
        .expect_err("transport failed");
    assert!(matches!(err, SdkError::DispatchFailure(_)));
    assert!(err.raw_response().is_none());
}

#[tokio::test]
async fn unparseable_success_is_unhandled() {
    let (transport, _) = stub(200, "<html>");
    let client = Client::new(conf(), transport);
    let err = client
        .list_users(ListUsersInput::builder().instance_id("inst-1").build())
        .await
        .expect_err("body is not JSON");
    let service_error = err.service_error().expect("parse failures are service errors");
    assert!(matches!(service_error.kind, ErrorKind::Unhandled(_)));
    assert_eq!(service_error.request_id(), Some("8f3a1c2e-request"));
}

#[tokio::test]
async fn seeded_client_tokens_are_reproducible() {
    let input = StartOutboundVoiceContactInput::builder()
        .destination_phone_number("+12065550100")
        .contact_flow_id("flow-1")
        .instance_id("inst-1")
        .build();

    let mut tokens = Vec::new();
    for _ in 0..2 {
        let (transport, requests) = stub(200, r#"{"ContactId": "c-42"}"#);
        let client = Client::new(conf(), transport);
        let success = client
            .start_outbound_voice_contact(input.clone())
            .await
            .unwrap();
        assert_eq!(success.parsed.contact_id(), Some("c-42"));
        let requests = requests.lock().unwrap();
        assert_eq!(requests[0].method(), http::Method::PUT);
        let body: serde_json::Value = serde_json::from_slice(requests[0].body()).unwrap();
        tokens.push(body["ClientToken"].as_str().unwrap().to_owned());
    }
    assert_eq!(tokens[0], tokens[1]);
    assert_eq!(tokens[0].len(), 36);
}
