//! Integration tests for the plan resource client against a mock server.

use serde_json::json;
use wiremock::matchers::{body_json_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chatadmin_client::{ApiClient, PlansApi, PlansClient};
use chatadmin_core::{ApiConfig, ErrorKind};
use chatadmin_entity::{Plan, PlanPeriod};

fn test_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    }
}

fn client(server: &MockServer) -> PlansClient {
    let api = ApiClient::new(&test_config(server)).expect("build client");
    PlansClient::new(api)
}

fn basic_plan() -> Plan {
    Plan {
        id: None,
        name: "Basic".to_string(),
        total_chats: 100,
        total_questions: 1000,
        question_size: 50,
        history_size: 10,
        period: PlanPeriod::Month,
        created_at: "2025-01-15T10:30:00".to_string(),
        updated_at: "2025-01-15T10:30:00".to_string(),
    }
}

#[tokio::test]
async fn list_returns_all_plans() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "1",
                "name": "Basic",
                "totalChats": 100,
                "totalQuestions": 1000,
                "questionSize": 50,
                "historySize": 10,
                "period": "month",
                "createdAt": "2025-01-15T10:30:00",
                "updatedAt": "2025-01-15T10:30:00"
            },
            {
                "id": "3",
                "name": "Enterprise",
                "totalChats": -1,
                "totalQuestions": -1,
                "questionSize": 200,
                "historySize": 100,
                "period": "lifetime",
                "createdAt": "2025-02-01T00:00:00",
                "updatedAt": "2025-02-01T00:00:00"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let plans = client(&server).list().await.expect("list");
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "Basic");
    assert_eq!(plans[1].total_chats, -1);
    assert_eq!(plans[1].period, PlanPeriod::Lifetime);
}

#[tokio::test]
async fn get_missing_plan_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/plans/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server).get("999").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn create_posts_without_id_and_returns_envelope() {
    let server = MockServer::start().await;
    let plan = basic_plan();
    let expected_body = serde_json::to_string(&plan).expect("serialize");
    assert!(!expected_body.contains("\"id\""));

    Mock::given(method("POST"))
        .and(path("/plans"))
        .and(body_json_string(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plan": {
                "id": "X",
                "name": "Basic",
                "totalChats": 100,
                "totalQuestions": 1000,
                "questionSize": 50,
                "historySize": 10,
                "period": "month",
                "createdAt": "2025-01-15T10:30:00",
                "updatedAt": "2025-01-15T10:30:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client(&server).create(&plan).await.expect("create");
    let saved = envelope.plan.expect("plan payload");
    assert_eq!(saved.id.as_deref(), Some("X"));
}

#[tokio::test]
async fn create_failure_envelope_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plans"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Name already taken" })),
        )
        .mount(&server)
        .await;

    let envelope = client(&server).create(&basic_plan()).await.expect("create");
    assert!(envelope.plan.is_none());
    assert_eq!(envelope.message.as_deref(), Some("Name already taken"));
}

#[tokio::test]
async fn update_puts_to_plan_id() {
    let server = MockServer::start().await;
    let mut plan = basic_plan();
    plan.id = Some("7".to_string());

    Mock::given(method("PUT"))
        .and(path("/plans/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plan": {
                "id": "7",
                "name": "Basic",
                "totalChats": 100,
                "totalQuestions": 1000,
                "questionSize": 50,
                "historySize": 10,
                "period": "month",
                "createdAt": "2025-01-15T10:30:00",
                "updatedAt": "2025-01-16T09:00:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client(&server).update(&plan).await.expect("update");
    assert_eq!(envelope.plan.expect("plan").updated_at, "2025-01-16T09:00:00");
}

#[tokio::test]
async fn update_without_id_is_rejected_locally() {
    let server = MockServer::start().await;
    let err = client(&server).update(&basic_plan()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(server.received_requests().await.expect("requests").len(), 0);
}

#[tokio::test]
async fn delete_passes_failure_envelope_through() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/plans/2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "message": "in use" })),
        )
        .mount(&server)
        .await;

    let status = client(&server).delete("2").await.expect("delete");
    assert!(!status.success);
    assert_eq!(status.message.as_deref(), Some("in use"));
}

#[tokio::test]
async fn delete_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/plans/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let status = client(&server).delete("2").await.expect("delete");
    assert!(status.success);
    assert!(status.message.is_none());
}
