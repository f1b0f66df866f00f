//! End-to-end: the plan flow driving the real HTTP client against a mock
//! backend.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chatadmin_client::{ApiClient, PlansClient};
use chatadmin_core::ApiConfig;
use chatadmin_flow::{DeleteState, EditorState, PlanField, PlanFlow, Shell, ToastKind};

#[derive(Default)]
struct RecordingShell {
    toasts: Mutex<Vec<(ToastKind, String)>>,
    invalidations: AtomicUsize,
}

#[async_trait]
impl Shell for RecordingShell {
    fn toast(&self, kind: ToastKind, message: &str) {
        self.toasts
            .lock()
            .expect("lock")
            .push((kind, message.to_string()));
    }

    async fn invalidate(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }
}

async fn harness(server: &MockServer) -> (Arc<RecordingShell>, PlanFlow<PlansClient, Arc<RecordingShell>>) {
    let api = ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    })
    .expect("build client");
    let shell = Arc::new(RecordingShell::default());
    let flow = PlanFlow::new(PlansClient::new(api), Arc::clone(&shell));
    (shell, flow)
}

#[tokio::test]
async fn create_plan_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plan": {
                "id": "X",
                "name": "Basic",
                "totalChats": 100,
                "totalQuestions": 1000,
                "questionSize": 50,
                "historySize": 10,
                "period": "month",
                "createdAt": "2025-06-01T12:00:00",
                "updatedAt": "2025-06-01T12:00:00"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (shell, mut flow) = harness(&server).await;

    flow.open_create();
    flow.set_field(PlanField::Name, "Basic");
    flow.set_field(PlanField::TotalChats, "100");
    flow.set_field(PlanField::TotalQuestions, "1000");
    flow.set_field(PlanField::QuestionSize, "50");
    flow.set_field(PlanField::HistorySize, "10");
    flow.set_field(PlanField::Period, "month");

    let saved = flow.save().await;

    assert!(saved);
    assert_eq!(flow.state(), EditorState::Idle);
    assert_eq!(shell.invalidations.load(Ordering::SeqCst), 1);
    assert_eq!(
        *shell.toasts.lock().expect("lock"),
        vec![(ToastKind::Success, "Plan added successfully!".to_string())]
    );

    // The POST body carried no id and integer quotas coerced from the
    // string form fields.
    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("request body");
    assert!(body.get("id").is_none());
    assert_eq!(body["totalChats"], 100);
    assert_eq!(body["totalQuestions"], 1000);
    assert_eq!(body["period"], "month");
}

#[tokio::test]
async fn delete_plan_end_to_end_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/plans/2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "message": "in use" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (shell, mut flow) = harness(&server).await;

    flow.request_delete("2");
    let deleted = flow.confirm_delete().await;

    assert!(!deleted);
    assert_eq!(flow.general_error(), Some("in use"));
    assert_eq!(*flow.delete_state(), DeleteState::Confirming("2".to_string()));
    assert_eq!(
        *shell.toasts.lock().expect("lock"),
        vec![(ToastKind::Error, "in use".to_string())]
    );
}
