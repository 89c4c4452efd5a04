//! Page flows end to end: shell navigation, mount-time fetches and user
//! operations against a wiremock backend.

use std::time::Duration;

use saro::pages::checklist::BotRun;
use saro::pages::overview::Persona;
use saro::pages::{AuditPage, FeedLogPage, ModelCheckerPage, OverviewPage, PageState};
use saro::{ApiBase, ApiClient, PageId, ReqwestTransport, Shell, Transition};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient<ReqwestTransport> {
    let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
    ApiClient::new(ApiBase::new(&server.uri()), transport)
}

async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn overview_loads_summary_and_persona() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/api/v1/dashboard",
        json!({"mvp1_ingestion": {"documents_total": 1247}}),
    )
    .await;
    mount_get(
        &server,
        "/api/v1/checklist/persona/forecaster",
        json!({"workflow": {"quick_actions": []}}),
    )
    .await;
    mount_get(&server, "/api/v1/checklist/compliance-status", json!({"items": []})).await;

    let client = client_for(&server);
    let mut page = OverviewPage::new(Persona::Forecaster);
    page.load(&client).await;

    assert!(page.error.is_none());
    assert_eq!(page.module("mvp1_ingestion").unwrap()["documents_total"], 1247);
    assert!(page.workflow.is_some());
    assert!(page.last_refreshed.is_some());
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn audit_validation_error_shown_inline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/mvp2/audit"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "model_name is required"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = AuditPage::default();
    page.form.model_name = "x".to_string();
    page.form.use_case = "credit scoring".to_string();
    page.run_audit(&client).await;

    assert_eq!(page.error.as_deref(), Some("model_name is required"));
    assert!(page.result.is_none());
    assert!(!page.submitting);
}

#[tokio::test]
async fn shell_remount_discards_page_state() {
    let server = MockServer::start().await;
    mount_get(&server, "/api/v1/audit-reports", json!({"reports": [{"report_id": "RPT-1"}]})).await;
    mount_get(&server, "/api/v1/mvp2/audits", json!({"audits": []})).await;
    mount_get(&server, "/api/v1/mvp2/compliance-matrix", json!({"articles": []})).await;

    let client = client_for(&server);
    let mut shell = Shell::new();

    assert_eq!(shell.navigate("reports"), Transition::Mounted(PageId::Reports));
    shell.load(&client).await;
    if let PageState::Reports(page) = shell.page_mut() {
        page.select(0);
    }

    assert_eq!(shell.navigate("reports"), Transition::Unchanged);
    match shell.page() {
        PageState::Reports(page) => assert_eq!(page.selected_id(), Some("RPT-1")),
        other => panic!("unexpected page {:?}", other.page_id()),
    }

    shell.navigate("mvp2");
    shell.load(&client).await;
    assert!(shell.page().error().is_none());

    shell.navigate("reports");
    match shell.page() {
        PageState::Reports(page) => {
            assert!(page.reports.is_empty());
            assert!(page.selected.is_none());
        }
        other => panic!("unexpected page {:?}", other.page_id()),
    }
}

#[tokio::test]
async fn feed_approval_marks_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/feed-log"))
        .and(query_param("jurisdiction", "EU"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "feeds": [{"feed_id": "FEED-1", "status": "pending_review", "is_new": true}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/feed-log/FEED-1/approve"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "reviewed"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = FeedLogPage::default();
    page.select_jurisdiction("EU");
    page.load(&client).await;
    assert_eq!(page.new_count(), 1);

    page.approve(&client, "FEED-1").await;

    assert_eq!(page.new_count(), 0);
    assert_eq!(page.feeds[0]["status"], "reviewed");
}

#[tokio::test]
async fn model_checker_demo_then_bot_fix() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/model-output/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "upload_id": "UP-9",
            "summary": {"overall_verdict": "FAIL"},
            "checklist": [
                {"check": "Bias / Disparate Impact", "status": "critical"},
                {"check": "Adverse Action Notice", "status": "warn"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/mvp5/bots/execute"))
        .and(body_json(json!({"bot_type": "retrain_bot", "finding_id": "FIND-UP-9-0"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "JOB-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = ModelCheckerPage::default();
    page.run_demo(&client, 0).await;

    assert_eq!(page.verdict(), Some("FAIL"));
    assert_eq!(page.checklist().len(), 2);

    page.fix_item(&client, 0).await;
    assert_eq!(page.review.bot(0), Some(BotRun::Done));
    assert_eq!(page.review.bot(1), None);
}
