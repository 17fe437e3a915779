use super::*;
use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

use crate::{ContactField, ContactForm, SubmissionStatus, SUBMISSION_FAILED_MESSAGE};

struct CapturedSubmission {
    accept: Option<String>,
    message: ContactMessage,
}

#[derive(Clone)]
struct StubState {
    tx: Arc<Mutex<Option<oneshot::Sender<CapturedSubmission>>>>,
    status: StatusCode,
}

async fn handle_submission(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(message): Json<ContactMessage>,
) -> StatusCode {
    if let Some(tx) = state.tx.lock().await.take() {
        let _ = tx.send(CapturedSubmission {
            accept: headers
                .get(header::ACCEPT)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            message,
        });
    }
    state.status
}

async fn spawn_form_endpoint(
    status: StatusCode,
) -> (String, oneshot::Receiver<CapturedSubmission>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = oneshot::channel();
    let state = StubState {
        tx: Arc::new(Mutex::new(Some(tx))),
        status,
    };
    let app = Router::new()
        .route("/f/demo", post(handle_submission))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/f/demo"), rx)
}

fn sample_message() -> ContactMessage {
    ContactMessage {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        subject: String::new(),
        message: "Hi".to_string(),
    }
}

#[tokio::test]
async fn delivers_json_payload_with_accept_header() {
    let (endpoint, payload_rx) = spawn_form_endpoint(StatusCode::OK).await;
    let delivery = HttpFormDelivery::new(endpoint);

    delivery.deliver(&sample_message()).await.expect("deliver");

    let captured = payload_rx.await.expect("payload");
    assert_eq!(captured.accept.as_deref(), Some("application/json"));
    assert_eq!(captured.message, sample_message());
}

#[tokio::test]
async fn non_success_status_maps_to_endpoint_error() {
    let (endpoint, _payload_rx) = spawn_form_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
    let delivery = HttpFormDelivery::new(endpoint);

    let err = delivery
        .deliver(&sample_message())
        .await
        .expect_err("must fail");
    match err {
        SubmissionError::EndpointStatus { status } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_network_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let delivery = HttpFormDelivery::new(format!("http://{addr}/f/demo"));
    let err = delivery
        .deliver(&sample_message())
        .await
        .expect_err("must fail");
    assert!(matches!(err, SubmissionError::Network { .. }));
}

#[tokio::test]
async fn missing_delivery_reports_not_configured() {
    let delivery = MissingFormDelivery;
    let err = delivery
        .deliver(&sample_message())
        .await
        .expect_err("must fail");
    assert!(matches!(err, SubmissionError::NotConfigured));
}

struct TestFormDelivery {
    fail_with: Option<StatusCode>,
    delivered: Arc<Mutex<Vec<ContactMessage>>>,
}

impl TestFormDelivery {
    fn ok() -> Self {
        Self {
            fail_with: None,
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(status: StatusCode) -> Self {
        Self {
            fail_with: Some(status),
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl FormDelivery for TestFormDelivery {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), SubmissionError> {
        if let Some(status) = self.fail_with {
            return Err(SubmissionError::EndpointStatus { status });
        }
        self.delivered.lock().await.push(message.clone());
        Ok(())
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.edit_field(ContactField::Name, "Jane");
    form.edit_field(ContactField::Email, "jane@x.com");
    form.edit_field(ContactField::Message, "Hi");
    form
}

#[tokio::test]
async fn submission_flow_succeeds_and_clears_fields() {
    let delivery = TestFormDelivery::ok();
    let delivered = delivery.delivered.clone();

    let mut form = filled_form();
    let ticket = form.begin_submission().expect("ticket");
    assert_eq!(form.status(), SubmissionStatus::Submitting);

    match delivery.deliver(&ticket.message).await {
        Ok(()) => form.record_success(ticket.seq),
        Err(_) => form.record_failure(ticket.seq),
    }

    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.fields(), &ContactMessage::default());

    let delivered = delivered.lock().await;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Jane");
}

#[tokio::test]
async fn submission_flow_failure_keeps_fields_for_retry() {
    let delivery = TestFormDelivery::failing(StatusCode::INTERNAL_SERVER_ERROR);
    let delivered = delivery.delivered.clone();

    let mut form = filled_form();
    let ticket = form.begin_submission().expect("ticket");

    match delivery.deliver(&ticket.message).await {
        Ok(()) => form.record_success(ticket.seq),
        Err(_) => form.record_failure(ticket.seq),
    }

    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.error_message(), Some(SUBMISSION_FAILED_MESSAGE));
    assert_eq!(form.field(ContactField::Name), "Jane");
    assert_eq!(form.field(ContactField::Email), "jane@x.com");
    assert_eq!(form.field(ContactField::Message), "Hi");
    assert!(delivered.lock().await.is_empty());
}
