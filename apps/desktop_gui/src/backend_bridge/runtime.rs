//! Runtime bridge between the UI command queue and the form delivery worker.
//!
//! The worker runs a tokio runtime on its own thread; delivery outcomes and
//! the delayed success expiry flow back through the bounded event channel.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use contact::{
    delivery::{FormDelivery, HttpFormDelivery, MissingFormDelivery},
    SUCCESS_RESET_DELAY,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(form_endpoint: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let delivery: Arc<dyn FormDelivery> = if form_endpoint.trim().is_empty() {
        tracing::warn!("no form endpoint configured; contact submissions will fail");
        Arc::new(MissingFormDelivery)
    } else {
        Arc::new(HttpFormDelivery::new(form_endpoint))
    };
    launch_with_delivery(delivery, cmd_rx, ui_tx);
}

fn launch_with_delivery(
    delivery: Arc<dyn FormDelivery>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::WorkerFailed {
                    detail: format!("failed to build delivery runtime: {err}"),
                });
                tracing::error!("failed to build delivery runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Delivery worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitContact(ticket) => {
                        tracing::info!(seq = ticket.seq, "backend: submit_contact");
                        match delivery.deliver(&ticket.message).await {
                            Ok(()) => {
                                let _ = ui_tx.try_send(UiEvent::ContactDelivered { seq: ticket.seq });
                                let ui_tx = ui_tx.clone();
                                let seq = ticket.seq;
                                tokio::spawn(async move {
                                    tokio::time::sleep(SUCCESS_RESET_DELAY).await;
                                    let _ = ui_tx.try_send(UiEvent::ContactResetDue { seq });
                                });
                            }
                            Err(err) => {
                                tracing::warn!(seq = ticket.seq, "backend: submit_contact failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::ContactFailed {
                                    seq: ticket.seq,
                                    detail: err.to_string(),
                                });
                            }
                        }
                    }
                }
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use contact::{delivery::SubmissionError, SubmissionTicket};
    use crossbeam_channel::bounded;
    use shared::protocol::ContactMessage;

    #[derive(Default)]
    struct TestFormDelivery {
        delivered: Arc<Mutex<Vec<ContactMessage>>>,
    }

    #[async_trait]
    impl FormDelivery for TestFormDelivery {
        async fn deliver(&self, message: &ContactMessage) -> Result<(), SubmissionError> {
            self.delivered.lock().expect("lock").push(message.clone());
            Ok(())
        }
    }

    fn ticket(seq: u64) -> SubmissionTicket {
        SubmissionTicket {
            seq,
            message: ContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: String::new(),
                message: "Hello there".to_string(),
            },
        }
    }

    #[test]
    fn a_blank_endpoint_worker_comes_up_and_fails_submissions() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(8);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
        launch(String::new(), cmd_rx, ui_tx);

        match ui_rx.recv_timeout(Duration::from_secs(5)).expect("ready event") {
            UiEvent::Info(detail) => assert_eq!(detail, "Delivery worker ready"),
            other => panic!("unexpected event: {other:?}"),
        }

        cmd_tx
            .send(BackendCommand::SubmitContact(ticket(7)))
            .expect("command sent");
        match ui_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("failure event")
        {
            UiEvent::ContactFailed { seq, detail } => {
                assert_eq!(seq, 7);
                assert!(detail.contains("no form delivery configured"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn delivered_submissions_report_success_and_schedule_the_expiry() {
        let delivery = TestFormDelivery::default();
        let delivered = delivery.delivered.clone();
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(8);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
        launch_with_delivery(Arc::new(delivery), cmd_rx, ui_tx);

        match ui_rx.recv_timeout(Duration::from_secs(5)).expect("ready event") {
            UiEvent::Info(_) => {}
            other => panic!("unexpected event: {other:?}"),
        }

        cmd_tx
            .send(BackendCommand::SubmitContact(ticket(3)))
            .expect("command sent");
        match ui_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("delivered event")
        {
            UiEvent::ContactDelivered { seq } => assert_eq!(seq, 3),
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(delivered.lock().expect("lock")[0].name, "Ada");

        match ui_rx
            .recv_timeout(SUCCESS_RESET_DELAY + Duration::from_secs(5))
            .expect("reset event")
        {
            UiEvent::ContactResetDue { seq } => assert_eq!(seq, 3),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
