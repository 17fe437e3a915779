//! Command orchestration helpers from UI actions to the backend queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queue a command without blocking the frame. Returns `false` when the
/// command was dropped, with the reason written to `status`.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::SubmitContact(_) => "submit_contact",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Delivery queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Delivery worker disconnected (possible startup failure); restart the app"
                    .to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contact::SubmissionTicket;
    use crossbeam_channel::bounded;
    use shared::protocol::ContactMessage;

    fn ticket(seq: u64) -> SubmissionTicket {
        SubmissionTicket {
            seq,
            message: ContactMessage {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                subject: String::new(),
                message: "Hi".to_string(),
            },
        }
    }

    #[test]
    fn queued_commands_reach_the_worker_side() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
        let mut status = String::new();

        assert!(dispatch_backend_command(
            &cmd_tx,
            BackendCommand::SubmitContact(ticket(1)),
            &mut status,
        ));
        assert!(status.is_empty());

        let BackendCommand::SubmitContact(received) = cmd_rx.try_recv().expect("queued command");
        assert_eq!(received.seq, 1);
        assert_eq!(received.message.name, "Jane");
    }

    #[test]
    fn a_full_queue_drops_the_command_and_reports_it() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(
            &cmd_tx,
            BackendCommand::SubmitContact(ticket(1)),
            &mut status,
        ));

        assert!(!dispatch_backend_command(
            &cmd_tx,
            BackendCommand::SubmitContact(ticket(2)),
            &mut status,
        ));
        assert!(status.contains("full"));

        // Only the first command is ever seen by the worker.
        let BackendCommand::SubmitContact(received) = cmd_rx.try_recv().expect("first command");
        assert_eq!(received.seq, 1);
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn a_disconnected_worker_is_reported() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
        drop(cmd_rx);

        let mut status = String::new();
        assert!(!dispatch_backend_command(
            &cmd_tx,
            BackendCommand::SubmitContact(ticket(1)),
            &mut status,
        ));
        assert!(status.contains("disconnected"));
    }
}
