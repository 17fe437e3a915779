//! Backend commands queued from UI to the delivery worker.

use contact::SubmissionTicket;

#[derive(Debug)]
pub enum BackendCommand {
    SubmitContact(SubmissionTicket),
}
