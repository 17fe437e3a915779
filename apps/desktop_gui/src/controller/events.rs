//! Events emitted by the delivery worker and applied on the UI thread.
//!
//! Contact outcomes carry the submission sequence number they belong to; the
//! form drops any event whose sequence is no longer current.

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    WorkerFailed { detail: String },
    ContactDelivered { seq: u64 },
    ContactFailed { seq: u64, detail: String },
    ContactResetDue { seq: u64 },
}
