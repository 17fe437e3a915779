use serde::{Deserialize, Serialize};

/// Body POSTed to the form delivery endpoint. Field names are the JSON keys
/// the endpoint expects; the subject may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
