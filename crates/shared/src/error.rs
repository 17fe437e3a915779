use thiserror::Error;

/// Pre-flight contact form failures. These never reach the network, and
/// `Display` is the exact message shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequiredField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
