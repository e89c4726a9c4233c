use serde::Deserialize;

/// A contact-form submission. All five fields are required by the store's
/// schema; they are optional here so that an absent field surfaces as a
/// store rejection rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}
