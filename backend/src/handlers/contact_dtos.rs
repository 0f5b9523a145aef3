use serde::{Deserialize, Serialize};

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your message. We'll be in touch within 24 hours.";
pub const CONTACT_FAILURE_MESSAGE: &str =
    "Something went wrong. Please try again or contact us directly.";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn received() -> Self {
        Self {
            success: true,
            message: CONTACT_SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: CONTACT_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MethodNotAllowedResponse {
    pub message: &'static str,
}
