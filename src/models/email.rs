use crate::validation::ServerVerdict;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const MISSING_EMAIL_ERROR: &str = "Email parameter is required";
pub const MISSING_EMAIL_EXAMPLE: &str = "?email=test@example.com";
pub const METHOD_NOT_ALLOWED_ERROR: &str = "Method not allowed";
pub const VALID_METHODS: [&str; 2] = ["GET", "POST"];

/// `POST /validate-email` body.
#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// `GET /validate-email` query string.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Address to check
    pub email: Option<String>,
}

/// Outcome of a validation request.
///
/// `valid` mirrors `hasMXRecords`; callers must read the body, since every
/// outcome is delivered with a 200 status.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct EmailValidationResponse {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub valid: bool,
    pub reason: String,
    #[serde(rename = "hasMXRecords")]
    pub has_mx_records: bool,
}

impl EmailValidationResponse {
    pub fn from_verdict(email: impl Into<String>, verdict: &ServerVerdict) -> Self {
        Self {
            email: email.into(),
            domain: verdict.domain().map(str::to_string),
            valid: verdict.is_valid(),
            reason: verdict.reason().to_string(),
            has_mx_records: verdict.has_mx_records(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MissingEmailResponse {
    pub error: String,
    pub example: String,
}

impl Default for MissingEmailResponse {
    fn default() -> Self {
        Self {
            error: MISSING_EMAIL_ERROR.to_string(),
            example: MISSING_EMAIL_EXAMPLE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MethodNotAllowedResponse {
    pub error: String,
    #[serde(rename = "validMethods")]
    pub valid_methods: Vec<String>,
}

impl Default for MethodNotAllowedResponse {
    fn default() -> Self {
        Self {
            error: METHOD_NOT_ALLOWED_ERROR.to_string(),
            valid_methods: VALID_METHODS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Body of the CORS preflight answer.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct PreflightResponse {
    pub success: bool,
}
