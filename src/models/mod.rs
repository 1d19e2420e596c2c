/// # Health Status Response
///
/// Liveness payload returned by `GET /health`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "service": "form-email-validator",
///   "version": "0.3.0",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// Request and response bodies of the `/validate-email` endpoint.
pub mod email;

pub use email::{
    EmailQuery, EmailRequest, EmailValidationResponse, MethodNotAllowedResponse,
    MissingEmailResponse, PreflightResponse,
};
pub use health::HealthResponse;
