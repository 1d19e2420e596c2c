use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health` liveness probe returning [`HealthResponse`].
///
/// [`HealthResponse`]: crate::models::health::HealthResponse
pub mod health;

/// # Email Validation Endpoint
///
/// `GET /validate-email?email=…` or `POST /validate-email` with
/// `{"email": "…"}`. Checks the address shape, then looks up MX records for
/// the domain.
///
/// ## Responses
/// - **200 OK**: always, for any supplied address; inspect `valid`
/// - **400 Bad Request**: no `email` supplied
/// - **405 Method Not Allowed**: anything but `GET`, `POST`, `OPTIONS`
pub mod email;

/// # Route Configuration
///
/// Mounts every endpoint at the root:
///
/// ```text
/// GET     /health
/// GET     /validate-email?email=<addr>
/// POST    /validate-email
/// OPTIONS /validate-email
/// ```
///
/// The email endpoint expects a `web::Data<dyn MxLookup>` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(email::configure_routes);
}
