use crate::models::{
    EmailQuery, EmailRequest, EmailValidationResponse, MethodNotAllowedResponse,
    MissingEmailResponse, PreflightResponse,
};
use crate::validation::{MxLookup, verify};
use actix_web::{HttpRequest, HttpResponse, http::Method, middleware::DefaultHeaders, web};
use log::debug;
use serde_json::Value;

/// Headers attached to every `/validate-email` response, preflight included.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}

/// # Email Validation Endpoint (query string)
///
/// Checks the shape of `email` and, when it is well formed, whether its
/// domain publishes MX records.
///
/// ## Responses
/// - **200 OK**: verdict in the body; `valid` is `false` for malformed input
///   and for domains without MX records
/// - **400 Bad Request**: `email` missing or empty
///
/// ## Example Request
/// ```text
/// GET /validate-email?email=jane@acme.com
/// ```
#[utoipa::path(
    get,
    path = "/validate-email",
    params(EmailQuery),
    responses(
        (status = 200, description = "Validation verdict", body = EmailValidationResponse),
        (status = 400, description = "Email parameter missing", body = MissingEmailResponse)
    ),
    tag = "Email Validation"
)]
pub async fn validate_email_get(req: HttpRequest, mx: web::Data<dyn MxLookup>) -> HttpResponse {
    let email = web::Query::<EmailQuery>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.into_inner().email);
    respond(email, mx.get_ref()).await
}

/// # Email Validation Endpoint (JSON body)
///
/// Same contract as the `GET` form with the address in `{"email": "..."}`.
/// Anything that is not a JSON object with a string `email` is treated as a
/// missing parameter.
#[utoipa::path(
    post,
    path = "/validate-email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Validation verdict", body = EmailValidationResponse),
        (status = 400, description = "Email parameter missing", body = MissingEmailResponse)
    ),
    tag = "Email Validation"
)]
pub async fn validate_email_post(body: web::Bytes, mx: web::Data<dyn MxLookup>) -> HttpResponse {
    let email = serde_json::from_slice::<Value>(&body).ok().and_then(|value| {
        value
            .as_object()?
            .get("email")?
            .as_str()
            .map(str::to_string)
    });
    respond(email, mx.get_ref()).await
}

/// CORS preflight.
#[utoipa::path(
    options,
    path = "/validate-email",
    responses((status = 200, description = "Preflight accepted", body = PreflightResponse)),
    tag = "Email Validation"
)]
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().json(PreflightResponse { success: true })
}

pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!("Rejected {} {}", req.method(), req.path());
    HttpResponse::MethodNotAllowed().json(MethodNotAllowedResponse::default())
}

async fn respond(email: Option<String>, mx: &dyn MxLookup) -> HttpResponse {
    let Some(email) = email.filter(|email| !email.is_empty()) else {
        return HttpResponse::BadRequest().json(MissingEmailResponse::default());
    };

    let verdict = verify(&email, mx).await;
    debug!("{email}: {}", verdict.reason());
    HttpResponse::Ok().json(EmailValidationResponse::from_verdict(email, &verdict))
}

/// Configures `/validate-email` with its method routing and CORS headers.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/validate-email")
            .route(web::get().to(validate_email_get))
            .route(web::post().to(validate_email_post))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed))
            .wrap(cors_headers()),
    );
}
