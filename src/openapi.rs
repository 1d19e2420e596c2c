use utoipa::OpenApi;

/// OpenAPI document for the HTTP surface.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Email Validation: `GET`, `POST` and `OPTIONS` on `/validate-email`
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// handlers; served under `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email_get,
        crate::routes::email::validate_email_post,
        crate::routes::email::preflight,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailRequest,
            crate::models::email::EmailValidationResponse,
            crate::models::email::MissingEmailResponse,
            crate::models::email::MethodNotAllowedResponse,
            crate::models::email::PreflightResponse,
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email format and MX record checks")
    ),
    info(
        description = "Checks email address shape and domain MX records for marketing forms",
        title = "Form Email Validator API",
        version = "0.3.0",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_validate_email_methods() {
        let doc = ApiDoc::openapi();
        let item = doc
            .paths
            .paths
            .get("/validate-email")
            .expect("validate-email path documented");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
        assert!(item.options.is_some());
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn serialises_to_json() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("hasMXRecords"));
        assert!(json.contains("validMethods"));
    }
}
