use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use form_email_validator::config::AppConfig;
use form_email_validator::openapi::ApiDoc;
use form_email_validator::validation::{DnsMxLookup, MxLookup};
use log::info;
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Form Email Validator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - `/validate-email` (format + MX check) and `/health`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Request logging through `env_logger` (`RUST_LOG`, default `info`)
///
/// # Endpoints
/// - Validation: `/validate-email`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config =
        AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mx: Arc<dyn MxLookup> = Arc::new(DnsMxLookup::new(config.dns));
    let mx = Data::from(mx);

    info!(
        "Listening on {}:{} (DNS timeout {}ms x{}, deadline {}ms)",
        config.host,
        config.port,
        config.dns.query_timeout.as_millis(),
        config.dns.attempts,
        config.dns.deadline.as_millis()
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(mx.clone())
            .configure(form_email_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
