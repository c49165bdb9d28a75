use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::web;

use super::error::ApiError;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Health checks
        .route("/health", web::get().to(handlers::health_check))

        // Package generation
        .service(
            web::resource("/api/generate-excel")
                .wrap(cors())
                .route(web::post().to(handlers::generate_excel))
                .route(web::method(Method::OPTIONS).to(handlers::preflight))
        );
}

/// Permissive policy: any origin may POST JSON. Full preflights are answered
/// here; any other OPTIONS reaches `handlers::preflight`.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

/// JSON body settings; malformed bodies answer with the usual `{"error": …}` shape.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| ApiError::from(err).into())
}
