//! Cross-origin policy: every origin, method and header is allowed.

use actix_cors::Cors;

/// Answers preflights and marks every response with `Access-Control-Allow-Origin: *`.
pub fn allow_any_origin() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
