// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

// Project saves carry data-URL gallery images, so the default 2 MiB
// body cap is too small. Ten images at the 1 MiB per-image cap plus
// base64 overhead fits under 16 MiB.
const JSON_PAYLOAD_LIMIT: usize = 16 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("MALFORMED_BODY", &message),
            )
            .into()
        })
}
