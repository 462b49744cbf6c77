use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::types::error::AppError;

pub fn encode_segment(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Turns body parse failures into the API's JSON error shape.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// The web client is served from a different origin.
pub fn cors() -> Cors {
    Cors::permissive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_characters_in_segments() {
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("0b6f2f4e-6a0f-4c57-9d7e-1f3c9e2b8a10"), "0b6f2f4e-6a0f-4c57-9d7e-1f3c9e2b8a10");
    }
}
