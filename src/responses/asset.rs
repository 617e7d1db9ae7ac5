use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use mime::Mime;

const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Serves an asset compiled into the binary, by its name under `/static/`.
pub fn static_asset(name: &str) -> ResultResp {
    let (content_type, body): (Mime, &str) = match name {
        "main.css" => (mime::TEXT_CSS_UTF_8, MAIN_CSS),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body.to_string()))
        .map_err(|_| ServerError::InternalError)
}
