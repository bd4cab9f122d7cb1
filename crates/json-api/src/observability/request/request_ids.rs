//! Request ids: accept the caller's when usable, otherwise mint one.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longer incoming ids are replaced rather than truncated.
const MAX_REQUEST_ID_LEN: usize = 128;

pub(super) fn resolve_request_id(incoming: Option<&str>) -> String {
    incoming
        .map(str::trim)
        .filter(|value| is_usable(value))
        .map_or_else(|| Uuid::now_v7().to_string(), str::to_string)
}

/// Visible ASCII only, so the id always round-trips through a header.
fn is_usable(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_REQUEST_ID_LEN
        && value.bytes().all(|byte| byte.is_ascii_graphic())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
}

pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}
