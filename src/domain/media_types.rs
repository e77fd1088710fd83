//! Media types for the `Content-Type` and `Accept` header helpers.

pub const APPLICATION_JSON: &str = "application/json";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const TEXT_PLAIN: &str = "text/plain";
