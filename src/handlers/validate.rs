// Payload validation helpers shared by the handler tree. All failures are
// `ApiError::Validation` (400), never conflated with authentication errors.
use url::Url;

use crate::error::ApiError;

pub fn non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn max_len(field: &str, value: &str, limit: usize) -> Result<(), ApiError> {
    if value.chars().count() > limit {
        return Err(ApiError::validation(format!(
            "{} must be at most {} characters",
            field, limit
        )));
    }
    Ok(())
}

pub fn email_format(field: &str, value: &str) -> Result<(), ApiError> {
    let parts: Vec<&str> = value.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        return Err(ApiError::validation(format!(
            "{} must be a valid email address",
            field
        )));
    }
    Ok(())
}

pub fn http_url(field: &str, value: &str) -> Result<(), ApiError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ApiError::validation(format!(
            "{} must be an http(s) URL",
            field
        ))),
    }
}

pub fn within(field: &str, value: i32, min: i32, max: i32) -> Result<(), ApiError> {
    if value < min || value > max {
        return Err(ApiError::validation(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}
