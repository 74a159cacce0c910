//! Shared HTTP response checks for the content client.
//!
//! Keeps the status mapping in one place: absent papers become
//! [`ContentError::NotFound`], any other non-success becomes
//! [`ContentError::Status`].

use reqwest::StatusCode;

use crate::error::ContentError;

/// Check a response for error statuses.
///
/// `slug` is set for paper fetches; only those map 404/410 to
/// [`ContentError::NotFound`]. The index fetch passes `None`, so a missing
/// index is a transport-class failure.
pub fn check_response(
    resp: reqwest::Response,
    slug: Option<&str>,
) -> Result<reqwest::Response, ContentError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if let Some(slug) = slug
        && matches!(status, StatusCode::NOT_FOUND | StatusCode::GONE)
    {
        return Err(ContentError::NotFound {
            slug: slug.to_string(),
        });
    }
    Err(ContentError::Status {
        status: status.as_u16(),
        url: resp.url().to_string(),
    })
}
