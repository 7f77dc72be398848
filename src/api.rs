//! HTTP wrappers for the session endpoints.
//!
//! Browser (`browser` feature): real requests via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`], since these
//! endpoints are only meaningful from a page.
//!
//! ERROR HANDLING
//! ==============
//! Both wrappers return `Result` and never log. Whether a failure is shown,
//! logged or ignored is the caller's choice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;
use crate::user::UserInfo;

/// Parse a user endpoint body. Any JSON object is accepted; only the fields
/// `UserInfo` knows about are interpreted.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not JSON of the expected shape.
#[cfg(any(test, feature = "browser"))]
fn decode_user_info(body: &str) -> Result<UserInfo, ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch the session's identity with `GET {endpoint}`.
///
/// The HTTP status is not inspected: a non-2xx response with a JSON body is
/// decoded the same way as a 2xx one.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request or body read fails, and
/// [`ApiError::Decode`] if the body does not parse.
pub async fn fetch_user_info(endpoint: &str) -> Result<UserInfo, ApiError> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        decode_user_info(&body)
    }
    #[cfg(not(feature = "browser"))]
    {
        Err(ApiError::Unavailable(endpoint.to_owned()))
    }
}

/// End the session with `POST {endpoint}` and an empty JSON request.
///
/// Returns whether the server answered with a 2xx status. The response body
/// is not read.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request could not be sent.
pub async fn post_logout(endpoint: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(resp.ok())
    }
    #[cfg(not(feature = "browser"))]
    {
        Err(ApiError::Unavailable(endpoint.to_owned()))
    }
}
