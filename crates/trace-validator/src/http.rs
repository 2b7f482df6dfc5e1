//! Shared HTTP response checks for the LLM client.
//!
//! Maps 429 to [`ValidatorError::RateLimited`] (with `Retry-After` parsing)
//! and any other non-success status to [`ValidatorError::Api`]. Nothing is
//! retried.

use crate::error::ValidatorError;

/// Seconds assumed when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Return the response unchanged on success, or the matching error.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ValidatorError> {
    if resp.status() == 429 {
        return Err(ValidatorError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(ValidatorError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "12");
        assert_eq!(parse_retry_after(&resp), 12);
    }

    #[test]
    fn retry_after_defaults_when_missing_or_garbage() {
        assert_eq!(parse_retry_after(&mock_response(429, "")), 60);
        let resp = mock_response_with_retry_after(429, "Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn rate_limited_maps_to_error() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ValidatorError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn server_error_carries_body() {
        let resp = mock_response(503, "model overloaded");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ValidatorError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "model overloaded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }
}
