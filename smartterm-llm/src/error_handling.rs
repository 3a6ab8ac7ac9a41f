//! Classification of HTTP and transport failures into [`LLMError`] values.

use serde_json::Value;

use crate::error::LLMError;

pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNAUTHORIZED: u16 = 401;
pub const STATUS_FORBIDDEN: u16 = 403;
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Rate limit phrases, pre-lowercased.
const RATE_LIMIT_PATTERNS: &[&str] = &[
    "resource_exhausted",
    "quota",
    "rate limit",
    "rate_limit",
    "ratelimit",
    "too many requests",
];

pub fn is_rate_limit_error(status_code: u16, error_text: &str) -> bool {
    if status_code == STATUS_TOO_MANY_REQUESTS {
        return true;
    }
    let lowered = error_text.to_ascii_lowercase();
    RATE_LIMIT_PATTERNS
        .iter()
        .any(|pattern| lowered.contains(pattern))
}

/// Pull `error.message` out of a Google-style JSON error body, falling back to
/// the raw text.
pub fn extract_error_message(error_text: &str) -> String {
    serde_json::from_str::<Value>(error_text)
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(|error| error.get("message"))
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| error_text.trim().to_owned())
}

pub fn parse_api_error(provider: &str, status_code: u16, error_text: &str) -> LLMError {
    let message = extract_error_message(error_text);

    if status_code == STATUS_UNAUTHORIZED || status_code == STATUS_FORBIDDEN {
        return LLMError::Authentication {
            message: format!(
                "{provider}: {message}. Check your GEMINI_API_KEY or GOOGLE_API_KEY environment variable."
            ),
        };
    }

    if is_rate_limit_error(status_code, error_text) {
        return LLMError::RateLimit;
    }

    if status_code == STATUS_BAD_REQUEST {
        return LLMError::InvalidRequest {
            message: format!("{provider}: {message}"),
        };
    }

    LLMError::Provider {
        message: format!("{provider} HTTP {status_code}: {message}"),
    }
}

pub fn format_network_error(provider: &str, error: &reqwest::Error) -> LLMError {
    LLMError::Network {
        message: format!("{provider}: {error}"),
    }
}

pub fn format_parse_error(provider: &str, error: &impl std::fmt::Display) -> LLMError {
    LLMError::Parse {
        message: format!("{provider}: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_is_rate_limit() {
        assert!(is_rate_limit_error(429, ""));
        assert_eq!(parse_api_error("Gemini", 429, "slow down"), LLMError::RateLimit);
    }

    #[test]
    fn quota_message_is_rate_limit() {
        let body = r#"{"error":{"code":403,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert!(is_rate_limit_error(500, body));
    }

    #[test]
    fn unauthorized_is_authentication() {
        let body = r#"{"error":{"code":401,"message":"API key not valid"}}"#;
        let error = parse_api_error("Gemini", 401, body);
        assert!(matches!(
            error,
            LLMError::Authentication { ref message } if message.contains("API key not valid")
        ));
    }

    #[test]
    fn bad_request_is_invalid_request() {
        let error = parse_api_error("Gemini", 400, "plain text body");
        assert_eq!(
            error,
            LLMError::InvalidRequest {
                message: "Gemini: plain text body".to_string()
            }
        );
    }

    #[test]
    fn other_statuses_are_provider_errors() {
        let error = parse_api_error("Gemini", 503, "overloaded");
        assert_eq!(error.to_string(), "Gemini HTTP 503: overloaded");
    }
}
