use axum::http::HeaderMap;
use url::Url;

/// Hostname the submission claims to come from: the Origin header, with a
/// Referer fallback when Origin is absent. A present but unparsable Origin
/// yields None.
pub fn submitting_hostname(headers: &HeaderMap) -> Option<String> {
    match headers.get("origin").and_then(|v| v.to_str().ok()) {
        Some(origin) => hostname(origin),
        None => headers
            .get("referer")
            .and_then(|v| v.to_str().ok())
            .and_then(hostname),
    }
}

/// Extract the hostname from a URL string.
pub fn hostname(value: &str) -> Option<String> {
    Url::parse(value)
        .ok()
        .and_then(|url| url.host_str().map(|h| h.to_string()))
}

pub fn is_allowed(hostname: &str, allowed_domains: &[String]) -> bool {
    allowed_domains.iter().any(|d| d == hostname)
}
