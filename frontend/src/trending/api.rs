use crate::env_variable_utils::BACKEND_URL;
use crate::models::{ErrorResponse, VideoListResponse};
use crate::trending::controller::FetchRequest;
use gloo_net::http::Request;

pub fn build_request_url(backend_url: &str, request: &FetchRequest) -> String {
    format!(
        "{}/api/youtube?{}",
        backend_url.trim_end_matches('/'),
        request.query_string()
    )
}

/// Any non-success status is reported as one failure message
pub async fn fetch_videos(request: &FetchRequest) -> Result<VideoListResponse, String> {
    let url = build_request_url(&BACKEND_URL, request);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {e}"))?;

    if response.ok() {
        return response
            .json::<VideoListResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {e}"));
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(error_message(status, &text))
}

pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error_response) => error_response.error,
        Err(_) if body.is_empty() => format!("Request failed with status: {status}"),
        Err(_) => format!("Request failed ({status}): {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trending::controller::ViewController;

    #[test]
    fn request_url_joins_backend_and_query() {
        let request = ViewController::default().request();
        assert_eq!(
            build_request_url("http://localhost:8000/", &request),
            "http://localhost:8000/api/youtube?maxResults=25&regionCode=KR&type=popular&dateFilter=all&sortOrder=popular"
        );
    }

    #[test]
    fn structured_errors_expose_their_message() {
        let body = r#"{"error":"Region code ZZ is not supported","errorCode":"INVALID_REGION"}"#;
        assert_eq!(error_message(400, body), "Region code ZZ is not supported");
        assert_eq!(error_message(502, ""), "Request failed with status: 502");
        assert_eq!(error_message(502, "Bad Gateway"), "Request failed (502): Bad Gateway");
    }
}
