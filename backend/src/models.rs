use chrono::{DateTime, Duration, Utc};
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use serde_json::{json, Value};
use std::io::Cursor;

use crate::services::region::DEFAULT_REGION;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    pub videos: Vec<Video>,
    pub total_results: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<String>,
}

impl VideoListResponse {
    pub fn empty() -> Self {
        Self {
            videos: Vec::new(),
            total_results: 0,
            next_page_token: None,
            prev_page_token: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    #[default]
    Popular,
    Shorts,
}

impl ContentMode {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "popular" => Some(ContentMode::Popular),
            "shorts" => Some(ContentMode::Shorts),
            _ => None,
        }
    }

    pub fn watch_url(&self, video_id: &str) -> String {
        match self {
            ContentMode::Popular => format!("https://www.youtube.com/watch?v={video_id}"),
            ContentMode::Shorts => format!("https://www.youtube.com/shorts/{video_id}"),
        }
    }
}

/// Named lookback window applied to publish time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
    ThreeMonths,
}

impl DateFilter {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(DateFilter::All),
            "today" => Some(DateFilter::Today),
            "week" => Some(DateFilter::Week),
            "month" => Some(DateFilter::Month),
            "3months" => Some(DateFilter::ThreeMonths),
            _ => None,
        }
    }

    pub fn lookback_days(&self) -> Option<i64> {
        match self {
            DateFilter::All => None,
            DateFilter::Today => Some(1),
            DateFilter::Week => Some(7),
            DateFilter::Month => Some(30),
            DateFilter::ThreeMonths => Some(90),
        }
    }

    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.lookback_days().map(|days| now - Duration::days(days))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Date,
    #[default]
    Popular,
}

impl SortOrder {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "date" => Some(SortOrder::Date),
            "popular" => Some(SortOrder::Popular),
            _ => None,
        }
    }

    /// `order` parameter of the upstream search call
    pub fn search_order(&self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Popular => "viewCount",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("YouTube API key is not configured")]
    MissingCredentials,
    #[error("region {region} was rejected by the YouTube API: {message}")]
    RegionRejected { region: String, message: String },
    #[error("YouTube API error ({status}): {message}")]
    Upstream { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::MissingCredentials => Status::InternalServerError,
            ApiError::RegionRejected { .. } => Status::BadRequest,
            ApiError::Upstream { .. } => Status::InternalServerError,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            ApiError::MissingCredentials => ErrorResponse {
                error: self.to_string(),
                details: None,
                error_code: Some("MISSING_API_KEY".to_string()),
            },
            ApiError::RegionRejected { region, message } => ErrorResponse {
                error: format!("Region code {region} is not supported"),
                details: Some(json!({
                    "message": message,
                    "suggestedRegion": DEFAULT_REGION,
                })),
                error_code: Some("INVALID_REGION".to_string()),
            },
            ApiError::Upstream { status, message } => ErrorResponse {
                error: "Failed to fetch YouTube videos".to_string(),
                details: Some(json!({
                    "status": status,
                    "message": message,
                })),
                error_code: None,
            },
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self.to_response())
            .map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
