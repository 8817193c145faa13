use crate::models::{ApiError, ContentMode, DateFilter, SortOrder, VideoListResponse};
use crate::services::region::normalize_region;
use crate::services::trending_service::{fetch_trending, TrendingRequest, DEFAULT_MAX_RESULTS};
use crate::AppState;
use chrono::Utc;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, FromForm, State};

/// Query string of `GET /api/youtube`
#[derive(Debug, Default, FromForm)]
pub struct TrendingParams {
    #[field(name = "maxResults")]
    pub max_results: Option<u32>,
    #[field(name = "regionCode")]
    pub region_code: Option<String>,
    #[field(name = "type")]
    pub content_type: Option<String>,
    #[field(name = "pageToken")]
    pub page_token: Option<String>,
    #[field(name = "videoCategoryId")]
    pub video_category_id: Option<String>,
    #[field(name = "dateFilter")]
    pub date_filter: Option<String>,
    #[field(name = "sortOrder")]
    pub sort_order: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TrendingParams {
    /// Unknown enum values fall back to their defaults rather than failing
    pub fn into_request(self) -> TrendingRequest {
        TrendingRequest {
            mode: self
                .content_type
                .as_deref()
                .and_then(ContentMode::from_key)
                .unwrap_or_default(),
            region: normalize_region(self.region_code.as_deref()),
            category_id: non_empty(self.video_category_id),
            date_filter: self
                .date_filter
                .as_deref()
                .and_then(DateFilter::from_key)
                .unwrap_or_default(),
            sort_order: self
                .sort_order
                .as_deref()
                .and_then(SortOrder::from_key)
                .unwrap_or_default(),
            page_token: non_empty(self.page_token),
            max_results: self.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        }
    }
}

#[get("/youtube?<params..>")]
pub async fn trending_videos(
    params: TrendingParams,
    state: &State<AppState>,
) -> Result<Json<VideoListResponse>, ApiError> {
    let request = params.into_request();
    let api_key = state.credentials.next_key().map_err(|e| {
        error!("Rejecting request: {e}");
        e
    })?;

    info!(
        "Fetching {:?} videos for region {} (category {:?}, {:?}, {:?})",
        request.mode, request.region, request.category_id, request.date_filter, request.sort_order
    );

    let response = fetch_trending(
        state.source.as_ref(),
        api_key,
        &request,
        &state.shorts,
        Utc::now(),
    )
    .await?;

    Ok(Json(response))
}
