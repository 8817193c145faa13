use crate::models::{ApiError, ContentMode, DateFilter, SortOrder, Video, VideoListResponse};
use crate::services::pipeline::{
    dedupe_by_id, filter_published_after, sort_videos, to_video, ShortsFilter,
};
use crate::services::region::{relevance_language, shorts_keyword};
use crate::services::youtube_client::{
    ChartQuery, SearchQuery, UpstreamError, UpstreamVideo, VideoSource, MAX_IDS_PER_LOOKUP,
    MAX_PAGE_SIZE,
};
use chrono::{DateTime, Utc};
use log::{error, info, warn};

pub const DEFAULT_MAX_RESULTS: u32 = 25;
pub const DEFAULT_SHORTS_SAMPLE_SIZE: usize = 100;

/// Normalized endpoint parameters
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingRequest {
    pub mode: ContentMode,
    pub region: String,
    pub category_id: Option<String>,
    pub date_filter: DateFilter,
    pub sort_order: SortOrder,
    pub page_token: Option<String>,
    pub max_results: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortsOptions {
    /// Number of candidate ids collected from search before hydration
    pub sample_size: usize,
}

impl Default for ShortsOptions {
    fn default() -> Self {
        ShortsOptions {
            sample_size: DEFAULT_SHORTS_SAMPLE_SIZE,
        }
    }
}

impl ShortsOptions {
    /// Search pages allowed per request; one extra page absorbs duplicate ids
    pub fn max_search_pages(&self) -> usize {
        self.sample_size.div_ceil(MAX_PAGE_SIZE as usize) + 1
    }
}

pub async fn fetch_trending(
    source: &dyn VideoSource,
    api_key: &str,
    request: &TrendingRequest,
    shorts: &ShortsOptions,
    now: DateTime<Utc>,
) -> Result<VideoListResponse, ApiError> {
    match request.mode {
        ContentMode::Popular => fetch_popular(source, api_key, request, now).await,
        ContentMode::Shorts => fetch_shorts(source, api_key, request, shorts, now).await,
    }
}

fn to_api_error(err: UpstreamError, region: &str) -> ApiError {
    if err.is_region_rejection() {
        ApiError::RegionRejected {
            region: region.to_string(),
            message: err.message(),
        }
    } else {
        ApiError::Upstream {
            status: err.status(),
            message: err.message(),
        }
    }
}

async fn fetch_popular(
    source: &dyn VideoSource,
    api_key: &str,
    request: &TrendingRequest,
    now: DateTime<Utc>,
) -> Result<VideoListResponse, ApiError> {
    let query = ChartQuery {
        region_code: request.region.clone(),
        category_id: request.category_id.clone(),
        max_results: request.max_results.clamp(1, MAX_PAGE_SIZE),
        page_token: request.page_token.clone(),
    };

    let page = source
        .most_popular(api_key, &query)
        .await
        .map_err(|e| {
            error!("mostPopular chart failed for region {}: {e}", request.region);
            to_api_error(e, &request.region)
        })?;

    let total_results = page
        .page_info
        .total_results
        .unwrap_or(page.items.len() as u64);

    // The chart cannot filter by recency upstream
    let videos: Vec<Video> = page
        .items
        .into_iter()
        .map(|item| to_video(item, ContentMode::Popular))
        .collect();
    let videos = filter_published_after(videos, request.date_filter.cutoff(now));
    let mut videos = dedupe_by_id(videos, |v| v.id.as_str());
    sort_videos(&mut videos, request.sort_order);

    info!(
        "Chart for {} returned {} videos (total {total_results})",
        request.region,
        videos.len()
    );

    Ok(VideoListResponse {
        videos,
        total_results,
        next_page_token: page.next_page_token,
        prev_page_token: page.prev_page_token,
    })
}

async fn fetch_shorts(
    source: &dyn VideoSource,
    api_key: &str,
    request: &TrendingRequest,
    options: &ShortsOptions,
    now: DateTime<Utc>,
) -> Result<VideoListResponse, ApiError> {
    let cutoff = request.date_filter.cutoff(now);
    let candidates = collect_candidates(source, api_key, request, options, cutoff).await?;
    if candidates.is_empty() {
        return Ok(VideoListResponse::empty());
    }

    let hydrated = hydrate(source, api_key, &candidates)
        .await
        .map_err(|e| to_api_error(e, &request.region))?;
    let videos: Vec<Video> = hydrated
        .into_iter()
        .map(|item| to_video(item, ContentMode::Shorts))
        .collect();

    let filter = ShortsFilter::new(cutoff, request.category_id.clone());
    let videos = filter.apply(videos);
    let mut videos = dedupe_by_id(videos, |v| v.id.as_str());
    sort_videos(&mut videos, request.sort_order);
    videos.truncate(options.sample_size);

    info!(
        "Shorts for {}: {} candidates, {} kept",
        request.region,
        candidates.len(),
        videos.len()
    );

    Ok(VideoListResponse {
        total_results: videos.len() as u64,
        videos,
        next_page_token: None,
        prev_page_token: None,
    })
}

/// Page through search until `sample_size` unique ids are collected.
///
/// A failure after some ids were collected ends paging early. A failure on
/// the first page yields no candidates, except for region rejections which
/// are reported to the caller.
async fn collect_candidates(
    source: &dyn VideoSource,
    api_key: &str,
    request: &TrendingRequest,
    options: &ShortsOptions,
    cutoff: Option<DateTime<Utc>>,
) -> Result<Vec<String>, ApiError> {
    let mut query = SearchQuery {
        keyword: shorts_keyword(&request.region).to_string(),
        region_code: request.region.clone(),
        relevance_language: relevance_language(&request.region).map(String::from),
        category_id: request.category_id.clone(),
        published_after: cutoff,
        order: request.sort_order.search_order().to_string(),
        max_results: MAX_PAGE_SIZE,
        page_token: None,
    };

    let mut candidates: Vec<String> = Vec::new();
    for page_index in 0..options.max_search_pages() {
        let page = match source.search(api_key, &query).await {
            Ok(page) => page,
            Err(e) if e.is_region_rejection() => {
                error!("Search rejected region {}: {e}", request.region);
                return Err(to_api_error(e, &request.region));
            }
            Err(e) => {
                error!(
                    "Search page {page_index} failed with {} candidates collected: {e}",
                    candidates.len()
                );
                break;
            }
        };

        for id in page.video_ids() {
            if candidates.len() >= options.sample_size {
                break;
            }
            if !candidates.iter().any(|seen| seen == id) {
                candidates.push(id.to_string());
            }
        }

        match page.next_page_token {
            Some(token) if candidates.len() < options.sample_size => {
                query.page_token = Some(token);
            }
            _ => break,
        }
    }

    Ok(candidates)
}

/// Fetch full metadata in batches. Failed batches are skipped as long as at
/// least one batch succeeds; otherwise the last failure is returned.
async fn hydrate(
    source: &dyn VideoSource,
    api_key: &str,
    ids: &[String],
) -> Result<Vec<UpstreamVideo>, UpstreamError> {
    let mut hydrated = Vec::with_capacity(ids.len());
    let mut any_succeeded = false;
    let mut last_error = None;

    for (batch_index, batch) in ids.chunks(MAX_IDS_PER_LOOKUP).enumerate() {
        match source.videos_by_id(api_key, batch).await {
            Ok(items) => {
                any_succeeded = true;
                hydrated.extend(items);
            }
            Err(e) => {
                warn!(
                    "Detail batch {batch_index} ({} ids) failed, skipping: {e}",
                    batch.len()
                );
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if !any_succeeded => {
            error!("Every detail batch failed for {} candidates", ids.len());
            Err(e)
        }
        _ => Ok(hydrated),
    }
}
