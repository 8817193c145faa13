use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Largest `maxResults` the Data API accepts for list and search calls
pub const MAX_PAGE_SIZE: u32 = 50;
/// Largest number of ids accepted by one `videos?id=` lookup
pub const MAX_IDS_PER_LOOKUP: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("YouTube API returned {status}: {message}")]
    Http {
        status: u16,
        message: String,
        reason: Option<String>,
    },
    /// Stored without its url, which carries the API key
    #[error("request to YouTube API failed: {0}")]
    Transport(reqwest::Error),
    #[error("invalid YouTube API url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.without_url())
    }
}

impl UpstreamError {
    /// Build from the `{"error": {"code", "message", "errors": [{"reason"}]}}` body
    pub fn from_error_body(status: u16, body: &Value) -> Self {
        let error = &body["error"];
        let message = error["message"]
            .as_str()
            .unwrap_or("YouTube API error")
            .to_string();
        let reason = error["errors"][0]["reason"].as_str().map(String::from);
        UpstreamError::Http {
            status,
            message,
            reason,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            UpstreamError::Http { status, .. } => *status,
            _ => 500,
        }
    }

    /// Text safe to hand back to clients
    pub fn message(&self) -> String {
        match self {
            UpstreamError::Http { message, .. } => message.clone(),
            UpstreamError::Transport(e) if e.is_timeout() => {
                "YouTube API request timed out".to_string()
            }
            UpstreamError::Transport(e) if e.is_connect() => {
                "could not connect to YouTube API".to_string()
            }
            UpstreamError::Transport(e) if e.is_decode() => {
                "unexpected response from YouTube API".to_string()
            }
            UpstreamError::Transport(_) => "request to YouTube API failed".to_string(),
            UpstreamError::InvalidUrl(_) => "invalid YouTube API url".to_string(),
        }
    }

    /// The Data API answers unsupported `regionCode` values with a 400 whose
    /// reason or message names the region
    pub fn is_region_rejection(&self) -> bool {
        match self {
            UpstreamError::Http {
                status: 400,
                message,
                reason,
            } => {
                let mentions_region = |s: &str| s.to_ascii_lowercase().contains("region");
                reason.as_deref().is_some_and(mentions_region) || mentions_region(message)
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamVideo {
    pub id: String,
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default)]
    pub statistics: Statistics,
    #[serde(default)]
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub thumbnails: Thumbnails,
    pub channel_title: String,
    pub published_at: String,
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    #[serde(rename = "default")]
    pub fallback: Option<Thumbnail>,
}

impl Thumbnails {
    pub fn best_url(&self) -> String {
        [&self.high, &self.medium, &self.fallback]
            .into_iter()
            .flatten()
            .map(|thumb| thumb.url.clone())
            .next()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub total_results: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoPage {
    pub items: Vec<UpstreamVideo>,
    pub next_page_token: Option<String>,
    pub prev_page_token: Option<String>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchPage {
    pub items: Vec<SearchItem>,
    pub next_page_token: Option<String>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchItem {
    pub id: SearchItemId,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchItemId {
    pub video_id: Option<String>,
}

impl SearchPage {
    pub fn video_ids(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter_map(|item| item.id.video_id.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartQuery {
    pub region_code: String,
    pub category_id: Option<String>,
    pub max_results: u32,
    pub page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuery {
    pub keyword: String,
    pub region_code: String,
    pub relevance_language: Option<String>,
    pub category_id: Option<String>,
    pub published_after: Option<DateTime<Utc>>,
    /// `date` or `viewCount`
    pub order: String,
    pub max_results: u32,
    pub page_token: Option<String>,
}

/// Read access to the three Data API operations the dashboard relies on.
///
/// `search` costs 100 quota units per call, `videos` costs 1.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn most_popular(
        &self,
        api_key: &str,
        query: &ChartQuery,
    ) -> Result<VideoPage, UpstreamError>;

    async fn search(
        &self,
        api_key: &str,
        query: &SearchQuery,
    ) -> Result<SearchPage, UpstreamError>;

    async fn videos_by_id(
        &self,
        api_key: &str,
        ids: &[String],
    ) -> Result<Vec<UpstreamVideo>, UpstreamError>;
}

pub struct YouTubeClient {
    http: Client,
    base_url: Url,
}

impl YouTubeClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(YouTubeClient {
            http,
            base_url: Url::parse(&base)?,
        })
    }

    fn endpoint(&self, resource: &str, api_key: &str) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.join(resource)?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(UpstreamError::from_error_body(status.as_u16(), &body));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl VideoSource for YouTubeClient {
    async fn most_popular(
        &self,
        api_key: &str,
        query: &ChartQuery,
    ) -> Result<VideoPage, UpstreamError> {
        // Documentation: https://developers.google.com/youtube/v3/docs/videos/list
        let mut url = self.endpoint("videos", api_key)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("part", "snippet,statistics,contentDetails")
                .append_pair("chart", "mostPopular")
                .append_pair("regionCode", &query.region_code)
                .append_pair("maxResults", &query.max_results.min(MAX_PAGE_SIZE).to_string());
            if let Some(category) = &query.category_id {
                pairs.append_pair("videoCategoryId", category);
            }
            if let Some(token) = &query.page_token {
                pairs.append_pair("pageToken", token);
            }
        }
        self.get_json(url).await
    }

    async fn search(
        &self,
        api_key: &str,
        query: &SearchQuery,
    ) -> Result<SearchPage, UpstreamError> {
        // Documentation: https://developers.google.com/youtube/v3/docs/search/list
        let mut url = self.endpoint("search", api_key)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("part", "id")
                .append_pair("type", "video")
                .append_pair("videoDuration", "short")
                .append_pair("q", &query.keyword)
                .append_pair("regionCode", &query.region_code)
                .append_pair("order", &query.order)
                .append_pair("maxResults", &query.max_results.min(MAX_PAGE_SIZE).to_string());
            if let Some(language) = &query.relevance_language {
                pairs.append_pair("relevanceLanguage", language);
            }
            if let Some(category) = &query.category_id {
                pairs.append_pair("videoCategoryId", category);
            }
            if let Some(after) = &query.published_after {
                pairs.append_pair(
                    "publishedAfter",
                    &after.to_rfc3339_opts(SecondsFormat::Secs, true),
                );
            }
            if let Some(token) = &query.page_token {
                pairs.append_pair("pageToken", token);
            }
        }
        self.get_json(url).await
    }

    async fn videos_by_id(
        &self,
        api_key: &str,
        ids: &[String],
    ) -> Result<Vec<UpstreamVideo>, UpstreamError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut url = self.endpoint("videos", api_key)?;
        url.query_pairs_mut()
            .append_pair("part", "snippet,statistics,contentDetails")
            .append_pair("id", &ids.join(","))
            .append_pair("maxResults", &ids.len().min(MAX_IDS_PER_LOOKUP).to_string());
        let page: VideoPage = self.get_json(url).await?;
        Ok(page.items)
    }
}
