//! In-memory [`VideoSource`] used by service and route tests

use crate::services::youtube_client::{
    ChartQuery, PageInfo, SearchItem, SearchItemId, SearchPage, SearchQuery, UpstreamError,
    UpstreamVideo, VideoPage, VideoSource,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeSource {
    chart: Option<VideoPage>,
    chart_error: Option<UpstreamError>,
    search_pages: HashMap<Option<String>, SearchPage>,
    search_error: Option<UpstreamError>,
    videos: HashMap<String, UpstreamVideo>,
    failing_batches: Vec<usize>,
    calls: Mutex<Calls>,
}

#[derive(Default)]
struct Calls {
    keys: Vec<String>,
    chart: Vec<ChartQuery>,
    search: Vec<SearchQuery>,
    lookups: Vec<usize>,
}

fn clone_error(err: &UpstreamError) -> UpstreamError {
    match err {
        UpstreamError::Http {
            status,
            message,
            reason,
        } => UpstreamError::Http {
            status: *status,
            message: message.clone(),
            reason: reason.clone(),
        },
        other => UpstreamError::Http {
            status: 500,
            message: other.to_string(),
            reason: None,
        },
    }
}

impl FakeSource {
    pub fn with_chart(
        mut self,
        items: Vec<UpstreamVideo>,
        next: Option<&str>,
        prev: Option<&str>,
    ) -> Self {
        self.chart = Some(VideoPage {
            page_info: PageInfo {
                total_results: Some(items.len() as u64),
            },
            items,
            next_page_token: next.map(String::from),
            prev_page_token: prev.map(String::from),
        });
        self
    }

    pub fn failing_chart(mut self, err: UpstreamError) -> Self {
        self.chart_error = Some(err);
        self
    }

    pub fn with_search_page(
        mut self,
        token: Option<&str>,
        ids: &[&str],
        next: Option<&str>,
    ) -> Self {
        let items = ids
            .iter()
            .map(|id| SearchItem {
                id: SearchItemId {
                    video_id: Some(id.to_string()),
                },
            })
            .collect();
        self.search_pages.insert(
            token.map(String::from),
            SearchPage {
                items,
                next_page_token: next.map(String::from),
                page_info: PageInfo::default(),
            },
        );
        self
    }

    pub fn failing_search(mut self, err: UpstreamError) -> Self {
        self.search_error = Some(err);
        self
    }

    pub fn with_videos(mut self, videos: Vec<UpstreamVideo>) -> Self {
        for video in videos {
            self.videos.insert(video.id.clone(), video);
        }
        self
    }

    pub fn failing_batch(mut self, batch_index: usize) -> Self {
        self.failing_batches.push(batch_index);
        self
    }

    pub fn keys_used(&self) -> Vec<String> {
        self.calls.lock().unwrap().keys.clone()
    }

    pub fn chart_calls(&self) -> Vec<ChartQuery> {
        self.calls.lock().unwrap().chart.clone()
    }

    pub fn search_calls(&self) -> Vec<SearchQuery> {
        self.calls.lock().unwrap().search.clone()
    }

    /// Size of every detail lookup, failed ones included
    pub fn lookup_batches(&self) -> Vec<usize> {
        self.calls.lock().unwrap().lookups.clone()
    }
}

#[async_trait]
impl VideoSource for FakeSource {
    async fn most_popular(
        &self,
        api_key: &str,
        query: &ChartQuery,
    ) -> Result<VideoPage, UpstreamError> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.keys.push(api_key.to_string());
            calls.chart.push(query.clone());
        }
        if let Some(err) = &self.chart_error {
            return Err(clone_error(err));
        }
        Ok(self.chart.clone().unwrap_or_default())
    }

    async fn search(
        &self,
        api_key: &str,
        query: &SearchQuery,
    ) -> Result<SearchPage, UpstreamError> {
        {
            let mut calls = self.calls.lock().unwrap();
            calls.keys.push(api_key.to_string());
            calls.search.push(query.clone());
        }
        if let Some(err) = &self.search_error {
            return Err(clone_error(err));
        }
        self.search_pages
            .get(&query.page_token)
            .cloned()
            .ok_or_else(|| UpstreamError::Http {
                status: 503,
                message: "backend error".to_string(),
                reason: Some("backendError".to_string()),
            })
    }

    async fn videos_by_id(
        &self,
        api_key: &str,
        ids: &[String],
    ) -> Result<Vec<UpstreamVideo>, UpstreamError> {
        let batch_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.keys.push(api_key.to_string());
            calls.lookups.push(ids.len());
            calls.lookups.len() - 1
        };
        if self.failing_batches.contains(&batch_index) {
            return Err(UpstreamError::Http {
                status: 500,
                message: "batch failed".to_string(),
                reason: None,
            });
        }
        Ok(ids
            .iter()
            .filter_map(|id| self.videos.get(id).cloned())
            .collect())
    }
}
