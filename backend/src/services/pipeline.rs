//! Pure transformation steps shared by the chart and short-form flows.
//!
//! Nothing here talks to the network so each step can be tested on plain
//! in-memory lists.

use crate::models::{ContentMode, SortOrder, Video};
use crate::services::youtube_client::UpstreamVideo;
use crate::utils::{parse_count, parse_iso8601_duration_to_seconds, parse_iso8601_timestamp};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Runtime ceiling for a video to count as short-form
pub const SHORTS_MAX_SECONDS: u64 = 60;

pub fn to_video(item: UpstreamVideo, mode: ContentMode) -> Video {
    let duration_seconds = item
        .content_details
        .duration
        .as_deref()
        .and_then(parse_iso8601_duration_to_seconds);
    let url = mode.watch_url(&item.id);
    let snippet = item.snippet;

    Video {
        thumbnail: snippet.thumbnails.best_url(),
        id: item.id,
        title: snippet.title,
        description: snippet.description,
        channel_title: snippet.channel_title,
        published_at: snippet.published_at,
        view_count: parse_count(item.statistics.view_count.as_deref()),
        like_count: parse_count(item.statistics.like_count.as_deref()),
        comment_count: parse_count(item.statistics.comment_count.as_deref()),
        url,
        duration_seconds,
        category_id: snippet.category_id,
    }
}

/// Keep the first occurrence of every id, preserving input order
pub fn dedupe_by_id<T, F>(items: Vec<T>, id_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(id_of(item).to_string()))
        .collect()
}

/// Stable descending sort; unparseable publish times sort last
pub fn sort_videos(videos: &mut [Video], order: SortOrder) {
    match order {
        SortOrder::Popular => videos.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
        SortOrder::Date => videos.sort_by_cached_key(|video| {
            std::cmp::Reverse(parse_iso8601_timestamp(&video.published_at))
        }),
    }
}

/// Drop videos published before `cutoff`. Videos without a readable publish
/// time cannot be shown to satisfy the window and are dropped too.
pub fn filter_published_after(videos: Vec<Video>, cutoff: Option<DateTime<Utc>>) -> Vec<Video> {
    let Some(cutoff) = cutoff else {
        return videos;
    };
    videos
        .into_iter()
        .filter(|video| {
            parse_iso8601_timestamp(&video.published_at)
                .is_some_and(|published| published >= cutoff)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortsFilter {
    pub max_duration_seconds: u64,
    pub published_after: Option<DateTime<Utc>>,
    pub category_id: Option<String>,
}

impl ShortsFilter {
    pub fn new(published_after: Option<DateTime<Utc>>, category_id: Option<String>) -> Self {
        ShortsFilter {
            max_duration_seconds: SHORTS_MAX_SECONDS,
            published_after,
            category_id,
        }
    }

    pub fn accepts(&self, video: &Video) -> bool {
        let short_enough = video
            .duration_seconds
            .is_some_and(|seconds| seconds <= self.max_duration_seconds);
        if !short_enough {
            return false;
        }

        if let Some(cutoff) = self.published_after {
            let recent = parse_iso8601_timestamp(&video.published_at)
                .is_some_and(|published| published >= cutoff);
            if !recent {
                return false;
            }
        }

        match &self.category_id {
            Some(category) => video.category_id.as_deref() == Some(category.as_str()),
            None => true,
        }
    }

    pub fn apply(&self, videos: Vec<Video>) -> Vec<Video> {
        videos.into_iter().filter(|video| self.accepts(video)).collect()
    }
}
