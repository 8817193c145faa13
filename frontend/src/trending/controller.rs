//! Filter, pagination and short-form cache state behind the trending page.
//!
//! Everything here is plain data so the page logic runs in native unit tests;
//! the Yew component only dispatches [`ControllerAction`]s and renders.

use crate::models::{Video, VideoListResponse};
use crate::trending::filters::{ContentMode, DateFilter, SortOrder};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;
use yew::Reducible;

pub const DEFAULT_REGION: &str = "KR";
pub const PAGE_SIZE: u32 = 25;
/// Distinct filter keys kept in the short-form cache
pub const CACHE_CAPACITY: usize = 32;

/// Regions the backend never serves; they fall back to [`DEFAULT_REGION`]
const DENIED_REGIONS: &[&str] = &["CN", "KP", "IR", "SY", "CU"];

pub fn normalize_region(input: &str) -> String {
    let code = input.trim().to_uppercase();
    if code.len() == 2
        && code.chars().all(|c| c.is_ascii_uppercase())
        && !DENIED_REGIONS.contains(&code.as_str())
    {
        code
    } else {
        DEFAULT_REGION.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filters {
    pub mode: ContentMode,
    pub region: String,
    /// Empty means every category
    pub category: String,
    pub date_filter: DateFilter,
    pub sort_order: SortOrder,
}

impl Default for Filters {
    fn default() -> Self {
        Filters {
            mode: ContentMode::default(),
            region: DEFAULT_REGION.to_string(),
            category: String::new(),
            date_filter: DateFilter::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl Filters {
    /// Parse `?type=shorts&regionCode=US&...` as written by [`Filters::to_query`]
    pub fn from_query(query: &str) -> Self {
        let mut filters = Filters::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_default();
            match key {
                "type" => filters.mode = ContentMode::from_key(&value).unwrap_or_default(),
                "regionCode" => filters.region = normalize_region(&value),
                "videoCategoryId" => filters.category = value,
                "dateFilter" => {
                    filters.date_filter = DateFilter::from_key(&value).unwrap_or_default()
                }
                "sortOrder" => filters.sort_order = SortOrder::from_key(&value).unwrap_or_default(),
                _ => {}
            }
        }
        filters
    }

    pub fn to_query(&self) -> String {
        let mut query = format!(
            "type={}&regionCode={}&dateFilter={}&sortOrder={}",
            self.mode.key(),
            urlencoding::encode(&self.region),
            self.date_filter.key(),
            self.sort_order.key()
        );
        if !self.category.is_empty() {
            query.push_str(&format!(
                "&videoCategoryId={}",
                urlencoding::encode(&self.category)
            ));
        }
        query
    }
}

/// Forward tokens come from the backend; backward navigation replays the
/// tokens already visited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pagination {
    pub current: Option<String>,
    pub history: Vec<String>,
}

impl Pagination {
    pub fn reset(&mut self) {
        self.current = None;
        self.history.clear();
    }

    pub fn advance(&mut self, next: String) {
        if let Some(current) = self.current.take() {
            self.history.push(current);
        }
        self.current = Some(next);
    }

    pub fn back(&mut self) {
        match self.history.pop() {
            Some(previous) => self.current = Some(previous),
            None => self.reset(),
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.current.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub region: String,
    pub category: String,
    pub date_filter: DateFilter,
    pub sort_order: SortOrder,
}

impl CacheKey {
    pub fn for_filters(filters: &Filters) -> Self {
        Self::with_date(filters, filters.date_filter)
    }

    pub fn with_date(filters: &Filters, date_filter: DateFilter) -> Self {
        CacheKey {
            region: filters.region.clone(),
            category: filters.category.clone(),
            date_filter,
            sort_order: filters.sort_order,
        }
    }
}

/// Most recent short-form list per filter key, evicting the least recently
/// written key once [`CACHE_CAPACITY`] is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortsCache {
    entries: HashMap<CacheKey, Vec<Video>>,
    order: VecDeque<CacheKey>,
    capacity: usize,
}

impl Default for ShortsCache {
    fn default() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }
}

impl ShortsCache {
    pub fn with_capacity(capacity: usize) -> Self {
        ShortsCache {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &CacheKey) -> Option<&Vec<Video>> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: CacheKey, videos: Vec<Video>) {
        self.order.retain(|existing| existing != &key);
        self.order.push_back(key.clone());
        self.entries.insert(key, videos);

        while self.entries.len() > self.capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    /// Union `fresh` with every cached list whose date bucket is covered by
    /// the selected one, first occurrence of an id winning, then re-sorted.
    pub fn merged(&self, filters: &Filters, fresh: &[Video]) -> Vec<Video> {
        let mut merged: Vec<Video> = fresh.to_vec();
        for bucket in DateFilter::all_variants() {
            if bucket == filters.date_filter || !filters.date_filter.covers(bucket) {
                continue;
            }
            if let Some(cached) = self.get(&CacheKey::with_date(filters, bucket)) {
                merged.extend(cached.iter().cloned());
            }
        }

        let mut merged = dedupe_by_id(merged);
        sort_videos(&mut merged, filters.sort_order);
        merged
    }
}

pub fn dedupe_by_id(videos: Vec<Video>) -> Vec<Video> {
    let mut seen = HashSet::new();
    videos
        .into_iter()
        .filter(|video| seen.insert(video.id.clone()))
        .collect()
}

/// Stable descending sort, unreadable publish times last
pub fn sort_videos(videos: &mut [Video], order: SortOrder) {
    match order {
        SortOrder::Popular => videos.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
        SortOrder::Date => videos.sort_by_cached_key(|video| {
            std::cmp::Reverse(video.published_at.parse::<DateTime<Utc>>().ok())
        }),
    }
}

/// Parameters of one `GET /api/youtube` call
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub mode: ContentMode,
    pub region: String,
    pub category: Option<String>,
    pub date_filter: DateFilter,
    pub sort_order: SortOrder,
    pub page_token: Option<String>,
    pub max_results: u32,
    /// Bumped by retry/refresh so an identical request is issued again
    pub attempt: u32,
}

impl FetchRequest {
    pub fn query_string(&self) -> String {
        let mut query = format!(
            "maxResults={}&regionCode={}&type={}&dateFilter={}&sortOrder={}",
            self.max_results,
            urlencoding::encode(&self.region),
            self.mode.key(),
            self.date_filter.key(),
            self.sort_order.key()
        );
        if let Some(category) = &self.category {
            query.push_str(&format!("&videoCategoryId={}", urlencoding::encode(category)));
        }
        if let Some(token) = &self.page_token {
            query.push_str(&format!("&pageToken={}", urlencoding::encode(token)));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Loading,
    Failed(String),
    Loaded,
}

/// What the page should show
#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus {
    Loading,
    Error(String),
    Empty,
    Ready,
}

pub fn view_status(status: &FetchStatus, videos: &[Video]) -> ViewStatus {
    match status {
        FetchStatus::Loading => ViewStatus::Loading,
        FetchStatus::Failed(message) => ViewStatus::Error(message.clone()),
        FetchStatus::Loaded if videos.is_empty() => ViewStatus::Empty,
        FetchStatus::Loaded => ViewStatus::Ready,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerAction {
    SetMode(ContentMode),
    SetRegion(String),
    SetCategory(String),
    SetDateFilter(DateFilter),
    SetSortOrder(SortOrder),
    NextPage,
    PreviousPage,
    ResetFilters,
    Retry,
    Loaded {
        request: FetchRequest,
        response: VideoListResponse,
    },
    Failed {
        request: FetchRequest,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewController {
    pub filters: Filters,
    pub pagination: Pagination,
    pub videos: Vec<Video>,
    pub total_results: u64,
    pub next_page_token: Option<String>,
    pub status: FetchStatus,
    cache: ShortsCache,
    attempt: u32,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Filters::default())
    }
}

impl ViewController {
    pub fn new(filters: Filters) -> Self {
        ViewController {
            filters,
            pagination: Pagination::default(),
            videos: Vec::new(),
            total_results: 0,
            next_page_token: None,
            status: FetchStatus::Loading,
            cache: ShortsCache::default(),
            attempt: 0,
        }
    }

    pub fn request(&self) -> FetchRequest {
        let paged = self.filters.mode == ContentMode::Popular;
        FetchRequest {
            mode: self.filters.mode,
            region: self.filters.region.clone(),
            category: Some(self.filters.category.clone()).filter(|c| !c.is_empty()),
            date_filter: self.filters.date_filter,
            sort_order: self.filters.sort_order,
            page_token: if paged {
                self.pagination.current.clone()
            } else {
                None
            },
            max_results: PAGE_SIZE,
            attempt: self.attempt,
        }
    }

    pub fn cache(&self) -> &ShortsCache {
        &self.cache
    }

    pub fn has_next_page(&self) -> bool {
        self.filters.mode == ContentMode::Popular && self.next_page_token.is_some()
    }

    pub fn has_previous_page(&self) -> bool {
        self.filters.mode == ContentMode::Popular && !self.pagination.is_first_page()
    }

    pub fn view_status(&self) -> ViewStatus {
        view_status(&self.status, &self.videos)
    }

    fn filters_changed(&mut self) {
        self.pagination.reset();
        self.next_page_token = None;
        self.status = FetchStatus::Loading;
    }

    pub fn apply(&mut self, action: ControllerAction) {
        match action {
            ControllerAction::SetMode(mode) => {
                if self.filters.mode != mode {
                    self.filters.mode = mode;
                    self.filters_changed();
                }
            }
            ControllerAction::SetRegion(region) => {
                let region = normalize_region(&region);
                if self.filters.region != region {
                    self.filters.region = region;
                    self.filters_changed();
                }
            }
            ControllerAction::SetCategory(category) => {
                if self.filters.category != category {
                    self.filters.category = category;
                    self.filters_changed();
                }
            }
            ControllerAction::SetDateFilter(date_filter) => {
                if self.filters.date_filter != date_filter {
                    self.filters.date_filter = date_filter;
                    self.filters_changed();
                }
            }
            ControllerAction::SetSortOrder(sort_order) => {
                if self.filters.sort_order != sort_order {
                    self.filters.sort_order = sort_order;
                    self.filters_changed();
                }
            }
            ControllerAction::NextPage => {
                if !self.has_next_page() {
                    return;
                }
                if let Some(token) = self.next_page_token.take() {
                    self.pagination.advance(token);
                    self.status = FetchStatus::Loading;
                }
            }
            ControllerAction::PreviousPage => {
                if self.has_previous_page() {
                    self.pagination.back();
                    self.status = FetchStatus::Loading;
                }
            }
            ControllerAction::ResetFilters => {
                let defaults = Filters {
                    mode: self.filters.mode,
                    ..Filters::default()
                };
                self.filters = defaults;
                self.filters_changed();
                self.attempt = self.attempt.wrapping_add(1);
            }
            ControllerAction::Retry => {
                self.status = FetchStatus::Loading;
                self.attempt = self.attempt.wrapping_add(1);
            }
            ControllerAction::Loaded { request, response } => {
                if request != self.request() {
                    log::debug!("Dropping stale response for {:?}", request);
                    return;
                }
                self.absorb(response);
            }
            ControllerAction::Failed { request, message } => {
                if request != self.request() {
                    return;
                }
                self.status = FetchStatus::Failed(message);
            }
        }
    }

    fn absorb(&mut self, response: VideoListResponse) {
        match self.filters.mode {
            ContentMode::Popular => {
                self.total_results = response.total_results;
                self.next_page_token = response.next_page_token;
                self.videos = response.videos;
            }
            ContentMode::Shorts => {
                let key = CacheKey::for_filters(&self.filters);
                self.cache.insert(key, response.videos.clone());
                self.videos = self.cache.merged(&self.filters, &response.videos);
                self.total_results = self.videos.len() as u64;
                self.next_page_token = None;
            }
        }
        self.status = FetchStatus::Loaded;
    }
}

impl Reducible for ViewController {
    type Action = ControllerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, views: u64, published: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("title {id}"),
            description: String::new(),
            thumbnail: String::new(),
            channel_title: "channel".to_string(),
            published_at: published.to_string(),
            view_count: views,
            like_count: 0,
            comment_count: 0,
            url: format!("https://www.youtube.com/shorts/{id}"),
            duration_seconds: Some(30),
            category_id: None,
        }
    }

    fn response(videos: Vec<Video>, next: Option<&str>) -> VideoListResponse {
        VideoListResponse {
            total_results: videos.len() as u64,
            videos,
            next_page_token: next.map(String::from),
            prev_page_token: None,
        }
    }

    fn load(controller: &mut ViewController, videos: Vec<Video>, next: Option<&str>) {
        let request = controller.request();
        controller.apply(ControllerAction::Loaded {
            request,
            response: response(videos, next),
        });
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    fn shorts_controller() -> ViewController {
        ViewController::new(Filters {
            mode: ContentMode::Shorts,
            ..Filters::default()
        })
    }

    #[test]
    fn pagination_history_walks_back_to_first_page() {
        let mut controller = ViewController::default();
        assert_eq!(controller.request().page_token, None);

        load(&mut controller, vec![video("a", 1, "")], Some("T1"));
        controller.apply(ControllerAction::NextPage);
        assert_eq!(controller.request().page_token.as_deref(), Some("T1"));

        load(&mut controller, vec![video("b", 1, "")], Some("T2"));
        controller.apply(ControllerAction::NextPage);
        assert_eq!(controller.request().page_token.as_deref(), Some("T2"));
        assert_eq!(controller.pagination.history, vec!["T1".to_string()]);

        controller.apply(ControllerAction::PreviousPage);
        assert_eq!(controller.request().page_token.as_deref(), Some("T1"));

        controller.apply(ControllerAction::PreviousPage);
        assert_eq!(controller.request().page_token, None);
        assert!(controller.pagination.history.is_empty());
        assert!(!controller.has_previous_page());
    }

    #[test]
    fn filter_change_resets_pagination() {
        let mut controller = ViewController::default();
        load(&mut controller, vec![video("a", 1, "")], Some("T1"));
        controller.apply(ControllerAction::NextPage);
        load(&mut controller, vec![video("b", 1, "")], Some("T2"));
        controller.apply(ControllerAction::NextPage);

        controller.apply(ControllerAction::SetCategory("10".to_string()));
        assert!(controller.pagination.is_first_page());
        assert!(controller.pagination.history.is_empty());
        assert!(!controller.has_next_page());
        assert_eq!(controller.status, FetchStatus::Loading);
        assert_eq!(controller.request().category.as_deref(), Some("10"));
    }

    #[test]
    fn next_page_requires_a_token() {
        let mut controller = ViewController::default();
        load(&mut controller, vec![video("a", 1, "")], None);
        controller.apply(ControllerAction::NextPage);
        assert!(controller.pagination.is_first_page());
        assert_eq!(controller.status, FetchStatus::Loaded);
    }

    #[test]
    fn shorts_mode_is_single_shot() {
        let mut controller = shorts_controller();
        load(&mut controller, vec![video("a", 1, "")], Some("IGNORED"));
        assert!(!controller.has_next_page());
        controller.apply(ControllerAction::NextPage);
        assert_eq!(controller.request().page_token, None);
    }

    #[test]
    fn broader_bucket_is_superset_of_cached_narrower_buckets() {
        let mut controller = shorts_controller();

        controller.apply(ControllerAction::SetDateFilter(DateFilter::Today));
        load(&mut controller, vec![video("t1", 50, ""), video("t2", 10, "")], None);

        controller.apply(ControllerAction::SetDateFilter(DateFilter::Week));
        load(&mut controller, vec![video("w1", 30, ""), video("t1", 55, "")], None);
        assert_eq!(ids(&controller.videos), vec!["t1", "w1", "t2"]);
        // fresh data wins over the cached copy
        assert_eq!(controller.videos[0].view_count, 55);

        controller.apply(ControllerAction::SetDateFilter(DateFilter::Month));
        load(&mut controller, vec![video("m1", 5, "")], None);

        let shown: HashSet<&str> = controller.videos.iter().map(|v| v.id.as_str()).collect();
        for narrower in [DateFilter::Today, DateFilter::Week] {
            let key = CacheKey::with_date(&controller.filters, narrower);
            for cached in controller.cache().get(&key).unwrap() {
                assert!(shown.contains(cached.id.as_str()), "missing {}", cached.id);
            }
        }
        assert_eq!(ids(&controller.videos), vec!["t1", "w1", "t2", "m1"]);
        assert_eq!(controller.total_results, 4);
    }

    #[test]
    fn narrower_bucket_does_not_pull_in_broader_cache() {
        let mut controller = shorts_controller();
        controller.apply(ControllerAction::SetDateFilter(DateFilter::Month));
        load(&mut controller, vec![video("m1", 5, "")], None);

        controller.apply(ControllerAction::SetDateFilter(DateFilter::Today));
        load(&mut controller, vec![video("t1", 1, "")], None);
        assert_eq!(ids(&controller.videos), vec!["t1"]);
    }

    #[test]
    fn merge_is_scoped_to_region_and_sort_order() {
        let mut controller = shorts_controller();
        controller.apply(ControllerAction::SetDateFilter(DateFilter::Today));
        load(&mut controller, vec![video("kr", 5, "")], None);

        controller.apply(ControllerAction::SetRegion("us".to_string()));
        controller.apply(ControllerAction::SetDateFilter(DateFilter::Week));
        load(&mut controller, vec![video("us", 1, "")], None);
        assert_eq!(controller.filters.region, "US");
        assert_eq!(ids(&controller.videos), vec!["us"]);
    }

    #[test]
    fn merged_list_follows_date_order() {
        let mut controller = shorts_controller();
        controller.apply(ControllerAction::SetSortOrder(SortOrder::Date));
        controller.apply(ControllerAction::SetDateFilter(DateFilter::Today));
        load(&mut controller, vec![video("newest", 1, "2024-06-15T10:00:00Z")], None);

        controller.apply(ControllerAction::SetDateFilter(DateFilter::Week));
        load(
            &mut controller,
            vec![
                video("older", 100, "2024-06-10T10:00:00Z"),
                video("middle", 50, "2024-06-13T10:00:00Z"),
            ],
            None,
        );
        assert_eq!(ids(&controller.videos), vec!["newest", "middle", "older"]);
    }

    #[test]
    fn cache_evicts_least_recently_written_key() {
        let filters = Filters::default();
        let mut cache = ShortsCache::with_capacity(2);
        let key = |region: &str| CacheKey {
            region: region.to_string(),
            ..CacheKey::for_filters(&filters)
        };

        cache.insert(key("KR"), vec![video("a", 1, "")]);
        cache.insert(key("US"), vec![video("b", 1, "")]);
        // rewriting KR makes US the oldest
        cache.insert(key("KR"), vec![video("c", 1, "")]);
        cache.insert(key("JP"), vec![video("d", 1, "")]);

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("US")).is_none());
        assert_eq!(ids(cache.get(&key("KR")).unwrap()), vec!["c"]);
        assert!(cache.get(&key("JP")).is_some());
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut controller = ViewController::default();
        let stale = controller.request();
        controller.apply(ControllerAction::SetRegion("JP".to_string()));
        controller.apply(ControllerAction::Loaded {
            request: stale,
            response: response(vec![video("old", 1, "")], None),
        });
        assert!(controller.videos.is_empty());
        assert_eq!(controller.view_status(), ViewStatus::Loading);
    }

    #[test]
    fn view_states_are_distinct() {
        let mut controller = ViewController::default();
        assert_eq!(controller.view_status(), ViewStatus::Loading);

        let request = controller.request();
        controller.apply(ControllerAction::Failed {
            request,
            message: "HTTP 500".to_string(),
        });
        assert_eq!(controller.view_status(), ViewStatus::Error("HTTP 500".to_string()));

        controller.apply(ControllerAction::Retry);
        assert_eq!(controller.view_status(), ViewStatus::Loading);
        load(&mut controller, Vec::new(), None);
        assert_eq!(controller.view_status(), ViewStatus::Empty);

        controller.apply(ControllerAction::Retry);
        load(&mut controller, vec![video("a", 1, "")], None);
        assert_eq!(controller.view_status(), ViewStatus::Ready);
    }

    #[test]
    fn retry_reissues_the_same_filters() {
        let mut controller = ViewController::default();
        let before = controller.request();
        controller.apply(ControllerAction::Retry);
        let after = controller.request();
        assert_ne!(before, after);
        assert_eq!(FetchRequest { attempt: before.attempt, ..after }, before);
    }

    #[test]
    fn reset_keeps_mode_only() {
        let mut controller = shorts_controller();
        controller.apply(ControllerAction::SetRegion("US".to_string()));
        controller.apply(ControllerAction::SetCategory("20".to_string()));
        controller.apply(ControllerAction::SetDateFilter(DateFilter::Week));
        controller.apply(ControllerAction::ResetFilters);
        assert_eq!(
            controller.filters,
            Filters {
                mode: ContentMode::Shorts,
                ..Filters::default()
            }
        );
    }

    #[test]
    fn invalid_region_falls_back() {
        assert_eq!(normalize_region("us"), "US");
        assert_eq!(normalize_region("USA"), DEFAULT_REGION);
        assert_eq!(normalize_region("1a"), DEFAULT_REGION);
    }

    #[test]
    fn unserved_regions_fall_back() {
        assert_eq!(normalize_region("cn"), DEFAULT_REGION);
        assert_eq!(normalize_region("KP"), DEFAULT_REGION);
        assert_eq!(Filters::from_query("?regionCode=CN").region, DEFAULT_REGION);

        let mut controller = ViewController::default();
        controller.apply(ControllerAction::SetRegion("US".to_string()));
        controller.apply(ControllerAction::SetRegion("IR".to_string()));
        assert_eq!(controller.filters.region, DEFAULT_REGION);
    }

    #[test]
    fn filters_round_trip_through_the_url() {
        let filters = Filters {
            mode: ContentMode::Shorts,
            region: "JP".to_string(),
            category: "10".to_string(),
            date_filter: DateFilter::ThreeMonths,
            sort_order: SortOrder::Date,
        };
        let query = format!("?{}", filters.to_query());
        assert_eq!(Filters::from_query(&query), filters);
        assert_eq!(Filters::from_query(""), Filters::default());
        assert_eq!(Filters::from_query("?regionCode=xyz&type=reels").region, DEFAULT_REGION);
    }

    #[test]
    fn request_query_string() {
        let mut controller = ViewController::default();
        controller.apply(ControllerAction::SetCategory("20".to_string()));
        load(&mut controller, Vec::new(), Some("CAUQAA"));
        controller.apply(ControllerAction::NextPage);
        assert_eq!(
            controller.request().query_string(),
            "maxResults=25&regionCode=KR&type=popular&dateFilter=all&sortOrder=popular&videoCategoryId=20&pageToken=CAUQAA"
        );
    }
}
