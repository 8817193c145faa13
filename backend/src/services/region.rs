use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

pub const DEFAULT_REGION: &str = "KR";

/// Markets the Data API cannot serve a chart or search for
const DENIED_REGIONS: &[&str] = &["CN", "KP", "IR", "SY", "CU"];

/// Fallback search keyword when a region has no entry in [`REGION_PROFILES`]
const DEFAULT_SHORTS_KEYWORD: &str = "#shorts";

lazy_static! {
    static ref REGION_PATTERN: Regex = Regex::new(r"^[A-Z]{2}$").expect("valid region regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionProfile {
    pub code: &'static str,
    /// `relevanceLanguage` passed to the search call
    pub language: &'static str,
    pub shorts_keyword: &'static str,
}

const fn profile(
    code: &'static str,
    language: &'static str,
    shorts_keyword: &'static str,
) -> RegionProfile {
    RegionProfile {
        code,
        language,
        shorts_keyword,
    }
}

pub const REGION_PROFILES: &[RegionProfile] = &[
    profile("KR", "ko", "#shorts 쇼츠"),
    profile("US", "en", "#shorts"),
    profile("GB", "en", "#shorts"),
    profile("CA", "en", "#shorts"),
    profile("AU", "en", "#shorts"),
    profile("IN", "hi", "#shorts"),
    profile("JP", "ja", "#shorts ショート"),
    profile("TW", "zh-Hant", "#shorts"),
    profile("DE", "de", "#shorts"),
    profile("FR", "fr", "#shorts"),
    profile("ES", "es", "#shorts"),
    profile("MX", "es", "#shorts"),
    profile("BR", "pt", "#shorts"),
    profile("VN", "vi", "#shorts"),
    profile("TH", "th", "#shorts"),
    profile("ID", "id", "#shorts"),
];

pub fn region_profile(code: &str) -> Option<&'static RegionProfile> {
    REGION_PROFILES.iter().find(|profile| profile.code == code)
}

pub fn relevance_language(code: &str) -> Option<&'static str> {
    region_profile(code).map(|profile| profile.language)
}

pub fn shorts_keyword(code: &str) -> &'static str {
    region_profile(code)
        .map(|profile| profile.shorts_keyword)
        .unwrap_or(DEFAULT_SHORTS_KEYWORD)
}

/// Uppercase the requested region and fall back to [`DEFAULT_REGION`] when it
/// is not a two letter code or is on the denylist.
pub fn normalize_region(input: Option<&str>) -> String {
    let Some(raw) = input.map(str::trim).filter(|r| !r.is_empty()) else {
        return DEFAULT_REGION.to_string();
    };

    let code = raw.to_uppercase();
    if !REGION_PATTERN.is_match(&code) {
        warn!("Invalid region code '{raw}', falling back to {DEFAULT_REGION}");
        return DEFAULT_REGION.to_string();
    }
    if DENIED_REGIONS.contains(&code.as_str()) {
        warn!("Region {code} is not served by the YouTube API, falling back to {DEFAULT_REGION}");
        return DEFAULT_REGION.to_string();
    }
    code
}
