use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::{function_component, html, Callback, Html, Properties};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentMode {
    #[default]
    Popular,
    Shorts,
}

impl ContentMode {
    pub fn key(&self) -> &'static str {
        match self {
            ContentMode::Popular => "popular",
            ContentMode::Shorts => "shorts",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "popular" => Some(ContentMode::Popular),
            "shorts" => Some(ContentMode::Shorts),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContentMode::Popular => "Popular videos",
            ContentMode::Shorts => "Shorts",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![ContentMode::Popular, ContentMode::Shorts]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
    ThreeMonths,
}

impl DateFilter {
    pub fn key(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
            DateFilter::ThreeMonths => "3months",
        }
    }

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

    pub fn display_name(&self) -> &'static str {
        match self {
            DateFilter::All => "All time",
            DateFilter::Today => "Today",
            DateFilter::Week => "Past week",
            DateFilter::Month => "Past month",
            DateFilter::ThreeMonths => "Past 3 months",
        }
    }

    /// Narrowest window first
    pub fn all_variants() -> Vec<Self> {
        vec![
            DateFilter::Today,
            DateFilter::Week,
            DateFilter::Month,
            DateFilter::ThreeMonths,
            DateFilter::All,
        ]
    }

    fn width(&self) -> u8 {
        match self {
            DateFilter::Today => 0,
            DateFilter::Week => 1,
            DateFilter::Month => 2,
            DateFilter::ThreeMonths => 3,
            DateFilter::All => 4,
        }
    }

    /// Whether every video inside `other` also falls inside `self`
    pub fn covers(&self, other: DateFilter) -> bool {
        other.width() <= self.width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Date,
    #[default]
    Popular,
}

impl SortOrder {
    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Popular => "popular",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "date" => Some(SortOrder::Date),
            "popular" => Some(SortOrder::Popular),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Date => "Newest",
            SortOrder::Popular => "Most viewed",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![SortOrder::Popular, SortOrder::Date]
    }
}

/// YouTube video categories that can be charted (id, name)
pub const VIDEO_CATEGORIES: &[(&str, &str)] = &[
    ("", "All categories"),
    ("1", "Film & Animation"),
    ("2", "Autos & Vehicles"),
    ("10", "Music"),
    ("15", "Pets & Animals"),
    ("17", "Sports"),
    ("20", "Gaming"),
    ("22", "People & Blogs"),
    ("23", "Comedy"),
    ("24", "Entertainment"),
    ("25", "News & Politics"),
    ("26", "Howto & Style"),
    ("27", "Education"),
    ("28", "Science & Technology"),
    ("29", "Nonprofits & Activism"),
];

pub const REGIONS: &[(&str, &str)] = &[
    ("KR", "South Korea"),
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("IN", "India"),
    ("JP", "Japan"),
    ("TW", "Taiwan"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("ES", "Spain"),
    ("MX", "Mexico"),
    ("BR", "Brazil"),
    ("VN", "Vietnam"),
    ("TH", "Thailand"),
    ("ID", "Indonesia"),
];

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub mode: ContentMode,
    pub region: String,
    pub category: String,
    pub date_filter: DateFilter,
    pub sort_order: SortOrder,
    pub on_mode_change: Callback<ContentMode>,
    pub on_region_change: Callback<String>,
    pub on_category_change: Callback<String>,
    pub on_date_filter_change: Callback<DateFilter>,
    pub on_sort_order_change: Callback<SortOrder>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_region_change = {
        let cb = props.on_region_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                cb.emit(value);
            }
        })
    };

    let on_category_change = {
        let cb = props.on_category_change.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                cb.emit(value);
            }
        })
    };

    let on_date_filter_change = {
        let cb = props.on_date_filter_change.clone();
        Callback::from(move |e: Event| {
            if let Some(filter) = event_value(&e).as_deref().and_then(DateFilter::from_key) {
                cb.emit(filter);
            }
        })
    };

    let on_sort_order_change = {
        let cb = props.on_sort_order_change.clone();
        Callback::from(move |e: Event| {
            if let Some(order) = event_value(&e).as_deref().and_then(SortOrder::from_key) {
                cb.emit(order);
            }
        })
    };

    html! {
        <div class="flex flex-col gap-4 mb-6">
            <div class="flex gap-2">
                { for ContentMode::all_variants().into_iter().map(|mode| {
                    let cb = props.on_mode_change.clone();
                    let active = mode == props.mode;
                    html! {
                        <button
                            class={if active {
                                "px-4 py-2 rounded bg-red-600 text-white"
                            } else {
                                "px-4 py-2 rounded bg-gray-200 text-gray-800 hover:bg-gray-300"
                            }}
                            onclick={move |_| cb.emit(mode)}
                        >
                            { mode.display_name() }
                        </button>
                    }
                })}
            </div>

            <div class="flex flex-wrap gap-4 text-sm">
                <label class="flex flex-col">
                    { "Region" }
                    <select onchange={on_region_change}>
                        { for REGIONS.iter().map(|(code, name)| html! {
                            <option value={*code} selected={*code == props.region}>
                                { format!("{name} ({code})") }
                            </option>
                        })}
                    </select>
                </label>

                <label class="flex flex-col">
                    { "Category" }
                    <select onchange={on_category_change}>
                        { for VIDEO_CATEGORIES.iter().map(|(id, name)| html! {
                            <option value={*id} selected={*id == props.category}>
                                { *name }
                            </option>
                        })}
                    </select>
                </label>

                <label class="flex flex-col">
                    { "Published" }
                    <select onchange={on_date_filter_change}>
                        { for DateFilter::all_variants().into_iter().map(|filter| html! {
                            <option value={filter.key()} selected={filter == props.date_filter}>
                                { filter.display_name() }
                            </option>
                        })}
                    </select>
                </label>

                <label class="flex flex-col">
                    { "Sort by" }
                    <select onchange={on_sort_order_change}>
                        { for SortOrder::all_variants().into_iter().map(|order| html! {
                            <option value={order.key()} selected={order == props.sort_order}>
                                { order.display_name() }
                            </option>
                        })}
                    </select>
                </label>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_key() {
        for filter in DateFilter::all_variants() {
            assert_eq!(DateFilter::from_key(filter.key()), Some(filter));
        }
        assert_eq!(SortOrder::from_key("views"), None);
        assert_eq!(ContentMode::from_key("shorts"), Some(ContentMode::Shorts));
    }

    #[test]
    fn broader_buckets_cover_narrower_ones() {
        assert!(DateFilter::Month.covers(DateFilter::Today));
        assert!(DateFilter::Month.covers(DateFilter::Week));
        assert!(DateFilter::Month.covers(DateFilter::Month));
        assert!(!DateFilter::Month.covers(DateFilter::ThreeMonths));
        assert!(DateFilter::All.covers(DateFilter::ThreeMonths));
        assert!(!DateFilter::Today.covers(DateFilter::Week));
    }
}
