use crate::models::Video;
use crate::utils::{format_compact_count, format_relative_date, NumberLocale};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub locale: NumberLocale,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let now = chrono::Utc::now();

    html! {
        <a href={video.url.clone()}
           target="_blank"
           rel="noopener noreferrer"
           class="block bg-white rounded-lg shadow-md hover:shadow-xl overflow-hidden group">
            <div class="relative w-full aspect-video bg-gray-200">
                <img src={video.thumbnail.clone()}
                     alt={video.title.clone()}
                     loading="lazy"
                     class="object-cover w-full h-full" />
            </div>
            <div class="p-4">
                <h3 class="font-semibold text-gray-900 mb-2 line-clamp-2 group-hover:text-red-600">
                    { &video.title }
                </h3>
                <p class="text-sm text-gray-600 mb-3">{ &video.channel_title }</p>
                <div class="flex items-center justify-between text-xs text-gray-500">
                    <span>{ format!("{} views", format_compact_count(video.view_count, props.locale)) }</span>
                    <span>{ format_relative_date(&video.published_at, now) }</span>
                </div>
                <div class="flex items-center gap-4 mt-2 text-xs text-gray-500">
                    <span>{"👍 "}{ format_compact_count(video.like_count, props.locale) }</span>
                    <span>{"💬 "}{ format_compact_count(video.comment_count, props.locale) }</span>
                </div>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<Video>,
    pub locale: NumberLocale,
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            { for props.videos.iter().map(|video| html! {
                <VideoCard key={video.id.clone()} video={video.clone()} locale={props.locale} />
            })}
        </div>
    }
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-20">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-red-600"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: String,
    pub on_retry: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let on_retry = props.on_retry.reform(|_: MouseEvent| ());
    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-6">
            <h3 class="text-red-800 font-semibold mb-2">{"Something went wrong"}</h3>
            <p class="text-red-600 mb-4">{ &props.message }</p>
            <div class="flex gap-2">
                <button onclick={on_retry}
                        class="px-4 py-2 bg-red-600 text-white rounded hover:bg-red-700">
                    {"Try again"}
                </button>
                <button onclick={on_reset}
                        class="px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300">
                    {"Reset filters"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub on_reset: Callback<()>,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <div class="text-center py-20">
            <p class="text-gray-600 mb-4">{"No videos match these filters."}</p>
            <button onclick={on_reset}
                    class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">
                {"Reset filters"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsHeaderProps {
    pub total_results: u64,
    pub on_refresh: Callback<()>,
}

#[function_component(ResultsHeader)]
pub fn results_header(props: &ResultsHeaderProps) -> Html {
    let on_refresh = props.on_refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="mb-6 flex justify-between items-center">
            <p class="text-gray-600">{ format!("{} videos", props.total_results) }</p>
            <button onclick={on_refresh}
                    class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700">
                {"Refresh"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageControlsProps {
    pub has_previous: bool,
    pub has_next: bool,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(PageControls)]
pub fn page_controls(props: &PageControlsProps) -> Html {
    if !props.has_previous && !props.has_next {
        return html! {};
    }

    let scroll_top = || {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };
    let on_previous = {
        let cb = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(());
            scroll_top();
        })
    };
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(());
            scroll_top();
        })
    };

    html! {
        <div class="mt-6 flex justify-center gap-2">
            <button onclick={on_previous}
                    disabled={!props.has_previous}
                    class="px-4 py-2 text-sm bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50">
                {"Previous"}
            </button>
            <button onclick={on_next}
                    disabled={!props.has_next}
                    class="px-4 py-2 text-sm bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50">
                {"Next"}
            </button>
        </div>
    }
}
