use crate::env_variable_utils::get_app_name;
use crate::trending::api::fetch_videos;
use crate::trending::components::{
    EmptyState, ErrorPanel, LoadingSpinner, PageControls, ResultsHeader, VideoGrid,
};
use crate::trending::controller::{ControllerAction, Filters, ViewController, ViewStatus};
use crate::trending::filters::{ContentMode, DateFilter, FilterBar, SortOrder};
use crate::utils::NumberLocale;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <TrendingApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to trending videos"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

/// Mirror the filters into the address bar without reloading the page
fn update_url_params(filters: &Filters) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };
    url.set_search(&filters.to_query());

    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()));
    }
}

fn get_filter_params() -> Filters {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .map(|search| Filters::from_query(&search))
        .unwrap_or_default()
}

#[function_component(TrendingApp)]
pub fn trending_app() -> Html {
    let controller = use_reducer(|| ViewController::new(get_filter_params()));
    let request = controller.request();

    // One fetch per distinct request; the reducer drops answers to superseded ones
    {
        let dispatcher = controller.dispatcher();
        let filters = controller.filters.clone();
        use_effect_with(request, move |request| {
            let request = request.clone();
            update_url_params(&filters);

            wasm_bindgen_futures::spawn_local(async move {
                match fetch_videos(&request).await {
                    Ok(response) => {
                        dispatcher.dispatch(ControllerAction::Loaded { request, response })
                    }
                    Err(message) => {
                        web_sys::console::error_1(&message.clone().into());
                        dispatcher.dispatch(ControllerAction::Failed { request, message })
                    }
                }
            });
            || ()
        });
    }

    let dispatch = |map: fn(()) -> ControllerAction| {
        let dispatcher = controller.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(map(())))
    };
    let on_retry = dispatch(|_| ControllerAction::Retry);
    let on_reset = dispatch(|_| ControllerAction::ResetFilters);
    let on_previous = dispatch(|_| ControllerAction::PreviousPage);
    let on_next = dispatch(|_| ControllerAction::NextPage);

    let on_mode_change = {
        let dispatcher = controller.dispatcher();
        Callback::from(move |mode: ContentMode| dispatcher.dispatch(ControllerAction::SetMode(mode)))
    };
    let on_region_change = {
        let dispatcher = controller.dispatcher();
        Callback::from(move |region: String| {
            dispatcher.dispatch(ControllerAction::SetRegion(region))
        })
    };
    let on_category_change = {
        let dispatcher = controller.dispatcher();
        Callback::from(move |category: String| {
            dispatcher.dispatch(ControllerAction::SetCategory(category))
        })
    };
    let on_date_filter_change = {
        let dispatcher = controller.dispatcher();
        Callback::from(move |filter: DateFilter| {
            dispatcher.dispatch(ControllerAction::SetDateFilter(filter))
        })
    };
    let on_sort_order_change = {
        let dispatcher = controller.dispatcher();
        Callback::from(move |order: SortOrder| {
            dispatcher.dispatch(ControllerAction::SetSortOrder(order))
        })
    };

    let locale = NumberLocale::for_region(&controller.filters.region);
    let body = match controller.view_status() {
        ViewStatus::Loading => html! { <LoadingSpinner /> },
        ViewStatus::Error(message) => html! {
            <ErrorPanel message={message} on_retry={on_retry.clone()} on_reset={on_reset.clone()} />
        },
        ViewStatus::Empty => html! { <EmptyState on_reset={on_reset.clone()} /> },
        ViewStatus::Ready => html! {
            <>
                <ResultsHeader total_results={controller.total_results} on_refresh={on_retry.clone()} />
                <VideoGrid videos={controller.videos.clone()} locale={locale} />
                <PageControls
                    has_previous={controller.has_previous_page()}
                    has_next={controller.has_next_page()}
                    on_previous={on_previous}
                    on_next={on_next}
                />
            </>
        },
    };

    html! {
        <main class="min-h-screen bg-gray-50">
            <div class="container mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold text-gray-800 mb-2">{ get_app_name() }</h1>
                <p class="text-gray-600 mb-6">{"Trending YouTube videos and Shorts by region"}</p>

                <FilterBar
                    mode={controller.filters.mode}
                    region={controller.filters.region.clone()}
                    category={controller.filters.category.clone()}
                    date_filter={controller.filters.date_filter}
                    sort_order={controller.filters.sort_order}
                    on_mode_change={on_mode_change}
                    on_region_change={on_region_change}
                    on_category_change={on_category_change}
                    on_date_filter_change={on_date_filter_change}
                    on_sort_order_change={on_sort_order_change}
                />

                { body }
            </div>
        </main>
    }
}
