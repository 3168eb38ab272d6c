//! View Controls Component
//!
//! Status filter and sort selectors.

use leptos::prelude::*;

use crate::models::{SortMode, StatusFilter};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ViewControls() -> impl IntoView {
    let store = use_app_store();

    let on_filter = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<StatusFilter>() {
            Ok(filter) => store.filter().set(filter),
            Err(err) => log::warn!("[CONTROLS] {}", err),
        }
    };

    let on_sort = move |ev: web_sys::Event| match event_target_value(&ev).parse::<SortMode>() {
        Ok(sort) => store.sort().set(sort),
        Err(err) => log::warn!("[CONTROLS] {}", err),
    };

    view! {
        <div class="view-controls">
            <select class="filter-select" on:change=on_filter>
                {StatusFilter::options().map(|filter| view! {
                    <option
                        value=filter.as_str()
                        prop:selected=move || store.filter().get() == filter
                    >
                        {filter.as_str()}
                    </option>
                }).collect_view()}
            </select>
            <select class="sort-select" on:change=on_sort>
                {SortMode::ALL.into_iter().map(|sort| view! {
                    <option
                        value=sort.as_str()
                        prop:selected=move || store.sort().get() == sort
                    >
                        {sort.label()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
