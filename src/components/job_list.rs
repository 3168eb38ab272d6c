//! Job List Component
//!
//! Renders the filtered, sorted view of the job list.

use leptos::prelude::*;

use crate::board::derive_view;
use crate::components::JobCard;
use crate::config::EMPTY_PLACEHOLDER;
use crate::models::Job;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn JobList() -> impl IntoView {
    let store = use_app_store();

    // Recomputed whenever jobs, filter or sort change
    let visible = Memo::new(move |_| {
        derive_view(&store.jobs().read(), store.filter().get(), store.sort().get())
    });

    let count_line = move || {
        format!(
            "Showing {} of {} applications",
            visible.with(Vec::len),
            store.jobs().read().len()
        )
    };

    view! {
        <p class="job-count">{count_line}</p>
        <section class="job-list">
            <Show
                when=move || visible.with(|jobs| !jobs.is_empty())
                fallback=|| view! { <p class="empty-placeholder">{EMPTY_PLACEHOLDER}</p> }
            >
                <For
                    each=move || visible.get()
                    key=|job: &Job| job.id.clone()
                    children=move |job: Job| view! { <JobCard job=job /> }
                />
            </Show>
        </section>
    }
}
