//! Job Form Component
//!
//! Add-job form: company, position, status and notes.

use chrono::Utc;
use leptos::prelude::*;

use crate::form::JobDraft;
use crate::models::JobStatus;
use crate::store::{store_submit_draft, use_app_store};

/// Form that prepends a new job on submit and then clears itself
#[component]
pub fn JobForm() -> impl IntoView {
    let store = use_app_store();
    let draft = RwSignal::new(JobDraft::default());

    let add_job = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = store_submit_draft(&store, draft, Utc::now()) {
            log::warn!("[FORM] Rejected submission: {}", err);
        }
    };

    view! {
        <form class="job-form" on:submit=add_job>
            <input
                type="text"
                placeholder="Company"
                required
                prop:value=move || draft.with(|d| d.company.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.company = value);
                }
            />
            <input
                type="text"
                placeholder="Position"
                required
                prop:value=move || draft.with(|d| d.position.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.position = value);
                }
            />
            <select
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<JobStatus>() {
                        Ok(status) => draft.update(|d| d.status = status),
                        Err(err) => log::warn!("[FORM] {}", err),
                    }
                }
            >
                {JobStatus::ALL.into_iter().map(|status| view! {
                    <option
                        value=status.as_str()
                        prop:selected=move || draft.with(|d| d.status == status)
                    >
                        {status.as_str()}
                    </option>
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Notes (optional)"
                prop:value=move || draft.with(|d| d.notes.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.notes = value);
                }
            />
            <button type="submit" class="add-job-btn">"Add Job"</button>
        </form>
    }
}
