//! Job Card Component
//!
//! One application with its delete button.

use leptos::prelude::*;

use crate::models::Job;
use crate::store::{store_remove_job, use_app_store};

/// Card showing position, status, company, date and notes
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let store = use_app_store();
    let id = job.id.clone();

    // No confirmation step, delete is immediate
    let delete = move |_| {
        if let Err(err) = store_remove_job(&store, &id) {
            log::warn!("[CARD] Delete failed: {}", err);
        }
    };

    let status_class = format!("job-status status-{}", job.status.as_str().to_lowercase());
    let applied_on = format!("Applied on: {}", job.applied_on());

    view! {
        <div class="job-card">
            <div class="job-card-header">
                <h2 class="job-position">{job.position.clone()}</h2>
                <span class=status_class>{job.status.as_str()}</span>
            </div>
            <p class="job-company">"Company: " {job.company.clone()}</p>
            <p class="job-date">{applied_on}</p>
            {job.notes.clone().map(|notes| view! { <p class="job-notes">{notes}</p> })}
            <button class="delete-btn" on:click=delete>"Delete"</button>
        </div>
    }
}
