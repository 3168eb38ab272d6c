//! Job Board Operations
//!
//! List mutations and the filtered, sorted view rendered by `JobList`.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorError, CollatorOptions};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Job, JobId, SortMode, StatusFilter};

/// Newest submissions go to the head of the list
pub fn prepend_job(jobs: &mut Vec<Job>, job: Job) {
    jobs.insert(0, job);
}

/// Remove the job with `id`, returning it
pub fn remove_job(jobs: &mut Vec<Job>, id: &JobId) -> TrackerResult<Job> {
    let index = jobs
        .iter()
        .position(|job| &job.id == id)
        .ok_or_else(|| TrackerError::NotFound(id.clone()))?;
    Ok(jobs.remove(index))
}

/// Filter then sort a copy of `jobs`; the source order is left untouched
pub fn derive_view(jobs: &[Job], filter: StatusFilter, sort: SortMode) -> Vec<Job> {
    let mut view: Vec<Job> = jobs
        .iter()
        .filter(|job| filter.matches(job))
        .cloned()
        .collect();
    match sort {
        SortMode::Date => view.sort_by(|a, b| b.date_applied.cmp(&a.date_applied)),
        SortMode::Company => match company_collator() {
            Ok(collator) => view.sort_by(|a, b| compare_by_company(&collator, a, b)),
            Err(err) => {
                log::warn!("[BOARD] No collator, sorting by lowercase name: {:?}", err);
                view.sort_by(|a, b| {
                    a.company
                        .to_lowercase()
                        .cmp(&b.company.to_lowercase())
                        .then_with(|| b.date_applied.cmp(&a.date_applied))
                });
            }
        },
    }
    view
}

/// Root-locale collator, ordering accented letters beside their base letter
pub fn company_collator() -> Result<Collator, CollatorError> {
    Collator::try_new(&Default::default(), CollatorOptions::new())
}

/// Collated company order; exact spelling, then recency, break ties
fn compare_by_company(collator: &Collator, a: &Job, b: &Job) -> Ordering {
    collator
        .compare(&a.company, &b.company)
        .then_with(|| a.company.cmp(&b.company))
        .then_with(|| b.date_applied.cmp(&a.date_applied))
}
