//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::board;
use crate::error::TrackerResult;
use crate::form::{IdGenerator, JobDraft};
use crate::models::{Job, JobId, SortMode, StatusFilter};
use crate::theme::Theme;

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All jobs, newest submission first
    pub jobs: Vec<Job>,
    pub filter: StatusFilter,
    pub sort: SortMode,
    pub theme: Theme,
    /// Last issued id, keeps ids unique within the session
    pub ids: IdGenerator,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Validate `draft` and prepend the resulting job
pub fn store_add_job(store: &AppStore, draft: &JobDraft, now: DateTime<Utc>) -> TrackerResult<Job> {
    let job = draft.build(&mut store.ids().write(), now)?;
    board::prepend_job(&mut store.jobs().write(), job.clone());
    log::info!("[STORE] Added job {} ({} at {})", job.id, job.position, job.company);
    Ok(job)
}

/// Add the form's draft and reset it to defaults; a rejected draft keeps its input
pub fn store_submit_draft(
    store: &AppStore,
    draft: RwSignal<JobDraft>,
    now: DateTime<Utc>,
) -> TrackerResult<Job> {
    let job = draft.with_untracked(|d| store_add_job(store, d, now))?;
    draft.set(JobDraft::default());
    Ok(job)
}

/// Remove a job from the store by ID
pub fn store_remove_job(store: &AppStore, id: &JobId) -> TrackerResult<()> {
    let removed = board::remove_job(&mut store.jobs().write(), id)?;
    log::info!("[STORE] Removed job {} ({})", removed.id, removed.company);
    Ok(())
}

/// Flip the theme flag, returning the new theme for the caller to apply
pub fn store_toggle_theme(store: &AppStore) -> Theme {
    let theme = store.theme().get_untracked().toggled();
    store.theme().set(theme);
    log::debug!("[STORE] Theme is now {:?}", theme);
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::models::JobStatus;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    fn draft(company: &str, position: &str) -> JobDraft {
        JobDraft {
            company: company.to_string(),
            position: position.to_string(),
            ..Default::default()
        }
    }

    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| test(AppStore::new(AppState::default())));
    }

    fn job_ids(store: &AppStore) -> Vec<String> {
        store
            .jobs()
            .get_untracked()
            .iter()
            .map(|job| job.id.to_string())
            .collect()
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        with_store(|store| {
            let first = store_add_job(&store, &draft("Acme", "Engineer"), at(1_000)).unwrap();
            let second = store_add_job(&store, &draft("Beta", "Analyst"), at(1_000)).unwrap();

            assert_ne!(first.id, second.id);
            assert_eq!(job_ids(&store), vec!["1001", "1000"]);
            let jobs = store.jobs().get_untracked();
            assert_eq!(jobs[0].company, "Beta");
            assert_eq!(jobs[1].status, JobStatus::Applied);
        });
    }

    #[test]
    fn test_submit_resets_draft_only_on_success() {
        with_store(|store| {
            let mut filled = draft("Acme", "Engineer");
            filled.status = JobStatus::Offer;
            filled.notes = "remote".into();
            let form = RwSignal::new(filled);

            let job = store_submit_draft(&store, form, at(5)).unwrap();
            assert_eq!(job.status, JobStatus::Offer);
            assert_eq!(form.get_untracked(), JobDraft::default());
            assert_eq!(store.jobs().get_untracked().len(), 1);

            let half = draft("Acme", "");
            form.set(half.clone());
            assert_eq!(
                store_submit_draft(&store, form, at(6)),
                Err(TrackerError::MissingField("position"))
            );
            assert_eq!(form.get_untracked(), half);
            assert_eq!(store.jobs().get_untracked().len(), 1);
        });
    }

    #[test]
    fn test_remove_only_matching_job() {
        with_store(|store| {
            for (millis, company) in [(1, "A"), (2, "B"), (3, "C")] {
                store_add_job(&store, &draft(company, "Engineer"), at(millis)).unwrap();
            }

            store_remove_job(&store, &JobId::from_millis(2)).unwrap();
            assert_eq!(job_ids(&store), vec!["3", "1"]);

            assert_eq!(
                store_remove_job(&store, &JobId::from_millis(2)),
                Err(TrackerError::NotFound(JobId::from_millis(2)))
            );
            assert_eq!(job_ids(&store), vec!["3", "1"]);
        });
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        with_store(|store| {
            assert_eq!(store_toggle_theme(&store), Theme::Dark);
            assert_eq!(store.theme().get_untracked(), Theme::Dark);
            assert_eq!(store_toggle_theme(&store), Theme::Light);
            assert_eq!(store.theme().get_untracked(), Theme::Light);
        });
    }
}
