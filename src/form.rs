//! Add-Job Draft
//!
//! Transient form state and the validation that turns it into a `Job`.

use chrono::{DateTime, Utc};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Job, JobId, JobStatus};

/// Field values of the add-job form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobDraft {
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub notes: String,
}

impl JobDraft {
    /// Check the required fields without consuming the draft
    pub fn validate(&self) -> TrackerResult<()> {
        if self.company.trim().is_empty() {
            return Err(TrackerError::MissingField("company"));
        }
        if self.position.trim().is_empty() {
            return Err(TrackerError::MissingField("position"));
        }
        Ok(())
    }

    /// Build a job from this draft, drawing an id only once validation passes
    pub fn build(&self, ids: &mut IdGenerator, now: DateTime<Utc>) -> TrackerResult<Job> {
        self.validate()?;
        let notes = self.notes.trim();
        Ok(Job {
            id: ids.next_id(now),
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            status: self.status,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            date_applied: now,
        })
    }
}

/// Issues strictly increasing millisecond ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn next_id(&mut self, now: DateTime<Utc>) -> JobId {
        let millis = now.timestamp_millis();
        let millis = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(millis);
        JobId::from_millis(millis)
    }
}
