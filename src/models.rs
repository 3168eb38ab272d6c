//! Frontend Models
//!
//! Job records and the selections used to view them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Application status of a tracked job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl JobStatus {
    /// All statuses in select-box order
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TrackerError::InvalidStatus(s.to_string()))
    }
}

/// Job identifier, the creation time in milliseconds rendered as a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tracked application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub company: String,
    pub position: String,
    pub status: JobStatus,
    pub notes: Option<String>,
    pub date_applied: DateTime<Utc>,
}

impl Job {
    /// Application date in the viewer's local timezone, e.g. `3/14/2026`
    pub fn applied_on(&self) -> String {
        self.date_applied
            .with_timezone(&Local)
            .format("%-m/%-d/%Y")
            .to_string()
    }
}

/// Which statuses the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Status(JobStatus),
}

impl StatusFilter {
    /// `All` followed by every status, in select-box order
    pub fn options() -> impl Iterator<Item = StatusFilter> {
        let statuses = JobStatus::ALL.into_iter().map(StatusFilter::Status);
        std::iter::once(StatusFilter::All).chain(statuses)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Status(status) => status.as_str(),
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => job.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Status)
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = TrackerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ordering of the displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Most recent first
    #[default]
    Date,
    /// Company name, A to Z
    Company,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::Date, SortMode::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Date => "date",
            SortMode::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Date => "Sort by Date",
            SortMode::Company => "Sort by Company",
        }
    }
}

impl FromStr for SortMode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortMode::Date),
            "company" => Ok(SortMode::Company),
            other => Err(TrackerError::InvalidSortMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_parse_round_trips_names() {
        for status in JobStatus::ALL {
            assert_eq!(status.as_str().parse::<JobStatus>().unwrap(), status);
        }
        assert!(matches!(
            "applied".parse::<JobStatus>(),
            Err(TrackerError::InvalidStatus(s)) if s == "applied"
        ));
    }

    #[test]
    fn test_filter_parse_and_options() {
        assert_eq!("All".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "Offer".parse::<StatusFilter>().unwrap(),
            StatusFilter::Status(JobStatus::Offer)
        );
        let names: Vec<_> = StatusFilter::options().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["All", "Applied", "Interview", "Offer", "Rejected"]);
    }

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("company".parse::<SortMode>().unwrap(), SortMode::Company);
        assert!("name".parse::<SortMode>().is_err());
        assert_eq!(SortMode::default(), SortMode::Date);
    }

    #[test]
    fn test_job_serializes_with_camel_case_fields() {
        let job = Job {
            id: JobId::from_millis(1_700_000_000_000),
            company: "Acme".into(),
            position: "Engineer".into(),
            status: JobStatus::Interview,
            notes: None,
            date_applied: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["id"], "1700000000000");
        assert_eq!(json["status"], "Interview");
        assert!(json.get("dateApplied").is_some());

        let filter = serde_json::to_value(StatusFilter::Status(JobStatus::Offer)).unwrap();
        assert_eq!(filter, "Offer");
    }
}
