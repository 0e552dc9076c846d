use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier of a project (e.g. `PRJ001`).
pub type ProjectId = String;

string_enum! {
    /// Lifecycle state of a project.
    pub enum ProjectStatus {
        Planned => "planned",
        InProgress => "in_progress",
        Done => "done",
        Suspended => "suspended",
    }
}

string_enum! {
    /// Business priority of a project.
    pub enum Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

/// A top-level tracked initiative with planned dates and a priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Human-readable display key, unique across the catalog.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    /// Expected to be on or after `start_date`; not enforced.
    pub planned_end_date: NaiveDate,
    pub status: ProjectStatus,
    pub priority: Priority,
}

impl Project {
    /// Create a planned, medium-priority project whose code equals its id.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        planned_end_date: NaiveDate,
    ) -> Self {
        let id = id.into();
        Self {
            code: id.clone(),
            id,
            name: name.into(),
            description: String::new(),
            start_date,
            planned_end_date,
            status: ProjectStatus::Planned,
            priority: Priority::Medium,
        }
    }

    /// Planned duration in days, or `None` when the end precedes the start.
    pub fn planned_days(&self) -> Option<i64> {
        let days = (self.planned_end_date - self.start_date).num_days();
        (days >= 0).then_some(days)
    }
}
