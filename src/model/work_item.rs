use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::project::ProjectId;
use super::user::UserId;

pub type WorkItemId = String;

string_enum! {
    /// Kind of technical operation a work item performs.
    pub enum WorkItemType {
        DbClone => "db_clone",
        Migration => "migration",
        VersionUpgrade => "version_upgrade",
        Install => "install",
        Maintenance => "maintenance",
        Other => "other",
    }
}

string_enum! {
    /// Application the work item targets.
    pub enum TargetApplication {
        EspressoGfr => "espresso_gfr",
        EspressoGrm => "espresso_grm",
        EspressoGrh => "espresso_grh",
        EspressoGpa => "espresso_gpa",
        Other => "other",
    }
}

string_enum! {
    pub enum Environment {
        Test => "test",
        Training => "training",
        Production => "production",
    }
}

string_enum! {
    /// Canonical work-item status domain (superset of every status the
    /// views display).
    pub enum WorkItemStatus {
        Planned => "planned",
        InProgress => "in_progress",
        Done => "done",
        Suspended => "suspended",
        Cancelled => "cancelled",
        Failed => "failed",
    }
}

string_enum! {
    pub enum ChecklistStatus {
        NotStarted => "not_started",
        InProgress => "in_progress",
        Done => "done",
        Blocked => "blocked",
    }
}

/// An atomic sub-task of a work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique within the owning work item only.
    pub id: String,
    pub description: String,
    pub status: ChecklistStatus,
    /// Display position; equal values keep their insertion order.
    pub order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, description: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status: ChecklistStatus::NotStarted,
            order,
            owner_id: None,
            due_date: None,
            comment: None,
        }
    }

    pub fn with_status(mut self, status: ChecklistStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_done(&self) -> bool {
        self.status == ChecklistStatus::Done
    }
}

/// A unit of work belonging to one project.
///
/// The checklist is owned by the work item. Progress is derived from it on
/// demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: WorkItemId,
    pub project_id: ProjectId,
    #[serde(rename = "type")]
    pub work_type: WorkItemType,
    pub target_application: TargetApplication,
    pub environment: Environment,
    pub description: String,
    pub start_date: NaiveDate,
    /// Actual or planned end.
    pub end_date: NaiveDate,
    pub status: WorkItemStatus,
    pub owner_id: UserId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<UserId>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl WorkItem {
    /// Create a planned work item with no owner, team or checklist.
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        work_type: WorkItemType,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            work_type,
            target_application: TargetApplication::Other,
            environment: Environment::Test,
            description: description.into(),
            start_date,
            end_date,
            status: WorkItemStatus::Planned,
            owner_id: UserId::new(),
            team: Vec::new(),
            checklist: Vec::new(),
        }
    }

    /// Checklist entries in display order (by `order`, ties in insertion order).
    pub fn ordered_checklist(&self) -> Vec<&ChecklistItem> {
        let mut items: Vec<&ChecklistItem> = self.checklist.iter().collect();
        items.sort_by_key(|item| item.order);
        items
    }
}
