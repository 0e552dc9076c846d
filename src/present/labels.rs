use super::Category;
use crate::model::{
    ChecklistStatus, Environment, Priority, ProjectStatus, Role, TargetApplication,
    WorkItemStatus, WorkItemType,
};

/// Human-readable label and badge category of an enumerated value.
///
/// Implementations match exhaustively, so a new variant does not compile
/// until it has a label and a category.
pub trait Presentable {
    fn label(&self) -> &'static str;

    fn category(&self) -> Category {
        Category::Neutral
    }
}

impl Presentable for ProjectStatus {
    fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Done => "Done",
            ProjectStatus::Suspended => "Suspended",
        }
    }

    fn category(&self) -> Category {
        match self {
            ProjectStatus::Planned => Category::Info,
            ProjectStatus::InProgress => Category::Warning,
            ProjectStatus::Done => Category::Success,
            ProjectStatus::Suspended => Category::Neutral,
        }
    }
}

impl Presentable for WorkItemStatus {
    fn label(&self) -> &'static str {
        match self {
            WorkItemStatus::Planned => "Planned",
            WorkItemStatus::InProgress => "In progress",
            WorkItemStatus::Done => "Done",
            WorkItemStatus::Suspended => "Suspended",
            WorkItemStatus::Cancelled => "Cancelled",
            WorkItemStatus::Failed => "Failed",
        }
    }

    fn category(&self) -> Category {
        match self {
            WorkItemStatus::Planned => Category::Info,
            WorkItemStatus::InProgress => Category::Warning,
            WorkItemStatus::Done => Category::Success,
            WorkItemStatus::Failed => Category::Danger,
            WorkItemStatus::Suspended | WorkItemStatus::Cancelled => Category::Neutral,
        }
    }
}

impl Presentable for ChecklistStatus {
    fn label(&self) -> &'static str {
        match self {
            ChecklistStatus::NotStarted => "Not started",
            ChecklistStatus::InProgress => "In progress",
            ChecklistStatus::Done => "Done",
            ChecklistStatus::Blocked => "Blocked",
        }
    }

    fn category(&self) -> Category {
        match self {
            ChecklistStatus::NotStarted => Category::Neutral,
            ChecklistStatus::InProgress => Category::Warning,
            ChecklistStatus::Done => Category::Success,
            ChecklistStatus::Blocked => Category::Danger,
        }
    }
}

impl Presentable for Priority {
    fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    fn category(&self) -> Category {
        match self {
            Priority::Low => Category::Success,
            Priority::Medium => Category::Info,
            Priority::High => Category::Warning,
            Priority::Critical => Category::Danger,
        }
    }
}

impl Presentable for WorkItemType {
    fn label(&self) -> &'static str {
        match self {
            WorkItemType::DbClone => "DB clone",
            WorkItemType::Migration => "Migration",
            WorkItemType::VersionUpgrade => "Version upgrade",
            WorkItemType::Install => "Installation",
            WorkItemType::Maintenance => "Maintenance",
            WorkItemType::Other => "Other",
        }
    }

    fn category(&self) -> Category {
        match self {
            WorkItemType::Other => Category::Neutral,
            WorkItemType::DbClone
            | WorkItemType::Migration
            | WorkItemType::VersionUpgrade
            | WorkItemType::Install
            | WorkItemType::Maintenance => Category::Accent,
        }
    }
}

impl Presentable for TargetApplication {
    fn label(&self) -> &'static str {
        match self {
            TargetApplication::EspressoGfr => "Espresso GFR",
            TargetApplication::EspressoGrm => "Espresso GRM",
            TargetApplication::EspressoGrh => "Espresso GRH",
            TargetApplication::EspressoGpa => "Espresso GPA",
            TargetApplication::Other => "Other",
        }
    }
}

impl Presentable for Environment {
    fn label(&self) -> &'static str {
        match self {
            Environment::Test => "Test",
            Environment::Training => "Training",
            Environment::Production => "Production",
        }
    }

    fn category(&self) -> Category {
        match self {
            Environment::Production => Category::Danger,
            Environment::Test | Environment::Training => Category::Neutral,
        }
    }
}

impl Presentable for Role {
    fn label(&self) -> &'static str {
        match self {
            Role::Advisor => "Advisor",
            Role::Manager => "Manager",
            Role::Specialist => "Specialist",
            Role::Admin => "Administrator",
        }
    }
}
