//! Built-in demonstration dataset.

use chrono::NaiveDate;

use crate::model::{
    Catalog, ChecklistItem, ChecklistStatus, Environment, Priority, Project, ProjectStatus, Role,
    TargetApplication, User, WorkItem, WorkItemStatus, WorkItemType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Three users, three projects and three work items with checklists.
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_projects(), sample_work_items(), sample_users())
}

fn sample_users() -> Vec<User> {
    let mut jean = User::new("1", "Jean Dupont", Role::Manager);
    jean.email = "jean.dupont@entreprise.com".into();
    jean.team = "Infrastructure".into();

    let mut marie = User::new("2", "Marie Martin", Role::Specialist);
    marie.email = "marie.martin@entreprise.com".into();
    marie.team = "Databases".into();

    let mut pierre = User::new("3", "Pierre Leroy", Role::Advisor);
    pierre.email = "pierre.leroy@entreprise.com".into();
    pierre.team = "Applications".into();

    vec![jean, marie, pierre]
}

fn sample_projects() -> Vec<Project> {
    let mut gfr = Project::new(
        "PRJ001",
        "Migration Espresso GFR",
        date(2024, 1, 15),
        date(2024, 3, 30),
    );
    gfr.description = "Migration from version 2.5 to 3.0".into();
    gfr.status = ProjectStatus::InProgress;
    gfr.priority = Priority::High;

    let mut grm = Project::new(
        "PRJ002",
        "GRM Infrastructure Upgrade",
        date(2024, 2, 1),
        date(2024, 4, 15),
    );
    grm.description = "Server capacity increase".into();
    grm.status = ProjectStatus::Planned;
    grm.priority = Priority::Medium;

    let mut grh = Project::new(
        "PRJ003",
        "GRH Production DB Clone",
        date(2024, 1, 20),
        date(2024, 2, 10),
    );
    grh.description = "Test environment creation".into();
    grh.status = ProjectStatus::Done;
    grh.priority = Priority::Low;

    vec![gfr, grm, grh]
}

fn sample_work_items() -> Vec<WorkItem> {
    use ChecklistStatus::*;

    let mut migration = WorkItem::new(
        "TRV001",
        "PRJ001",
        WorkItemType::Migration,
        "Database migration",
        date(2024, 1, 15),
        date(2024, 1, 20),
    );
    migration.target_application = TargetApplication::EspressoGfr;
    migration.environment = Environment::Production;
    migration.status = WorkItemStatus::Done;
    migration.owner_id = "2".into();
    migration.checklist = vec![
        ChecklistItem::new("CHK001", "Database backup", 1).with_status(Done),
        ChecklistItem::new("CHK002", "Schema validation", 2).with_status(Done),
        ChecklistItem::new("CHK003", "Functional tests", 3).with_status(Done),
    ];

    let mut install = WorkItem::new(
        "TRV002",
        "PRJ001",
        WorkItemType::Install,
        "New version installation",
        date(2024, 2, 1),
        date(2024, 2, 5),
    );
    install.target_application = TargetApplication::EspressoGfr;
    install.environment = Environment::Test;
    install.status = WorkItemStatus::InProgress;
    install.owner_id = "2".into();
    install.checklist = vec![
        ChecklistItem::new("CHK004", "Server preparation", 1).with_status(Done),
        ChecklistItem::new("CHK005", "Package installation", 2).with_status(InProgress),
        ChecklistItem::new("CHK006", "Configuration", 3),
    ];

    let mut upgrade = WorkItem::new(
        "TRV003",
        "PRJ002",
        WorkItemType::VersionUpgrade,
        "Server RAM increase",
        date(2024, 2, 10),
        date(2024, 2, 15),
    );
    upgrade.target_application = TargetApplication::EspressoGrm;
    upgrade.environment = Environment::Production;
    upgrade.status = WorkItemStatus::Planned;
    upgrade.owner_id = "1".into();
    upgrade.checklist = vec![
        ChecklistItem::new("CHK007", "Hardware order", 1).with_status(Done),
        ChecklistItem::new("CHK008", "Intervention planning", 2),
        ChecklistItem::new("CHK009", "Performance tests", 3),
    ];

    vec![migration, install, upgrade]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::progress;

    #[test]
    fn seed_progress_values() {
        let catalog = sample_catalog();
        let pct: Vec<u8> = catalog.work_items.iter().map(progress).collect();
        assert_eq!(pct, [100, 33, 33]);
    }
}
