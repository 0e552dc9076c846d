use chrono::{DateTime, Utc};

use super::schedule::is_overdue;
use crate::model::{Project, ProjectStatus, WorkItem, WorkItemStatus};

/// Headline counters shown on the dashboard.
///
/// The counts are independent: a project in progress is also part of
/// `total_projects`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub projects_in_progress: usize,
    pub work_items_overdue: usize,
    pub work_items_done: usize,
}

pub fn aggregate_counts(
    projects: &[Project],
    work_items: &[WorkItem],
    now: DateTime<Utc>,
) -> DashboardStats {
    DashboardStats {
        total_projects: projects.len(),
        projects_in_progress: projects
            .iter()
            .filter(|p| p.status == ProjectStatus::InProgress)
            .count(),
        work_items_overdue: work_items.iter().filter(|w| is_overdue(w, now)).count(),
        work_items_done: work_items
            .iter()
            .filter(|w| w.status == WorkItemStatus::Done)
            .count(),
    }
}

/// Projects in the given status, input order.
pub fn projects_with_status(projects: &[Project], status: ProjectStatus) -> Vec<&Project> {
    projects.iter().filter(|p| p.status == status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Clock, FixedClock};
    use crate::io::seed;
    use chrono::TimeZone;

    fn clock(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn seed_dataset_counts() {
        let catalog = seed::sample_catalog();
        let after_everything = clock(2025, 1, 1);
        let stats = aggregate_counts(&catalog.projects, &catalog.work_items, after_everything.now());
        assert_eq!(
            stats,
            DashboardStats {
                total_projects: 3,
                projects_in_progress: 1,
                work_items_overdue: 2,
                work_items_done: 1,
            }
        );
    }

    #[test]
    fn nothing_overdue_before_the_seed_period() {
        let catalog = seed::sample_catalog();
        let before = clock(2023, 12, 31);
        let stats = aggregate_counts(&catalog.projects, &catalog.work_items, before.now());
        assert_eq!(stats.work_items_overdue, 0);
        assert_eq!(stats.work_items_done, 1);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(aggregate_counts(&[], &[], clock(2024, 1, 1).now()), DashboardStats::default());
    }

    #[test]
    fn overdue_count_follows_the_clock() {
        let catalog = seed::sample_catalog();
        let count = |c: FixedClock| aggregate_counts(&catalog.projects, &catalog.work_items, c.now());

        // TRV002 ends 2024-02-05; TRV003 ends 2024-02-15.
        assert_eq!(count(clock(2024, 2, 5)).work_items_overdue, 0);
        assert_eq!(count(clock(2024, 2, 6)).work_items_overdue, 1);
        assert_eq!(count(clock(2024, 2, 16)).work_items_overdue, 2);
        assert_eq!(
            count(clock(2024, 2, 5)),
            DashboardStats {
                total_projects: 3,
                projects_in_progress: 1,
                work_items_overdue: 0,
                work_items_done: 1,
            }
        );
    }

    #[test]
    fn in_progress_projects() {
        let catalog = seed::sample_catalog();
        let codes: Vec<&str> = projects_with_status(&catalog.projects, ProjectStatus::InProgress)
            .iter()
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(codes, ["PRJ001"]);
    }
}
