use std::fmt;
use std::str::FromStr;

use crate::model::{ParseEnumError, Project, ProjectStatus, WorkItem, WorkItemStatus, WorkItemType};

/// String form of the [`Filter::All`] wildcard.
pub const ALL_SENTINEL: &str = "all";

/// Either a wildcard or one concrete value of an enumerated domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(ALL_SENTINEL),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr<Err = ParseEnumError>> FromStr for Filter<T> {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == ALL_SENTINEL {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Projects whose status passes `status` and whose name or code contains
/// `search` (case-insensitive substring). Input order is preserved.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    search: &str,
    status: Filter<ProjectStatus>,
) -> Vec<&'a Project> {
    let needle = search.to_lowercase();
    projects
        .iter()
        .filter(|p| status.matches(&p.status))
        .filter(|p| contains_ignore_case(&p.name, &needle) || contains_ignore_case(&p.code, &needle))
        .collect()
}

/// Work items whose description contains `search` (case-insensitive) and
/// whose status and type pass their filters. Input order is preserved.
pub fn filter_work_items<'a>(
    items: &'a [WorkItem],
    search: &str,
    status: Filter<WorkItemStatus>,
    work_type: Filter<WorkItemType>,
) -> Vec<&'a WorkItem> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|w| contains_ignore_case(&w.description, &needle))
        .filter(|w| status.matches(&w.status))
        .filter(|w| work_type.matches(&w.work_type))
        .collect()
}

/// Search state of the project list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectQuery {
    pub search: String,
    pub status: Filter<ProjectStatus>,
}

impl ProjectQuery {
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.search, self.status)
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != Filter::All
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Search state of the work-item list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkItemQuery {
    pub search: String,
    pub status: Filter<WorkItemStatus>,
    pub work_type: Filter<WorkItemType>,
}

impl WorkItemQuery {
    pub fn apply<'a>(&self, items: &'a [WorkItem]) -> Vec<&'a WorkItem> {
        filter_work_items(items, &self.search, self.status, self.work_type)
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status != Filter::All || self.work_type != Filter::All
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::seed;

    fn codes<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.code.as_str()).collect()
    }

    fn ids<'a>(items: &[&'a WorkItem]) -> Vec<&'a str> {
        items.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn empty_search_and_all_is_identity() {
        let catalog = seed::sample_catalog();
        let found = filter_projects(&catalog.projects, "", Filter::All);
        assert_eq!(codes(&found), ["PRJ001", "PRJ002", "PRJ003"]);
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let catalog = seed::sample_catalog();
        for needle in ["grm", "GRM", "gRm"] {
            let found = filter_projects(&catalog.projects, needle, Filter::All);
            assert_eq!(codes(&found), ["PRJ002"], "needle {needle}");
        }
    }

    #[test]
    fn search_matches_code() {
        let catalog = seed::sample_catalog();
        let found = filter_projects(&catalog.projects, "prj003", Filter::All);
        assert_eq!(codes(&found), ["PRJ003"]);
    }

    #[test]
    fn status_and_search_combine_with_and() {
        let catalog = seed::sample_catalog();
        let found = filter_projects(&catalog.projects, "grm", Filter::Only(ProjectStatus::Done));
        assert!(found.is_empty());
        let found = filter_projects(&catalog.projects, "", Filter::Only(ProjectStatus::Planned));
        assert_eq!(codes(&found), ["PRJ002"]);
    }

    #[test]
    fn work_item_filters_are_independent() {
        let catalog = seed::sample_catalog();
        let items = &catalog.work_items;

        let all = filter_work_items(items, "", Filter::All, Filter::All);
        assert_eq!(ids(&all), ["TRV001", "TRV002", "TRV003"]);

        let migration = filter_work_items(items, "", Filter::All, Filter::Only(WorkItemType::Migration));
        assert_eq!(ids(&migration), ["TRV001"]);

        let running = filter_work_items(items, "", Filter::Only(WorkItemStatus::InProgress), Filter::All);
        assert_eq!(ids(&running), ["TRV002"]);

        let text = filter_work_items(items, "RAM", Filter::All, Filter::All);
        assert_eq!(ids(&text), ["TRV003"]);

        let none = filter_work_items(
            items,
            "ram",
            Filter::Only(WorkItemStatus::Done),
            Filter::Only(WorkItemType::VersionUpgrade),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn work_item_search_ignores_project_name() {
        let catalog = seed::sample_catalog();
        let found = filter_work_items(&catalog.work_items, "espresso", Filter::All, Filter::All);
        assert!(found.is_empty());
    }

    #[test]
    fn parses_all_sentinel_and_values() {
        assert_eq!("all".parse::<Filter<WorkItemType>>(), Ok(Filter::All));
        assert_eq!(
            "db_clone".parse::<Filter<WorkItemType>>(),
            Ok(Filter::Only(WorkItemType::DbClone))
        );
        assert!("tous".parse::<Filter<WorkItemType>>().is_err());
        assert_eq!(Filter::Only(ProjectStatus::Done).to_string(), "done");
        assert_eq!(Filter::<ProjectStatus>::All.to_string(), "all");
    }

    #[test]
    fn query_state() {
        let catalog = seed::sample_catalog();
        let mut query = WorkItemQuery::default();
        assert!(!query.is_active());
        query.search = "installation".into();
        assert!(query.is_active());
        assert_eq!(ids(&query.apply(&catalog.work_items)), ["TRV002"]);
        query.clear();
        assert_eq!(query, WorkItemQuery::default());

        let query = ProjectQuery { search: String::new(), status: Filter::Only(ProjectStatus::Done) };
        assert_eq!(codes(&query.apply(&catalog.projects)), ["PRJ003"]);
    }
}
