use chrono::NaiveDate;

use crate::model::{Catalog, Project};

pub const UNKNOWN_PROJECT: &str = "Unknown project";
pub const UNKNOWN_OWNER: &str = "Unknown owner";

/// Name of the project with `id`, or [`UNKNOWN_PROJECT`].
pub fn resolve_project_name<'a>(id: &str, catalog: &'a Catalog) -> &'a str {
    catalog
        .project(id)
        .map(|p| p.name.as_str())
        .unwrap_or(UNKNOWN_PROJECT)
}

/// Name of the user with `id`, or [`UNKNOWN_OWNER`].
pub fn resolve_owner_name<'a>(id: &str, catalog: &'a Catalog) -> &'a str {
    catalog
        .user(id)
        .map(|u| u.name.as_str())
        .unwrap_or(UNKNOWN_OWNER)
}

/// Comma-separated names of a team, unresolved members shown as the fallback.
pub fn owner_names(ids: &[String], catalog: &Catalog) -> String {
    ids.iter()
        .map(|id| resolve_owner_name(id, catalog))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `DD/MM/YYYY`, the date format used across the views and CSV exports.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Planned length of a project, e.g. `75 days`, or `-` when the dates are inverted.
pub fn format_planned_days(project: &Project) -> String {
    match project.planned_days() {
        Some(1) => "1 day".to_string(),
        Some(days) => format!("{days} days"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::seed;

    #[test]
    fn resolves_known_ids() {
        let catalog = seed::sample_catalog();
        assert_eq!(resolve_project_name("PRJ001", &catalog), "Migration Espresso GFR");
        assert_eq!(resolve_owner_name("1", &catalog), "Jean Dupont");
    }

    #[test]
    fn falls_back_on_unknown_ids() {
        let catalog = seed::sample_catalog();
        assert_eq!(resolve_project_name("PRJ404", &catalog), UNKNOWN_PROJECT);
        assert_eq!(resolve_owner_name("", &catalog), UNKNOWN_OWNER);
        assert_eq!(resolve_owner_name("x", &Catalog::default()), UNKNOWN_OWNER);
    }

    #[test]
    fn team_names_keep_order() {
        let catalog = seed::sample_catalog();
        let team = vec!["3".to_string(), "99".to_string(), "1".to_string()];
        assert_eq!(owner_names(&team, &catalog), "Pierre Leroy, Unknown owner, Jean Dupont");
        assert_eq!(owner_names(&[], &catalog), "");
    }

    #[test]
    fn formats_day_first() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(d), "05/03/2024");
    }

    #[test]
    fn planned_length_of_projects() {
        let catalog = seed::sample_catalog();
        let prj001 = catalog.project("PRJ001").unwrap();
        assert_eq!(format_planned_days(prj001), "75 days");

        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        assert_eq!(format_planned_days(&Project::new("P1", "One", d(1), d(2))), "1 day");
        assert_eq!(format_planned_days(&Project::new("P0", "Same", d(1), d(1))), "0 days");
        assert_eq!(format_planned_days(&Project::new("PX", "Inverted", d(2), d(1))), "-");
    }
}
