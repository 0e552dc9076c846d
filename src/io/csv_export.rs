use std::io::Write;
use std::path::Path;

use crate::engine::progress;
use crate::io::DataError;
use crate::model::{Catalog, Project, WorkItem};
use crate::present::{format_date, resolve_owner_name, resolve_project_name, Presentable};

pub const NO_PROJECTS: &str = "no project matches the current filters";
pub const NO_WORK_ITEMS: &str = "no work item matches the current filters";

/// Fails with [`DataError::Empty`] when there is nothing to export.
pub fn require_rows<T>(rows: &[T], reason: &'static str) -> Result<(), DataError> {
    if rows.is_empty() {
        return Err(DataError::Empty(reason));
    }
    Ok(())
}

fn writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(inner)
}

fn create(path: &Path) -> Result<std::fs::File, DataError> {
    std::fs::File::create(path).map_err(|e| DataError::io(path, e))
}

/// Write projects as semicolon-delimited CSV.
///
/// Columns: Code ; Name ; Start ; Planned end ; Status ; Priority
/// Dates are formatted as DD/MM/YYYY. Returns the number of rows written.
pub fn write_projects<W: Write>(projects: &[&Project], out: W) -> Result<usize, DataError> {
    let mut wtr = writer(out);
    wtr.write_record(["Code", "Name", "Start", "Planned end", "Status", "Priority"])?;
    for project in projects {
        let start = format_date(project.start_date);
        let end = format_date(project.planned_end_date);
        wtr.write_record([
            project.code.as_str(),
            project.name.as_str(),
            start.as_str(),
            end.as_str(),
            project.status.label(),
            project.priority.label(),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(projects.len())
}

/// Write work items as semicolon-delimited CSV.
///
/// Columns: Id ; Project ; Description ; Type ; Application ; Environment ;
/// Start ; End ; Status ; Owner ; Progress. Project and owner are resolved
/// to names through `catalog`, falling back to the unknown labels.
pub fn write_work_items<W: Write>(
    items: &[&WorkItem],
    catalog: &Catalog,
    out: W,
) -> Result<usize, DataError> {
    let mut wtr = writer(out);
    wtr.write_record([
        "Id",
        "Project",
        "Description",
        "Type",
        "Application",
        "Environment",
        "Start",
        "End",
        "Status",
        "Owner",
        "Progress",
    ])?;
    for item in items {
        let start = format_date(item.start_date);
        let end = format_date(item.end_date);
        let pct = format!("{}%", progress(item));
        wtr.write_record([
            item.id.as_str(),
            resolve_project_name(&item.project_id, catalog),
            item.description.as_str(),
            item.work_type.label(),
            item.target_application.label(),
            item.environment.label(),
            start.as_str(),
            end.as_str(),
            item.status.label(),
            resolve_owner_name(&item.owner_id, catalog),
            pct.as_str(),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(items.len())
}

/// Export projects to a CSV file.
pub fn export_projects(projects: &[&Project], path: &Path) -> Result<usize, DataError> {
    require_rows(projects, NO_PROJECTS)?;
    let count = write_projects(projects, create(path)?)?;
    tracing::info!(path = %path.display(), count, "Exported projects");
    Ok(count)
}

/// Export work items to a CSV file.
pub fn export_work_items(
    items: &[&WorkItem],
    catalog: &Catalog,
    path: &Path,
) -> Result<usize, DataError> {
    require_rows(items, NO_WORK_ITEMS)?;
    let count = write_work_items(items, catalog, create(path)?)?;
    tracing::info!(path = %path.display(), count, "Exported work items");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::seed;

    #[test]
    fn project_rows() {
        let catalog = seed::sample_catalog();
        let projects: Vec<&Project> = catalog.projects.iter().collect();
        let mut buf = Vec::new();
        assert_eq!(write_projects(&projects, &mut buf).unwrap(), 3);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Code;Name;Start;Planned end;Status;Priority");
        assert_eq!(
            lines[1],
            "PRJ001;Migration Espresso GFR;15/01/2024;30/03/2024;In progress;High"
        );
    }

    #[test]
    fn work_item_rows_resolve_names() {
        let mut catalog = seed::sample_catalog();
        catalog.work_items[2].owner_id = "missing".into();
        let items: Vec<&WorkItem> = catalog.work_items.iter().collect();
        let mut buf = Vec::new();
        write_work_items(&items, &catalog, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[2],
            "TRV002;Migration Espresso GFR;New version installation;Installation;Espresso GFR;Test;01/02/2024;05/02/2024;In progress;Marie Martin;33%"
        );
        assert!(lines[3].contains(";Unknown owner;"));
    }

    #[test]
    fn empty_selection_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let err = export_projects(&[], &path).unwrap_err();
        assert!(matches!(err, DataError::Empty(NO_PROJECTS)));
        assert!(!path.exists());

        let catalog = seed::sample_catalog();
        let err = export_work_items(&[], &catalog, &path).unwrap_err();
        assert_eq!(err.to_string(), "nothing to export: no work item matches the current filters");
        assert!(!path.exists());
    }

    #[test]
    fn non_empty_selection_passes() {
        let catalog = seed::sample_catalog();
        let projects: Vec<&Project> = catalog.projects.iter().collect();
        assert!(require_rows(&projects, NO_PROJECTS).is_ok());
        assert!(require_rows::<&WorkItem>(&[], NO_WORK_ITEMS).is_err());
    }

    #[test]
    fn exports_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.csv");
        let catalog = seed::sample_catalog();
        let items: Vec<&WorkItem> = catalog.work_items.iter().collect();
        assert_eq!(export_work_items(&items, &catalog, &path).unwrap(), 3);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Id;Project;Description;"));
    }
}
