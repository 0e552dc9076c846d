use std::fmt;

use serde::{Deserialize, Serialize};

use super::project::Project;
use super::user::User;
use super::work_item::WorkItem;

/// Immutable snapshot of the whole dataset.
///
/// Handed explicitly to every query; nothing in the crate keeps a global copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub work_items: Vec<WorkItem>,
    #[serde(default)]
    pub users: Vec<User>,
}

/// A foreign key that does not resolve inside the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    Project { work_item: String, project: String },
    Owner { work_item: String, user: String },
    TeamMember { work_item: String, user: String },
    ChecklistOwner { work_item: String, checklist_item: String, user: String },
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project { work_item, project } => {
                write!(f, "work item {work_item} references unknown project {project}")
            }
            Self::Owner { work_item, user } => {
                write!(f, "work item {work_item} is owned by unknown user {user}")
            }
            Self::TeamMember { work_item, user } => {
                write!(f, "work item {work_item} lists unknown team member {user}")
            }
            Self::ChecklistOwner { work_item, checklist_item, user } => write!(
                f,
                "checklist item {checklist_item} of {work_item} is owned by unknown user {user}"
            ),
        }
    }
}

impl Catalog {
    pub fn new(projects: Vec<Project>, work_items: Vec<WorkItem>, users: Vec<User>) -> Self {
        Self {
            projects,
            work_items,
            users,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.work_items.is_empty() && self.users.is_empty()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn work_items_for_project(&self, project_id: &str) -> Vec<&WorkItem> {
        self.work_items
            .iter()
            .filter(|w| w.project_id == project_id)
            .collect()
    }

    /// Every reference that points outside the catalog, in dataset order.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut out = Vec::new();
        for item in &self.work_items {
            if self.project(&item.project_id).is_none() {
                out.push(DanglingReference::Project {
                    work_item: item.id.clone(),
                    project: item.project_id.clone(),
                });
            }
            if self.user(&item.owner_id).is_none() {
                out.push(DanglingReference::Owner {
                    work_item: item.id.clone(),
                    user: item.owner_id.clone(),
                });
            }
            for member in &item.team {
                if self.user(member).is_none() {
                    out.push(DanglingReference::TeamMember {
                        work_item: item.id.clone(),
                        user: member.clone(),
                    });
                }
            }
            for entry in &item.checklist {
                if let Some(owner) = &entry.owner_id {
                    if self.user(owner).is_none() {
                        out.push(DanglingReference::ChecklistOwner {
                            work_item: item.id.clone(),
                            checklist_item: entry.id.clone(),
                            user: owner.clone(),
                        });
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::seed;
    use crate::model::ChecklistItem;

    #[test]
    fn seed_catalog_is_referentially_complete() {
        let catalog = seed::sample_catalog();
        assert!(catalog.dangling_references().is_empty());
    }

    #[test]
    fn lookups_by_id() {
        let catalog = seed::sample_catalog();
        assert_eq!(catalog.project("PRJ002").map(|p| p.code.as_str()), Some("PRJ002"));
        assert!(catalog.project("PRJ999").is_none());
        assert_eq!(catalog.user("2").map(|u| u.name.as_str()), Some("Marie Martin"));
        let ids: Vec<&str> = catalog
            .work_items_for_project("PRJ001")
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, ["TRV001", "TRV002"]);
    }

    #[test]
    fn reports_every_kind_of_dangling_reference() {
        let mut catalog = seed::sample_catalog();
        let item = &mut catalog.work_items[0];
        item.project_id = "PRJ404".into();
        item.owner_id = "404".into();
        item.team = vec!["1".into(), "405".into()];
        item.checklist
            .push(ChecklistItem { owner_id: Some("406".into()), ..ChecklistItem::new("CHKX", "x", 9) });

        let found = catalog.dangling_references();
        assert_eq!(found.len(), 4);
        assert_eq!(
            found[0],
            DanglingReference::Project { work_item: "TRV001".into(), project: "PRJ404".into() }
        );
        assert_eq!(
            found[3].to_string(),
            "checklist item CHKX of TRV001 is owned by unknown user 406"
        );
    }
}
