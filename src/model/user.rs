use serde::{Deserialize, Serialize};

pub type UserId = String;

string_enum! {
    pub enum Role {
        Advisor => "advisor",
        Manager => "manager",
        Specialist => "specialist",
        Admin => "admin",
    }
}

/// A person who can own work items and checklist entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    /// Team label, e.g. "Infrastructure".
    #[serde(default)]
    pub team: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            role,
            team: String::new(),
            active: true,
        }
    }
}
