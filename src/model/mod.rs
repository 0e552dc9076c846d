//! Domain records: projects, work items with their checklists, and users.
//!
//! Every enumerated field is a closed enum whose serialized form is the
//! snake_case value also accepted by [`std::str::FromStr`].

/// Error returned when a string does not name any variant of an enumerated domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {domain} value '{value}'")]
pub struct ParseEnumError {
    pub domain: &'static str,
    pub value: String,
}

/// Declare a closed enum with a fixed snake_case string form.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` and serde support from the
/// same variant table so the three representations cannot drift apart.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::model::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $value => Ok($name::$variant), )+
                    other => Err($crate::model::ParseEnumError {
                        domain: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod catalog;
pub mod project;
pub mod user;
pub mod work_item;

pub use catalog::{Catalog, DanglingReference};
pub use project::{Priority, Project, ProjectId, ProjectStatus};
pub use user::{Role, User, UserId};
pub use work_item::{
    ChecklistItem, ChecklistStatus, Environment, TargetApplication, WorkItem, WorkItemId,
    WorkItemStatus, WorkItemType,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_variant_from_its_string_form() {
        for status in WorkItemStatus::ALL {
            assert_eq!(status.as_str().parse::<WorkItemStatus>(), Ok(*status));
        }
        for kind in WorkItemType::ALL {
            assert_eq!(kind.to_string().parse::<WorkItemType>(), Ok(*kind));
        }
    }

    #[test]
    fn rejects_unknown_value() {
        let err = "archived".parse::<ProjectStatus>().unwrap_err();
        assert_eq!(err.domain, "ProjectStatus");
        assert_eq!(err.value, "archived");
        assert_eq!(err.to_string(), "invalid ProjectStatus value 'archived'");
    }

    #[test]
    fn serde_form_matches_string_form() {
        let json = serde_json::to_string(&WorkItemType::DbClone).unwrap();
        assert_eq!(json, "\"db_clone\"");
        let parsed: TargetApplication = serde_json::from_str("\"espresso_grm\"").unwrap();
        assert_eq!(parsed, TargetApplication::EspressoGrm);
    }
}
