//! Display labels, visual categories and name lookups for the UI.
//!
//! Nothing here feeds back into the engine; it only picks text and a
//! rendering treatment for values the engine already computed.

mod labels;
mod lookup;

pub use labels::Presentable;
pub use lookup::{
    format_date, format_planned_days, owner_names, resolve_owner_name, resolve_project_name,
    UNKNOWN_OWNER, UNKNOWN_PROJECT,
};

/// Closed set of visual treatments a badge can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Neutral,
    Info,
    Warning,
    Danger,
    Success,
    /// Distinguishes work-item types from statuses.
    Accent,
}
