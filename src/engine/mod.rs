//! Derived state computed from a [`Catalog`](crate::model::Catalog) snapshot.
//!
//! Everything here is a pure function of its arguments. Time-dependent
//! queries take the reference instant as a parameter; callers obtain it from
//! a [`Clock`] at the moment they evaluate.

pub mod clock;
pub mod filter;
pub mod progress;
pub mod schedule;
pub mod stats;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::{filter_projects, filter_work_items, Filter, ProjectQuery, WorkItemQuery};
pub use progress::{checklist_counts, progress};
pub use schedule::{is_overdue, recent_work_items, RECENT_LIMIT};
pub use stats::{aggregate_counts, projects_with_status, DashboardStats};
