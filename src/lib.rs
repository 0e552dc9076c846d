//! Tracking of IT projects, their work items and checklists.
//!
//! [`model`] holds the records, [`engine`] derives progress, overdue state,
//! dashboard counters and filtered lists from a [`model::Catalog`], and
//! [`present`] turns enum values into labels and badge categories. The egui
//! front end in the binary only displays what these modules compute.

pub mod engine;
pub mod io;
pub mod model;
pub mod present;
pub mod settings;
