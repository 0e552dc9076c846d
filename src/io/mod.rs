pub mod csv_export;
mod error;
pub mod file;
pub mod seed;

pub use error::DataError;
pub use file::{load_catalog, save_catalog};
