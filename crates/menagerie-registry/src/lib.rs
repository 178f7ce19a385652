//! In-memory query and reporting layer over the Menagerie zoo records.
//!
//! This crate holds the [`Zoo`] registry and every query the reporting
//! layer asks of it: animal censuses, staff coverage, the visiting
//! schedule, and admission pricing.
//!
//! # Modules
//!
//! - [`admissions`] -- Entry-fee calculation and percentage price
//!   adjustments in checked [`rust_decimal::Decimal`] math.
//! - [`animal_map`] -- The zone census in its two shapes: species names
//!   per zone, or resident names per species with filtering.
//! - [`error`] -- Error types for registry operations.
//! - [`residents`] -- Age and name queries over a single enclosure.
//! - [`sample`] -- A fully-populated sample zoo for demos and tests.
//! - [`schedule`] -- Visitor-facing rendering of the weekly hours.
//! - [`store`] -- The [`Zoo`] container holding all records.

pub mod admissions;
pub mod animal_map;
pub mod error;
pub mod residents;
pub mod sample;
pub mod schedule;
pub mod store;

// Re-export primary types at crate root.
pub use animal_map::{AnimalMap, AnimalMapOptions};
pub use error::RegistryError;
pub use sample::{SampleIds, create_sample_zoo};
pub use schedule::format_hours;
pub use store::{EmployeeKey, Zoo};
