//! Shared type definitions for the Menagerie zoo registry.
//!
//! This crate is the single source of truth for all record types used
//! across the Menagerie workspace. It holds plain data: construction and
//! lookup logic lives downstream in `menagerie-registry`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for species and employee identifiers
//! - [`enums`] -- Enumeration types (sex, park zones, weekdays, ticketing)
//! - [`structs`] -- Core record structs (species, residents, staff, hours, prices)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Sex, TicketCategory, Weekday, Zone};
pub use ids::{EmployeeId, SpeciesId};
pub use structs::{
    Assignments, Employee, OpeningHours, PersonalInfo, PriceList, Resident, Species,
};
