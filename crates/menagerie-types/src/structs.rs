//! Core record structs for the Menagerie registry.
//!
//! Covers the animal side ([`Resident`], [`Species`]), the staff roster
//! ([`Employee`] and its construction halves) and the visiting side
//! ([`OpeningHours`], [`PriceList`]).

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{Sex, TicketCategory, Zone};
use crate::ids::{EmployeeId, SpeciesId};

// ---------------------------------------------------------------------------
// Resident
// ---------------------------------------------------------------------------

/// An individual animal living in an enclosure.
///
/// Residents are owned by their [`Species`] record and have no id of their
/// own; within one species, names are the handle keepers use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    /// Given name of the animal.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    /// Recorded sex.
    pub sex: Sex,
}

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// A species kept in the zoo, together with every animal of that species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    /// Unique id of the species record.
    pub id: SpeciesId,
    /// Common name, e.g. "lion". Name lookups match it exactly.
    pub name: String,
    /// Quadrant of the park where the enclosure sits.
    pub zone: Zone,
    /// Animals of this species, in arrival order.
    pub residents: Vec<Resident>,
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// A member of staff on the zoo roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique id of the employee record.
    pub id: EmployeeId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Ids of the staff members this employee reports to.
    pub managers: Vec<EmployeeId>,
    /// Species under this employee's care, primary assignment first.
    pub responsible_for: Vec<SpeciesId>,
}

impl Employee {
    /// Create an employee with no managers and no species assignments.
    pub const fn new(id: EmployeeId, first_name: String, last_name: String) -> Self {
        Self {
            id,
            first_name,
            last_name,
            managers: Vec::new(),
            responsible_for: Vec::new(),
        }
    }

    /// Replace the manager list, builder style.
    #[must_use]
    pub fn with_managers(mut self, managers: Vec<EmployeeId>) -> Self {
        self.managers = managers;
        self
    }

    /// Replace the species assignments, builder style.
    #[must_use]
    pub fn with_responsible_for(mut self, responsible_for: Vec<SpeciesId>) -> Self {
        self.responsible_for = responsible_for;
        self
    }

    /// Assemble an employee from its two construction halves.
    pub fn from_parts(personal: PersonalInfo, assignments: Assignments) -> Self {
        Self {
            id: personal.id,
            first_name: personal.first_name,
            last_name: personal.last_name,
            managers: assignments.managers,
            responsible_for: assignments.responsible_for,
        }
    }

    /// First and last name joined with a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ---------------------------------------------------------------------------
// Employee construction halves
// ---------------------------------------------------------------------------

/// Identity half of an employee record: who the person is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Unique id the new record will carry.
    pub id: EmployeeId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
}

/// Organisational half of an employee record: where the person fits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignments {
    /// Ids of the staff members the employee reports to.
    pub managers: Vec<EmployeeId>,
    /// Species placed under the employee's care, primary first.
    pub responsible_for: Vec<SpeciesId>,
}

// ---------------------------------------------------------------------------
// Opening hours
// ---------------------------------------------------------------------------

/// Opening and closing hour for one day of the week.
///
/// Hours are whole hours on a 24-hour clock. An hour of `0` at either end
/// marks the day as closed to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Hour the gates open, 0-23.
    pub open: u32,
    /// Hour the gates close, 0-23.
    pub close: u32,
}

impl OpeningHours {
    /// Build an opening-hours pair.
    pub const fn new(open: u32, close: u32) -> Self {
        Self { open, close }
    }

    /// Whether the day is closed to visitors (either hour is `0`).
    pub const fn is_closed(self) -> bool {
        self.open == 0 || self.close == 0
    }
}

// ---------------------------------------------------------------------------
// Price list
// ---------------------------------------------------------------------------

/// The admission price board, one [`Decimal`] price per posted category.
///
/// This is plain storage: validating prices (e.g. rejecting negatives)
/// happens in the registry operations that mutate the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceList {
    prices: BTreeMap<TicketCategory, Decimal>,
}

impl PriceList {
    /// Create an empty price board with no categories posted.
    pub const fn new() -> Self {
        Self {
            prices: BTreeMap::new(),
        }
    }

    /// The posted price for a category, if one has been set.
    pub fn get(&self, category: TicketCategory) -> Option<Decimal> {
        self.prices.get(&category).copied()
    }

    /// Post or replace the price for a category.
    pub fn set(&mut self, category: TicketCategory, price: Decimal) {
        self.prices.insert(category, price);
    }

    /// All posted `(category, price)` pairs in category order.
    pub fn entries(&self) -> impl Iterator<Item = (TicketCategory, Decimal)> {
        self.prices.iter().map(|(category, price)| (*category, *price))
    }
}

impl Default for PriceList {
    fn default() -> Self {
        Self::new()
    }
}
