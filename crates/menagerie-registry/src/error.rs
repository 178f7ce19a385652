//! Error types for the `menagerie-registry` crate.
//!
//! All fallible operations in this crate return [`RegistryError`] through
//! the standard [`Result`] type alias.

use menagerie_types::{EmployeeId, SpeciesId, TicketCategory, Weekday};
use rust_decimal::Decimal;

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A species id was not found in the registry.
    #[error("species not found: {0}")]
    SpeciesNotFound(SpeciesId),

    /// No species carries the given name.
    #[error("no species named {0:?}")]
    SpeciesNameNotFound(String),

    /// An employee id was not found on the roster.
    #[error("employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// No employee matches the given first or last name.
    #[error("no employee named {0:?}")]
    EmployeeNameNotFound(String),

    /// A species with this id is already registered.
    #[error("duplicate species id: {0}")]
    DuplicateSpecies(SpeciesId),

    /// An employee with this id is already on the roster.
    #[error("duplicate employee id: {0}")]
    DuplicateEmployee(EmployeeId),

    /// The employee has no species under their care.
    #[error("employee {0} has no species assigned")]
    NoSpeciesAssigned(EmployeeId),

    /// The species enclosure is empty.
    #[error("species {0} has no residents")]
    NoResidents(SpeciesId),

    /// No opening hours have been posted for the given day.
    #[error("no opening hours posted for {0:?}")]
    HoursNotPosted(Weekday),

    /// No price has been posted for the given ticket category.
    #[error("no price posted for {0:?} tickets")]
    PriceNotPosted(TicketCategory),

    /// A price update would post a negative amount.
    #[error("negative price {price} for {category:?} tickets")]
    NegativePrice {
        /// The ticket category being priced.
        category: TicketCategory,
        /// The offending amount.
        price: Decimal,
    },

    /// A price adjustment below -100 percent would turn prices negative.
    #[error("price adjustment of {0} percent is out of range")]
    PercentageOutOfRange(Decimal),

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in price calculation")]
    ArithmeticOverflow,
}
