//! Enumeration types for the Menagerie registry.
//!
//! Covers animal attributes ([`Sex`], [`Zone`]), the visiting calendar
//! ([`Weekday`]) and ticketing ([`TicketCategory`]).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

/// Recorded sex of an individual animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Female animal.
    Female,
    /// Male animal.
    Male,
}

// ---------------------------------------------------------------------------
// Zone
// ---------------------------------------------------------------------------

/// Geographic quadrant of the park where a species is housed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// North-east quadrant.
    Northeast,
    /// North-west quadrant.
    Northwest,
    /// South-east quadrant.
    Southeast,
    /// South-west quadrant.
    Southwest,
}

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Day of the visiting week.
///
/// Ordering starts at [`Weekday::Monday`], so maps keyed by weekday iterate
/// in calendar order rather than alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// All seven days in calendar order, for iterating a full week.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];
}

// ---------------------------------------------------------------------------
// Ticket category
// ---------------------------------------------------------------------------

/// Admission ticket category, priced per visitor group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    /// Standard adult admission.
    Adult,
    /// Reduced admission for children.
    Child,
    /// Reduced admission for seniors.
    Senior,
}

impl TicketCategory {
    /// All ticket categories, for iterating a full price board.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Senior];
}
