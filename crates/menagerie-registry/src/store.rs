//! The zoo registry: species, staff, hours, and admission prices.
//!
//! The [`Zoo`] is the single container behind every query in this crate.
//! It stores [`Species`] and [`Employee`] records in registration order
//! and keeps the weekly [`OpeningHours`] and the admission [`PriceList`]
//! alongside them.

use std::collections::BTreeMap;

use menagerie_types::{
    Employee, EmployeeId, OpeningHours, PriceList, Resident, Species, SpeciesId, TicketCategory,
    Weekday,
};
use rust_decimal::Decimal;

use crate::admissions;
use crate::animal_map::{self, AnimalMap, AnimalMapOptions};
use crate::error::RegistryError;
use crate::residents;
use crate::schedule;

/// How to pick out one employee for a coverage report.
#[derive(Debug, Clone, Copy)]
pub enum EmployeeKey<'a> {
    /// Look the employee up by id.
    Id(EmployeeId),
    /// Look the employee up by exact first or last name.
    Name(&'a str),
}

/// The registry holding all zoo records.
///
/// Provides the animal, staffing, schedule, and admission queries the
/// reporting layer is built from. Records keep the order they were
/// registered in.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Zoo {
    /// All species, in registration order.
    species: Vec<Species>,
    /// All staff, in hiring order.
    employees: Vec<Employee>,
    /// Posted opening hours per weekday.
    hours: BTreeMap<Weekday, OpeningHours>,
    /// The admission price board.
    prices: PriceList,
}

impl Zoo {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            species: Vec::new(),
            employees: Vec::new(),
            hours: BTreeMap::new(),
            prices: PriceList::new(),
        }
    }

    // -------------------------------------------------------------------
    // Species operations
    // -------------------------------------------------------------------

    /// Register a species.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSpecies`] if a species with the
    /// same id is already registered.
    pub fn add_species(&mut self, species: Species) -> Result<(), RegistryError> {
        if self.species.iter().any(|record| record.id == species.id) {
            return Err(RegistryError::DuplicateSpecies(species.id));
        }
        self.species.push(species);
        Ok(())
    }

    /// Get a species by id.
    pub fn species_by_id(&self, id: SpeciesId) -> Option<&Species> {
        self.species.iter().find(|record| record.id == id)
    }

    /// Get a species by its exact common name.
    pub fn species_by_name(&self, name: &str) -> Option<&Species> {
        self.species.iter().find(|record| record.name == name)
    }

    /// All species whose id appears in `ids`, in registration order.
    ///
    /// Unknown ids are skipped, and asking for an id twice does not repeat
    /// the record. An empty `ids` yields an empty list.
    pub fn species_by_ids(&self, ids: &[SpeciesId]) -> Vec<&Species> {
        self.species
            .iter()
            .filter(|record| ids.contains(&record.id))
            .collect()
    }

    /// Return the number of registered species.
    pub const fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Iterate over all species in registration order.
    pub fn species(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    /// Whether every resident of the named species is strictly older
    /// than `age`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SpeciesNameNotFound`] if no species
    /// carries `name`.
    pub fn all_residents_older_than(&self, name: &str, age: u32) -> Result<bool, RegistryError> {
        let species = self
            .species_by_name(name)
            .ok_or_else(|| RegistryError::SpeciesNameNotFound(name.to_string()))?;
        Ok(residents::all_older_than(&species.residents, age))
    }

    /// Resident head-count per species, keyed by species name.
    pub fn count_animals(&self) -> BTreeMap<String, usize> {
        self.species
            .iter()
            .map(|record| (record.name.clone(), record.residents.len()))
            .collect()
    }

    /// Resident head-count of one species.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SpeciesNameNotFound`] if no species
    /// carries `name`.
    pub fn count_animals_of(&self, name: &str) -> Result<usize, RegistryError> {
        let species = self
            .species_by_name(name)
            .ok_or_else(|| RegistryError::SpeciesNameNotFound(name.to_string()))?;
        Ok(species.residents.len())
    }

    /// Build the zone census in the shape selected by `options`.
    pub fn animal_map(&self, options: AnimalMapOptions) -> AnimalMap {
        animal_map::build(&self.species, options)
    }

    // -------------------------------------------------------------------
    // Employee operations
    // -------------------------------------------------------------------

    /// Add an employee to the roster.
    ///
    /// Every species in the employee's care must already be registered.
    /// Manager ids are not checked, so mutually-managing seniors can be
    /// added in either order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateEmployee`] if the id is already
    /// on the roster, or [`RegistryError::SpeciesNotFound`] if an assigned
    /// species is missing.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), RegistryError> {
        if self.employees.iter().any(|record| record.id == employee.id) {
            return Err(RegistryError::DuplicateEmployee(employee.id));
        }
        for &species_id in &employee.responsible_for {
            if self.species_by_id(species_id).is_none() {
                return Err(RegistryError::SpeciesNotFound(species_id));
            }
        }
        tracing::debug!(
            employee = %employee.id,
            name = %employee.full_name(),
            species = employee.responsible_for.len(),
            "Employee joined the roster"
        );
        self.employees.push(employee);
        Ok(())
    }

    /// Get an employee by id.
    pub fn employee_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|record| record.id == id)
    }

    /// Get the first employee whose first or last name is exactly `name`.
    ///
    /// An empty `name` matches nobody.
    pub fn employee_by_name(&self, name: &str) -> Option<&Employee> {
        if name.is_empty() {
            return None;
        }
        self.employees
            .iter()
            .find(|record| record.first_name == name || record.last_name == name)
    }

    /// Return the number of employees on the roster.
    pub const fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Iterate over all employees in hiring order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Whether anyone on the roster reports to the given employee.
    pub fn is_manager(&self, id: EmployeeId) -> bool {
        self.employees
            .iter()
            .any(|record| record.managers.contains(&id))
    }

    /// The species names under each employee's care, keyed by the
    /// employee's full name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SpeciesNotFound`] if any assignment points
    /// at an unregistered species, which can only happen to a dataset that
    /// arrived through deserialization.
    pub fn employee_coverage(&self) -> Result<BTreeMap<String, Vec<String>>, RegistryError> {
        let mut coverage = BTreeMap::new();
        for employee in &self.employees {
            coverage.insert(employee.full_name(), self.species_names_for(employee)?);
        }
        Ok(coverage)
    }

    /// The coverage entry for a single employee, picked by id or name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmployeeNotFound`] or
    /// [`RegistryError::EmployeeNameNotFound`] if the key matches nobody,
    /// or [`RegistryError::SpeciesNotFound`] for a dangling assignment.
    pub fn employee_coverage_for(
        &self,
        key: EmployeeKey<'_>,
    ) -> Result<(String, Vec<String>), RegistryError> {
        let employee = match key {
            EmployeeKey::Id(id) => self
                .employee_by_id(id)
                .ok_or(RegistryError::EmployeeNotFound(id))?,
            EmployeeKey::Name(name) => self
                .employee_by_name(name)
                .ok_or_else(|| RegistryError::EmployeeNameNotFound(name.to_string()))?,
        };
        Ok((employee.full_name(), self.species_names_for(employee)?))
    }

    /// The oldest animal of the employee's primary species assignment.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmployeeNotFound`] for an unknown id,
    /// [`RegistryError::NoSpeciesAssigned`] if the employee cares for
    /// nothing, or [`RegistryError::NoResidents`] for an empty enclosure.
    pub fn oldest_from_first_species(&self, id: EmployeeId) -> Result<&Resident, RegistryError> {
        let employee = self
            .employee_by_id(id)
            .ok_or(RegistryError::EmployeeNotFound(id))?;
        let species_id = employee
            .responsible_for
            .first()
            .copied()
            .ok_or(RegistryError::NoSpeciesAssigned(id))?;
        let species = self
            .species_by_id(species_id)
            .ok_or(RegistryError::SpeciesNotFound(species_id))?;
        residents::oldest(&species.residents).ok_or(RegistryError::NoResidents(species.id))
    }

    fn species_names_for(&self, employee: &Employee) -> Result<Vec<String>, RegistryError> {
        employee
            .responsible_for
            .iter()
            .map(|&id| {
                self.species_by_id(id)
                    .map(|species| species.name.clone())
                    .ok_or(RegistryError::SpeciesNotFound(id))
            })
            .collect()
    }

    // -------------------------------------------------------------------
    // Schedule operations
    // -------------------------------------------------------------------

    /// Post the opening hours for one day, replacing any previous entry.
    pub fn set_hours(&mut self, day: Weekday, hours: OpeningHours) {
        self.hours.insert(day, hours);
    }

    /// The posted opening hours, keyed by weekday in calendar order.
    pub const fn hours(&self) -> &BTreeMap<Weekday, OpeningHours> {
        &self.hours
    }

    /// The visitor-facing schedule for every posted day.
    pub fn schedule(&self) -> BTreeMap<Weekday, String> {
        self.hours
            .iter()
            .map(|(&day, &hours)| (day, schedule::format_hours(hours)))
            .collect()
    }

    /// The visitor-facing schedule line for one day.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::HoursNotPosted`] if the day has no posted
    /// hours.
    pub fn schedule_for(&self, day: Weekday) -> Result<String, RegistryError> {
        self.hours
            .get(&day)
            .copied()
            .map(schedule::format_hours)
            .ok_or(RegistryError::HoursNotPosted(day))
    }

    // -------------------------------------------------------------------
    // Admission operations
    // -------------------------------------------------------------------

    /// Post the price for a ticket category, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NegativePrice`] if `price` is below zero.
    pub fn set_price(
        &mut self,
        category: TicketCategory,
        price: Decimal,
    ) -> Result<(), RegistryError> {
        if price < Decimal::ZERO {
            return Err(RegistryError::NegativePrice { category, price });
        }
        self.prices.set(category, price);
        Ok(())
    }

    /// The admission price board.
    pub const fn prices(&self) -> &PriceList {
        &self.prices
    }

    /// Total entry fee for a party of visitors.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PriceNotPosted`] if a category in the
    /// party has no posted price, or
    /// [`RegistryError::ArithmeticOverflow`] on overflow.
    pub fn calculate_entry(
        &self,
        party: &BTreeMap<TicketCategory, u32>,
    ) -> Result<Decimal, RegistryError> {
        admissions::calculate_entry(&self.prices, party)
    }

    /// Adjust every posted price by `percentage` and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PercentageOutOfRange`] for adjustments
    /// below `-100`, or [`RegistryError::ArithmeticOverflow`] on overflow.
    pub fn increase_prices(&mut self, percentage: Decimal) -> Result<&PriceList, RegistryError> {
        admissions::increase_prices(&mut self.prices, percentage)?;
        tracing::debug!(%percentage, "Adjusted all posted admission prices");
        Ok(&self.prices)
    }
}

impl Default for Zoo {
    fn default() -> Self {
        Self::new()
    }
}
