//! The animal census grouped by park zone.
//!
//! Builds the two shapes of zone report: species names per zone, or the
//! resident names of every species per zone with optional sex filtering
//! and sorting.

use std::collections::BTreeMap;

use menagerie_types::{Sex, Species, Zone};
use serde::{Deserialize, Serialize};

use crate::residents;

/// Options controlling the shape of an [`AnimalMap`].
///
/// The default census lists species names only. `sorted` and `sex` take
/// effect only when `include_names` is set, matching the report the
/// front gate prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimalMapOptions {
    /// List individual resident names instead of species names.
    pub include_names: bool,
    /// Sort resident names alphabetically within each species.
    pub sorted: bool,
    /// Keep only residents of this sex.
    pub sex: Option<Sex>,
}

/// A zone census, shaped by the options it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalMap {
    /// The species names housed in each zone.
    SpeciesNames(BTreeMap<Zone, Vec<String>>),
    /// Per zone, a `(species name, resident names)` pair for each species.
    ResidentNames(BTreeMap<Zone, Vec<(String, Vec<String>)>>),
}

/// Group species names by the zone housing them.
///
/// Zones with no species are absent from the result; within a zone,
/// species keep their registration order.
pub fn species_names_by_zone(species: &[Species]) -> BTreeMap<Zone, Vec<String>> {
    let mut zones: BTreeMap<Zone, Vec<String>> = BTreeMap::new();
    for record in species {
        zones.entry(record.zone).or_default().push(record.name.clone());
    }
    zones
}

/// Group resident names by zone, one `(species, names)` pair per species.
///
/// A species whose residents are all filtered out keeps its pair with an
/// empty name list, so the census still shows the enclosure.
pub fn resident_names_by_zone(
    species: &[Species],
    sorted: bool,
    sex: Option<Sex>,
) -> BTreeMap<Zone, Vec<(String, Vec<String>)>> {
    let mut zones: BTreeMap<Zone, Vec<(String, Vec<String>)>> = BTreeMap::new();
    for record in species {
        let names = residents::names(&record.residents, sex, sorted);
        zones
            .entry(record.zone)
            .or_default()
            .push((record.name.clone(), names));
    }
    zones
}

/// Build the census shape selected by `options`.
pub fn build(species: &[Species], options: AnimalMapOptions) -> AnimalMap {
    if options.include_names {
        AnimalMap::ResidentNames(resident_names_by_zone(species, options.sorted, options.sex))
    } else {
        AnimalMap::SpeciesNames(species_names_by_zone(species))
    }
}

#[cfg(test)]
mod tests {
    use menagerie_types::{Resident, SpeciesId};

    use super::*;

    fn resident(name: &str, age: u32, sex: Sex) -> Resident {
        Resident {
            name: name.to_string(),
            age,
            sex,
        }
    }

    fn make_species() -> Vec<Species> {
        vec![
            Species {
                id: SpeciesId::new(),
                name: "lion".to_string(),
                zone: Zone::Northeast,
                residents: vec![
                    resident("Zola", 12, Sex::Female),
                    resident("Mufaro", 15, Sex::Male),
                ],
            },
            Species {
                id: SpeciesId::new(),
                name: "giraffe".to_string(),
                zone: Zone::Northeast,
                residents: vec![
                    resident("Naledi", 11, Sex::Female),
                    resident("Bakari", 8, Sex::Male),
                    resident("Amara", 10, Sex::Female),
                ],
            },
            Species {
                id: SpeciesId::new(),
                name: "tiger".to_string(),
                zone: Zone::Northwest,
                residents: vec![
                    resident("Shira", 19, Sex::Female),
                    resident("Esha", 17, Sex::Female),
                ],
            },
        ]
    }

    #[test]
    fn default_census_lists_species_per_zone() {
        let species = make_species();
        let expected = AnimalMap::SpeciesNames(BTreeMap::from([
            (
                Zone::Northeast,
                vec!["lion".to_string(), "giraffe".to_string()],
            ),
            (Zone::Northwest, vec!["tiger".to_string()]),
        ]));
        assert_eq!(build(&species, AnimalMapOptions::default()), expected);
    }

    #[test]
    fn zones_without_species_are_omitted() {
        let species = make_species();
        let zones = species_names_by_zone(&species);
        assert!(!zones.contains_key(&Zone::Southeast));
        assert!(!zones.contains_key(&Zone::Southwest));
        assert_eq!(zones.len(), 2);
    }

    #[test]
    fn include_names_lists_residents_per_species() {
        let species = make_species();
        let zones = resident_names_by_zone(&species, false, None);
        let northeast = zones.get(&Zone::Northeast).cloned().unwrap_or_default();
        assert_eq!(
            northeast,
            [
                (
                    "lion".to_string(),
                    vec!["Zola".to_string(), "Mufaro".to_string()]
                ),
                (
                    "giraffe".to_string(),
                    vec![
                        "Naledi".to_string(),
                        "Bakari".to_string(),
                        "Amara".to_string()
                    ]
                ),
            ]
        );
    }

    #[test]
    fn sorted_census_orders_names_within_each_species() {
        let species = make_species();
        let zones = resident_names_by_zone(&species, true, None);
        let northeast = zones.get(&Zone::Northeast).cloned().unwrap_or_default();
        assert_eq!(
            northeast.iter().map(|(_, names)| names.clone()).collect::<Vec<_>>(),
            [
                vec!["Mufaro".to_string(), "Zola".to_string()],
                vec![
                    "Amara".to_string(),
                    "Bakari".to_string(),
                    "Naledi".to_string()
                ],
            ]
        );
    }

    #[test]
    fn sex_filter_keeps_species_with_no_matches() {
        let species = make_species();
        let zones = resident_names_by_zone(&species, false, Some(Sex::Male));
        // Every tiger is female, but the enclosure still shows up.
        let northwest = zones.get(&Zone::Northwest).cloned().unwrap_or_default();
        assert_eq!(northwest, [("tiger".to_string(), Vec::new())]);
    }

    #[test]
    fn sex_and_sorted_are_ignored_without_include_names() {
        let species = make_species();
        let options = AnimalMapOptions {
            include_names: false,
            sorted: true,
            sex: Some(Sex::Female),
        };
        assert_eq!(build(&species, options), build(&species, AnimalMapOptions::default()));
    }
}
