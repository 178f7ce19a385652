//! A fully-populated sample zoo for demos and tests.
//!
//! Seeds nine species across the four park zones, an eight-person staff
//! roster with two senior keepers, a full week of visiting hours, and the
//! admission price board.

use menagerie_types::{
    Employee, EmployeeId, OpeningHours, Resident, Sex, Species, SpeciesId, TicketCategory,
    Weekday, Zone,
};
use rust_decimal::Decimal;

use crate::error::RegistryError;
use crate::store::Zoo;

/// Helper to build a [`Resident`].
fn resident(name: &str, age: u32, sex: Sex) -> Resident {
    Resident {
        name: name.to_string(),
        age,
        sex,
    }
}

/// Helper to build a [`Species`].
fn species(id: SpeciesId, name: &str, zone: Zone, residents: Vec<Resident>) -> Species {
    Species {
        id,
        name: name.to_string(),
        zone,
        residents,
    }
}

/// Identifiers for every sample record, returned alongside the registry so
/// that callers can reference specific species and staff in queries.
#[derive(Debug, Clone)]
pub struct SampleIds {
    // --- Species ---
    /// Lions: four residents in the north-east quadrant.
    pub lion: SpeciesId,
    /// Giraffes: six residents in the north-east quadrant.
    pub giraffe: SpeciesId,
    /// Tigers: two residents in the north-west quadrant.
    pub tiger: SpeciesId,
    /// Bears: three residents in the north-west quadrant.
    pub bear: SpeciesId,
    /// Elephants: four residents in the north-west quadrant.
    pub elephant: SpeciesId,
    /// Penguins: three residents in the south-east quadrant.
    pub penguin: SpeciesId,
    /// Otters: four residents in the south-east quadrant.
    pub otter: SpeciesId,
    /// Frogs: three residents in the south-west quadrant.
    pub frog: SpeciesId,
    /// Snakes: two residents in the south-west quadrant.
    pub snake: SpeciesId,

    // --- Staff ---
    /// Berit Holm, senior keeper. Manages half the roster.
    pub berit: EmployeeId,
    /// Oskar Reyes, senior keeper. Manages the other half.
    pub oskar: EmployeeId,
    /// Nadia Farah, keeper of the big cats.
    pub nadia: EmployeeId,
    /// Tomas Vieira, keeper of the bears.
    pub tomas: EmployeeId,
    /// Ingrid Weiss, keeper of the penguins.
    pub ingrid: EmployeeId,
    /// Jonas Petrov, keeper of the otters and frogs.
    pub jonas: EmployeeId,
    /// Clara Ueda, second keeper on the giraffes.
    pub clara: EmployeeId,
    /// Milo Santos, second keeper on the elephants and snakes.
    pub milo: EmployeeId,
}

/// Build the sample zoo.
///
/// Registration order matters to the queries that report in it: species
/// are added zone by zone, and the two senior keepers join the roster
/// before the staff who report to them.
#[allow(clippy::too_many_lines)]
pub fn create_sample_zoo() -> Result<(Zoo, SampleIds), RegistryError> {
    let mut zoo = Zoo::new();

    // Generate all record IDs up front.
    let ids = SampleIds {
        lion: SpeciesId::new(),
        giraffe: SpeciesId::new(),
        tiger: SpeciesId::new(),
        bear: SpeciesId::new(),
        elephant: SpeciesId::new(),
        penguin: SpeciesId::new(),
        otter: SpeciesId::new(),
        frog: SpeciesId::new(),
        snake: SpeciesId::new(),
        berit: EmployeeId::new(),
        oskar: EmployeeId::new(),
        nadia: EmployeeId::new(),
        tomas: EmployeeId::new(),
        ingrid: EmployeeId::new(),
        jonas: EmployeeId::new(),
        clara: EmployeeId::new(),
        milo: EmployeeId::new(),
    };

    // ---------------------------------------------------------------
    // Species: north-east quadrant
    // ---------------------------------------------------------------

    zoo.add_species(species(
        ids.lion,
        "lion",
        Zone::Northeast,
        vec![
            resident("Zola", 12, Sex::Female),
            resident("Mufaro", 15, Sex::Male),
            resident("Kiden", 7, Sex::Female),
            resident("Tau", 7, Sex::Male),
        ],
    ))?;

    zoo.add_species(species(
        ids.giraffe,
        "giraffe",
        Zone::Northeast,
        vec![
            resident("Amara", 10, Sex::Female),
            resident("Bakari", 8, Sex::Male),
            resident("Vusi", 4, Sex::Male),
            resident("Naledi", 11, Sex::Female),
            resident("Thandi", 6, Sex::Female),
            resident("Kwame", 11, Sex::Male),
        ],
    ))?;

    // ---------------------------------------------------------------
    // Species: north-west quadrant
    // ---------------------------------------------------------------

    zoo.add_species(species(
        ids.tiger,
        "tiger",
        Zone::Northwest,
        vec![
            resident("Shira", 19, Sex::Female),
            resident("Esha", 17, Sex::Female),
        ],
    ))?;

    zoo.add_species(species(
        ids.bear,
        "bear",
        Zone::Northwest,
        vec![
            resident("Bruno", 4, Sex::Male),
            resident("Edda", 11, Sex::Female),
            resident("Mihail", 12, Sex::Male),
        ],
    ))?;

    zoo.add_species(species(
        ids.elephant,
        "elephant",
        Zone::Northwest,
        vec![
            resident("Indira", 23, Sex::Female),
            resident("Raj", 15, Sex::Male),
            resident("Bibi", 13, Sex::Female),
            resident("Temba", 4, Sex::Male),
        ],
    ))?;

    // ---------------------------------------------------------------
    // Species: south-east quadrant
    // ---------------------------------------------------------------

    zoo.add_species(species(
        ids.penguin,
        "penguin",
        Zone::Southeast,
        vec![
            resident("Pippin", 10, Sex::Male),
            resident("Tux", 5, Sex::Male),
            resident("Kerstin", 2, Sex::Female),
        ],
    ))?;

    zoo.add_species(species(
        ids.otter,
        "otter",
        Zone::Southeast,
        vec![
            resident("Nevio", 9, Sex::Male),
            resident("Lucia", 8, Sex::Female),
            resident("Mara", 9, Sex::Female),
            resident("Splash", 3, Sex::Male),
        ],
    ))?;

    // ---------------------------------------------------------------
    // Species: south-west quadrant
    // ---------------------------------------------------------------

    zoo.add_species(species(
        ids.frog,
        "frog",
        Zone::Southwest,
        vec![
            resident("Anke", 2, Sex::Female),
            resident("Tilly", 3, Sex::Female),
            resident("Dargo", 13, Sex::Male),
        ],
    ))?;

    zoo.add_species(species(
        ids.snake,
        "snake",
        Zone::Southwest,
        vec![
            resident("Pauline", 5, Sex::Female),
            resident("Bo", 10, Sex::Male),
        ],
    ))?;

    // ---------------------------------------------------------------
    // Staff roster
    // ---------------------------------------------------------------

    // Senior keepers first; everyone else reports to one or both of them.
    zoo.add_employee(
        Employee::new(ids.berit, "Berit".to_string(), "Holm".to_string())
            .with_responsible_for(vec![ids.elephant]),
    )?;
    zoo.add_employee(
        Employee::new(ids.oskar, "Oskar".to_string(), "Reyes".to_string())
            .with_responsible_for(vec![ids.giraffe, ids.snake]),
    )?;
    zoo.add_employee(
        Employee::new(ids.nadia, "Nadia".to_string(), "Farah".to_string())
            .with_managers(vec![ids.berit, ids.oskar])
            .with_responsible_for(vec![ids.lion, ids.tiger]),
    )?;
    zoo.add_employee(
        Employee::new(ids.tomas, "Tomas".to_string(), "Vieira".to_string())
            .with_managers(vec![ids.berit])
            .with_responsible_for(vec![ids.bear]),
    )?;
    zoo.add_employee(
        Employee::new(ids.ingrid, "Ingrid".to_string(), "Weiss".to_string())
            .with_managers(vec![ids.oskar])
            .with_responsible_for(vec![ids.penguin]),
    )?;
    zoo.add_employee(
        Employee::new(ids.jonas, "Jonas".to_string(), "Petrov".to_string())
            .with_managers(vec![ids.berit, ids.oskar])
            .with_responsible_for(vec![ids.otter, ids.frog]),
    )?;
    zoo.add_employee(
        Employee::new(ids.clara, "Clara".to_string(), "Ueda".to_string())
            .with_managers(vec![ids.oskar])
            .with_responsible_for(vec![ids.giraffe]),
    )?;
    zoo.add_employee(
        Employee::new(ids.milo, "Milo".to_string(), "Santos".to_string())
            .with_managers(vec![ids.berit])
            .with_responsible_for(vec![ids.elephant, ids.snake]),
    )?;

    // ---------------------------------------------------------------
    // Visiting hours
    // ---------------------------------------------------------------

    // Monday is the weekly maintenance day.
    zoo.set_hours(Weekday::Monday, OpeningHours::new(0, 0));
    zoo.set_hours(Weekday::Tuesday, OpeningHours::new(8, 18));
    zoo.set_hours(Weekday::Wednesday, OpeningHours::new(8, 18));
    zoo.set_hours(Weekday::Thursday, OpeningHours::new(10, 20));
    zoo.set_hours(Weekday::Friday, OpeningHours::new(10, 22));
    zoo.set_hours(Weekday::Saturday, OpeningHours::new(8, 22));
    zoo.set_hours(Weekday::Sunday, OpeningHours::new(8, 16));

    // ---------------------------------------------------------------
    // Admission prices
    // ---------------------------------------------------------------

    zoo.set_price(TicketCategory::Adult, Decimal::new(4958, 2))?; // 49.58
    zoo.set_price(TicketCategory::Child, Decimal::new(2095, 2))?; // 20.95
    zoo.set_price(TicketCategory::Senior, Decimal::new(2480, 2))?; // 24.80

    Ok((zoo, ids))
}
