//! Queries over the residents of a single enclosure.
//!
//! These operate on resident slices so they can serve both direct callers
//! and the zone census in [`crate::animal_map`].

use menagerie_types::{Resident, Sex};

/// Whether every resident is strictly older than `age`.
///
/// An empty enclosure satisfies any age bar.
pub fn all_older_than(residents: &[Resident], age: u32) -> bool {
    residents.iter().all(|resident| resident.age > age)
}

/// The oldest resident, or `None` for an empty enclosure.
///
/// Ties go to the animal that arrived first.
pub fn oldest(residents: &[Resident]) -> Option<&Resident> {
    let mut best: Option<&Resident> = None;
    for candidate in residents {
        if best.is_none_or(|current| candidate.age > current.age) {
            best = Some(candidate);
        }
    }
    best
}

/// Resident names, optionally restricted to one sex and optionally sorted.
///
/// Without `sorted`, names keep their arrival order.
pub fn names(residents: &[Resident], sex: Option<Sex>, sorted: bool) -> Vec<String> {
    let mut names: Vec<String> = residents
        .iter()
        .filter(|resident| sex.is_none_or(|wanted| resident.sex == wanted))
        .map(|resident| resident.name.clone())
        .collect();
    if sorted {
        names.sort();
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_residents() -> Vec<Resident> {
        vec![
            Resident {
                name: "Bruno".to_string(),
                age: 4,
                sex: Sex::Male,
            },
            Resident {
                name: "Edda".to_string(),
                age: 11,
                sex: Sex::Female,
            },
            Resident {
                name: "Mihail".to_string(),
                age: 12,
                sex: Sex::Male,
            },
        ]
    }

    #[test]
    fn all_older_than_requires_strictly_greater_ages() {
        let residents = make_residents();
        assert!(all_older_than(&residents, 3));
        // Bruno is exactly 4, which does not clear a bar of 4.
        assert!(!all_older_than(&residents, 4));
        assert!(!all_older_than(&residents, 11));
    }

    #[test]
    fn all_older_than_is_vacuously_true_for_empty_enclosure() {
        assert!(all_older_than(&[], 99));
    }

    #[test]
    fn oldest_picks_highest_age() {
        let residents = make_residents();
        assert_eq!(oldest(&residents).map(|r| r.name.as_str()), Some("Mihail"));
    }

    #[test]
    fn oldest_tie_goes_to_earlier_arrival() {
        let mut residents = make_residents();
        residents.push(Resident {
            name: "Second Twelve".to_string(),
            age: 12,
            sex: Sex::Female,
        });
        assert_eq!(oldest(&residents).map(|r| r.name.as_str()), Some("Mihail"));
    }

    #[test]
    fn oldest_of_empty_enclosure_is_none() {
        assert!(oldest(&[]).is_none());
    }

    #[test]
    fn names_keep_arrival_order_by_default() {
        let residents = make_residents();
        assert_eq!(names(&residents, None, false), ["Bruno", "Edda", "Mihail"]);
    }

    #[test]
    fn names_sort_alphabetically_when_asked() {
        let mut residents = make_residents();
        residents.reverse();
        assert_eq!(names(&residents, None, true), ["Bruno", "Edda", "Mihail"]);
    }

    #[test]
    fn names_filter_by_sex() {
        let residents = make_residents();
        assert_eq!(names(&residents, Some(Sex::Female), false), ["Edda"]);
        assert_eq!(
            names(&residents, Some(Sex::Male), true),
            ["Bruno", "Mihail"]
        );
    }

    #[test]
    fn names_of_fully_filtered_enclosure_are_empty() {
        let residents = vec![Resident {
            name: "Shira".to_string(),
            age: 19,
            sex: Sex::Female,
        }];
        assert!(names(&residents, Some(Sex::Male), false).is_empty());
    }
}
