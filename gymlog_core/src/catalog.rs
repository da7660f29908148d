//! Default catalog of exercises per body part.
//!
//! This module provides the built-in exercise lists for the system.

use crate::types::BodyPart;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Read-only mapping from body part to its ordered exercise list
///
/// The order of each list is the display/selection order; menu indices are
/// 1-based positions into it.
#[derive(Clone, Debug)]
pub struct ExerciseCatalog {
    exercises: HashMap<BodyPart, Vec<String>>,
}

impl ExerciseCatalog {
    /// Exercises for a body part, in menu order
    pub fn exercises(&self, part: BodyPart) -> &[String] {
        self.exercises.get(&part).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exercise name for a 1-based menu index, if in range
    pub fn exercise_at(&self, part: BodyPart, index: usize) -> Option<&str> {
        let list = self.exercises(part);
        (1..=list.len())
            .contains(&index)
            .then(|| list[index - 1].as_str())
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for part in BodyPart::ALL {
            let list = self.exercises(part);
            if list.is_empty() {
                errors.push(format!("Body part '{}' has no exercises", part));
            }
            for name in list {
                if name.trim().is_empty() {
                    errors.push(format!("Body part '{}' has an empty exercise name", part));
                }
                // The daily log format never escapes field values
                if name.contains(',') {
                    errors.push(format!(
                        "Exercise name '{}' contains a comma and would corrupt the log",
                        name
                    ));
                }
            }
        }

        errors
    }
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in exercise lists
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> ExerciseCatalog {
    let mut exercises = HashMap::new();

    exercises.insert(
        BodyPart::Chest,
        to_names(&[
            "Incline Smith Press",
            "Close Grip Flat Press",
            "Wide Grip Flat Press",
            "Decline Chest Press",
            "Pec Deck Fly",
            "High-To-Low Cable Fly",
            "Mid Cable Fly",
            "Low-To-High Cable Fly",
            "Bench Press",
            "Incline Machine Press",
        ]),
    );

    exercises.insert(
        BodyPart::Back,
        to_names(&[
            "Lat Pull Down",
            "Lat Pull Over",
            "Seated Lat Pull Over",
            "Chest Supported Row",
            "Chest Supported T-Bar Row",
            "Rear Delts Fly",
            "Face Pulls",
            "Hyper-extensions",
            "Single Cable Lat Pull Over",
            "Barbell Row",
            "Cable Rows",
        ]),
    );

    exercises.insert(
        BodyPart::Arms,
        to_names(&[
            "Bicep Curl (Free Weights)",
            "Hammer Curls (Free Weights)",
            "Bicep Curl (Cables)",
            "Bicep Curls (Machine)",
            "Hammer Curls (Cable)",
            "Tricep Pushdown (Machine)",
            "Tricep Pushdown (Rope)",
            "Tricep Pushdown (V-Bar)",
            "Tricep Pushdown (Easy Bar)",
            "Tricep Pushdown (Straight Bar)",
            "Single Tricep Pushdown",
            "Straight Bar Cable Curl",
            "Uni-Lateral Cable Curl",
            "Wrist Curls",
        ]),
    );

    exercises.insert(
        BodyPart::Shoulders,
        to_names(&[
            "Lateral Raises (Free Weights)",
            "Cable Lateral Raise",
            "Machine Lateral Raise",
            "Shoulder Press Machine",
            "Rear Delt Machine",
            "Cable Rear Delt",
        ]),
    );

    exercises.insert(
        BodyPart::Legs,
        to_names(&[
            "Leg Press",
            "Hack Squat",
            "Bulgarian Split Squat",
            "Leg Extension",
            "Hamstring Curl Machine",
            "Hamstring Curl (Free Weights)",
            "Abductors",
            "Standing Calf Raise",
            "Seated Calf Raise",
            "RDL's",
        ]),
    );

    ExerciseCatalog { exercises }
}

fn to_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.exercises(BodyPart::Chest).len(), 10);
        assert_eq!(catalog.exercises(BodyPart::Back).len(), 11);
        assert_eq!(catalog.exercises(BodyPart::Arms).len(), 14);
        assert_eq!(catalog.exercises(BodyPart::Shoulders).len(), 6);
        assert_eq!(catalog.exercises(BodyPart::Legs).len(), 10);
    }

    #[test]
    fn test_every_body_part_covered() {
        let catalog = build_default_catalog();
        for part in BodyPart::ALL {
            assert!(
                !catalog.exercises(part).is_empty(),
                "No exercises for {}",
                part
            );
        }
    }

    #[test]
    fn test_menu_index_lookup() {
        let catalog = build_default_catalog();
        assert_eq!(
            catalog.exercise_at(BodyPart::Chest, 1),
            Some("Incline Smith Press")
        );
        assert_eq!(catalog.exercise_at(BodyPart::Shoulders, 6), Some("Cable Rear Delt"));
        assert_eq!(catalog.exercise_at(BodyPart::Shoulders, 7), None);
        assert_eq!(catalog.exercise_at(BodyPart::Chest, 0), None);
    }

    #[test]
    fn test_default_catalog_validates() {
        let errors = build_default_catalog().validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_cached_catalog_matches_built() {
        let built = build_default_catalog();
        let cached = get_default_catalog();
        for part in BodyPart::ALL {
            assert_eq!(built.exercises(part), cached.exercises(part));
        }
    }
}
