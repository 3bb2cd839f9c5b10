//! Factory functions for generating mock catalog database models.
//!
//! Provides pure functions for creating person and planet database models with
//! standard test values. These are in-memory model instances that don't require
//! database interaction, suitable for unit tests.

use crate::model::{PersonModel, PlanetModel};

/// Create a mock person database model for testing.
///
/// Returns a PersonModel with placeholder values derived from the given id. The
/// name embeds the id so multiple mock people satisfy the unique name constraint.
///
/// # Arguments
/// - `person_id` - The person id to use
///
/// # Returns
/// - `PersonModel` - A person model with test data
pub fn mock_person_model(person_id: i32) -> PersonModel {
    PersonModel {
        id: person_id,
        name: format!("Test Person {person_id}"),
        birth_year: Some("19BBY".to_string()),
        gender: Some("male".to_string()),
        eye_color: Some("blue".to_string()),
    }
}

/// Create a mock planet database model for testing.
///
/// Returns a PlanetModel with placeholder values derived from the given id. The
/// name embeds the id so multiple mock planets satisfy the unique name constraint.
///
/// # Arguments
/// - `planet_id` - The planet id to use
///
/// # Returns
/// - `PlanetModel` - A planet model with test data
pub fn mock_planet_model(planet_id: i32) -> PlanetModel {
    PlanetModel {
        id: planet_id,
        name: format!("Test Planet {planet_id}"),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some(200_000),
    }
}
