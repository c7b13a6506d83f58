//! Factory and delegation façade over [`PowerPlant`] and [`Household`].

use crate::domain::{Household, PowerPlant};

/// Stateless entry point for building and mutating a power network.
///
/// `World` owns nothing: every entity it creates is handed back to the
/// caller, and every operation delegates to the entity itself. The one piece
/// of coordination it adds is keeping household links symmetric by mutating
/// both endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct World;

impl World {
    pub fn new() -> Self {
        Self
    }

    /// Create a plant, online by default.
    pub fn create_power_plant(&self) -> PowerPlant {
        PowerPlant::new()
    }

    /// Create a household with no links.
    pub fn create_household(&self) -> Household {
        Household::new()
    }

    pub fn connect_household_to_power_plant(&self, household: &Household, plant: &PowerPlant) {
        household.connect_to_power_plant(plant);
    }

    pub fn disconnect_household_from_power_plant(&self, household: &Household, plant: &PowerPlant) {
        household.disconnect_from_power_plant(plant);
    }

    /// Link two households. Both endpoints record the edge.
    pub fn connect_household_to_household(&self, first: &Household, second: &Household) {
        first.connect_to_household(second);
        second.connect_to_household(first);
    }

    /// Unlink two households. Both endpoints drop the edge.
    pub fn disconnect_household_from_household(&self, first: &Household, second: &Household) {
        first.disconnect_from_household(second);
        second.disconnect_from_household(first);
    }

    pub fn kill_power_plant(&self, plant: &PowerPlant) {
        plant.kill();
    }

    pub fn repair_power_plant(&self, plant: &PowerPlant) {
        plant.repair();
    }

    /// Whether `household` currently receives power from any reachable live
    /// plant. Every call runs a fresh traversal over the current topology.
    pub fn household_has_electricity(&self, household: &Household) -> bool {
        household.has_electricity()
    }
}
