use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Point-in-time view of a single power plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantSnapshot {
    pub id: Uuid,
    pub alive: bool,
}

/// Point-in-time view of a household and its links.
///
/// Link lists are sorted by id so two snapshots of the same topology compare
/// and serialize identically regardless of connection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    pub id: Uuid,
    pub plants: Vec<PlantSnapshot>,
    pub households: Vec<Uuid>,
}

impl HouseholdSnapshot {
    pub(crate) fn new(id: Uuid, plants: Vec<PlantSnapshot>, households: Vec<Uuid>) -> Self {
        Self {
            id,
            plants: plants.into_iter().sorted_by_key(|p| p.id).collect(),
            households: households.into_iter().sorted().collect(),
        }
    }

    /// Number of directly connected plants currently producing.
    pub fn live_plant_count(&self) -> usize {
        self.plants.iter().filter(|p| p.alive).count()
    }

    /// Whether the household has no links at all.
    pub fn is_isolated(&self) -> bool {
        self.plants.is_empty() && self.households.is_empty()
    }
}

impl fmt::Display for HouseholdSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Household {{ plants: {} ({} live), households: {} }}",
            self.plants.len(),
            self.live_plant_count(),
            self.households.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant_snapshot(alive: bool) -> PlantSnapshot {
        PlantSnapshot {
            id: Uuid::new_v4(),
            alive,
        }
    }

    #[test]
    fn test_live_plant_count() {
        let snapshot = HouseholdSnapshot::new(
            Uuid::new_v4(),
            vec![plant_snapshot(true), plant_snapshot(false), plant_snapshot(true)],
            Vec::new(),
        );
        assert_eq!(snapshot.live_plant_count(), 2);
    }

    #[test]
    fn test_is_isolated() {
        let empty = HouseholdSnapshot::new(Uuid::new_v4(), Vec::new(), Vec::new());
        assert!(empty.is_isolated());

        let linked = HouseholdSnapshot::new(Uuid::new_v4(), Vec::new(), vec![Uuid::new_v4()]);
        assert!(!linked.is_isolated());
    }

    #[test]
    fn test_link_order_does_not_matter() {
        let id = Uuid::new_v4();
        let first = plant_snapshot(true);
        let second = plant_snapshot(false);
        let neighbour_a = Uuid::new_v4();
        let neighbour_b = Uuid::new_v4();

        let one = HouseholdSnapshot::new(id, vec![first, second], vec![neighbour_a, neighbour_b]);
        let other = HouseholdSnapshot::new(id, vec![second, first], vec![neighbour_b, neighbour_a]);

        assert_eq!(one, other);
    }

    #[test]
    fn test_display() {
        let snapshot = HouseholdSnapshot::new(
            Uuid::new_v4(),
            vec![plant_snapshot(true), plant_snapshot(false)],
            vec![Uuid::new_v4()],
        );
        assert_eq!(
            snapshot.to_string(),
            "Household { plants: 2 (1 live), households: 1 }"
        );
    }

    #[test]
    fn test_serialization() {
        let snapshot = HouseholdSnapshot::new(
            Uuid::new_v4(),
            vec![plant_snapshot(true)],
            vec![Uuid::new_v4()],
        );
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: HouseholdSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
