use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::trace;
use uuid::Uuid;

use super::plant::PowerPlant;
use super::snapshot::HouseholdSnapshot;

/// A household: a consumer node with links to power plants and to other
/// households.
///
/// Plant links are stored on the household only. Household links are meant to
/// be symmetric and are produced that way by [`World`]; a one-sided link made
/// directly through [`Household::connect_to_household`] is structurally legal
/// and the electricity query treats it as ordinary one-way adjacency.
///
/// [`World`]: crate::world::World
#[derive(Clone)]
pub struct Household {
    id: Uuid,
    links: Arc<RwLock<Links>>,
}

#[derive(Default)]
struct Links {
    plants: Vec<PowerPlant>,
    households: Vec<PeerLink>,
}

/// Edge to a neighbouring household. Weak on both sides so a ring of
/// households does not keep itself alive once the caller drops its handles.
struct PeerLink {
    id: Uuid,
    links: Weak<RwLock<Links>>,
}

impl PeerLink {
    fn upgrade(&self) -> Option<Household> {
        self.links.upgrade().map(|links| Household {
            id: self.id,
            links,
        })
    }
}

impl Household {
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            links: Arc::new(RwLock::new(Links::default())),
        }
    }

    /// Stable identity of this household; clones share it.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Add a plant link. Re-adding an already connected plant is a no-op.
    pub fn connect_to_power_plant(&self, plant: &PowerPlant) {
        let mut links = self.links.write();
        if links.plants.iter().any(|p| p.id() == plant.id()) {
            return;
        }
        links.plants.push(plant.clone());
        trace!(household = %self.id, plant = %plant.id(), "plant link added");
    }

    /// Remove a plant link. Removing an absent plant is a no-op.
    pub fn disconnect_from_power_plant(&self, plant: &PowerPlant) {
        self.links.write().plants.retain(|p| p.id() != plant.id());
    }

    /// Add a one-way link to `other`. The [`World`] façade calls this on both
    /// endpoints to make the edge symmetric; re-adding is a no-op.
    ///
    /// [`World`]: crate::world::World
    pub fn connect_to_household(&self, other: &Household) {
        let mut links = self.links.write();
        if links.households.iter().any(|p| p.id == other.id) {
            return;
        }
        links.households.push(PeerLink {
            id: other.id,
            links: Arc::downgrade(&other.links),
        });
        trace!(household = %self.id, neighbour = %other.id, "household link added");
    }

    /// Remove this side's link to `other`, if present.
    pub fn disconnect_from_household(&self, other: &Household) {
        self.links.write().households.retain(|p| p.id != other.id);
    }

    pub fn connected_plant_count(&self) -> usize {
        self.links.read().plants.len()
    }

    pub fn connected_household_count(&self) -> usize {
        self.links.read().households.len()
    }

    /// Whether any directly connected plant is currently producing.
    pub fn has_live_plant(&self) -> bool {
        self.links.read().plants.iter().any(PowerPlant::is_alive)
    }

    /// Whether this household is currently supplied with electricity, either
    /// from a directly connected plant or through a chain of linked
    /// households.
    ///
    /// Depth-first search over the household graph; plants terminate a branch
    /// in one hop. The visited set is shared across the whole query and each
    /// household is marked before its neighbours are explored, so a revisit
    /// contributes no new supply path and the traversal is bounded by the
    /// number of households on any topology, cycles included.
    pub fn has_electricity(&self) -> bool {
        let mut visited = HashSet::new();
        let powered = self.search_live_plant(&mut visited);
        trace!(
            household = %self.id,
            powered,
            visited = visited.len(),
            "electricity query"
        );
        powered
    }

    fn search_live_plant(&self, visited: &mut HashSet<Uuid>) -> bool {
        if !visited.insert(self.id) {
            return false;
        }
        if self.has_live_plant() {
            return true;
        }

        // Take the neighbour handles out before descending; no lock is held
        // while the search re-enters a cycle.
        let neighbours: Vec<Household> = {
            let links = self.links.read();
            links.households.iter().filter_map(PeerLink::upgrade).collect()
        };

        let mut powered = false;
        for neighbour in neighbours {
            // A household with no onward links of its own cannot relay power.
            if neighbour.connected_household_count() == 0 {
                continue;
            }
            powered |= neighbour.search_live_plant(visited);
        }
        powered
    }

    /// Point-in-time view of this household's links.
    pub fn snapshot(&self) -> HouseholdSnapshot {
        let links = self.links.read();
        HouseholdSnapshot::new(
            self.id,
            links.plants.iter().map(PowerPlant::snapshot).collect(),
            links.households.iter().map(|p| p.id).collect(),
        )
    }
}

impl PartialEq for Household {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Household {}

impl fmt::Debug for Household {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Household")
            .field("id", &self.id)
            .field("plants", &self.connected_plant_count())
            .field("households", &self.connected_household_count())
            .finish()
    }
}
