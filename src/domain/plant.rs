use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::snapshot::PlantSnapshot;

/// A power plant: a producer node with a binary availability flag.
///
/// Handles are cheap to clone and share the same underlying state, so a
/// plant killed through one handle reads as dead through every other.
#[derive(Clone)]
pub struct PowerPlant {
    id: Uuid,
    alive: Arc<RwLock<bool>>,
}

impl PowerPlant {
    pub(crate) fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            alive: Arc::new(RwLock::new(true)),
        }
    }

    /// Stable identity of this plant; clones share it.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether the plant is currently producing.
    pub fn is_alive(&self) -> bool {
        *self.alive.read()
    }

    /// Take the plant offline. Idempotent.
    pub fn kill(&self) {
        *self.alive.write() = false;
        debug!(plant = %self.id, "power plant taken offline");
    }

    /// Bring the plant back online. Idempotent.
    pub fn repair(&self) {
        *self.alive.write() = true;
        debug!(plant = %self.id, "power plant back online");
    }

    /// Point-in-time view of this plant.
    pub fn snapshot(&self) -> PlantSnapshot {
        PlantSnapshot {
            id: self.id,
            alive: self.is_alive(),
        }
    }
}

impl PartialEq for PowerPlant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PowerPlant {}

impl fmt::Debug for PowerPlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerPlant")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}
