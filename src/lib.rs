//! # Power Network Connectivity
//!
//! Models a small network of power plants and households and answers one
//! question about it: does a given household currently receive electricity?
//!
//! ## Components
//!
//! - **PowerPlant**: producer node with a binary availability flag
//! - **Household**: consumer node linked to plants and to other households
//! - **World**: stateless factory/façade that builds entities and keeps
//!   household links symmetric
//!
//! Electricity is boolean. A household is supplied when it is connected to a
//! live plant directly or through a chain of linked households; the query is
//! a cycle-safe depth-first search seeded at the queried household.
//!
//! ## Usage
//!
//! ```rust
//! use powernet::World;
//!
//! let world = World::new();
//! let plant = world.create_power_plant();
//! let near = world.create_household();
//! let far = world.create_household();
//!
//! world.connect_household_to_power_plant(&near, &plant);
//! world.connect_household_to_household(&near, &far);
//! assert!(world.household_has_electricity(&far));
//!
//! world.kill_power_plant(&plant);
//! assert!(!world.household_has_electricity(&far));
//! ```

pub mod domain;
pub mod world;

pub use domain::{Household, HouseholdSnapshot, PlantSnapshot, PowerPlant};
pub use world::World;
