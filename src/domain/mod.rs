pub mod household;
pub mod plant;
pub mod snapshot;

pub use household::*;
pub use plant::*;
pub use snapshot::*;
