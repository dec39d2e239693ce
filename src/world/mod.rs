pub mod discovery;
pub mod engine;
pub mod events;
pub mod grid;

pub use discovery::Discovery;
pub use engine::{MapObserver, MapService, MoveOutcome, ObserverId};
pub use events::EventLedger;
pub use grid::Grid;
