pub mod event;
pub mod loader;
pub mod location;

pub use event::{EventKind, LocationEvent};
pub use loader::MapCatalog;
pub use location::{Exits, Location, LocationKind};
