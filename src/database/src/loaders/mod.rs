mod entities;
mod snapshot;

pub use entities::*;
pub use snapshot::*;
