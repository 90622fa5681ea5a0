mod builder;
mod stage;

pub use builder::*;
pub use stage::*;
