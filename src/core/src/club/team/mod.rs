pub mod builder;
mod lineup;
mod team;

pub use builder::TeamBuilder;
pub use lineup::*;
pub use team::*;
