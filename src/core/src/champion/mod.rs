mod builder;
mod champion;

pub use builder::*;
pub use champion::*;
