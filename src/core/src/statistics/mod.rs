mod scorers;

pub use scorers::*;
