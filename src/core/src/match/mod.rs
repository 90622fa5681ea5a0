mod goals;
mod knockout_match;
mod status;

pub use goals::*;
pub use knockout_match::*;
pub use status::*;
