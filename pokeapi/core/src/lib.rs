pub mod catalog;
pub mod effectiveness;
pub mod pokemon;
pub mod species;

pub use catalog::Entry;
pub use effectiveness::{Effectiveness, Relations};
pub use pokemon::{Pokemon, Stat, Type};
pub use species::Species;
