pub mod catalog;
pub mod effectiveness;
pub mod error;
pub mod pokemon;
pub mod session;
pub mod source;
pub mod store;

pub use pokeapi_core as core;

pub use crate::core::species::{self, Species};

pub use catalog::Catalog;
pub use effectiveness::Effectiveness;
pub use error::Error;
pub use pokemon::{Artwork, Pokemon};
pub use session::Session;
pub use source::{Network, Source};
pub use store::Store;
