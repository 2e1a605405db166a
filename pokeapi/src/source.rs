use crate::Error;
use crate::core::effectiveness::Relations;
use crate::core::pokemon::{self, Pokemon, Type};
use crate::core::species::Species;

/// The read-only data source behind every screen.
///
/// [`crate::Session`] talks to the live PokeAPI service; tests inject fakes.
#[allow(async_fn_in_trait)]
pub trait Source {
    /// Enumerates species names, in ascending id order.
    async fn species_names(&self, offset: u32, limit: u32) -> Result<Vec<String>, Error>;

    async fn pokemon(&self, id: pokemon::Id) -> Result<Pokemon, Error>;

    async fn species(&self, id: pokemon::Id) -> Result<Species, Error>;

    /// Fetches the double-damage chart of a single elemental type.
    async fn relations(&self, type_: Type) -> Result<Relations, Error>;
}

/// Network reachability, polled once per view activation.
#[allow(async_fn_in_trait)]
pub trait Network {
    async fn is_reachable(&self) -> bool;
}
