use crate::pokemon::{self, Id};

use serde::{Deserialize, Serialize};

const ARTWORK_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// A single home-screen entry of the Pokémon catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Id,
    pub name: String,
    pub artwork: String,
}

/// Builds catalog entries from the species enumeration, in order.
///
/// Ids are assigned as a 1-based sequential index, regardless of any gaps
/// in the source's own numbering.
pub fn from_names(names: impl IntoIterator<Item = String>) -> Vec<Entry> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let id = Id(i as u32 + 1);

            Entry {
                id,
                name: pokemon::capitalize(&name),
                artwork: artwork_url(id),
            }
        })
        .collect()
}

pub fn artwork_url(id: Id) -> String {
    format!("{ARTWORK_URL}/{id}.png", id = id.0)
}
