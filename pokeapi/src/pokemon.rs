pub use crate::core::pokemon::*;

use crate::source::Network;
use crate::{Error, Session};

use bytes::Bytes;
use std::fmt;

/// Official artwork of a Pokémon, downloaded on demand.
#[derive(Clone)]
pub struct Artwork {
    pub bytes: Bytes,
}

impl Artwork {
    pub async fn download(pokemon: &Pokemon, session: &Session) -> Result<Self, Error> {
        if pokemon.artwork.is_empty() {
            return Err(Error::DataUnavailable);
        }

        if !session.is_reachable().await {
            return Err(Error::NetworkUnavailable);
        }

        let bytes = session.download_artwork(&pokemon.artwork).await?;

        Ok(Self { bytes })
    }
}

impl fmt::Debug for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artwork")
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
