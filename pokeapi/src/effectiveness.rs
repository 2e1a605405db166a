pub use crate::core::effectiveness::*;

use crate::Error;
use crate::core::pokemon::Type;
use crate::source::Source;

use futures_util::future;

/// Resolves the merged weaknesses and strengths of a Pokémon from its
/// elemental types.
///
/// The per-type fetches run concurrently. A partial chart would be
/// misleading, so if any of them fails the whole resolution fails with
/// [`Error::DataUnavailable`].
pub async fn resolve<S: Source>(source: &S, types: &[Type]) -> Result<Effectiveness, Error> {
    let relations = future::try_join_all(types.iter().map(|type_| source.relations(*type_)))
        .await
        .map_err(|error| {
            log::warn!("Damage relations fetch failed: {error}");

            Error::DataUnavailable
        })?;

    Ok(Effectiveness::merge(relations))
}
