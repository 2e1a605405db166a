use crate::pokemon::Type;

use std::collections::BTreeSet;

/// The double-damage chart of a single elemental type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    pub double_damage_from: BTreeSet<Type>,
    pub double_damage_to: BTreeSet<Type>,
}

/// Merged weaknesses and strengths of a Pokémon, derived from the damage
/// relations of its 1-2 elemental types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effectiveness {
    pub weaknesses: BTreeSet<Type>,
    pub strengths: BTreeSet<Type>,
}

impl Effectiveness {
    /// Unions damage relations across types, deduplicating by type identity.
    ///
    /// A type that appears in the Pokémon's own type list is not excluded
    /// from the result; the raw relation data is kept as-is.
    pub fn merge(relations: impl IntoIterator<Item = Relations>) -> Self {
        let mut effectiveness = Self::default();

        for relations in relations {
            effectiveness.weaknesses.extend(relations.double_damage_from);
            effectiveness.strengths.extend(relations.double_damage_to);
        }

        effectiveness
    }
}
