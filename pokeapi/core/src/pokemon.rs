use serde::{Deserialize, Serialize};

use std::fmt;

/// A Pokémon detail record, as shown on a detail view.
///
/// Height and weight keep the PokeAPI units (decimeters and hectograms);
/// use the accessors for human-friendly values.
#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub id: Id,
    pub name: String,
    pub types: Vec<Type>,
    pub artwork: String,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<Stat>,
}

impl Pokemon {
    pub fn height_meters(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kilograms(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub u32);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>3}", self.0)
    }
}

/// One of the 18 elemental types, plus a fallback for anything
/// the API may add later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Type {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
    Unknown,
}

impl Type {
    pub fn parse(name: &str) -> Self {
        match name {
            "normal" => Self::Normal,
            "fighting" => Self::Fighting,
            "flying" => Self::Flying,
            "poison" => Self::Poison,
            "ground" => Self::Ground,
            "rock" => Self::Rock,
            "bug" => Self::Bug,
            "ghost" => Self::Ghost,
            "steel" => Self::Steel,
            "fire" => Self::Fire,
            "water" => Self::Water,
            "grass" => Self::Grass,
            "electric" => Self::Electric,
            "psychic" => Self::Psychic,
            "ice" => Self::Ice,
            "dragon" => Self::Dragon,
            "dark" => Self::Dark,
            "fairy" => Self::Fairy,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fighting => "fighting",
            Self::Flying => "flying",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Rock => "rock",
            Self::Bug => "bug",
            Self::Ghost => "ghost",
            Self::Steel => "steel",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Electric => "electric",
            Self::Psychic => "psychic",
            Self::Ice => "ice",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Fairy => "fairy",
            Self::Unknown => "unknown",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fighting => "Fighting",
            Self::Flying => "Flying",
            Self::Poison => "Poison",
            Self::Ground => "Ground",
            Self::Rock => "Rock",
            Self::Bug => "Bug",
            Self::Ghost => "Ghost",
            Self::Steel => "Steel",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Grass => "Grass",
            Self::Electric => "Electric",
            Self::Psychic => "Psychic",
            Self::Ice => "Ice",
            Self::Dragon => "Dragon",
            Self::Dark => "Dark",
            Self::Fairy => "Fairy",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub base: u32,
}

impl Stat {
    /// Rough ceiling for base stats, used to scale bars on a detail view.
    pub const MAX_BASE: u32 = 180;

    pub fn label(&self) -> String {
        match self.name.as_str() {
            "hp" => "HP".to_owned(),
            "attack" => "ATK".to_owned(),
            "defense" => "DEF".to_owned(),
            "special-attack" => "SATK".to_owned(),
            "special-defense" => "SDEF".to_owned(),
            "speed" => "SPD".to_owned(),
            _ => self.name.to_uppercase(),
        }
    }
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
