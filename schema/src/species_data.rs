use crate::{Move, PokemonType, Statistic};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Species available in the catalog. Catalog keys are the upper-case names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Species {
    Bulbasaur,
    Charmander,
    Squirtle,
    Caterpie,
    Weedle,
    Pidgey,
    Rattata,
    Spearow,
    Ekans,
    Pikachu,
    Sandshrew,
    Clefairy,
    Jigglypuff,
    Zubat,
    Oddish,
    Diglett,
    Mankey,
    Abra,
    Machop,
    Geodude,
    Gastly,
    Onix,
    Magikarp,
    Eevee,
    Snorlax,
    Dratini,
    Mewtwo,
}

impl Species {
    pub fn name(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special: u16,
    pub speed: u16,
}

impl BaseStats {
    pub fn get(&self, stat: Statistic) -> u16 {
        match stat {
            Statistic::Hp => self.hp,
            Statistic::Attack => self.attack,
            Statistic::Defense => self.defense,
            Statistic::Speed => self.speed,
            Statistic::Special => self.special,
        }
    }
}

/// Experience curve a species levels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GrowthRate {
    Fast,
    MediumSlow,
    Slow,
    #[default]
    MediumFast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedMove {
    pub level: u8,
    pub move_: Move,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Learnset {
    /// Level-up moves, ordered by ascending level.
    pub natural: Vec<LearnedMove>,
    #[serde(default)]
    pub tm: Vec<Move>,
    #[serde(default)]
    pub hm: Vec<Move>,
}

impl Learnset {
    /// Natural moves learned exactly at `level`.
    pub fn learns_at_level(&self, level: u8) -> impl Iterator<Item = Move> + '_ {
        self.natural
            .iter()
            .filter(move |entry| entry.level == level)
            .map(|entry| entry.move_)
    }

    pub fn can_learn(&self, move_: Move) -> bool {
        self.natural.iter().any(|entry| entry.move_ == move_)
            || self.tm.contains(&move_)
            || self.hm.contains(&move_)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub species: Species,
    pub pokedex_number: u16,
    pub types: Vec<PokemonType>,
    pub base_stats: BaseStats,
    pub catch_rate: u8,
    pub growth_rate: GrowthRate,
    pub learnset: Learnset,
}
