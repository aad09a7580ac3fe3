use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumCount, EnumIter, EnumString};

/// The fifteen elemental types of the first generation, in chart order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// Cells are read as [move type][defending type]. The table keeps the legacy
// orientation of the cartridge data it was lifted from, so some cells read
// against the usual chart (Water into Grass is 2.0, Electric into Ground 2.0).
#[rustfmt::skip]
const TYPE_CHART: [[f32; PokemonType::COUNT]; PokemonType::COUNT] = [
    // Normal
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0],
    // Fire
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 2.0, 1.0, 1.0],
    // Water
    [1.0, 0.5, 0.5, 2.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    // Electric
    [1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0],
    // Grass
    [1.0, 2.0, 0.5, 0.5, 0.5, 2.0, 1.0, 2.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0],
    // Ice
    [1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0],
    // Fighting
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 0.5, 1.0, 1.0],
    // Poison
    [1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 0.5, 0.5, 2.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0],
    // Ground
    [1.0, 1.0, 2.0, 0.0, 2.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0],
    // Flying
    [1.0, 1.0, 1.0, 2.0, 0.5, 2.0, 0.5, 1.0, 0.0, 1.0, 1.0, 0.5, 2.0, 1.0, 1.0],
    // Psychic
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 0.0, 1.0],
    // Bug
    [1.0, 2.0, 1.0, 1.0, 0.5, 1.0, 0.5, 2.0, 0.5, 2.0, 1.0, 1.0, 2.0, 1.0, 1.0],
    // Rock
    [0.5, 0.5, 2.0, 1.0, 2.0, 1.0, 2.0, 0.5, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0],
    // Ghost
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Dragon
    [1.0, 0.5, 0.5, 0.5, 0.5, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0],
];

impl PokemonType {
    /// Position of this type along both axes of the chart.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chart cell for a move of type `attacking` landing on a single `defending` type.
    /// Returns one of 0.0, 0.5, 1.0 or 2.0.
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f32 {
        TYPE_CHART[attacking.index()][defending.index()]
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::type_effectiveness(attacking, defending) == 0.0
    }
}

/// Major status conditions. Only one can be held at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum StatusCondition {
    Sleep,
    Freeze,
    Paralyze,
    Burn,
    Poison,
}

impl StatusCondition {
    /// Sleep and Freeze: the conditions that leave the target unable to act.
    pub fn is_incapacitating(self) -> bool {
        matches!(self, StatusCondition::Sleep | StatusCondition::Freeze)
    }

    /// Paralyze, Burn and Poison.
    pub fn is_lingering(self) -> bool {
        matches!(
            self,
            StatusCondition::Paralyze | StatusCondition::Burn | StatusCondition::Poison
        )
    }
}

impl fmt::Display for StatusCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The five statistics tracked by a first-generation Pokemon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Statistic {
    #[strum(serialize = "HP")]
    Hp,
    Attack,
    Defense,
    Speed,
    Special,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn chart_cells_are_known_multipliers() {
        for attacking in PokemonType::iter() {
            for defending in PokemonType::iter() {
                let cell = PokemonType::type_effectiveness(attacking, defending);
                assert!([0.0, 0.5, 1.0, 2.0].contains(&cell), "{attacking} vs {defending}");
            }
        }
    }

    #[test]
    fn chart_keeps_legacy_orientation() {
        use PokemonType::*;
        assert_eq!(PokemonType::type_effectiveness(Water, Water), 0.5);
        assert_eq!(PokemonType::type_effectiveness(Water, Grass), 2.0);
        assert!(PokemonType::is_immune(Normal, Ghost));
        assert!(PokemonType::is_immune(Ghost, Normal));
    }

    #[test]
    fn statistic_parses_catalog_names() {
        assert_eq!("HP".parse::<Statistic>(), Ok(Statistic::Hp));
        assert_eq!("special".parse::<Statistic>(), Ok(Statistic::Special));
    }
}
