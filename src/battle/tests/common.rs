use crate::catalog::Catalog;
use crate::errors::BattleResult;
use crate::player::Battler;
use crate::pokemon::{PokemonBuilder, PokemonInst, StatValues};
use crate::rng::ScriptedRandom;
use schema::{Move, Species, Statistic, StatusCondition, TrainerCategory};
use strum::IntoEnumIterator;

/// The embedded catalog. Panics if it fails to parse.
pub fn catalog() -> &'static Catalog {
    match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => panic!("Failed to load the embedded catalog: {}", err),
    }
}

/// A builder for creating test Pokemon instances with common defaults.
///
/// IVs default to 15 everywhere so stats never depend on a random roll.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new(Species::Pikachu, 25)
///     .with_moves(vec![Move::ThunderShock])
///     .with_status(StatusCondition::Paralyze)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    species: Species,
    level: u8,
    moves: Option<Vec<Move>>,
    status: Option<StatusCondition>,
    current_hp: Option<u16>,
    iv: u16,
    traded: bool,
    focused: bool,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a given species and level.
    pub fn new(species: Species, level: u8) -> Self {
        Self {
            species,
            level,
            moves: None,
            status: None,
            current_hp: None,
            iv: 15,
            traded: false,
            focused: false,
        }
    }

    /// Sets the moves for the test Pokemon.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets the status condition for the test Pokemon.
    pub fn with_status(mut self, status: StatusCondition) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the current HP for the test Pokemon. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Uses the same IV for every statistic.
    pub fn with_iv(mut self, iv: u16) -> Self {
        self.iv = iv;
        self
    }

    pub fn traded(mut self) -> Self {
        self.traded = true;
        self
    }

    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    /// Builds the `PokemonInst`.
    pub fn build(self) -> PokemonInst {
        let ivs: StatValues = Statistic::iter().map(|stat| (stat, self.iv)).collect();
        let mut builder = PokemonBuilder::new(self.species).level(self.level).ivs(ivs);
        if let Some(moves) = self.moves {
            builder = builder.moves(moves);
        }

        let mut rng = ScriptedRandom::new();
        let mut pokemon = match builder.build(catalog(), &mut rng) {
            Ok(pokemon) => pokemon,
            Err(err) => panic!("Failed to build {:?}: {}", self.species, err),
        };

        pokemon.status = self.status;
        pokemon.traded = self.traded;
        pokemon.focused = self.focused;
        if let Some(hp) = self.current_hp {
            let damage = pokemon.current_hp().saturating_sub(hp);
            pokemon.take_damage(damage);
        }

        pokemon
    }
}

/// Creates a trainer battler of `category` with a given team.
pub fn create_test_battler(category: TrainerCategory, team: Vec<PokemonInst>) -> Battler {
    Battler::new(category, team)
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
