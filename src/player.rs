use crate::battle::stats::can_escape;
use crate::errors::{BattleResult, BattleStateError};
use crate::pokemon::PokemonInst;
use crate::rng::RandomSource;
use schema::TrainerCategory;
use serde::{Deserialize, Serialize};

pub const TEAM_SIZE: usize = 6;

/// One side of a battle: a wild Pokemon or a trainer with a team.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Battler {
    pub category: TrainerCategory,

    // The battler's full team of up to 6 Pokémon instances.
    pub team: [Option<PokemonInst>; TEAM_SIZE],

    // The index (0-5) of the Pokémon in `team` that is currently active.
    pub active_pokemon_index: usize,

    /// Turns off the status-move heuristic of the opponent AI.
    #[serde(default)]
    pub dumb: bool,

    #[serde(default)]
    pub escape_attempts: u32,
}

impl Battler {
    /// Create a new Battler
    pub fn new(category: TrainerCategory, team: Vec<PokemonInst>) -> Self {
        let mut team_array = [const { None }; TEAM_SIZE];
        for (slot, pokemon) in team_array.iter_mut().zip(team) {
            *slot = Some(pokemon);
        }

        Battler {
            category,
            team: team_array,
            active_pokemon_index: 0,
            dumb: false,
            escape_attempts: 0,
        }
    }

    /// A wild Pokemon fighting on its own.
    pub fn wild(pokemon: PokemonInst) -> Self {
        Self::new(TrainerCategory::Wild, vec![pokemon])
    }

    pub fn with_dumb(mut self, dumb: bool) -> Self {
        self.dumb = dumb;
        self
    }

    pub fn is_wild(&self) -> bool {
        self.category.is_wild()
    }

    /// Get the currently active Pokemon
    pub fn active_pokemon(&self) -> Option<&PokemonInst> {
        self.team
            .get(self.active_pokemon_index)
            .and_then(|slot| slot.as_ref())
    }

    /// Get the currently active Pokemon mutably
    pub fn active_pokemon_mut(&mut self) -> Option<&mut PokemonInst> {
        self.team
            .get_mut(self.active_pokemon_index)
            .and_then(|slot| slot.as_mut())
    }

    /// The active Pokemon, or an error when the slot is empty.
    pub fn require_active(&self) -> BattleResult<&PokemonInst> {
        Ok(self
            .active_pokemon()
            .ok_or(BattleStateError::NoActivePokemon)?)
    }

    pub fn require_active_mut(&mut self) -> BattleResult<&mut PokemonInst> {
        Ok(self
            .active_pokemon_mut()
            .ok_or(BattleStateError::NoActivePokemon)?)
    }

    /// Switch the active Pokemon
    pub fn switch_pokemon(&mut self, new_index: usize) -> BattleResult<()> {
        match self.team.get(new_index) {
            Some(Some(_)) => {
                self.active_pokemon_index = new_index;
                Ok(())
            }
            _ => Err(BattleStateError::NoActivePokemon.into()),
        }
    }

    /// True when every Pokemon on the team has fainted.
    pub fn is_defeated(&self) -> bool {
        self.team.iter().flatten().all(PokemonInst::is_fainted)
    }

    /// Try to run from `enemy`. Each call counts as one more attempt.
    pub fn attempt_escape<R: RandomSource>(
        &mut self,
        enemy: &PokemonInst,
        rng: &mut R,
    ) -> BattleResult<bool> {
        self.escape_attempts += 1;
        let attempts = self.escape_attempts;
        let escaped = can_escape(self.require_active()?, enemy, attempts, rng);
        tracing::debug!(attempts, escaped, "escape attempt");
        Ok(escaped)
    }
}
