use crate::battle::stats::experience_gained;
use crate::catalog::Catalog;
use crate::errors::{BattleResult, SpeciesDataResult};
use crate::player::Battler;
use crate::pokemon::{MAX_LEVEL, PokemonInst};
use schema::{Move, Species, Statistic};
use strum::IntoEnumIterator;

/// One level gained, with the natural moves that came with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u8,
    /// Moves put into a free slot.
    pub learned: Vec<Move>,
    /// Moves that found every slot taken; the caller decides what to forget.
    pub pending: Vec<Move>,
}

/// Rewards handed out for one defeated opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryReward {
    pub experience: u32,
    pub level_ups: Vec<LevelUp>,
}

/// Add `amount` experience and level up for as long as the threshold is met.
pub fn gain_experience(
    catalog: &Catalog,
    pokemon: &mut PokemonInst,
    amount: u32,
) -> BattleResult<Vec<LevelUp>> {
    pokemon.gain_raw_experience(amount);

    let mut level_ups = Vec::new();
    while pokemon.level() < MAX_LEVEL && pokemon.experience().current >= pokemon.experience().next
    {
        pokemon.advance_level();
        let level = pokemon.level();

        let mut learned = Vec::new();
        let mut pending = Vec::new();
        let new_moves: Vec<Move> = catalog
            .species(pokemon.species)?
            .learnset
            .learns_at_level(level)
            .collect();
        for move_ in new_moves {
            if pokemon.learn_move(catalog, move_)? {
                learned.push(move_);
            } else if !pokemon.knows(move_) {
                pending.push(move_);
            }
        }

        tracing::debug!(species = %pokemon.species, level, ?learned, ?pending, "level up");
        level_ups.push(LevelUp {
            level,
            learned,
            pending,
        });
    }
    Ok(level_ups)
}

/// Add the base stats of the defeated species to every EV.
pub fn gain_effort_from(
    catalog: &Catalog,
    pokemon: &mut PokemonInst,
    defeated: Species,
) -> SpeciesDataResult<()> {
    let base_stats = catalog.species(defeated)?.base_stats;
    pokemon.add_effort_values(Statistic::iter().map(|stat| (stat, base_stats.get(stat))));
    Ok(())
}

/// Reward `player`'s active Pokemon for knocking out `opponent`'s.
pub fn award_victory(
    catalog: &Catalog,
    player: &mut Battler,
    opponent: &Battler,
) -> BattleResult<VictoryReward> {
    let experience = experience_gained(player, opponent)?;
    let defeated = opponent.require_active()?.species;

    let winner = player.require_active_mut()?;
    gain_effort_from(catalog, winner, defeated)?;
    let level_ups = gain_experience(catalog, winner, experience)?;

    Ok(VictoryReward {
        experience,
        level_ups,
    })
}
