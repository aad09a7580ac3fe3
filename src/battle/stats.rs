use crate::catalog::Catalog;
use crate::errors::{BattleResult, MoveDataResult};
use crate::player::Battler;
use crate::pokemon::PokemonInst;
use crate::rng::RandomSource;
use schema::{Move, MoveCategory, MoveData, PokemonType, Power, Statistic};
use std::cmp::Ordering;

const CRITICAL_DENOMINATOR: f64 = 512.0;
const CRITICAL_FLOOR: f64 = 255.0 / 256.0;
const STAB_MULTIPLIER: f64 = 1.5;
const BASE_EXPERIENCE_YIELD: f64 = 64.0;

/// Result of a damage roll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub damage: f64,
    pub critical: bool,
}

/// Decide whether `pokemon` gets away from `enemy` on attempt number `attempts`.
///
/// `f = (speed * 32) / ((enemy_speed / 4) % 256) + 30 * attempts`, and the
/// escape succeeds outright when the divisor is zero or `f > 255`.
pub fn can_escape<R: RandomSource>(
    pokemon: &PokemonInst,
    enemy: &PokemonInst,
    attempts: u32,
    rng: &mut R,
) -> bool {
    let a = f64::from(pokemon.stat(Statistic::Speed));
    let b = (f64::from(enemy.stat(Statistic::Speed)) / 4.0) % 256.0;
    if b == 0.0 {
        return true;
    }

    let f = (a * 32.0) / b + 30.0 * f64::from(attempts);
    tracing::trace!(a, b, f, "escape odds");
    if f > 255.0 {
        return true;
    }
    f64::from(rng.int(256)) < f
}

/// Order two actions: move priority first, then the active Pokemon's speed.
/// `Ordering::Equal` is a speed tie the caller has to break.
pub fn turn_order(
    catalog: &Catalog,
    player: &Battler,
    player_move: Move,
    opponent: &Battler,
    opponent_move: Move,
) -> BattleResult<Ordering> {
    let player_priority = catalog.move_data(player_move)?.priority;
    let opponent_priority = catalog.move_data(opponent_move)?.priority;
    let player_speed = player.require_active()?.stat(Statistic::Speed);
    let opponent_speed = opponent.require_active()?.stat(Statistic::Speed);

    Ok(player_priority
        .cmp(&opponent_priority)
        .then(player_speed.cmp(&opponent_speed)))
}

/// True when the player's move goes first. Speed ties report false.
pub fn moves_first(
    catalog: &Catalog,
    player: &Battler,
    player_move: Move,
    opponent: &Battler,
    opponent_move: Move,
) -> BattleResult<bool> {
    Ok(turn_order(catalog, player, player_move, opponent, opponent_move)? == Ordering::Greater)
}

/// Probability of a critical hit before the draw.
pub fn critical_hit_chance(move_data: &MoveData, attacker: &PokemonInst) -> f64 {
    let mut denominator = CRITICAL_DENOMINATOR;
    if move_data.high_critical {
        denominator /= 8.0;
    }
    if attacker.focused {
        denominator /= 4.0;
    }
    let base_speed = attacker.base_stats().speed as f64;
    (base_speed / denominator).max(CRITICAL_FLOOR)
}

pub fn critical_hit<R: RandomSource>(
    catalog: &Catalog,
    move_: Move,
    attacker: &PokemonInst,
    rng: &mut R,
) -> MoveDataResult<bool> {
    let move_data = catalog.move_data(move_)?;
    let chance = critical_hit_chance(move_data, attacker);
    Ok(rng.boolean_with_probability(chance))
}

/// Chart multiplier of `move_type` against every type in `defender_types`.
pub fn effectiveness_against(move_type: PokemonType, defender_types: &[PokemonType]) -> f64 {
    defender_types
        .iter()
        .map(|&defending| PokemonType::type_effectiveness(move_type, defending) as f64)
        .product()
}

pub fn type_effectiveness_of(
    catalog: &Catalog,
    move_: Move,
    defender: &PokemonInst,
) -> MoveDataResult<f64> {
    let move_data = catalog.move_data(move_)?;
    Ok(effectiveness_against(move_data.move_type, &defender.types))
}

/// STAB, type effectiveness and the 85-100% random spread.
pub fn damage_modifier<R: RandomSource>(
    move_data: &MoveData,
    attacker: &PokemonInst,
    defender: &PokemonInst,
    rng: &mut R,
) -> f64 {
    let stab = if attacker.has_type(move_data.move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    };
    let effectiveness = effectiveness_against(move_data.move_type, &defender.types);
    stab * effectiveness * rng.within_float(0.85, 1.0)
}

/// Damage `attacker` deals to `defender` with `move_`.
///
/// Moves without a numeric power deal 0 and one-hit knockout moves deal
/// infinite damage; neither draws from `rng`. A non-critical hit drops the
/// level term of the formula to zero.
pub fn damage<R: RandomSource>(
    catalog: &Catalog,
    move_: Move,
    attacker: &PokemonInst,
    defender: &PokemonInst,
    rng: &mut R,
) -> MoveDataResult<Hit> {
    let move_data = catalog.move_data(move_)?;
    let power = match move_data.power {
        Power::Absent => {
            return Ok(Hit {
                damage: 0.0,
                critical: false,
            });
        }
        Power::Infinite => {
            return Ok(Hit {
                damage: f64::INFINITY,
                critical: false,
            });
        }
        Power::Base(power) => power as f64,
    };

    let (attack, defense) = match move_data.category {
        MoveCategory::Physical => (
            attacker.stat(Statistic::Attack),
            defender.stat(Statistic::Defense),
        ),
        MoveCategory::Special => (
            attacker.stat(Statistic::Special),
            defender.stat(Statistic::Special),
        ),
        MoveCategory::NonDamaging => {
            return Ok(Hit {
                damage: 0.0,
                critical: false,
            });
        }
    };

    let critical = rng.boolean_with_probability(critical_hit_chance(move_data, attacker));
    let level = if critical { attacker.level() as f64 } else { 0.0 };
    let ratio = f64::from(attack) / f64::from(defense.max(1));

    let numeric = (((2.0 * level + 10.0) / 250.0) * ratio * power + 2.0).floor()
        * damage_modifier(move_data, attacker, defender, rng);
    let damage = numeric.max(1.0).round();

    tracing::debug!(?move_, critical, damage, "damage rolled");
    Ok(Hit { damage, critical })
}

/// Experience `player`'s active Pokemon earns for defeating `opponent`'s.
pub fn experience_gained(player: &Battler, opponent: &Battler) -> BattleResult<u32> {
    let winner = player.require_active()?;
    let defeated = opponent.require_active()?;

    let a = if opponent.is_wild() { 1.0 } else { 1.5 };
    let t = if winner.traded { 1.5 } else { 1.0 };
    let b = BASE_EXPERIENCE_YIELD;
    let lf = defeated.level() as f64;
    let s = 1.0_f64;

    let gained = (a * t * b * lf).floor() / (7.0 * s).floor();
    Ok(gained.floor() as u32)
}
