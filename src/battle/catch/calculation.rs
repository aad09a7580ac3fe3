use crate::catalog::Catalog;
use crate::errors::BattleResult;
use crate::pokemon::PokemonInst;
use crate::rng::RandomSource;
use schema::{Ball, BallData, StatusCondition};
use serde::{Deserialize, Serialize};

/// Terminal outcome of one thrown ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchOutcome {
    Caught,
    BrokeFree,
}

/// What the player sees: how often the ball wobbles, then the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallThrow {
    pub outcome: CatchOutcome,
    pub shakes: u8,
}

/// Offset subtracted from the first capture roll. Every condition, and no
/// condition at all, currently maps to -1.
pub fn status_level(_status: Option<StatusCondition>) -> i64 {
    -1
}

/// Extra wobble weight for a target that is already disabled.
pub fn shaking_bonus(status: Option<StatusCondition>) -> f64 {
    match status {
        Some(status) if status.is_incapacitating() => 10.0,
        Some(status) if status.is_lingering() => 5.0,
        _ => 0.0,
    }
}

/// HP factor of the capture formula: `floor(max_hp * 255 * 4) / (hp * rate)`
/// kept within `1..=255`. A target with no HP left gets the ceiling.
pub fn hp_factor(pokemon: &PokemonInst, ball: &BallData) -> f64 {
    let numerator = (pokemon.max_hp() as f64 * 255.0 * 4.0).floor();
    let denominator = pokemon.current_hp() as f64 * ball.rate as f64;
    let f = numerator / denominator;
    if f.is_nan() {
        255.0
    } else {
        f.clamp(1.0, 255.0)
    }
}

/// Resolve a single capture attempt of `pokemon` with `ball`.
pub fn can_catch_pokemon<R: RandomSource>(
    catalog: &Catalog,
    pokemon: &PokemonInst,
    ball: Ball,
    rng: &mut R,
) -> BattleResult<CatchOutcome> {
    if ball == Ball::MasterBall {
        return Ok(CatchOutcome::Caught);
    }

    let ball_data = catalog.ball(ball)?;
    let catch_rate = catalog.species(pokemon.species)?.catch_rate as i64;

    let n = rng.int(ball_data.probability_max) as i64;
    if let Some(status) = pokemon.status {
        if n < 25 && status.is_incapacitating() {
            return Ok(CatchOutcome::Caught);
        } else if n < 12 && status.is_lingering() {
            return Ok(CatchOutcome::Caught);
        }
    }

    if n - status_level(pokemon.status) > catch_rate {
        return Ok(CatchOutcome::BrokeFree);
    }

    let m = rng.int(255) as f64;
    let f = hp_factor(pokemon, ball_data);
    tracing::trace!(n, m, f, "capture rolls");

    if f > m {
        Ok(CatchOutcome::Caught)
    } else {
        Ok(CatchOutcome::BrokeFree)
    }
}

/// Number of wobbles (0-3) the ball shows before the target breaks free.
pub fn ball_shake_count(catalog: &Catalog, pokemon: &PokemonInst, ball: Ball) -> BattleResult<u8> {
    let ball_data = catalog.ball(ball)?;
    let catch_rate = catalog.species(pokemon.species)?.catch_rate as f64;

    let d = catch_rate * 100.0 / ball_data.rate as f64;
    if d >= 256.0 {
        return Ok(3);
    }

    let f = hp_factor(pokemon, ball_data);
    let x = d * f / 255.0 + shaking_bonus(pokemon.status);
    let shakes = match x {
        x if x < 10.0 => 0,
        x if x < 30.0 => 1,
        x if x < 70.0 => 2,
        _ => 3,
    };
    Ok(shakes)
}

/// Throw `ball` at `pokemon`. A caught Pokemon always shows the full three
/// wobbles; an escape shows the count from [`ball_shake_count`].
pub fn throw_ball<R: RandomSource>(
    catalog: &Catalog,
    pokemon: &PokemonInst,
    ball: Ball,
    rng: &mut R,
) -> BattleResult<BallThrow> {
    let outcome = can_catch_pokemon(catalog, pokemon, ball, rng)?;
    let shakes = match outcome {
        CatchOutcome::Caught => 3,
        CatchOutcome::BrokeFree => ball_shake_count(catalog, pokemon, ball)?,
    };
    tracing::debug!(species = %pokemon.species, ?ball, ?outcome, shakes, "ball thrown");
    Ok(BallThrow { outcome, shakes })
}
