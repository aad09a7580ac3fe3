//! Move selection for battle opponents.

use crate::catalog::Catalog;
use crate::errors::{BattleResult, BattleStateError};
use crate::player::Battler;
use crate::pokemon::PokemonInst;
use crate::rng::RandomSource;
use schema::{Move, MoveData, Preference, StatChange, StatChangeKind, StatType};

/// Score every candidate move starts from. Lower scores are preferred.
pub const BASE_MOVE_PRIORITY: i32 = 10;

/// Penalty for a pure status move against a target that already has a status.
pub const REDUNDANT_STATUS_PENALTY: i32 = 5;

/// A trait for any system that can pick a move for a battle opponent.
pub trait Behavior {
    /// Choose the move `opponent`'s active Pokemon uses against `player`.
    fn choose_move<R: RandomSource>(
        &self,
        opponent: &Battler,
        player: &Battler,
        rng: &mut R,
    ) -> BattleResult<Move>;
}

/// A candidate move and its current score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePossibility {
    pub move_: Move,
    pub priority: i32,
}

impl MovePossibility {
    pub fn new(move_: Move) -> Self {
        Self {
            move_,
            priority: BASE_MOVE_PRIORITY,
        }
    }
}

/// Trainer AI driven by the catalog's rule-set preference lists.
pub struct PreferenceAI<'a> {
    catalog: &'a Catalog,
}

impl<'a> PreferenceAI<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Score every move the opponent knows. Wild battlers skip scoring.
    pub fn score_moves(
        &self,
        opponent: &Battler,
        player: &Battler,
    ) -> BattleResult<Vec<MovePossibility>> {
        let attacker = opponent.require_active()?;
        let mut possibilities: Vec<MovePossibility> = attacker
            .moves
            .iter()
            .flatten()
            .map(|known| MovePossibility::new(known.move_))
            .collect();

        if possibilities.is_empty() {
            return Err(BattleStateError::NoMovesKnown(attacker.nickname.clone()).into());
        }
        if opponent.is_wild() {
            return Ok(possibilities);
        }

        let target = player.require_active()?;
        if target.status.is_some() && !opponent.dumb {
            for possibility in possibilities.iter_mut() {
                if self.catalog.move_data(possibility.move_)?.is_pure_status() {
                    possibility.priority += REDUNDANT_STATUS_PENALTY;
                }
            }
        }

        for &rule_set in opponent.category.rule_sets() {
            let preferences = self.catalog.preferences(rule_set);
            for possibility in possibilities.iter_mut() {
                let move_data = self.catalog.move_data(possibility.move_)?;
                apply_preferences(possibility, move_data, preferences, target, 1);
            }
        }

        Ok(possibilities)
    }
}

impl Behavior for PreferenceAI<'_> {
    fn choose_move<R: RandomSource>(
        &self,
        opponent: &Battler,
        player: &Battler,
        rng: &mut R,
    ) -> BattleResult<Move> {
        let mut possibilities = self.score_moves(opponent, player)?;

        if !opponent.is_wild() && possibilities.len() > 1 {
            let best = possibilities
                .iter()
                .map(|possibility| possibility.priority)
                .min()
                .unwrap_or(BASE_MOVE_PRIORITY);
            possibilities.retain(|possibility| possibility.priority == best);
        }

        let chosen = rng
            .pick_one(&possibilities)
            .map(|possibility| possibility.move_)
            .ok_or_else(|| BattleStateError::NoMovesKnown(opponent.category.to_string()))?;
        tracing::debug!(
            category = %opponent.category,
            candidates = possibilities.len(),
            ?chosen,
            "opponent chose move"
        );
        Ok(chosen)
    }
}

/// Shift `possibility` by `weight` according to the first preference that
/// matches it. Later preferences are not consulted.
pub fn apply_preferences(
    possibility: &mut MovePossibility,
    move_data: &MoveData,
    preferences: &[Preference],
    target: &PokemonInst,
    weight: i32,
) {
    for preference in preferences {
        if let Some(shift) = preference_shift(preference, move_data, target) {
            possibility.priority += shift * weight;
            return;
        }
    }
}

/// -1 when the preference favours the move, +1 when it discourages it.
fn preference_shift(
    preference: &Preference,
    move_data: &MoveData,
    target: &PokemonInst,
) -> Option<i32> {
    match *preference {
        Preference::Move(move_) if move_ == move_data.move_ => Some(-1),
        Preference::Raise(stat, amount)
            if declares_change(move_data, StatChangeKind::Raise, stat, amount) =>
        {
            Some(-1)
        }
        Preference::Lower(stat, amount)
            if declares_change(move_data, StatChangeKind::Lower, stat, amount) =>
        {
            Some(-1)
        }
        Preference::Super(move_type, target_type)
            if move_data.is_damaging()
                && move_data.move_type == move_type
                && target.has_type(target_type) =>
        {
            Some(-1)
        }
        Preference::Weak(move_type, target_type)
            if move_data.is_damaging()
                && move_data.move_type == move_type
                && target.has_type(target_type) =>
        {
            Some(1)
        }
        _ => None,
    }
}

fn declares_change(
    move_data: &MoveData,
    kind: StatChangeKind,
    stat: StatType,
    amount: u8,
) -> bool {
    move_data.stat_change == Some(StatChange { kind, stat, amount })
}

/// Pick the move `opponent` uses this turn.
pub fn opponent_move<R: RandomSource>(
    catalog: &Catalog,
    opponent: &Battler,
    player: &Battler,
    rng: &mut R,
) -> BattleResult<Move> {
    PreferenceAI::new(catalog).choose_move(opponent, player, rng)
}

/// Moves `opponent` could pick this turn, i.e. the ones tied for the best score.
pub fn preferred_moves(
    catalog: &Catalog,
    opponent: &Battler,
    player: &Battler,
) -> BattleResult<Vec<Move>> {
    let possibilities = PreferenceAI::new(catalog).score_moves(opponent, player)?;
    let best = possibilities.iter().map(|possibility| possibility.priority).min();
    Ok(possibilities
        .iter()
        .filter(|possibility| Some(possibility.priority) == best)
        .map(|possibility| possibility.move_)
        .collect())
}
