//! Pokemon Battle Core
//!
//! The arithmetic of Generation 1 battles: derived stats, capture attempts,
//! escape and turn order, critical hits and damage, experience, and the
//! trainer AI's move choice. Every random outcome is drawn from an injected
//! [`RandomSource`], and all species, move and ball data comes from a
//! read-only [`Catalog`].

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod catalog;
pub mod errors;
pub mod player;
pub mod pokemon;
pub mod progression;
pub mod rng;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    Ball, BallData, BaseStats, GrowthRate, Learnset, Move, MoveCategory, MoveData,
    PokemonSpecies, PokemonType, Power, Preference, RuleSet, Species, StatType, Statistic,
    StatusCondition, TrainerCategory,
};

// --- From this crate's modules (`src/`) ---

// Capture, battle formulas and opponent AI.
pub use battle::ai::{Behavior, PreferenceAI, opponent_move};
pub use battle::catch::{BallThrow, CatchOutcome, ball_shake_count, can_catch_pokemon, throw_ball};
pub use battle::stats::{
    Hit, can_escape, critical_hit, damage, damage_modifier, experience_gained, moves_first,
    turn_order, type_effectiveness_of,
};

// Runtime types.
pub use catalog::Catalog;
pub use player::Battler;
pub use pokemon::{
    MoveInstance, PokemonBuilder, PokemonInst, StatValues, create_pokemon, experience_threshold,
    natural_moveset,
};
pub use progression::{LevelUp, award_victory, gain_effort_from, gain_experience};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, BattleStateError, CatalogError, MoveDataError,
    MoveDataResult, SpeciesDataError, SpeciesDataResult,
};
