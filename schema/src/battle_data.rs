use crate::{Move, PokemonType, StatType};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Ball {
    PokeBall,
    GreatBall,
    UltraBall,
    SafariBall,
    MasterBall,
}

/// Throw parameters of a ball.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallData {
    pub ball: Ball,
    pub name: String,
    /// Ceiling of the first capture roll.
    pub probability_max: u32,
    /// Divisor applied to current HP in the capture formula.
    pub rate: u32,
}

/// Named AI rule-sets. Each carries an ordered preference list in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum RuleSet {
    TurnTwo,
    GoodAi,
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            RuleSet::TurnTwo => "Turn 2",
            RuleSet::GoodAi => "Good AI",
        };
        write!(f, "{}", display_name)
    }
}

/// One entry of a rule-set's preference list. The first entry matching a move
/// decides how that move's score shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preference {
    /// Prefer this exact move.
    Move(Move),
    /// Prefer moves raising `stat` by `amount` stages.
    Raise(StatType, u8),
    /// Prefer moves lowering `stat` by `amount` stages.
    Lower(StatType, u8),
    /// Prefer damaging moves of the first type against a target holding the second.
    Super(PokemonType, PokemonType),
    /// Avoid damaging moves of the first type against a target holding the second.
    Weak(PokemonType, PokemonType),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleModification {
    pub rule_set: RuleSet,
    pub preferences: Vec<Preference>,
}

/// Who is behind a battler. Trainer archetypes decide which AI rule-sets apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum TrainerCategory {
    Wild,
    Trainer,
    Youngster,
    BugCatcher,
    Lass,
    Sailor,
    JrTrainer,
    PokeManiac,
    SuperNerd,
    Hiker,
    Biker,
    Burglar,
    Engineer,
    Fisherman,
    Swimmer,
    CueBall,
    Gambler,
    Beauty,
    Psychic,
    Rocker,
    Juggler,
    Tamer,
    BirdKeeper,
    Blackbelt,
    Scientist,
    Rocket,
    CoolTrainer,
    Gentleman,
    Channeler,
    Rival,
    GymLeader,
    EliteFour,
    Champion,
}

impl TrainerCategory {
    pub fn is_wild(self) -> bool {
        self == TrainerCategory::Wild
    }

    /// Rule-sets applied when this archetype picks a move, in application order.
    pub fn rule_sets(self) -> &'static [RuleSet] {
        use TrainerCategory::*;

        match self {
            PokeManiac | EliteFour => &[RuleSet::TurnTwo, RuleSet::GoodAi],
            SuperNerd | Psychic | Scientist | Gentleman => &[RuleSet::TurnTwo],
            Sailor | Burglar | Fisherman | Swimmer | Beauty | CoolTrainer | Rival | GymLeader
            | Champion => &[RuleSet::GoodAi],
            _ => &[],
        }
    }

    pub fn applies(self, rule_set: RuleSet) -> bool {
        self.rule_sets().contains(&rule_set)
    }
}

impl fmt::Display for TrainerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
