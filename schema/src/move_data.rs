use crate::{PokemonType, StatusCondition};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Moves available in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Move {
    Absorb,
    Acid,
    Agility,
    Amnesia,
    Barrier,
    Bind,
    Bite,
    Blizzard,
    BodySlam,
    Bubble,
    Confusion,
    ConfuseRay,
    Cut,
    DefenseCurl,
    Dig,
    Disable,
    DoubleEdge,
    DoubleSlap,
    DoubleTeam,
    DragonRage,
    DreamEater,
    DrillPeck,
    Earthquake,
    Ember,
    Explosion,
    FireBlast,
    FireSpin,
    Fissure,
    Flamethrower,
    Flash,
    Fly,
    FocusEnergy,
    FuryAttack,
    FurySwipes,
    Glare,
    Growl,
    Growth,
    Guillotine,
    Gust,
    Harden,
    Haze,
    Headbutt,
    HornDrill,
    HydroPump,
    HyperBeam,
    HyperFang,
    Hypnosis,
    IceBeam,
    KarateChop,
    Leer,
    LeechLife,
    LeechSeed,
    Lick,
    LightScreen,
    LowKick,
    Meditate,
    MegaDrain,
    MegaPunch,
    Metronome,
    Minimize,
    MirrorMove,
    Mist,
    NightShade,
    Peck,
    PetalDance,
    PoisonPowder,
    PoisonSting,
    Pound,
    Psychic,
    QuickAttack,
    Rage,
    RazorLeaf,
    Recover,
    Reflect,
    Rest,
    RockThrow,
    SandAttack,
    Scratch,
    Screech,
    SeismicToss,
    SelfDestruct,
    Sing,
    SkullBash,
    Slam,
    Slash,
    SleepPowder,
    Smokescreen,
    SolarBeam,
    SonicBoom,
    Splash,
    StringShot,
    Strength,
    StunSpore,
    Submission,
    Substitute,
    SuperFang,
    Supersonic,
    Surf,
    Swift,
    SwordsDance,
    Tackle,
    TailWhip,
    TakeDown,
    Teleport,
    Thrash,
    Thunder,
    Thunderbolt,
    ThunderShock,
    ThunderWave,
    Toxic,
    VineWhip,
    WaterGun,
    Whirlwind,
    WingAttack,
    Withdraw,
    Wrap,
}

impl Move {
    /// Resolve a catalog name such as `"VINE WHIP"` or `"Sand-Attack"`.
    pub fn from_name(name: &str) -> Option<Move> {
        let normalized = name.to_uppercase().replace([' ', '-', '_'], "");
        normalized.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    NonDamaging,
}

/// Base power of a move. Fixed-damage and utility moves carry no number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Power {
    #[default]
    Absent,
    Base(u16),
    /// One-hit knockout moves.
    Infinite,
}

/// Battle stats a move can raise or lower by stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Attack,
    Defense,
    Speed,
    Special,
    Accuracy,
    Evasion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatChangeKind {
    Raise,
    Lower,
}

/// The stage change a move declares, e.g. Growl lowers Attack by 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    pub kind: StatChangeKind,
    pub stat: StatType,
    pub amount: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub move_: Move,
    pub name: String,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: Power,
    pub accuracy: Option<u8>, // None for sure-hit moves
    pub max_pp: u8,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub stat_change: Option<StatChange>,
    #[serde(default)]
    pub status: Option<StatusCondition>,
    #[serde(default)]
    pub high_critical: bool,
}

impl MoveData {
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::NonDamaging
    }

    /// A non-damaging move whose only job is to inflict a status condition.
    pub fn is_pure_status(&self) -> bool {
        self.category == MoveCategory::NonDamaging && self.status.is_some()
    }
}
