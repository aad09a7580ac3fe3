use crate::catalog::Catalog;
use crate::errors::{BattleResult, MoveDataResult, SpeciesDataResult};
use crate::rng::RandomSource;
use schema::{
    BaseStats, GrowthRate, Move, PokemonSpecies, PokemonType, Species, Statistic, StatusCondition,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 100;
pub const MAX_IV: u16 = 15;
pub const MAX_MOVES: usize = 4;

/// Per-statistic IVs or EVs. A statistic with no entry reads as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValues(BTreeMap<Statistic, u16>);

impl StatValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Statistic) -> u16 {
        self.0.get(&stat).copied().unwrap_or(0)
    }

    pub fn set(&mut self, stat: Statistic, value: u16) {
        self.0.insert(stat, value);
    }

    pub fn with(mut self, stat: Statistic, value: u16) -> Self {
        self.set(stat, value);
        self
    }
}

impl FromIterator<(Statistic, u16)> for StatValues {
    fn from_iter<I: IntoIterator<Item = (Statistic, u16)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One value for each of the five statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSet {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special: u16,
}

impl StatSet {
    pub fn get(&self, stat: Statistic) -> u16 {
        match stat {
            Statistic::Hp => self.hp,
            Statistic::Attack => self.attack,
            Statistic::Defense => self.defense,
            Statistic::Speed => self.speed,
            Statistic::Special => self.special,
        }
    }

    pub fn set(&mut self, stat: Statistic, value: u16) {
        match stat {
            Statistic::Hp => self.hp = value,
            Statistic::Attack => self.attack = value,
            Statistic::Defense => self.defense = value,
            Statistic::Speed => self.speed = value,
            Statistic::Special => self.special = value,
        }
    }
}

/// Position on the growth curve: experience held and the amount that reaches
/// the next level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub current: f64,
    pub next: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInstance {
    pub move_: Move,
    pub pp: u8,
    pub max_pp: u8,
}

impl MoveInstance {
    /// Create a new move instance with max PP
    pub fn new(catalog: &Catalog, move_: Move) -> MoveDataResult<Self> {
        let max_pp = catalog.max_pp(move_)?;
        Ok(MoveInstance {
            move_,
            pp: max_pp,
            max_pp,
        })
    }

    /// Use the move (decrease PP)
    pub fn use_move(&mut self) -> bool {
        if self.pp > 0 {
            self.pp -= 1;
            true
        } else {
            false
        }
    }

    /// Restore PP
    pub fn restore_pp(&mut self, amount: u8) {
        self.pp = self.pp.saturating_add(amount).min(self.max_pp);
    }
}

/// Derived value of one statistic:
/// `floor(((IV + base + floor(sqrt(EV) / 8) + top) * level) / 50 + added)`
/// with `top = 50, added = 10` for HP and `top = 0, added = 5` otherwise.
pub fn derive_statistic(
    base_stats: &BaseStats,
    ivs: &StatValues,
    evs: &StatValues,
    level: u8,
    stat: Statistic,
) -> u16 {
    let (top_extra, added) = match stat {
        Statistic::Hp => (50, 10),
        _ => (0, 5),
    };
    let effort = ((evs.get(stat) as f64).sqrt() / 8.0).floor() as u32;
    let scaled =
        (ivs.get(stat) as u32 + base_stats.get(stat) as u32 + effort + top_extra) * level as u32;
    (scaled / 50 + added) as u16
}

/// Experience needed to reach `level` on a growth curve. The curves are not
/// rounded, so thresholds can be fractional.
pub fn experience_for_level(growth_rate: GrowthRate, level: u8) -> f64 {
    let n = f64::from(level);
    let cubed = n.powi(3);
    match growth_rate {
        GrowthRate::Fast => 4.0 * cubed / 5.0,
        GrowthRate::MediumSlow => 6.0 * cubed / 5.0 - 15.0 * n * n + 100.0 * n - 140.0,
        GrowthRate::Slow => 5.0 * cubed / 4.0,
        GrowthRate::MediumFast => cubed,
    }
}

/// Experience a species needs to reach `level`.
pub fn experience_threshold(
    catalog: &Catalog,
    species: Species,
    level: u8,
) -> SpeciesDataResult<f64> {
    let species_data = catalog.species(species)?;
    Ok(experience_for_level(species_data.growth_rate, level))
}

/// The (up to) four most recent natural moves a species knows at `level`.
pub fn natural_moveset(
    catalog: &Catalog,
    species: Species,
    level: u8,
) -> BattleResult<Vec<MoveInstance>> {
    let natural = &catalog.species(species)?.learnset.natural;

    let cutoff = natural
        .iter()
        .position(|entry| entry.level > level)
        .unwrap_or(natural.len());
    let start = cutoff.saturating_sub(MAX_MOVES);

    let moves = natural[start..cutoff]
        .iter()
        .map(|entry| MoveInstance::new(catalog, entry.move_))
        .collect::<MoveDataResult<Vec<_>>>()?;
    Ok(moves)
}

/// Roll Attack, Defense, Speed and Special IVs in that order; the HP IV is
/// built from the low bit of each.
pub fn roll_ivs<R: RandomSource>(rng: &mut R) -> StatValues {
    let attack = rng.int_within(0, MAX_IV as u32) as u16;
    let defense = rng.int_within(0, MAX_IV as u32) as u16;
    let speed = rng.int_within(0, MAX_IV as u32) as u16;
    let special = rng.int_within(0, MAX_IV as u32) as u16;
    let hp = 8 * (attack % 2) + 4 * (defense % 2) + 2 * (speed % 2) + (special % 2);

    StatValues::from_iter([
        (Statistic::Hp, hp),
        (Statistic::Attack, attack),
        (Statistic::Defense, defense),
        (Statistic::Speed, speed),
        (Statistic::Special, special),
    ])
}

/// Create a Pokemon at `level` with a natural moveset, rolled IVs and no EVs.
pub fn create_pokemon<R: RandomSource>(
    catalog: &Catalog,
    species: Species,
    level: u8,
    rng: &mut R,
) -> BattleResult<PokemonInst> {
    PokemonBuilder::new(species).level(level).build(catalog, rng)
}

/// Optional overrides for a newly created Pokemon.
#[derive(Debug, Clone)]
pub struct PokemonBuilder {
    species: Species,
    level: Option<u8>,
    nickname: Option<String>,
    moves: Option<Vec<Move>>,
    ivs: Option<StatValues>,
    evs: Option<StatValues>,
}

impl PokemonBuilder {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            level: None,
            nickname: None,
            moves: None,
            ivs: None,
            evs: None,
        }
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn ivs(mut self, ivs: StatValues) -> Self {
        self.ivs = Some(ivs);
        self
    }

    pub fn evs(mut self, evs: StatValues) -> Self {
        self.evs = Some(evs);
        self
    }

    pub fn build<R: RandomSource>(self, catalog: &Catalog, rng: &mut R) -> BattleResult<PokemonInst> {
        let species_data = catalog.species(self.species)?;
        let level = self.level.unwrap_or(MIN_LEVEL).clamp(MIN_LEVEL, MAX_LEVEL);

        let moves = match self.moves {
            Some(moves) => moves
                .into_iter()
                .take(MAX_MOVES)
                .map(|move_| MoveInstance::new(catalog, move_))
                .collect::<MoveDataResult<Vec<_>>>()?,
            None => natural_moveset(catalog, self.species, level)?,
        };
        let ivs = match self.ivs {
            Some(ivs) => ivs,
            None => roll_ivs(rng),
        };
        let evs = self.evs.unwrap_or_default();

        let pokemon = PokemonInst::assemble(
            species_data,
            self.nickname.unwrap_or_else(|| self.species.name()),
            level,
            moves,
            ivs,
            evs,
        );
        tracing::debug!(
            species = %pokemon.species,
            level,
            hp = pokemon.max_hp(),
            "created pokemon"
        );
        Ok(pokemon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    pub species: Species,
    pub nickname: String,
    pub moves: [Option<MoveInstance>; 4],
    pub types: Vec<PokemonType>,
    pub status: Option<StatusCondition>,
    /// Raised by Focus Energy; quarters the critical-hit denominator.
    #[serde(default)]
    pub focused: bool,
    #[serde(default)]
    pub traded: bool,
    level: u8,
    base_stats: BaseStats,
    growth_rate: GrowthRate,
    ivs: StatValues,
    evs: StatValues,
    experience: Experience,
    stats: StatSet,
    normal: StatSet,
}

impl PokemonInst {
    fn assemble(
        species_data: &PokemonSpecies,
        nickname: String,
        level: u8,
        moves: Vec<MoveInstance>,
        ivs: StatValues,
        evs: StatValues,
    ) -> Self {
        let mut move_array = [const { None }; MAX_MOVES];
        for (slot, move_instance) in move_array.iter_mut().zip(moves) {
            *slot = Some(move_instance);
        }

        let growth_rate = species_data.growth_rate;
        let mut pokemon = PokemonInst {
            species: species_data.species,
            nickname,
            moves: move_array,
            types: species_data.types.clone(),
            status: None,
            focused: false,
            traded: false,
            level,
            base_stats: species_data.base_stats,
            growth_rate,
            ivs,
            evs,
            experience: Experience {
                current: experience_for_level(growth_rate, level),
                next: experience_for_level(growth_rate, level.saturating_add(1)),
            },
            stats: StatSet::default(),
            normal: StatSet::default(),
        };
        pokemon.refresh_stats();
        pokemon.stats.hp = pokemon.normal.hp;
        pokemon
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn ivs(&self) -> &StatValues {
        &self.ivs
    }

    pub fn evs(&self) -> &StatValues {
        &self.evs
    }

    pub fn base_stats(&self) -> &BaseStats {
        &self.base_stats
    }

    pub fn growth_rate(&self) -> GrowthRate {
        self.growth_rate
    }

    pub fn experience(&self) -> Experience {
        self.experience
    }

    /// Working value of a statistic. For HP this is the current HP.
    pub fn stat(&self, stat: Statistic) -> u16 {
        self.stats.get(stat)
    }

    /// Undamaged value of a statistic.
    pub fn normal(&self, stat: Statistic) -> u16 {
        self.normal.get(stat)
    }

    pub fn stats(&self) -> &StatSet {
        &self.stats
    }

    pub fn normal_stats(&self) -> &StatSet {
        &self.normal
    }

    /// Recompute one statistic from base stats, IVs, EVs and level.
    pub fn derive_statistic(&self, stat: Statistic) -> u16 {
        derive_statistic(&self.base_stats, &self.ivs, &self.evs, self.level, stat)
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        self.experience = Experience {
            current: experience_for_level(self.growth_rate, self.level),
            next: experience_for_level(self.growth_rate, self.level.saturating_add(1)),
        };
        self.refresh_stats();
    }

    pub fn set_iv(&mut self, stat: Statistic, value: u16) {
        self.ivs.set(stat, value.min(MAX_IV));
        self.refresh_stats();
    }

    /// Add effort to a statistic, saturating at `u16::MAX`.
    pub fn add_effort(&mut self, stat: Statistic, amount: u16) {
        let total = self.evs.get(stat).saturating_add(amount);
        self.evs.set(stat, total);
        self.refresh_stats();
    }

    /// Apply several effort gains and recompute once.
    pub fn add_effort_values(&mut self, gains: impl IntoIterator<Item = (Statistic, u16)>) {
        for (stat, amount) in gains {
            let total = self.evs.get(stat).saturating_add(amount);
            self.evs.set(stat, total);
        }
        self.refresh_stats();
    }

    pub(crate) fn gain_raw_experience(&mut self, amount: u32) {
        self.experience.current += f64::from(amount);
    }

    /// Move up exactly one level, keeping accumulated experience.
    pub(crate) fn advance_level(&mut self) {
        self.level = self.level.saturating_add(1).min(MAX_LEVEL);
        self.experience.next = experience_for_level(self.growth_rate, self.level.saturating_add(1));
        self.refresh_stats();
    }

    /// Recompute every derived statistic. Damage taken carries over to the new
    /// maximum HP.
    fn refresh_stats(&mut self) {
        let damage = self.normal.hp.saturating_sub(self.stats.hp);
        for stat in Statistic::iter() {
            let value = self.derive_statistic(stat);
            self.normal.set(stat, value);
            self.stats.set(stat, value);
        }
        self.stats.hp = self.normal.hp.saturating_sub(damage);
    }

    pub fn current_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn max_hp(&self) -> u16 {
        self.normal.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.stats.hp == 0
    }

    /// Deal damage; returns true if this knocked the Pokemon out.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.stats.hp = self.stats.hp.saturating_sub(amount);
        self.is_fainted()
    }

    pub fn heal(&mut self, amount: u16) {
        self.stats.hp = self.stats.hp.saturating_add(amount).min(self.normal.hp);
    }

    /// Full heal: HP, status and PP.
    pub fn restore(&mut self) {
        self.stats = self.normal;
        self.status = None;
        for move_instance in self.moves.iter_mut().flatten() {
            move_instance.pp = move_instance.max_pp;
        }
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    pub fn known_moves(&self) -> Vec<Move> {
        self.moves
            .iter()
            .flatten()
            .map(|move_instance| move_instance.move_)
            .collect()
    }

    pub fn knows(&self, move_: Move) -> bool {
        self.moves.iter().flatten().any(|known| known.move_ == move_)
    }

    /// Put `move_` in the first free slot. Returns false when it is already
    /// known or all four slots are taken.
    pub fn learn_move(&mut self, catalog: &Catalog, move_: Move) -> MoveDataResult<bool> {
        if self.knows(move_) {
            return Ok(false);
        }
        let Some(slot) = self.moves.iter_mut().find(|slot| slot.is_none()) else {
            return Ok(false);
        };
        *slot = Some(MoveInstance::new(catalog, move_)?);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRandom, SeededRandom};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn catalog() -> &'static Catalog {
        Catalog::builtin().unwrap()
    }

    fn flat_ivs(value: u16) -> StatValues {
        Statistic::iter().map(|stat| (stat, value)).collect()
    }

    #[test]
    fn missing_stat_values_read_as_zero() {
        let ivs = StatValues::new().with(Statistic::Attack, 9);
        assert_eq!(ivs.get(Statistic::Attack), 9);
        assert_eq!(ivs.get(Statistic::Special), 0);
    }

    #[rstest]
    // Bulbasaur at level 5, zero IVs and EVs.
    #[case(Statistic::Hp, 0, 0, 5, 19)] // (0+45+0+50)*5/50 + 10 = 9.5 + 10
    #[case(Statistic::Attack, 0, 0, 5, 9)] // 49*5/50 + 5 = 4.9 + 5
    #[case(Statistic::Special, 15, 0, 50, 85)] // (15+65)*50/50 + 5
    #[case(Statistic::Speed, 0, 4096, 50, 58)] // sqrt(4096)/8 = 8; (45+8)*50/50 + 5
    #[case(Statistic::Defense, 0, 63, 100, 103)] // sqrt(63)/8 floors to 0; 49*100/50 + 5
    fn derive_statistic_floors_each_step(
        #[case] stat: Statistic,
        #[case] iv: u16,
        #[case] ev: u16,
        #[case] level: u8,
        #[case] expected: u16,
    ) {
        let base = catalog().species(Species::Bulbasaur).unwrap().base_stats;
        let ivs = StatValues::new().with(stat, iv);
        let evs = StatValues::new().with(stat, ev);
        assert_eq!(derive_statistic(&base, &ivs, &evs, level, stat), expected);
    }

    #[test]
    fn derive_statistic_is_monotonic() {
        let base = catalog().species(Species::Pikachu).unwrap().base_stats;
        for stat in Statistic::iter() {
            let mut previous = 0;
            for level in 1..=MAX_LEVEL {
                let value = derive_statistic(&base, &flat_ivs(8), &StatValues::new(), level, stat);
                assert!(value >= previous, "{stat:?} fell at level {level}");
                previous = value;
            }

            let mut previous = 0;
            for iv in 0..=MAX_IV {
                let value = derive_statistic(&base, &flat_ivs(iv), &StatValues::new(), 50, stat);
                assert!(value >= previous, "{stat:?} fell at IV {iv}");
                previous = value;
            }

            let mut previous = 0;
            for ev in (0..=u16::MAX).step_by(257) {
                let evs = StatValues::new().with(stat, ev);
                let value = derive_statistic(&base, &flat_ivs(8), &evs, 50, stat);
                assert!(value >= previous, "{stat:?} fell at EV {ev}");
                previous = value;
            }
        }
    }

    #[rstest]
    #[case(GrowthRate::Fast, 10, 800.0)]
    #[case(GrowthRate::Fast, 2, 6.4)]
    #[case(GrowthRate::Fast, 3, 21.6)]
    #[case(GrowthRate::MediumFast, 10, 1000.0)]
    #[case(GrowthRate::Slow, 10, 1250.0)]
    #[case(GrowthRate::Slow, 3, 33.75)]
    #[case(GrowthRate::MediumSlow, 10, 560.0)]
    #[case(GrowthRate::MediumSlow, 1, -53.8)]
    #[case(GrowthRate::MediumSlow, 100, 1_059_860.0)]
    fn growth_curves(#[case] rate: GrowthRate, #[case] level: u8, #[case] expected: f64) {
        let actual = experience_for_level(rate, level);
        assert!((actual - expected).abs() < 1e-9, "{rate:?} L{level}: {actual}");
    }

    #[test]
    fn natural_moveset_at_level_one() {
        let moves = natural_moveset(catalog(), Species::Bulbasaur, 1).unwrap();
        let names: Vec<Move> = moves.iter().map(|m| m.move_).collect();
        assert_eq!(names, vec![Move::Tackle, Move::Growl]);
        for move_instance in &moves {
            assert_eq!(move_instance.pp, catalog().max_pp(move_instance.move_).unwrap());
            assert_eq!(move_instance.pp, move_instance.max_pp);
        }
    }

    #[test]
    fn natural_moveset_keeps_the_four_latest() {
        let moves = natural_moveset(catalog(), Species::Bulbasaur, 30).unwrap();
        let names: Vec<Move> = moves.iter().map(|m| m.move_).collect();
        assert_eq!(
            names,
            vec![Move::LeechSeed, Move::VineWhip, Move::PoisonPowder, Move::RazorLeaf]
        );
    }

    #[test]
    fn roll_ivs_builds_hp_from_low_bits() {
        let mut rng = ScriptedRandom::new().with_ints([15, 2, 7, 4]);
        let ivs = roll_ivs(&mut rng);

        assert_eq!(ivs.get(Statistic::Attack), 15);
        assert_eq!(ivs.get(Statistic::Defense), 2);
        assert_eq!(ivs.get(Statistic::Speed), 7);
        assert_eq!(ivs.get(Statistic::Special), 4);
        assert_eq!(ivs.get(Statistic::Hp), 8 + 2);
    }

    #[test]
    fn create_pokemon_fills_defaults() {
        let mut rng = ScriptedRandom::new().with_ints([1, 1, 1, 1]);
        let pokemon = create_pokemon(catalog(), Species::Bulbasaur, 1, &mut rng).unwrap();

        assert_eq!(pokemon.level(), 1);
        assert_eq!(pokemon.nickname, "BULBASAUR");
        assert_eq!(pokemon.known_moves(), vec![Move::Tackle, Move::Growl]);
        assert_eq!(pokemon.types, vec![PokemonType::Grass, PokemonType::Poison]);
        assert_eq!(pokemon.ivs().get(Statistic::Hp), 15);
        assert_eq!(pokemon.evs(), &StatValues::new());
        assert_eq!(
            pokemon.experience(),
            Experience {
                current: experience_for_level(GrowthRate::MediumSlow, 1),
                next: experience_for_level(GrowthRate::MediumSlow, 2),
            }
        );
        assert_eq!(pokemon.stats(), pokemon.normal_stats());
        for stat in Statistic::iter() {
            assert_eq!(pokemon.stat(stat), pokemon.derive_statistic(stat));
        }
        assert!(rng.is_exhausted());
    }

    #[test]
    fn explicit_ivs_skip_the_roll() {
        let mut rng = ScriptedRandom::new();
        let pokemon = PokemonBuilder::new(Species::Pikachu)
            .level(12)
            .ivs(StatValues::new().with(Statistic::Speed, 15))
            .moves(vec![Move::ThunderShock])
            .nickname("SPARKY")
            .build(catalog(), &mut rng)
            .unwrap();

        assert_eq!(pokemon.nickname, "SPARKY");
        assert_eq!(pokemon.ivs().get(Statistic::Attack), 0);
        assert_eq!(pokemon.known_moves(), vec![Move::ThunderShock]);
    }

    #[test]
    fn stats_follow_level_iv_and_ev_changes() {
        let mut rng = SeededRandom::seeded(11);
        let mut pokemon = create_pokemon(catalog(), Species::Squirtle, 10, &mut rng).unwrap();

        pokemon.take_damage(5);
        let before = pokemon.max_hp();
        pokemon.set_level(20);
        assert!(pokemon.max_hp() > before);
        assert_eq!(pokemon.current_hp(), pokemon.max_hp() - 5);

        pokemon.set_iv(Statistic::Attack, 99);
        assert_eq!(pokemon.ivs().get(Statistic::Attack), MAX_IV);

        pokemon.add_effort(Statistic::Speed, 10_000);
        for stat in Statistic::iter() {
            assert_eq!(pokemon.normal(stat), pokemon.derive_statistic(stat));
        }
    }

    #[test]
    fn serialized_pokemon_rederives_identical_stats() {
        let mut rng = SeededRandom::seeded(5);
        let mut pokemon = create_pokemon(catalog(), Species::Onix, 23, &mut rng).unwrap();
        pokemon.add_effort(Statistic::Defense, 3_000);

        let json = serde_json::to_string(&pokemon).unwrap();
        let restored: PokemonInst = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, pokemon);
        for stat in Statistic::iter() {
            assert_eq!(restored.derive_statistic(stat), pokemon.normal(stat));
        }
    }

    #[test]
    fn unknown_moves_fail_creation() {
        let mut sparse = Catalog::default();
        sparse.insert_species(catalog().species(Species::Magikarp).unwrap().clone());
        let mut rng = ScriptedRandom::new().with_ints([0, 0, 0, 0]);

        let result = create_pokemon(&sparse, Species::Magikarp, 5, &mut rng);
        assert!(matches!(
            result,
            Err(crate::errors::BattleEngineError::MoveData(
                crate::errors::MoveDataError::MoveNotFound(Move::Splash)
            ))
        ));
    }

    #[test]
    fn learn_move_fills_free_slots_only() {
        let mut rng = SeededRandom::seeded(2);
        let mut pokemon = create_pokemon(catalog(), Species::Magikarp, 5, &mut rng).unwrap();

        assert!(pokemon.learn_move(catalog(), Move::Tackle).unwrap());
        assert!(!pokemon.learn_move(catalog(), Move::Tackle).unwrap());
        assert!(pokemon.learn_move(catalog(), Move::Bite).unwrap());
        assert!(pokemon.learn_move(catalog(), Move::Surf).unwrap());
        assert!(!pokemon.learn_move(catalog(), Move::Strength).unwrap());
    }

    #[test]
    fn damage_and_restore() {
        let mut rng = SeededRandom::seeded(8);
        let mut pokemon = create_pokemon(catalog(), Species::Caterpie, 3, &mut rng).unwrap();
        let max = pokemon.max_hp();

        assert!(!pokemon.take_damage(1));
        pokemon.heal(50);
        assert_eq!(pokemon.current_hp(), max);
        assert!(pokemon.take_damage(u16::MAX));
        pokemon.status = Some(StatusCondition::Poison);
        if let Some(tackle) = pokemon.moves[0].as_mut() {
            tackle.use_move();
        }

        pokemon.restore();
        assert_eq!(pokemon.current_hp(), max);
        assert_eq!(pokemon.status, None);
        assert!(pokemon.moves.iter().flatten().all(|m| m.pp == m.max_pp));
    }
}
