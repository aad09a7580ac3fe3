#[cfg(test)]
mod tests {
    use crate::battle::ai::opponent_move;
    use crate::battle::catch::{CatchOutcome, throw_ball};
    use crate::battle::stats::{damage, moves_first};
    use crate::battle::tests::common::{
        TestPokemonBuilder, assert_ok, catalog, create_test_battler,
    };
    use crate::player::Battler;
    use crate::progression::award_victory;
    use crate::rng::{RandomSource, SeededRandom};
    use pretty_assertions::assert_eq;
    use schema::{Ball, Move, Species, Statistic, TrainerCategory};

    /// Apply `move_` from `attacker`'s active Pokemon to `defender`'s.
    /// Returns true when the defender faints.
    fn strike<R: RandomSource>(
        attacker: &Battler,
        defender: &mut Battler,
        move_: Move,
        rng: &mut R,
    ) -> bool {
        let hit = assert_ok(
            damage(
                catalog(),
                move_,
                assert_ok(attacker.require_active()),
                assert_ok(defender.require_active()),
                rng,
            )
            .map_err(Into::into),
        );
        let dealt = hit.damage.min(u16::MAX as f64) as u16;
        assert_ok(defender.require_active_mut()).take_damage(dealt)
    }

    #[test]
    fn trainer_beats_a_wild_caterpie_and_levels_up_its_effort() {
        let mut player = create_test_battler(
            TrainerCategory::Trainer,
            vec![
                TestPokemonBuilder::new(Species::Charmander, 12)
                    .with_moves(vec![Move::Scratch])
                    .build(),
            ],
        );
        let mut wild = Battler::wild(TestPokemonBuilder::new(Species::Caterpie, 3).build());
        let mut rng = SeededRandom::seeded(17);

        let mut turns = 0;
        while !wild.is_defeated() && !player.is_defeated() {
            turns += 1;
            assert!(turns < 20, "battle did not finish");

            let wild_move = assert_ok(opponent_move(catalog(), &wild, &player, &mut rng));
            if assert_ok(moves_first(catalog(), &player, Move::Scratch, &wild, wild_move)) {
                if strike(&player, &mut wild, Move::Scratch, &mut rng) {
                    break;
                }
                strike(&wild, &mut player, wild_move, &mut rng);
            } else {
                if strike(&wild, &mut player, wild_move, &mut rng) {
                    break;
                }
                strike(&player, &mut wild, Move::Scratch, &mut rng);
            }
        }

        assert!(wild.is_defeated());
        assert!(!player.is_defeated());

        let reward = assert_ok(award_victory(catalog(), &mut player, &wild));
        // floor(64 * 3) / 7
        assert_eq!(reward.experience, 27);
        let charmander = assert_ok(player.require_active());
        assert_eq!(charmander.evs().get(Statistic::Hp), 45);
        assert_eq!(charmander.evs().get(Statistic::Special), 20);
    }

    #[test]
    fn weakened_wild_pokemon_can_be_caught_and_joins_the_team() {
        let mut wild = Battler::wild(TestPokemonBuilder::new(Species::Pidgey, 5).build());
        let hp = assert_ok(wild.require_active()).max_hp();
        assert_ok(wild.require_active_mut()).take_damage(hp - 1);

        let mut rng = SeededRandom::seeded(3);
        let mut throws = 0;
        let caught = loop {
            throws += 1;
            assert!(throws < 50, "never caught");
            let target = assert_ok(wild.require_active());
            let throw = assert_ok(throw_ball(catalog(), target, Ball::PokeBall, &mut rng));
            if throw.outcome == CatchOutcome::Caught {
                break target.clone();
            }
        };

        let mut player = create_test_battler(
            TrainerCategory::Trainer,
            vec![TestPokemonBuilder::new(Species::Bulbasaur, 5).build()],
        );
        if let Some(slot) = player.team.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(caught);
        }
        assert_ok(player.switch_pokemon(1));
        assert_eq!(assert_ok(player.require_active()).species, Species::Pidgey);
    }
}
