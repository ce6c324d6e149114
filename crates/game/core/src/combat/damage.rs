//! Damage rolling and application.

use crate::env::RandomSource;
use crate::state::{Combatant, EnemyInstance, Player};

use super::dice::roll_dice;
use super::result::{AttackResult, CombatError, PlayerStrike};

/// Apply an already-rolled damage value to a defender.
pub fn apply_attack(defender: &mut Combatant, damage: u32) -> AttackResult {
    let hp_before = defender.current_hp();
    let hp_after = defender.health.drain(damage);

    AttackResult {
        damage,
        hp_before,
        hp_after,
        defeated: hp_before > 0 && hp_after == 0,
    }
}

/// Resolve an attack: roll the attacker's die and apply it to the defender.
///
/// # Formula
///
/// ```text
/// damage = roll(attacker.dice_sides)
/// defender.hp = max(defender.hp - damage, 0)
/// ```
pub fn resolve_attack(
    rng: &mut (impl RandomSource + ?Sized),
    attacker: &Combatant,
    defender: &mut Combatant,
) -> AttackResult {
    let damage = roll_dice(rng, attacker.dice_sides());
    apply_attack(defender, damage)
}

/// Resolve the player's attack against the first living enemy.
///
/// The player has no target choice: the lowest roster slot with HP left is
/// always hit. If the strike kills the enemy, its gold reward is granted once.
///
/// # Errors
///
/// Returns [`CombatError::NoLivingTarget`] without rolling when every enemy
/// is already dead.
pub fn resolve_player_attack(
    rng: &mut (impl RandomSource + ?Sized),
    player: &mut Player,
    roster: &mut [EnemyInstance],
) -> Result<PlayerStrike, CombatError> {
    let enemy = roster
        .iter_mut()
        .find(|enemy| enemy.is_alive())
        .ok_or(CombatError::NoLivingTarget)?;

    let attack = resolve_attack(rng, &player.stats, &mut enemy.stats);

    let gold_awarded = if attack.defeated {
        enemy.claim_reward()
    } else {
        None
    };
    if let Some(gold) = gold_awarded {
        player.earn_gold(gold);
    }

    Ok(PlayerStrike {
        target: enemy.slot,
        attack,
        gold_awarded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRandom;
    use crate::state::{CharacterClass, ClassProfile, EnemyArchetype};

    fn player() -> Player {
        Player::new(
            CharacterClass::Thief,
            ClassProfile {
                max_hp: 20,
                heal_bonus: 0,
                dice_sides: 25,
            },
        )
    }

    fn enemy(slot: usize, hp: u32) -> EnemyInstance {
        let archetype = EnemyArchetype {
            name: "Slime".into(),
            max_hp: 15,
            dice_sides: 10,
            gold_reward: 50,
            boss: false,
        };
        let mut enemy = EnemyInstance::spawn(slot, "slime".into(), &archetype);
        enemy.stats = enemy.stats.with_current_hp(hp);
        enemy
    }

    #[test]
    fn every_roll_clamps_at_zero() {
        for prev in [0, 1, 5, 15] {
            for damage in 1..=25 {
                let mut defender = Combatant::new(15, 10, 0).with_current_hp(prev);
                let result = apply_attack(&mut defender, damage);
                assert_eq!(defender.current_hp(), prev.saturating_sub(damage));
                assert_eq!(result.hp_after, defender.current_hp());
            }
        }
    }

    #[test]
    fn attack_uses_attacker_dice() {
        let attacker = Combatant::new(20, 6, 0);
        let mut defender = Combatant::new(30, 10, 0);
        // Roll of 9 is clamped to the attacker's d6.
        let mut rng = ScriptedRandom::with_rolls([9]);

        let result = resolve_attack(&mut rng, &attacker, &mut defender);

        assert_eq!(result.damage, 6);
        assert_eq!(defender.current_hp(), 24);
        assert!(!result.defeated);
    }

    #[test]
    fn player_hits_first_living_enemy() {
        let mut player = player();
        let mut roster = vec![enemy(0, 0), enemy(1, 15), enemy(2, 15)];
        let mut rng = ScriptedRandom::with_rolls([4]);

        let strike = resolve_player_attack(&mut rng, &mut player, &mut roster).unwrap();

        assert_eq!(strike.target, 1);
        assert_eq!(roster[1].stats.current_hp(), 11);
        assert_eq!(roster[2].stats.current_hp(), 15);
    }

    #[test]
    fn killing_blow_grants_gold_once() {
        let mut player = player();
        let mut roster = vec![enemy(0, 5)];
        let mut rng = ScriptedRandom::with_rolls([10]);

        let strike = resolve_player_attack(&mut rng, &mut player, &mut roster).unwrap();
        assert!(strike.attack.defeated);
        assert_eq!(strike.gold_awarded, Some(50));
        assert_eq!(player.gold(), 50);

        // A second resolution finds nothing alive and grants nothing.
        let again = resolve_player_attack(&mut rng, &mut player, &mut roster);
        assert_eq!(again, Err(CombatError::NoLivingTarget));
        assert_eq!(player.gold(), 50);

        // Re-checking the dead enemy directly never re-grants.
        assert_eq!(roster[0].claim_reward(), None);
    }

    #[test]
    fn no_living_target_does_not_roll() {
        let mut player = player();
        let mut roster = vec![enemy(0, 0)];
        let mut rng = ScriptedRandom::with_rolls([3]);

        let result = resolve_player_attack(&mut rng, &mut player, &mut roster);

        assert_eq!(result, Err(CombatError::NoLivingTarget));
        assert_eq!(rng.remaining_rolls(), 1);
    }
}
