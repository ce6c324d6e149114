use super::{ArchetypeId, Combatant};

/// Static description of an enemy kind, as stored in the bestiary.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyArchetype {
    pub name: String,
    pub max_hp: u32,
    pub dice_sides: u32,
    pub gold_reward: u32,
    /// Clearing a floor that contains a boss completes the run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boss: bool,
}

/// One enemy in a battle roster.
///
/// Carries only combat state; sprite and animation bookkeeping belongs to the
/// presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInstance {
    pub slot: usize,
    pub archetype: ArchetypeId,
    pub name: String,
    pub stats: Combatant,
    gold_reward: u32,
    boss: bool,
    reward_claimed: bool,
}

impl EnemyInstance {
    /// Instantiates a fresh enemy at full health. Enemies never carry a heal
    /// bonus.
    pub fn spawn(slot: usize, archetype: ArchetypeId, template: &EnemyArchetype) -> Self {
        Self {
            slot,
            archetype,
            name: template.name.clone(),
            stats: Combatant::new(template.max_hp, template.dice_sides, 0),
            gold_reward: template.gold_reward,
            boss: template.boss,
            reward_claimed: false,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    #[inline]
    pub fn is_boss(&self) -> bool {
        self.boss
    }

    #[inline]
    pub fn gold_reward(&self) -> u32 {
        self.gold_reward
    }

    #[inline]
    pub fn reward_claimed(&self) -> bool {
        self.reward_claimed
    }

    /// Claims the kill reward. Returns the gold the first time it is called
    /// on a dead enemy, `None` while alive or once already claimed.
    pub fn claim_reward(&mut self) -> Option<u32> {
        if self.is_alive() || self.reward_claimed {
            return None;
        }
        self.reward_claimed = true;
        Some(self.gold_reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slime() -> EnemyArchetype {
        EnemyArchetype {
            name: "Slime".into(),
            max_hp: 15,
            dice_sides: 10,
            gold_reward: 50,
            boss: false,
        }
    }

    #[test]
    fn reward_is_claimed_once() {
        let mut enemy = EnemyInstance::spawn(0, "slime".into(), &slime());
        assert_eq!(enemy.claim_reward(), None);

        enemy.stats.health.drain(15);
        assert_eq!(enemy.claim_reward(), Some(50));
        assert_eq!(enemy.claim_reward(), None);
        assert!(enemy.reward_claimed());
    }

    #[test]
    fn spawned_enemy_has_no_heal_bonus() {
        let enemy = EnemyInstance::spawn(2, "slime".into(), &slime());
        assert_eq!(enemy.stats.heal_bonus, 0);
        assert_eq!(enemy.stats.current_hp(), 15);
        assert_eq!(enemy.slot, 2);
    }
}
