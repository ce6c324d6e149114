//! Authoritative battle state representation.
//!
//! This module owns the combatant types, the enemy roster, and turn
//! bookkeeping. Hosts may inspect a [`BattleSession`] freely but mutate it
//! exclusively through [`crate::engine::TurnScheduler`].
pub mod turn;
pub mod types;

use arrayvec::ArrayVec;

use crate::config::GameConfig;

pub use turn::{BattleResult, Phase, TurnState};
pub use types::{
    ArchetypeId, CharacterClass, ClassProfile, Combatant, CombatantId, EnemyArchetype,
    EnemyInstance, Player, ResourceMeter,
};

/// Ordered enemies of one battle, indexed by roster slot.
pub type Roster = ArrayVec<EnemyInstance, { GameConfig::MAX_ROSTER }>;

/// State of one floor's battle.
///
/// The session owns the [`Player`] while the floor is being fought. Once the
/// battle resolves the session is discarded with [`BattleSession::into_player`]
/// and only the player carries over to the next floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSession {
    pub(crate) player: Player,
    pub(crate) roster: Roster,
    pub(crate) turn: TurnState,
    floor: u32,
    layout: String,
}

impl BattleSession {
    /// Creates a session waiting for the player's first action.
    pub fn new(player: Player, roster: Roster, layout: impl Into<String>) -> Self {
        let floor = player.floor;
        Self {
            player,
            roster,
            turn: TurnState::new(),
            floor,
            layout: layout.into(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn roster(&self) -> &[EnemyInstance] {
        &self.roster
    }

    pub fn enemy(&self, slot: usize) -> Option<&EnemyInstance> {
        self.roster.get(slot)
    }

    /// Floor this battle was loaded for.
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Presentation-only layout tag of the floor.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn phase(&self) -> Phase {
        self.turn.phase
    }

    pub fn turn_number(&self) -> u64 {
        self.turn.turn_number
    }

    pub fn enemy_cursor(&self) -> usize {
        self.turn.enemy_cursor
    }

    /// True while the battle is unresolved, the player has HP, and at least
    /// one enemy has HP. No action may be dispatched otherwise.
    pub fn is_active(&self) -> bool {
        !self.turn.phase.is_resolved()
            && self.player.is_alive()
            && self.roster.iter().any(EnemyInstance::is_alive)
    }

    pub fn all_enemies_defeated(&self) -> bool {
        self.roster.iter().all(|enemy| !enemy.is_alive())
    }

    /// True if the roster contains a boss archetype.
    pub fn has_boss(&self) -> bool {
        self.roster.iter().any(EnemyInstance::is_boss)
    }

    /// Next living enemy at or after the cursor, within the current round.
    pub(crate) fn next_living_from_cursor(&self) -> Option<usize> {
        (self.turn.enemy_cursor..self.roster.len()).find(|&slot| self.roster[slot].is_alive())
    }

    /// Consumes the session, returning the player for the next stage of the run.
    pub fn into_player(self) -> Player {
        self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archetype(hp: u32) -> EnemyArchetype {
        EnemyArchetype {
            name: "Slime".into(),
            max_hp: hp,
            dice_sides: 10,
            gold_reward: 50,
            boss: false,
        }
    }

    fn session_with(hp: &[u32]) -> BattleSession {
        let player = Player::new(
            CharacterClass::Thief,
            ClassProfile {
                max_hp: 20,
                heal_bonus: 0,
                dice_sides: 25,
            },
        );
        let mut roster = Roster::new();
        for (slot, &current) in hp.iter().enumerate() {
            let mut enemy = EnemyInstance::spawn(slot, "slime".into(), &archetype(15));
            enemy.stats.health = ResourceMeter::new(current, 15);
            roster.push(enemy);
        }
        BattleSession::new(player, roster, "floor-1")
    }

    #[test]
    fn new_session_starts_on_player_turn() {
        let session = session_with(&[15]);
        assert_eq!(session.phase(), Phase::PlayerTurnIdle);
        assert_eq!(session.turn_number(), 0);
        assert_eq!(session.floor(), 1);
        assert!(session.is_active());
    }

    #[test]
    fn session_without_living_side_is_inactive() {
        assert!(!session_with(&[0, 0]).is_active());

        let mut session = session_with(&[15]);
        session.player.stats = session.player.stats.with_current_hp(0);
        assert!(!session.is_active());
    }

    #[test]
    fn cursor_search_stays_within_round() {
        let mut session = session_with(&[5, 0, 5]);
        session.turn.enemy_cursor = 1;
        assert_eq!(session.next_living_from_cursor(), Some(2));
        session.turn.enemy_cursor = 3;
        assert_eq!(session.next_living_from_cursor(), None);
    }
}
