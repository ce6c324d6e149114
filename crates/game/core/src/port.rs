//! Outbound notifications from the engine to its host.
//!
//! The engine never draws, animates, or waits. Instead it tells a
//! [`PresentationPort`] what just happened, synchronously and in order. Every
//! notification has a serializable [`BattleEvent`] twin, and the default
//! method bodies build that event and forward it to [`PresentationPort::emit`],
//! so most hosts only implement one method.

use crate::state::{ArchetypeId, CombatantId, EnemyInstance};

/// Snapshot of one roster entry, published when a floor loads.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub slot: usize,
    pub archetype: ArchetypeId,
    pub name: String,
    pub max_hp: u32,
    pub boss: bool,
}

impl From<&EnemyInstance> for RosterEntry {
    fn from(enemy: &EnemyInstance) -> Self {
        Self {
            slot: enemy.slot,
            archetype: enemy.archetype.clone(),
            name: enemy.name.clone(),
            max_hp: enemy.stats.max_hp(),
            boss: enemy.is_boss(),
        }
    }
}

/// Everything the engine reports to its host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum BattleEvent {
    FloorLoaded {
        floor: u32,
        layout: String,
        enemies: Vec<RosterEntry>,
    },
    PlayerTurnStarted {
        turn: u64,
    },
    EnemyTurnStarted {
        enemy: usize,
        turn: u64,
    },
    DamageResolved {
        source: CombatantId,
        target: CombatantId,
        amount: u32,
        hp_after: u32,
    },
    HealResolved {
        caster: CombatantId,
        amount: u32,
        hp_after: u32,
    },
    EnemyDefeated {
        enemy: usize,
        gold_awarded: u32,
    },
    FloorCleared {
        floor: u32,
        boss: bool,
    },
    RunDefeated {
        floor: u32,
    },
    RunCompleted {
        floor: u32,
        gold: u32,
    },
    ShopOpened {
        floor_cleared: u32,
        gold: u32,
    },
    ItemPurchased {
        item: String,
        gold_remaining: u32,
    },
}

impl BattleEvent {
    /// Stable name of the event kind, used for logging and filtering.
    pub fn name(&self) -> &'static str {
        match self {
            BattleEvent::FloorLoaded { .. } => "floor_loaded",
            BattleEvent::PlayerTurnStarted { .. } => "player_turn_started",
            BattleEvent::EnemyTurnStarted { .. } => "enemy_turn_started",
            BattleEvent::DamageResolved { .. } => "damage_resolved",
            BattleEvent::HealResolved { .. } => "heal_resolved",
            BattleEvent::EnemyDefeated { .. } => "enemy_defeated",
            BattleEvent::FloorCleared { .. } => "floor_cleared",
            BattleEvent::RunDefeated { .. } => "run_defeated",
            BattleEvent::RunCompleted { .. } => "run_completed",
            BattleEvent::ShopOpened { .. } => "shop_opened",
            BattleEvent::ItemPurchased { .. } => "item_purchased",
        }
    }

    /// True for events that end a run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BattleEvent::RunDefeated { .. } | BattleEvent::RunCompleted { .. }
        )
    }
}

/// Host-implemented sink for engine notifications.
///
/// Calls happen synchronously inside the command that caused them. An
/// implementation must not call back into the engine.
pub trait PresentationPort {
    /// Receives every notification as a [`BattleEvent`].
    fn emit(&mut self, event: BattleEvent);

    fn on_floor_loaded(&mut self, floor: u32, layout: &str, roster: &[EnemyInstance]) {
        self.emit(BattleEvent::FloorLoaded {
            floor,
            layout: layout.to_owned(),
            enemies: roster.iter().map(RosterEntry::from).collect(),
        });
    }

    fn on_player_turn_started(&mut self, turn: u64) {
        self.emit(BattleEvent::PlayerTurnStarted { turn });
    }

    fn on_enemy_turn_started(&mut self, enemy: usize, turn: u64) {
        self.emit(BattleEvent::EnemyTurnStarted { enemy, turn });
    }

    fn on_damage_resolved(
        &mut self,
        source: CombatantId,
        target: CombatantId,
        amount: u32,
        hp_after: u32,
    ) {
        self.emit(BattleEvent::DamageResolved {
            source,
            target,
            amount,
            hp_after,
        });
    }

    fn on_heal_resolved(&mut self, caster: CombatantId, amount: u32, hp_after: u32) {
        self.emit(BattleEvent::HealResolved {
            caster,
            amount,
            hp_after,
        });
    }

    fn on_enemy_defeated(&mut self, enemy: usize, gold_awarded: u32) {
        self.emit(BattleEvent::EnemyDefeated {
            enemy,
            gold_awarded,
        });
    }

    fn on_floor_cleared(&mut self, floor: u32, boss: bool) {
        self.emit(BattleEvent::FloorCleared { floor, boss });
    }

    fn on_run_defeated(&mut self, floor: u32) {
        self.emit(BattleEvent::RunDefeated { floor });
    }

    fn on_run_completed(&mut self, floor: u32, gold: u32) {
        self.emit(BattleEvent::RunCompleted { floor, gold });
    }

    fn on_shop_opened(&mut self, floor_cleared: u32, gold: u32) {
        self.emit(BattleEvent::ShopOpened {
            floor_cleared,
            gold,
        });
    }

    fn on_item_purchased(&mut self, item: &str, gold_remaining: u32) {
        self.emit(BattleEvent::ItemPurchased {
            item: item.to_owned(),
            gold_remaining,
        });
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresentation;

impl PresentationPort for NullPresentation {
    fn emit(&mut self, _event: BattleEvent) {}
}

/// Records every notification in order. Used by tests and replay tooling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<BattleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Event names in order, handy for asserting on sequences.
    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(BattleEvent::name).collect()
    }

    /// Drains the recorded events.
    pub fn take(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PresentationPort for EventLog {
    fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_methods_forward_to_emit() {
        let mut log = EventLog::new();
        log.on_player_turn_started(1);
        log.on_damage_resolved(CombatantId::Player, CombatantId::Enemy(0), 7, 8);
        log.on_run_defeated(4);

        assert_eq!(
            log.names(),
            ["player_turn_started", "damage_resolved", "run_defeated"]
        );
        assert_eq!(
            log.events()[1],
            BattleEvent::DamageResolved {
                source: CombatantId::Player,
                target: CombatantId::Enemy(0),
                amount: 7,
                hp_after: 8,
            }
        );
        assert!(log.events()[2].is_terminal());
    }

    #[test]
    fn take_drains() {
        let mut log = EventLog::new();
        log.on_floor_cleared(1, false);
        assert_eq!(log.take().len(), 1);
        assert!(log.events().is_empty());
    }
}
