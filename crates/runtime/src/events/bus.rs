//! Broadcast event bus implementation.

use tokio::sync::broadcast;
use tower_core::{BattleEvent, PresentationPort};

/// Broadcast bus carrying every [`BattleEvent`] of a run.
///
/// Publishing is fire-and-forget: with no subscribers the event is dropped,
/// and slow subscribers see `RecvError::Lagged` rather than blocking the run.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<BattleEvent>,
    published: u64,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity.max(1));
        Self { tx, published: 0 }
    }

    pub fn publish(&mut self, event: BattleEvent) {
        self.published += 1;
        tracing::trace!(event = event.name(), "publish");
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("no subscribers for battle events");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BattleEvent> {
        self.tx.subscribe()
    }

    /// Number of events published so far.
    pub fn published(&self) -> u64 {
        self.published
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationPort for EventBus {
    fn emit(&mut self, event: BattleEvent) {
        match &event {
            BattleEvent::FloorLoaded { floor, layout, enemies } => {
                tracing::info!(floor, layout = %layout, enemies = enemies.len(), "floor loaded");
            }
            BattleEvent::FloorCleared { floor, boss } => {
                tracing::info!(floor, boss, "floor cleared");
            }
            BattleEvent::RunDefeated { floor } => tracing::info!(floor, "run defeated"),
            BattleEvent::RunCompleted { floor, gold } => {
                tracing::info!(floor, gold, "run completed");
            }
            other => tracing::debug!(?other, "battle event"),
        }
        self.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_receive_events_in_order() {
        let mut bus = EventBus::with_capacity(8);
        let mut rx = bus.subscribe();

        bus.on_player_turn_started(1);
        bus.on_enemy_turn_started(0, 2);

        assert_eq!(
            rx.recv().await.unwrap(),
            BattleEvent::PlayerTurnStarted { turn: 1 }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            BattleEvent::EnemyTurnStarted { enemy: 0, turn: 2 }
        );
        assert_eq!(bus.published(), 2);
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let mut bus = EventBus::new();
        bus.on_run_defeated(3);
        assert_eq!(bus.published(), 1);
    }
}
