//! Prints battle events as they arrive on the runtime bus.
use anyhow::Result;
use tokio::io::AsyncWriteExt;
use tokio::sync::broadcast::{self, error::RecvError};
use tower_core::{BattleEvent, CombatantId, RosterEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One JSON object per line.
    JsonLines,
}

pub struct CliEventConsumer {
    format: OutputFormat,
    roster: Vec<RosterEntry>,
}

impl CliEventConsumer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            roster: Vec::new(),
        }
    }

    /// Drains `events` until the bus closes, writing one line per event.
    pub async fn run(mut self, mut events: broadcast::Receiver<BattleEvent>) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        loop {
            let event = match events.recv().await {
                Ok(event) => event,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event output fell behind");
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let mut line = self.render(&event)?;
            line.push('\n');
            stdout.write_all(line.as_bytes()).await?;
            stdout.flush().await?;
        }
        Ok(())
    }

    pub fn render(&mut self, event: &BattleEvent) -> Result<String> {
        if let BattleEvent::FloorLoaded { enemies, .. } = event {
            self.roster = enemies.clone();
        }

        match self.format {
            OutputFormat::JsonLines => Ok(serde_json::to_string(event)?),
            OutputFormat::Text => Ok(self.describe(event)),
        }
    }

    fn describe(&self, event: &BattleEvent) -> String {
        match event {
            BattleEvent::FloorLoaded {
                floor,
                layout,
                enemies,
            } => {
                let names: Vec<_> = enemies
                    .iter()
                    .map(|e| format!("{} ({} HP)", e.name, e.max_hp))
                    .collect();
                format!(
                    "=== Floor {floor} [{layout}] ===\nEnemies: {}",
                    names.join(", ")
                )
            }
            BattleEvent::PlayerTurnStarted { turn } => format!("-- Turn {turn}: your move --"),
            BattleEvent::EnemyTurnStarted { enemy, .. } => {
                format!("{} acts.", self.name(CombatantId::Enemy(*enemy)))
            }
            BattleEvent::DamageResolved {
                source,
                target,
                amount,
                hp_after,
            } => format!(
                "{} hits {} for {amount} damage ({hp_after} HP left)",
                self.name(*source),
                self.name(*target),
            ),
            BattleEvent::HealResolved {
                caster,
                amount,
                hp_after,
            } => format!(
                "{} heals {amount} HP (now {hp_after})",
                self.name(*caster)
            ),
            BattleEvent::EnemyDefeated {
                enemy,
                gold_awarded,
            } => format!(
                "{} is defeated! +{gold_awarded} gold",
                self.name(CombatantId::Enemy(*enemy))
            ),
            BattleEvent::FloorCleared { floor, boss: true } => {
                format!("The boss of floor {floor} has fallen!")
            }
            BattleEvent::FloorCleared { floor, boss: false } => {
                format!("Floor {floor} cleared. Your dice grow stronger.")
            }
            BattleEvent::RunDefeated { floor } => format!("You fell on floor {floor}."),
            BattleEvent::RunCompleted { floor, gold } => {
                format!("Victory! The tower is conquered at floor {floor} with {gold} gold.")
            }
            BattleEvent::ShopOpened { gold, .. } => format!("The shop opens. You carry {gold} gold."),
            BattleEvent::ItemPurchased {
                item,
                gold_remaining,
            } => format!("Bought {item}. {gold_remaining} gold left."),
        }
    }

    fn name(&self, id: CombatantId) -> String {
        match id {
            CombatantId::Player => "You".to_owned(),
            CombatantId::Enemy(slot) => self
                .roster
                .iter()
                .find(|entry| entry.slot == slot)
                .map(|entry| entry.name.clone())
                .unwrap_or_else(|| id.to_string()),
        }
    }
}
