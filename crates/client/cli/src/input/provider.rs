//! Player provider reading decisions from stdin.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tower_core::{BattleSession, CharacterClass, Player, PlayerActionKind, ShopItem};
use tower_runtime::{PlayerProvider, Result, RuntimeError, ShopDecision};

use super::{parse_action, parse_class, parse_shop};

/// Prompts on stdout and reads one command per line from stdin.
pub struct StdinProvider {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdinProvider {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Asks for a class until a valid one is entered.
    pub async fn choose_class(&self) -> Result<CharacterClass> {
        let text = "Choose your class:\n  1. Thief      20 HP, d25\n  2. Mage       22 HP, d20, +2 heal\n  3. Swordsman  30 HP, d20\n> ";
        loop {
            let line = self.prompt(text).await?;
            if let Some(class) = parse_class(&line) {
                return Ok(class);
            }
        }
    }

    async fn prompt(&self, text: &str) -> Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await.map_err(provider_io)?;
        stdout.flush().await.map_err(provider_io)?;

        self.lines
            .lock()
            .await
            .next_line()
            .await
            .map_err(provider_io)?
            .ok_or(RuntimeError::InputClosed)
    }
}

impl Default for StdinProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn provider_io(err: std::io::Error) -> RuntimeError {
    RuntimeError::Provider(err.to_string())
}

#[async_trait]
impl PlayerProvider for StdinProvider {
    async fn choose_action(&self, session: &BattleSession) -> Result<PlayerActionKind> {
        let player = session.player();
        let text = format!(
            "[floor {}] HP {} | d{} | {} gold > [a]ttack or [h]eal: ",
            session.floor(),
            player.stats.health,
            player.stats.dice_sides(),
            player.gold(),
        );
        loop {
            let line = self.prompt(&text).await?;
            match parse_action(&line) {
                Some(kind) => return Ok(kind),
                None => tracing::debug!(input = %line.trim(), "unrecognised battle command"),
            }
        }
    }

    async fn shop(&self, player: &Player, items: &[ShopItem]) -> Result<ShopDecision> {
        let mut text = format!("\n-- Shop -- {} gold, HP {}\n", player.gold(), player.stats.health);
        for (index, item) in items.iter().enumerate() {
            text.push_str(&format!(
                "  {}. {:<16} {:>4}g  {}\n",
                index + 1,
                item.name,
                item.cost,
                item.description
            ));
        }
        text.push_str("Buy (number or id), or press enter to climb on: ");

        loop {
            let line = self.prompt(&text).await?;
            match parse_shop(&line, items) {
                Some(decision) => return Ok(decision),
                None => tracing::debug!(input = %line.trim(), "unrecognised shop command"),
            }
        }
    }
}
