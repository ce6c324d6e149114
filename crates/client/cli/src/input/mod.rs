//! Input processing for the CLI client.
//!
//! This module owns the text-to-command mapping so the provider only deals
//! with reading lines.

use std::str::FromStr;

use tower_core::{CharacterClass, PlayerActionKind, ShopItem};
use tower_runtime::ShopDecision;

pub mod provider;
pub use provider::StdinProvider;

/// Parses a battle command: `a`/`attack` or `h`/`heal`.
pub fn parse_action(line: &str) -> Option<PlayerActionKind> {
    match line.trim() {
        "a" | "A" => Some(PlayerActionKind::Attack),
        "h" | "H" => Some(PlayerActionKind::Heal),
        other => PlayerActionKind::from_str(other).ok(),
    }
}

/// Parses a shop command: an item number (1-based), an item id, or an empty
/// line / `leave` / `l` to move on.
pub fn parse_shop(line: &str, items: &[ShopItem]) -> Option<ShopDecision> {
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("leave") || line.eq_ignore_ascii_case("l") {
        return Some(ShopDecision::Leave);
    }

    if let Ok(index) = line.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| items.get(i))
            .map(|item| ShopDecision::Buy(item.id.clone()));
    }

    items
        .iter()
        .find(|item| item.id.eq_ignore_ascii_case(line))
        .map(|item| ShopDecision::Buy(item.id.clone()))
}

/// Parses a class by name or by its 1-based menu number.
pub fn parse_class(line: &str) -> Option<CharacterClass> {
    let line = line.trim();
    match line {
        "1" => Some(CharacterClass::Thief),
        "2" => Some(CharacterClass::Mage),
        "3" => Some(CharacterClass::Swordsman),
        _ => CharacterClass::from_str(line).ok(),
    }
}
