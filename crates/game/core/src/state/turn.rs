/// Phase of the battle state machine.
///
/// ```text
/// PlayerTurnIdle ─submit─▶ PlayerActing ─settle─▶ EnemyTurnIdle
///       ▲                                          │   ▲
///       └──────── round exhausted ─────────────────┘   │
///                                   advance            │ settle
///                                      ▼               │
///                                  EnemyActing ────────┘
///
/// any acting phase ─(player or whole roster at 0 HP)─▶ Resolved
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    PlayerTurnIdle,
    PlayerActing,
    EnemyTurnIdle,
    EnemyActing,
    Resolved(BattleResult),
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::PlayerTurnIdle => "player_turn_idle",
            Phase::PlayerActing => "player_acting",
            Phase::EnemyTurnIdle => "enemy_turn_idle",
            Phase::EnemyActing => "enemy_acting",
            Phase::Resolved(BattleResult::Victory) => "resolved_victory",
            Phase::Resolved(BattleResult::Defeat) => "resolved_defeat",
        }
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Phase::Resolved(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of a single battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleResult {
    Victory,
    Defeat,
}

/// Turn bookkeeping for one battle session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Monotonic count of turns started (player and enemy).
    pub turn_number: u64,

    /// Next roster slot to consider during the enemy round.
    /// Wraps to 0 only when a round is exhausted.
    pub enemy_cursor: usize,

    pub phase: Phase,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            turn_number: 0,
            enemy_cursor: 0,
            phase: Phase::PlayerTurnIdle,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
