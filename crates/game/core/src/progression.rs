//! Floor progression: win/loss detection and what happens after.
//!
//! [`evaluate_outcome`] inspects a session without touching it. Once a battle
//! is over, [`ProgressionController::conclude`] turns the outcome into the
//! next [`RunStage`]: a shop interlude, a completed run, or a defeat.

use crate::config::GameConfig;
use crate::env::{BestiaryOracle, FloorOracle, OracleError};
use crate::port::PresentationPort;
use crate::state::{BattleSession, EnemyInstance, Player, Roster};

/// Result of checking a battle after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Both sides still stand.
    Ongoing,
    /// The player reached 0 HP on `floor`.
    Defeat { floor: u32 },
    /// Every enemy reached 0 HP. A boss in the roster ends the run.
    FloorCleared { boss: bool },
}

/// Checks whether the battle is over. Pure and idempotent.
///
/// The player is checked first. Only one combatant acts at a time, so both
/// sides can never fall on the same action.
pub fn evaluate_outcome(session: &BattleSession) -> Outcome {
    if !session.player().is_alive() {
        Outcome::Defeat {
            floor: session.player().floor,
        }
    } else if session.all_enemies_defeated() {
        Outcome::FloorCleared {
            boss: session.has_boss(),
        }
    } else {
        Outcome::Ongoing
    }
}

/// Where a run currently is.
///
/// ```text
/// Menu ─start─▶ Battle ─cleared─▶ ShopInterlude ─leave─▶ Battle ...
///                  │
///                  ├─boss cleared─▶ Completed
///                  └─player down──▶ Defeated
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStage {
    /// No run in progress.
    #[default]
    Menu,
    Battle(BattleSession),
    /// Between floors. `player.floor` is already the next floor.
    ShopInterlude(Player),
    Completed(Player),
    Defeated { player: Player, floor: u32 },
}

impl RunStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStage::Menu => "menu",
            RunStage::Battle(_) => "battle",
            RunStage::ShopInterlude(_) => "shop_interlude",
            RunStage::Completed(_) => "completed",
            RunStage::Defeated { .. } => "defeated",
        }
    }

    /// The player, whichever stage holds it.
    pub fn player(&self) -> Option<&Player> {
        match self {
            RunStage::Menu => None,
            RunStage::Battle(session) => Some(session.player()),
            RunStage::ShopInterlude(player) | RunStage::Completed(player) => Some(player),
            RunStage::Defeated { player, .. } => Some(player),
        }
    }

    pub fn session(&self) -> Option<&BattleSession> {
        match self {
            RunStage::Battle(session) => Some(session),
            _ => None,
        }
    }

    /// True once the run has ended, either way.
    pub fn is_finished(&self) -> bool {
        matches!(self, RunStage::Completed(_) | RunStage::Defeated { .. })
    }
}

impl std::fmt::Display for RunStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies battle outcomes to the run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressionController {
    config: GameConfig,
}

impl ProgressionController {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Consumes a finished session and returns the next run stage.
    ///
    /// An [`Outcome::Ongoing`] hands the session back untouched.
    pub fn conclude(
        &self,
        session: BattleSession,
        outcome: Outcome,
        port: &mut dyn PresentationPort,
    ) -> RunStage {
        match outcome {
            Outcome::Ongoing => RunStage::Battle(session),
            Outcome::Defeat { floor } => {
                port.on_run_defeated(floor);
                RunStage::Defeated {
                    player: session.into_player(),
                    floor,
                }
            }
            Outcome::FloorCleared { boss: true } => {
                let floor = session.floor();
                let player = session.into_player();
                port.on_floor_cleared(floor, true);
                port.on_run_completed(floor, player.gold());
                RunStage::Completed(player)
            }
            Outcome::FloorCleared { boss: false } => {
                let cleared = session.floor();
                let mut player = session.into_player();
                player.floor = cleared + 1;
                player.stats.add_dice_sides(self.config.floor_dice_bonus);
                port.on_floor_cleared(cleared, false);
                port.on_shop_opened(cleared, player.gold());
                RunStage::ShopInterlude(player)
            }
        }
    }
}

/// Instantiates the roster for `floor_number`, returning it with the floor's
/// layout tag.
///
/// # Errors
///
/// Fails without side effects if the floor is missing or empty, lists more
/// enemies than a roster holds, or names an archetype the bestiary lacks or
/// that has no health.
pub fn build_roster(
    floor_number: u32,
    floors: &dyn FloorOracle,
    bestiary: &dyn BestiaryOracle,
) -> Result<(Roster, String), OracleError> {
    let definition = floors
        .floor(floor_number)
        .ok_or(OracleError::FloorNotFound(floor_number))?;

    if definition.enemies.is_empty() {
        return Err(OracleError::EmptyFloor(floor_number));
    }

    let mut roster = Roster::new();
    if definition.enemies.len() > roster.capacity() {
        return Err(OracleError::RosterTooLarge {
            floor: floor_number,
            requested: definition.enemies.len(),
            max: roster.capacity(),
        });
    }

    for (slot, id) in definition.enemies.iter().enumerate() {
        let template = bestiary
            .archetype(id)
            .ok_or_else(|| OracleError::ArchetypeNotFound(id.clone()))?;
        if template.max_hp == 0 {
            return Err(OracleError::ArchetypeWithoutHealth(id.clone()));
        }
        roster.push(EnemyInstance::spawn(slot, id.clone(), template));
    }

    Ok((roster, definition.layout.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FloorDefinition;
    use crate::port::EventLog;
    use crate::state::{ArchetypeId, CharacterClass, ClassProfile, EnemyArchetype};

    struct Floors(Vec<FloorDefinition>);

    impl FloorOracle for Floors {
        fn floor(&self, number: u32) -> Option<&FloorDefinition> {
            let index = usize::try_from(number).ok()?.checked_sub(1)?;
            self.0.get(index)
        }

        fn floor_count(&self) -> u32 {
            self.0.len() as u32
        }
    }

    struct Bestiary;

    impl BestiaryOracle for Bestiary {
        fn archetype(&self, id: &ArchetypeId) -> Option<&EnemyArchetype> {
            static SLIME: std::sync::OnceLock<EnemyArchetype> = std::sync::OnceLock::new();
            (id.as_str() == "slime").then(|| {
                SLIME.get_or_init(|| EnemyArchetype {
                    name: "Slime".into(),
                    max_hp: 15,
                    dice_sides: 10,
                    gold_reward: 50,
                    boss: false,
                })
            })
        }
    }

    fn floor(enemies: &[&str]) -> FloorDefinition {
        FloorDefinition::new(enemies.iter().copied().map(ArchetypeId::from), "floor-1")
    }

    fn session(player_hp: u32, enemy_hp: u32, boss: bool) -> BattleSession {
        let mut player = Player::new(
            CharacterClass::Swordsman,
            ClassProfile {
                max_hp: 30,
                heal_bonus: 0,
                dice_sides: 20,
            },
        );
        player.stats = player.stats.with_current_hp(player_hp);
        let archetype = EnemyArchetype {
            name: "Boss".into(),
            max_hp: 120,
            dice_sides: 10,
            gold_reward: 300,
            boss,
        };
        let mut enemy = EnemyInstance::spawn(0, "boss".into(), &archetype);
        enemy.stats = enemy.stats.with_current_hp(enemy_hp);
        let mut roster = Roster::new();
        roster.push(enemy);
        BattleSession::new(player, roster, "floor-3")
    }

    #[test]
    fn outcome_is_idempotent() {
        for (player_hp, enemy_hp) in [(10, 10), (0, 10), (10, 0)] {
            let session = session(player_hp, enemy_hp, false);
            let before = session.clone();
            let first = evaluate_outcome(&session);
            assert_eq!(evaluate_outcome(&session), first);
            assert_eq!(session, before);
        }
    }

    #[test]
    fn defeat_keeps_floor() {
        let controller = ProgressionController::default();
        let mut log = EventLog::new();
        let session = session(0, 10, false);

        let outcome = evaluate_outcome(&session);
        assert_eq!(outcome, Outcome::Defeat { floor: 1 });

        let stage = controller.conclude(session, outcome, &mut log);
        assert!(matches!(stage, RunStage::Defeated { floor: 1, ref player } if player.floor == 1));
        assert_eq!(log.names(), ["run_defeated"]);
    }

    #[test]
    fn clearing_advances_floor_and_dice() {
        let controller = ProgressionController::new(GameConfig::with_floor_dice_bonus(4));
        let mut log = EventLog::new();
        let session = session(30, 0, false);

        let outcome = evaluate_outcome(&session);
        let stage = controller.conclude(session, outcome, &mut log);

        let RunStage::ShopInterlude(player) = stage else {
            panic!("expected shop interlude");
        };
        assert_eq!(player.floor, 2);
        assert_eq!(player.stats.dice_sides(), 24);
        assert_eq!(log.names(), ["floor_cleared", "shop_opened"]);
    }

    #[test]
    fn boss_clear_completes_run() {
        let controller = ProgressionController::default();
        let mut log = EventLog::new();
        let session = session(30, 0, true);

        let outcome = evaluate_outcome(&session);
        assert_eq!(outcome, Outcome::FloorCleared { boss: true });

        let stage = controller.conclude(session, outcome, &mut log);
        assert!(matches!(stage, RunStage::Completed(ref player) if player.floor == 1));
        assert_eq!(log.names(), ["floor_cleared", "run_completed"]);
    }

    #[test]
    fn ongoing_returns_session() {
        let controller = ProgressionController::default();
        let session = session(30, 5, false);
        let stage = controller.conclude(session.clone(), Outcome::Ongoing, &mut EventLog::new());
        assert_eq!(stage, RunStage::Battle(session));
    }

    #[test]
    fn roster_follows_floor_order() {
        let floors = Floors(vec![floor(&["slime", "slime"])]);
        let (roster, layout) = build_roster(1, &floors, &Bestiary).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].slot, 1);
        assert_eq!(layout, "floor-1");
    }

    #[test]
    fn roster_errors() {
        let floors = Floors(vec![
            floor(&[]),
            floor(&["slime", "slime", "slime", "slime"]),
            floor(&["dragon"]),
        ]);

        assert_eq!(
            build_roster(0, &floors, &Bestiary),
            Err(OracleError::FloorNotFound(0))
        );
        assert_eq!(
            build_roster(9, &floors, &Bestiary),
            Err(OracleError::FloorNotFound(9))
        );
        assert_eq!(
            build_roster(1, &floors, &Bestiary),
            Err(OracleError::EmptyFloor(1))
        );
        assert!(matches!(
            build_roster(2, &floors, &Bestiary),
            Err(OracleError::RosterTooLarge {
                requested: 4,
                max: 3,
                ..
            })
        ));
        assert_eq!(
            build_roster(3, &floors, &Bestiary),
            Err(OracleError::ArchetypeNotFound("dragon".into()))
        );
    }

    #[test]
    fn roster_rejects_archetype_without_health() {
        struct Husks(EnemyArchetype);

        impl BestiaryOracle for Husks {
            fn archetype(&self, _id: &ArchetypeId) -> Option<&EnemyArchetype> {
                Some(&self.0)
            }
        }

        let husks = Husks(EnemyArchetype {
            name: "Husk".into(),
            max_hp: 0,
            dice_sides: 10,
            gold_reward: 50,
            boss: false,
        });
        let floors = Floors(vec![floor(&["husk"])]);

        assert_eq!(
            build_roster(1, &floors, &husks),
            Err(OracleError::ArchetypeWithoutHealth("husk".into()))
        );
    }
}
