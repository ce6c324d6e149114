//! The battle state machine.

use crate::combat::{CombatError, resolve_attack, resolve_heal, resolve_player_attack};
use crate::env::RandomSource;
use crate::policy::{EnemyAction, EnemyPolicy};
use crate::port::PresentationPort;
use crate::progression::{Outcome, evaluate_outcome};
use crate::state::{BattleResult, BattleSession, CombatantId, Phase};

use super::errors::{BattleError, Command};

/// The two actions a player can take.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerActionKind {
    Attack,
    Heal,
}

/// What the host should schedule after a command succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Waiting for the player to submit an action.
    AwaitPlayer,
    /// An action resolved; call `complete_action` once it has been shown.
    AwaitSettle,
    /// Call `advance_enemy_turn`.
    EnemyTurnDue,
    /// The battle is over.
    Resolved(Outcome),
}

/// Collaborators the scheduler needs to resolve actions.
pub struct EngineContext<'c> {
    pub rng: &'c mut dyn RandomSource,
    pub port: &'c mut dyn PresentationPort,
    pub policy: &'c dyn EnemyPolicy,
}

impl<'c> EngineContext<'c> {
    pub fn new(
        rng: &'c mut dyn RandomSource,
        port: &'c mut dyn PresentationPort,
        policy: &'c dyn EnemyPolicy,
    ) -> Self {
        Self { rng, port, policy }
    }
}

/// Drives one [`BattleSession`] through its phases.
///
/// Every command validates the current phase first and is rejected without
/// touching the session if it does not apply. Every action that changes HP is
/// followed by an outcome check before anything else is scheduled.
pub struct TurnScheduler<'a> {
    session: &'a mut BattleSession,
}

impl<'a> TurnScheduler<'a> {
    pub fn new(session: &'a mut BattleSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &BattleSession {
        self.session
    }

    /// Starts (or re-announces) the player's turn.
    ///
    /// Valid from `PlayerTurnIdle`, or from `EnemyTurnIdle` once every enemy
    /// has had its turn this round. Re-announcing a turn that already started
    /// repeats its number instead of counting a new one.
    pub fn begin_player_turn(
        &mut self,
        port: &mut dyn PresentationPort,
    ) -> Result<Step, BattleError> {
        let command = Command::BeginPlayerTurn;
        self.ensure_active(command)?;

        match self.session.turn.phase {
            Phase::PlayerTurnIdle if self.session.turn.turn_number > 0 => {
                port.on_player_turn_started(self.session.turn.turn_number);
                return Ok(Step::AwaitPlayer);
            }
            Phase::PlayerTurnIdle => {}
            Phase::EnemyTurnIdle if self.session.next_living_from_cursor().is_none() => {}
            phase => return Err(BattleError::invalid_state(phase, command)),
        }

        self.start_player_turn(port);
        Ok(Step::AwaitPlayer)
    }

    /// Resolves the player's attack or heal.
    pub fn submit_player_action(
        &mut self,
        kind: PlayerActionKind,
        ctx: &mut EngineContext<'_>,
    ) -> Result<Step, BattleError> {
        let command = Command::SubmitPlayerAction;
        self.ensure_active(command)?;
        self.ensure_phase(Phase::PlayerTurnIdle, command)?;

        self.session.turn.phase = Phase::PlayerActing;
        let session = &mut *self.session;

        match kind {
            PlayerActionKind::Attack => {
                match resolve_player_attack(&mut *ctx.rng, &mut session.player, &mut session.roster)
                {
                    Ok(strike) => {
                        ctx.port.on_damage_resolved(
                            CombatantId::Player,
                            CombatantId::Enemy(strike.target),
                            strike.attack.damage,
                            strike.attack.hp_after,
                        );
                        if strike.attack.defeated {
                            ctx.port
                                .on_enemy_defeated(strike.target, strike.gold_awarded.unwrap_or(0));
                        }
                    }
                    // Nothing to hit: fall through to the outcome check.
                    Err(CombatError::NoLivingTarget) => {}
                }
            }
            PlayerActionKind::Heal => {
                let heal = resolve_heal(&mut *ctx.rng, &mut session.player.stats);
                ctx.port
                    .on_heal_resolved(CombatantId::Player, heal.amount, heal.hp_after);
            }
        }

        Ok(self.settle_or_resolve())
    }

    /// Runs the next living enemy's turn, or hands the turn back to the
    /// player when the round is exhausted.
    pub fn advance_enemy_turn(&mut self, ctx: &mut EngineContext<'_>) -> Result<Step, BattleError> {
        let command = Command::AdvanceEnemyTurn;
        self.ensure_active(command)?;
        self.ensure_phase(Phase::EnemyTurnIdle, command)?;

        let Some(slot) = self.session.next_living_from_cursor() else {
            self.start_player_turn(ctx.port);
            return Ok(Step::AwaitPlayer);
        };

        let session = &mut *self.session;
        session.turn.phase = Phase::EnemyActing;
        session.turn.turn_number += 1;
        ctx.port.on_enemy_turn_started(slot, session.turn.turn_number);

        match ctx.policy.decide(&mut *ctx.rng, &session.roster[slot]) {
            EnemyAction::Attack => {
                let attack = resolve_attack(
                    &mut *ctx.rng,
                    &session.roster[slot].stats,
                    &mut session.player.stats,
                );
                ctx.port.on_damage_resolved(
                    CombatantId::Enemy(slot),
                    CombatantId::Player,
                    attack.damage,
                    attack.hp_after,
                );
            }
            EnemyAction::Heal => {
                let heal = resolve_heal(&mut *ctx.rng, &mut session.roster[slot].stats);
                ctx.port
                    .on_heal_resolved(CombatantId::Enemy(slot), heal.amount, heal.hp_after);
            }
        }

        session.turn.enemy_cursor = slot + 1;
        Ok(self.settle_or_resolve())
    }

    /// The presentation finished showing the last action.
    pub fn complete_action(&mut self) -> Result<Step, BattleError> {
        let command = Command::CompleteAction;
        self.ensure_active(command)?;

        match self.session.turn.phase {
            Phase::PlayerActing | Phase::EnemyActing => {
                self.session.turn.phase = Phase::EnemyTurnIdle;
                Ok(Step::EnemyTurnDue)
            }
            phase => Err(BattleError::invalid_state(phase, command)),
        }
    }

    fn start_player_turn(&mut self, port: &mut dyn PresentationPort) {
        let turn = &mut self.session.turn;
        turn.enemy_cursor = 0;
        turn.phase = Phase::PlayerTurnIdle;
        turn.turn_number += 1;
        port.on_player_turn_started(turn.turn_number);
    }

    fn settle_or_resolve(&mut self) -> Step {
        match evaluate_outcome(self.session) {
            Outcome::Ongoing => Step::AwaitSettle,
            outcome => {
                let result = match outcome {
                    Outcome::Defeat { .. } => BattleResult::Defeat,
                    _ => BattleResult::Victory,
                };
                self.session.turn.phase = Phase::Resolved(result);
                Step::Resolved(outcome)
            }
        }
    }

    fn ensure_active(&self, command: Command) -> Result<(), BattleError> {
        if self.session.is_active() {
            Ok(())
        } else {
            Err(BattleError::SessionResolved { command })
        }
    }

    fn ensure_phase(&self, expected: Phase, command: Command) -> Result<(), BattleError> {
        let phase = self.session.turn.phase;
        if phase == expected {
            Ok(())
        } else {
            Err(BattleError::invalid_state(phase, command))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRandom;
    use crate::policy::FixedOddsPolicy;
    use crate::port::{BattleEvent, EventLog};
    use crate::state::{
        CharacterClass, ClassProfile, EnemyArchetype, EnemyInstance, Player, Roster,
    };

    fn session(enemy_hp: &[u32]) -> BattleSession {
        let player = Player::new(
            CharacterClass::Thief,
            ClassProfile {
                max_hp: 20,
                heal_bonus: 0,
                dice_sides: 25,
            },
        );
        let archetype = EnemyArchetype {
            name: "Slime".into(),
            max_hp: 15,
            dice_sides: 10,
            gold_reward: 50,
            boss: false,
        };
        let mut roster = Roster::new();
        for (slot, &hp) in enemy_hp.iter().enumerate() {
            let mut enemy = EnemyInstance::spawn(slot, "slime".into(), &archetype);
            enemy.stats = enemy.stats.with_current_hp(hp);
            roster.push(enemy);
        }
        BattleSession::new(player, roster, "floor-1")
    }

    #[test]
    fn enemy_round_skips_dead_without_consuming_turns() {
        let mut session = session(&[0, 15, 15]);
        session.turn.phase = Phase::EnemyTurnIdle;
        let mut rng = ScriptedRandom::with_rolls([2, 3]).and_draws([0.1, 0.1]);
        let mut log = EventLog::new();
        let policy = FixedOddsPolicy;
        let mut ctx = EngineContext::new(&mut rng, &mut log, &policy);
        let mut scheduler = TurnScheduler::new(&mut session);

        assert_eq!(scheduler.advance_enemy_turn(&mut ctx), Ok(Step::AwaitSettle));
        assert_eq!(scheduler.session().enemy_cursor(), 2);
        assert_eq!(scheduler.complete_action(), Ok(Step::EnemyTurnDue));
        assert_eq!(scheduler.advance_enemy_turn(&mut ctx), Ok(Step::AwaitSettle));
        assert_eq!(scheduler.complete_action(), Ok(Step::EnemyTurnDue));
        // Round exhausted: the player is up again.
        assert_eq!(scheduler.advance_enemy_turn(&mut ctx), Ok(Step::AwaitPlayer));
        assert_eq!(scheduler.session().enemy_cursor(), 0);
        assert_eq!(scheduler.session().phase(), Phase::PlayerTurnIdle);

        let started: Vec<_> = log
            .events()
            .iter()
            .filter_map(|event| match event {
                BattleEvent::EnemyTurnStarted { enemy, .. } => Some(*enemy),
                _ => None,
            })
            .collect();
        assert_eq!(started, [1, 2]);
        assert_eq!(session.player().stats.current_hp(), 15);
    }

    #[test]
    fn commands_in_the_wrong_phase_are_rejected() {
        let mut session = session(&[15]);
        let before = session.clone();
        let mut rng = ScriptedRandom::new();
        let mut log = EventLog::new();
        let policy = FixedOddsPolicy;
        let mut ctx = EngineContext::new(&mut rng, &mut log, &policy);
        let mut scheduler = TurnScheduler::new(&mut session);

        assert_eq!(
            scheduler.advance_enemy_turn(&mut ctx),
            Err(BattleError::invalid_state(
                Phase::PlayerTurnIdle,
                Command::AdvanceEnemyTurn
            ))
        );
        assert_eq!(
            scheduler.complete_action(),
            Err(BattleError::invalid_state(
                Phase::PlayerTurnIdle,
                Command::CompleteAction
            ))
        );
        assert_eq!(session, before);
        assert!(log.events().is_empty());
    }

    #[test]
    fn player_cannot_act_twice_before_settle() {
        let mut session = session(&[15]);
        let mut rng = ScriptedRandom::with_rolls([1, 1]);
        let mut log = EventLog::new();
        let policy = FixedOddsPolicy;
        let mut ctx = EngineContext::new(&mut rng, &mut log, &policy);
        let mut scheduler = TurnScheduler::new(&mut session);

        assert_eq!(
            scheduler.submit_player_action(PlayerActionKind::Attack, &mut ctx),
            Ok(Step::AwaitSettle)
        );
        assert_eq!(
            scheduler.submit_player_action(PlayerActionKind::Attack, &mut ctx),
            Err(BattleError::invalid_state(
                Phase::PlayerActing,
                Command::SubmitPlayerAction
            ))
        );
        assert_eq!(session.roster()[0].stats.current_hp(), 14);
    }

    #[test]
    fn begin_player_turn_mid_round_is_rejected() {
        let mut session = session(&[15, 15]);
        session.turn.phase = Phase::EnemyTurnIdle;
        let mut log = EventLog::new();
        let mut scheduler = TurnScheduler::new(&mut session);

        assert_eq!(
            scheduler.begin_player_turn(&mut log),
            Err(BattleError::invalid_state(
                Phase::EnemyTurnIdle,
                Command::BeginPlayerTurn
            ))
        );
        assert!(log.events().is_empty());
    }

    #[test]
    fn resolved_session_rejects_everything() {
        let mut session = session(&[3]);
        let mut rng = ScriptedRandom::with_rolls([10]);
        let mut log = EventLog::new();
        let policy = FixedOddsPolicy;
        let mut ctx = EngineContext::new(&mut rng, &mut log, &policy);
        let mut scheduler = TurnScheduler::new(&mut session);

        let step = scheduler.submit_player_action(PlayerActionKind::Attack, &mut ctx);
        assert_eq!(step, Ok(Step::Resolved(Outcome::FloorCleared { boss: false })));

        let snapshot = scheduler.session().clone();
        assert!(matches!(
            scheduler.complete_action(),
            Err(BattleError::SessionResolved { .. })
        ));
        assert!(matches!(
            scheduler.advance_enemy_turn(&mut ctx),
            Err(BattleError::SessionResolved { .. })
        ));
        assert!(matches!(
            scheduler.begin_player_turn(ctx.port),
            Err(BattleError::SessionResolved { .. })
        ));
        assert_eq!(scheduler.session(), &snapshot);
        assert_eq!(
            session.phase(),
            Phase::Resolved(BattleResult::Victory)
        );
    }

    #[test]
    fn wounded_enemy_heals_itself() {
        let mut session = session(&[0, 5]);
        session.turn.phase = Phase::EnemyTurnIdle;
        let mut rng = ScriptedRandom::with_rolls([7]).and_draws([0.8]);
        let mut log = EventLog::new();
        let policy = FixedOddsPolicy;
        let mut ctx = EngineContext::new(&mut rng, &mut log, &policy);

        let step = TurnScheduler::new(&mut session).advance_enemy_turn(&mut ctx);

        assert_eq!(step, Ok(Step::AwaitSettle));
        // Enemies carry no heal bonus: ceil(7 / 2).
        assert_eq!(session.roster()[1].stats.current_hp(), 9);
        assert_eq!(session.player().stats.current_hp(), 20);
        assert_eq!(
            log.events(),
            [
                BattleEvent::EnemyTurnStarted { enemy: 1, turn: 1 },
                BattleEvent::HealResolved {
                    caster: CombatantId::Enemy(1),
                    amount: 4,
                    hp_after: 9,
                },
            ]
        );
    }

    #[test]
    fn attack_into_an_empty_roster_is_a_no_op() {
        let mut session = session(&[0, 0]);
        let before = session.clone();
        let mut rng = ScriptedRandom::with_rolls([5]);
        let mut log = EventLog::new();
        let policy = FixedOddsPolicy;
        let mut ctx = EngineContext::new(&mut rng, &mut log, &policy);

        for kind in [PlayerActionKind::Attack, PlayerActionKind::Heal] {
            assert_eq!(
                TurnScheduler::new(&mut session).submit_player_action(kind, &mut ctx),
                Err(BattleError::SessionResolved {
                    command: Command::SubmitPlayerAction
                })
            );
        }

        assert_eq!(session, before);
        assert!(log.events().is_empty());
        assert_eq!(rng.remaining_rolls(), 1);
    }

    #[test]
    fn fallen_player_cannot_act() {
        let mut session = session(&[15]);
        session.player.stats = session.player.stats.with_current_hp(0);
        let before = session.clone();
        let mut rng = ScriptedRandom::with_rolls([25]);
        let mut log = EventLog::new();
        let policy = FixedOddsPolicy;
        let mut ctx = EngineContext::new(&mut rng, &mut log, &policy);

        let step = TurnScheduler::new(&mut session)
            .submit_player_action(PlayerActionKind::Attack, &mut ctx);

        assert!(matches!(step, Err(BattleError::SessionResolved { .. })));
        assert_eq!(session, before);
        assert_eq!(session.player().gold(), 0);
        assert!(log.events().is_empty());
    }

    #[test]
    fn re_announcing_keeps_the_turn_number() {
        let mut session = session(&[15]);
        let mut log = EventLog::new();
        let mut scheduler = TurnScheduler::new(&mut session);

        assert_eq!(scheduler.begin_player_turn(&mut log), Ok(Step::AwaitPlayer));
        assert_eq!(scheduler.begin_player_turn(&mut log), Ok(Step::AwaitPlayer));

        assert_eq!(session.turn_number(), 1);
        assert_eq!(
            log.events(),
            [
                BattleEvent::PlayerTurnStarted { turn: 1 },
                BattleEvent::PlayerTurnStarted { turn: 1 },
            ]
        );
    }

    #[test]
    fn heal_reports_ceil_half() {
        let mut session = session(&[15]);
        session.player.stats = session.player.stats.with_current_hp(5);
        let mut rng = ScriptedRandom::with_rolls([7]);
        let mut log = EventLog::new();
        let policy = FixedOddsPolicy;
        let mut ctx = EngineContext::new(&mut rng, &mut log, &policy);

        TurnScheduler::new(&mut session)
            .submit_player_action(PlayerActionKind::Heal, &mut ctx)
            .unwrap();

        assert_eq!(session.player().stats.current_hp(), 9);
        assert_eq!(
            log.events(),
            [BattleEvent::HealResolved {
                caster: CombatantId::Player,
                amount: 4,
                hp_after: 9,
            }]
        );
    }
}
