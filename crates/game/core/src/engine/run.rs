//! Run-level controller: class selection, floor loading, the shop, and
//! concluding battles.

use crate::config::GameConfig;
use crate::env::{GameEnv, OracleError};
use crate::port::PresentationPort;
use crate::progression::{ProgressionController, RunStage, build_roster};
use crate::shop::{self, ShopError};
use crate::state::{BattleSession, CharacterClass, Player};

use super::errors::{BattleError, Command, RunError};
use super::turns::{EngineContext, PlayerActionKind, Step, TurnScheduler};

/// A whole climb, from class selection to completion or defeat.
///
/// `GameRun` owns the current [`RunStage`]. Battle commands are forwarded to
/// a [`TurnScheduler`] over the active session; when a battle resolves, the
/// run concludes it immediately and moves to the next stage.
#[derive(Clone, Debug, Default)]
pub struct GameRun {
    stage: RunStage,
    progression: ProgressionController,
}

impl GameRun {
    pub fn new(config: GameConfig) -> Self {
        Self {
            stage: RunStage::Menu,
            progression: ProgressionController::new(config),
        }
    }

    pub fn stage(&self) -> &RunStage {
        &self.stage
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.stage.session()
    }

    pub fn player(&self) -> Option<&Player> {
        self.stage.player()
    }

    pub fn config(&self) -> &GameConfig {
        self.progression.config()
    }

    /// Starts a new run with `class` and loads the starting floor.
    ///
    /// Valid from the menu or after a finished run.
    pub fn start(
        &mut self,
        class: CharacterClass,
        env: &GameEnv<'_>,
        port: &mut dyn PresentationPort,
    ) -> Result<(), RunError> {
        if !matches!(self.stage, RunStage::Menu) && !self.stage.is_finished() {
            return Err(self.invalid_stage("start"));
        }

        let profile = env
            .classes()?
            .profile(class)
            .ok_or(OracleError::ClassNotFound(class))?;
        if !profile.is_playable() {
            return Err(OracleError::InvalidClassProfile(class).into());
        }
        let mut player = Player::new(class, profile);
        player.floor = self.config().starting_floor;

        let session = Self::open_floor(player, env)?;
        self.enter_battle(session, port)
    }

    /// Loads `floor_number` for the player waiting in the shop.
    ///
    /// On error the run stays in the shop.
    pub fn load_floor(
        &mut self,
        floor_number: u32,
        env: &GameEnv<'_>,
        port: &mut dyn PresentationPort,
    ) -> Result<(), RunError> {
        let RunStage::ShopInterlude(player) = &self.stage else {
            return Err(self.invalid_stage("load_floor"));
        };

        let floors = env.floors()?;
        let bestiary = env.bestiary()?;
        let (roster, layout) = build_roster(floor_number, floors, bestiary)?;

        let mut player = player.clone();
        player.floor = floor_number;
        self.enter_battle(BattleSession::new(player, roster, layout), port)
    }

    /// Leaves the shop and loads the player's next floor.
    pub fn leave_shop(
        &mut self,
        env: &GameEnv<'_>,
        port: &mut dyn PresentationPort,
    ) -> Result<(), RunError> {
        let floor = match &self.stage {
            RunStage::ShopInterlude(player) => player.floor,
            _ => return Err(self.invalid_stage("leave_shop")),
        };
        self.load_floor(floor, env, port)
    }

    /// Buys a shop item. Returns the gold left.
    pub fn purchase(
        &mut self,
        item_id: &str,
        env: &GameEnv<'_>,
        port: &mut dyn PresentationPort,
    ) -> Result<u32, RunError> {
        let stage = self.stage.as_str();
        let RunStage::ShopInterlude(player) = &mut self.stage else {
            return Err(ShopError::NotInShop {
                stage: stage.to_owned(),
            }
            .into());
        };

        let item = env
            .shop()?
            .item(item_id)
            .ok_or_else(|| ShopError::UnknownItem(item_id.to_owned()))?;
        let gold = shop::purchase(player, item)?;
        port.on_item_purchased(&item.id, gold);
        Ok(gold)
    }

    pub fn begin_player_turn(&mut self, port: &mut dyn PresentationPort) -> Result<Step, RunError> {
        let session = self.battle_mut("begin_player_turn")?;
        Ok(TurnScheduler::new(session).begin_player_turn(port)?)
    }

    pub fn submit_player_action(
        &mut self,
        kind: PlayerActionKind,
        ctx: &mut EngineContext<'_>,
    ) -> Result<Step, RunError> {
        let session = self.battle_mut("submit_player_action")?;
        let step = TurnScheduler::new(session).submit_player_action(kind, ctx)?;
        Ok(self.after_step(step, ctx.port))
    }

    pub fn advance_enemy_turn(&mut self, ctx: &mut EngineContext<'_>) -> Result<Step, RunError> {
        let session = self.battle_mut("advance_enemy_turn")?;
        let step = TurnScheduler::new(session).advance_enemy_turn(ctx)?;
        Ok(self.after_step(step, ctx.port))
    }

    pub fn complete_action(&mut self) -> Result<Step, RunError> {
        let session = self.battle_mut("complete_action")?;
        Ok(TurnScheduler::new(session).complete_action()?)
    }

    fn open_floor(player: Player, env: &GameEnv<'_>) -> Result<BattleSession, RunError> {
        let (roster, layout) = build_roster(player.floor, env.floors()?, env.bestiary()?)?;
        Ok(BattleSession::new(player, roster, layout))
    }

    /// Announces the floor and opens the first player turn. A session that
    /// is already decided is rejected before anything is emitted.
    fn enter_battle(
        &mut self,
        mut session: BattleSession,
        port: &mut dyn PresentationPort,
    ) -> Result<(), RunError> {
        if !session.is_active() {
            return Err(BattleError::SessionResolved {
                command: Command::BeginPlayerTurn,
            }
            .into());
        }
        port.on_floor_loaded(session.floor(), session.layout(), session.roster());
        TurnScheduler::new(&mut session).begin_player_turn(port)?;
        self.stage = RunStage::Battle(session);
        Ok(())
    }

    fn after_step(&mut self, step: Step, port: &mut dyn PresentationPort) -> Step {
        if let Step::Resolved(outcome) = step {
            self.stage = match std::mem::take(&mut self.stage) {
                RunStage::Battle(session) => self.progression.conclude(session, outcome, port),
                other => other,
            };
        }
        step
    }

    fn battle_mut(&mut self, command: &'static str) -> Result<&mut BattleSession, RunError> {
        match &mut self.stage {
            RunStage::Battle(session) => Ok(session),
            stage => Err(RunError::InvalidStage {
                command,
                stage: stage.as_str(),
            }),
        }
    }

    fn invalid_stage(&self, command: &'static str) -> RunError {
        RunError::InvalidStage {
            command,
            stage: self.stage.as_str(),
        }
    }
}
