//! High-level runtime orchestrator.
//!
//! The runtime owns the content, the random source, and the event bus, and
//! plays whole runs: it asks the [`PlayerProvider`] for decisions, feeds them
//! to the engine, and honours the pacing delays between actions that the
//! engine itself never waits for.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tower_content::ContentBundle;
use tower_core::{
    BattleEvent, CharacterClass, EnemyPolicy, EngineContext, ErrorSeverity, FixedOddsPolicy,
    GameConfig, GameEnv, GameError, GameRun, PcgRng, Phase, RunError, RunStage, Step,
};

use crate::api::{PlayerProvider, Result, RuntimeError, ShopDecision};
use crate::events::EventBus;

/// Host-side delays between engine steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Time for an action to land before the settle event.
    pub action: Duration,
    /// Pause between a settle and the next enemy turn.
    pub settle: Duration,
}

impl Pacing {
    pub const DEFAULT_ACTION: Duration = Duration::from_millis(1000);
    pub const DEFAULT_SETTLE: Duration = Duration::from_millis(300);

    /// No delays at all. Used by tests and headless simulation.
    pub const fn instant() -> Self {
        Self {
            action: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }

    /// Both delays scaled from a single action delay.
    pub fn from_action_millis(millis: u64) -> Self {
        Self {
            action: Duration::from_millis(millis),
            settle: Duration::from_millis(millis.saturating_mul(3) / 10),
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            action: Self::DEFAULT_ACTION,
            settle: Self::DEFAULT_SETTLE,
        }
    }
}

/// Runtime configuration shared across the orchestrator.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub pacing: Pacing,
    pub event_buffer_size: usize,
    /// Seed for the run's random source. A random seed is drawn when unset.
    pub seed: Option<u64>,
    /// Safety valve against providers that never finish a run.
    pub max_player_turns: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            pacing: Pacing::default(),
            event_buffer_size: 256,
            seed: None,
            max_player_turns: 10_000,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunResult {
    Completed,
    Defeated,
}

/// Final numbers of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    pub class: CharacterClass,
    pub seed: u64,
    pub result: RunResult,
    /// Floor the run ended on.
    pub floor: u32,
    pub gold: u32,
    pub player_turns: u64,
    pub events: u64,
}

/// Upper bound on purchases per shop visit.
const MAX_SHOP_ACTIONS: usize = 32;

/// Main runtime that plays runs against a content bundle.
pub struct Runtime {
    config: RuntimeConfig,
    content: Arc<ContentBundle>,
    provider: Box<dyn PlayerProvider>,
    policy: Box<dyn EnemyPolicy>,
    bus: EventBus,
    rng: PcgRng,
    seed: u64,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Subscribe to battle events
    pub fn subscribe_events(&self) -> broadcast::Receiver<BattleEvent> {
        self.bus.subscribe()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentBundle {
        &self.content
    }

    /// Plays a full run with `class` until it is completed or lost.
    pub async fn play_run(&mut self, class: CharacterClass) -> Result<RunSummary> {
        let content = Arc::clone(&self.content);
        let env = content.env();
        let mut run = GameRun::new(self.config.game_config.clone());
        let events_before = self.bus.published();
        let mut player_turns = 0u64;

        tracing::info!(%class, seed = self.seed, "starting run");
        run.start(class, &env, &mut self.bus)?;

        loop {
            match run.stage() {
                RunStage::Battle(session) => {
                    if player_turns >= self.config.max_player_turns {
                        return Err(RuntimeError::TurnLimit {
                            limit: self.config.max_player_turns,
                        });
                    }
                    let kind = self.provider.choose_action(session).await?;
                    player_turns += 1;
                    tracing::debug!(%kind, floor = session.floor(), "player action");

                    let step = self.dispatch(&mut run, |run, ctx| {
                        run.submit_player_action(kind, ctx)
                    })?;
                    self.drive_until_player(&mut run, step).await?;
                }
                RunStage::ShopInterlude(_) => {
                    self.visit_shop(&mut run, &env).await?;
                }
                RunStage::Completed(_) | RunStage::Defeated { .. } => break,
                RunStage::Menu => return Err(RuntimeError::Run(invalid_menu())),
            }
        }

        let summary = self.summarize(&run, class, player_turns, events_before);
        tracing::info!(result = ?summary.result, floor = summary.floor, gold = summary.gold, "run finished");
        Ok(summary)
    }

    /// Settles actions and runs enemy turns until the player is up again or
    /// the battle resolves.
    async fn drive_until_player(&mut self, run: &mut GameRun, mut step: Step) -> Result<Step> {
        loop {
            step = match step {
                Step::AwaitPlayer | Step::Resolved(_) => return Ok(step),
                Step::AwaitSettle => {
                    pause(self.config.pacing.action).await;
                    self.dispatch(run, |run, _| run.complete_action())?
                }
                Step::EnemyTurnDue => {
                    pause(self.config.pacing.settle).await;
                    self.dispatch(run, |run, ctx| run.advance_enemy_turn(ctx))?
                }
            };
            tracing::trace!(?step, "step");
        }
    }

    async fn visit_shop(&mut self, run: &mut GameRun, env: &GameEnv<'_>) -> Result<()> {
        let items = env.shop().map_err(RunError::from)?.items();

        for _ in 0..MAX_SHOP_ACTIONS {
            let Some(player) = run.player() else { break };
            match self.provider.shop(player, items).await? {
                ShopDecision::Buy(id) => match run.purchase(&id, env, &mut self.bus) {
                    Ok(gold) => tracing::info!(item = %id, gold, "purchased"),
                    Err(err) if err.severity() != ErrorSeverity::Fatal => {
                        tracing::warn!(item = %id, code = err.error_code(), "purchase rejected: {err}");
                    }
                    Err(err) => return Err(err.into()),
                },
                ShopDecision::Leave => break,
            }
        }

        run.leave_shop(env, &mut self.bus)?;
        Ok(())
    }

    /// Runs one engine command. Recoverable rejections (late or duplicate
    /// commands) are logged and dropped; the returned step is then derived
    /// from the current phase.
    fn dispatch<F>(&mut self, run: &mut GameRun, command: F) -> Result<Step>
    where
        F: FnOnce(&mut GameRun, &mut EngineContext<'_>) -> std::result::Result<Step, RunError>,
    {
        let mut ctx = EngineContext::new(&mut self.rng, &mut self.bus, self.policy.as_ref());
        match command(run, &mut ctx) {
            Ok(step) => Ok(step),
            Err(err) if err.severity().is_recoverable() => {
                tracing::warn!(code = err.error_code(), "dropped command: {err}");
                Ok(resume_step(run))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn summarize(
        &self,
        run: &GameRun,
        class: CharacterClass,
        player_turns: u64,
        events_before: u64,
    ) -> RunSummary {
        let (result, floor) = match run.stage() {
            RunStage::Completed(player) => (RunResult::Completed, player.floor),
            RunStage::Defeated { floor, .. } => (RunResult::Defeated, *floor),
            _ => (RunResult::Defeated, run.player().map_or(0, |p| p.floor)),
        };
        RunSummary {
            class,
            seed: self.seed,
            result,
            floor,
            gold: run.player().map_or(0, |p| p.gold()),
            player_turns,
            events: self.bus.published() - events_before,
        }
    }
}

/// Step implied by the current phase, used after a dropped command.
fn resume_step(run: &GameRun) -> Step {
    match run.session().map(|session| session.phase()) {
        Some(Phase::PlayerActing | Phase::EnemyActing) => Step::AwaitSettle,
        Some(Phase::EnemyTurnIdle) => Step::EnemyTurnDue,
        _ => Step::AwaitPlayer,
    }
}

fn invalid_menu() -> RunError {
    RunError::InvalidStage {
        command: "play_run",
        stage: "menu",
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<Arc<ContentBundle>>,
    provider: Option<Box<dyn PlayerProvider>>,
    policy: Option<Box<dyn EnemyPolicy>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            provider: None,
            policy: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required content bundle
    pub fn content(mut self, content: impl Into<Arc<ContentBundle>>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set required player provider
    pub fn player_provider(mut self, provider: impl PlayerProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Replace the default enemy policy
    pub fn enemy_policy(mut self, policy: impl EnemyPolicy + 'static) -> Self {
        self.policy = Some(Box::new(policy));
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn pacing(mut self, pacing: Pacing) -> Self {
        self.config.pacing = pacing;
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let content = self.content.ok_or(RuntimeError::MissingContent)?;
        let provider = self.provider.ok_or(RuntimeError::ProviderNotSet)?;
        let policy = self.policy.unwrap_or_else(|| Box::new(FixedOddsPolicy));
        let seed = self.config.seed.unwrap_or_else(rand::random);

        Ok(Runtime {
            bus: EventBus::with_capacity(self.config.event_buffer_size),
            rng: PcgRng::new(seed),
            seed,
            config: self.config,
            content,
            provider,
            policy,
        })
    }
}
