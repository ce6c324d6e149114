//! Glue code tying content, the runtime, and terminal output together.
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_content::{ContentBundle, ContentFactory};
use tower_core::CharacterClass;
use tower_runtime::{HeuristicProvider, Pacing, RunResult, RunSummary, Runtime, RuntimeConfig};

use crate::config::CliConfig;
use crate::input::StdinProvider;
use crate::presentation::{CliEventConsumer, OutputFormat};

/// Class played when autoplaying without `TOWER_CLASS`.
const AUTOPLAY_CLASS: CharacterClass = CharacterClass::Swordsman;

pub struct CliApp {
    config: CliConfig,
    content: Arc<ContentBundle>,
}

impl CliApp {
    /// Loads content from `TOWER_CONTENT_DIR` or falls back to the built-in
    /// tower.
    pub fn new(config: CliConfig) -> Result<Self> {
        let content = match &config.content_dir {
            Some(dir) => ContentFactory::new(dir)
                .load_bundle()
                .with_context(|| format!("loading content from {}", dir.display()))?,
            None => ContentBundle::builtin().context("loading built-in content")?,
        };
        tracing::info!(floors = content.floor_count(), "content loaded");

        Ok(Self {
            config,
            content: Arc::new(content),
        })
    }

    pub async fn run(self) -> Result<()> {
        let runtime_config = RuntimeConfig {
            game_config: self.content.config.clone(),
            pacing: self
                .config
                .pacing_ms
                .map(Pacing::from_action_millis)
                .unwrap_or_default(),
            seed: self.config.seed,
            ..RuntimeConfig::default()
        };
        let builder = Runtime::builder()
            .config(runtime_config)
            .content(Arc::clone(&self.content));

        let (class, mut runtime) = if self.config.autoplay {
            let class = self.config.class.unwrap_or(AUTOPLAY_CLASS);
            (class, builder.player_provider(HeuristicProvider::new()).build()?)
        } else {
            let provider = StdinProvider::new();
            let class = match self.config.class {
                Some(class) => class,
                None => provider.choose_class().await?,
            };
            (class, builder.player_provider(provider).build()?)
        };

        let format = if self.config.events_json {
            OutputFormat::JsonLines
        } else {
            OutputFormat::Text
        };
        let output = tokio::spawn(CliEventConsumer::new(format).run(runtime.subscribe_events()));

        let result = tokio::select! {
            result = runtime.play_run(class) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };

        // Closing the bus lets the output task drain and finish.
        drop(runtime);
        output.await.context("event output task panicked")??;

        match result {
            Some(summary) => self.report(&summary?),
            None => {
                tracing::info!("interrupted");
                Ok(())
            }
        }
    }

    fn report(&self, summary: &RunSummary) -> Result<()> {
        if self.config.events_json {
            println!("{}", serde_json::to_string(summary)?);
            return Ok(());
        }

        let verdict = match summary.result {
            RunResult::Completed => "conquered the tower",
            RunResult::Defeated => "fell",
        };
        println!(
            "\n{} {} on floor {} with {} gold after {} turns (seed {}).",
            summary.class, verdict, summary.floor, summary.gold, summary.player_turns, summary.seed
        );
        Ok(())
    }
}
