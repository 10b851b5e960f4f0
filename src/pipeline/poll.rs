// src/pipeline/poll.rs

//! Poll orchestrator.
//!
//! One cycle: load watermark → fetch listing → select newest thread →
//! change detection → fetch body → rewrite → announce → persist
//! watermark. Cycles are strictly serialized; the loop awaits each cycle
//! before taking the next tick, and missed ticks are skipped, so the
//! watermark read-then-write is never concurrent with itself.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::board::{self, BoardClient, BoardSource};
use crate::error::Result;
use crate::markup::{self, InlineRewriter};
use crate::models::Config;
use crate::pipeline::should_announce;
use crate::services::{Announcer, Notifier};
use crate::storage::{FileWatermark, WatermarkStore};

/// Result of one completed poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Newest thread was at or below the watermark.
    UpToDate,
    /// The thread with this id was announced and the watermark advanced.
    Announced(u64),
}

/// Long-lived poller owning its HTTP clients, configuration, and
/// watermark store.
pub struct Poller {
    config: Config,
    board: Box<dyn BoardSource>,
    notifier: Box<dyn Announcer>,
    store: Box<dyn WatermarkStore>,
    rewriter: InlineRewriter,
}

impl Poller {
    /// Construct a poller from validated configuration.
    ///
    /// Fails when the webhook URL is missing; that is the one
    /// unrecoverable startup condition.
    pub fn new(config: Config) -> Result<Self> {
        let webhook_url = config.webhook_url()?;
        let board = Box::new(BoardClient::new(&config)?);
        let notifier = Box::new(Notifier::new(&config, webhook_url)?);
        let store = Box::new(FileWatermark::new(&config.storage.watermark_path));
        Ok(Self::from_parts(config, board, notifier, store))
    }

    /// Assemble a poller from explicit collaborators.
    pub fn from_parts(
        config: Config,
        board: Box<dyn BoardSource>,
        notifier: Box<dyn Announcer>,
        store: Box<dyn WatermarkStore>,
    ) -> Self {
        Self {
            config,
            board,
            notifier,
            store,
            rewriter: InlineRewriter::new(),
        }
    }

    /// Run the fixed-interval poll loop until the process is stopped.
    ///
    /// A failed cycle is logged and dropped; the next tick retries
    /// independently with no in-cycle retry.
    pub async fn run(&self) {
        let period = Duration::from_secs(self.config.poller.interval_secs);
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!(
            "polling '{}' every {}s",
            self.config.board.page_title,
            self.config.poller.interval_secs
        );

        loop {
            ticker.tick().await;
            match self.run_cycle().await {
                Ok(CycleOutcome::Announced(id)) => log::info!("announced thread {id}"),
                Ok(CycleOutcome::UpToDate) => log::debug!("no new threads"),
                Err(err) => log::warn!("poll cycle dropped: {err}"),
            }
        }
    }

    /// Execute a single poll cycle.
    ///
    /// The watermark is written only after the webhook post succeeds; any
    /// earlier failure leaves it untouched.
    pub async fn run_cycle(&self) -> Result<CycleOutcome> {
        let watermark = self.store.load().await?;

        let listing = self.board.fetch_listing().await?;
        let mut thread = board::newest_thread(&listing)?;

        if !should_announce(watermark, thread.id) {
            return Ok(CycleOutcome::UpToDate);
        }

        thread.body = self.board.fetch_thread_body(thread.id).await?;
        thread.body = markup::assemble(&thread.body, &self.rewriter);

        self.notifier.announce(&thread).await?;

        if let Err(err) = self.store.store(thread.id).await {
            // The message is already out; a swallowed failure here would
            // re-announce the same thread next cycle.
            log::error!(
                "watermark not persisted after announcing thread {}: {err}",
                thread.id
            );
            return Err(err);
        }

        Ok(CycleOutcome::Announced(thread.id))
    }
}
