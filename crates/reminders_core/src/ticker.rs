//! Marquee state for the "show in ticker" action.
//!
//! Every `show` arms a fresh deactivation timer tagged with a generation.
//! The timer does not touch the state itself: it posts its generation back
//! to whoever owns the controller, and `expire` only clears the display if
//! that generation is still the current one and its deadline has passed. A
//! late expiry from an earlier `show` therefore never hides a later one, and
//! nothing can hide the ticker early.

use std::time::Duration;

use shared::protocol::TickerSnapshot;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{sleep_until, Instant},
};
use tracing::{debug, info};

pub const TICKER_DISPLAY_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TickerState {
    #[default]
    Idle,
    Showing {
        title: String,
        expires_at: Instant,
        generation: Generation,
    },
}

impl TickerState {
    pub fn is_showing(&self) -> bool {
        matches!(self, Self::Showing { .. })
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Showing { title, .. } => Some(title),
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        match self {
            Self::Idle => None,
            Self::Showing { expires_at, .. } => Some(*expires_at),
        }
    }

    /// True only once the deadline armed for `generation` has passed.
    fn due_for(&self, generation: Generation, now: Instant) -> bool {
        matches!(
            self,
            Self::Showing { generation: current, expires_at, .. }
                if *current == generation && now >= *expires_at
        )
    }
}

pub struct TickerController {
    state: TickerState,
    active: Vec<String>,
    generation: u64,
    armed: Option<JoinHandle<()>>,
    expiry_tx: mpsc::UnboundedSender<Generation>,
    expiry_rx: mpsc::UnboundedReceiver<Generation>,
}

impl Default for TickerController {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerController {
    pub fn new() -> Self {
        let (expiry_tx, expiry_rx) = mpsc::unbounded_channel();
        Self {
            state: TickerState::Idle,
            active: Vec::new(),
            generation: 0,
            armed: None,
            expiry_tx,
            expiry_rx,
        }
    }

    /// Shows `title` for [`TICKER_DISPLAY_DURATION`], replacing whatever was
    /// on the ticker. Must be called from within a tokio runtime.
    pub fn show(&mut self, title: impl Into<String>) -> Generation {
        let title = title.into();
        self.generation += 1;
        let generation = Generation(self.generation);
        let expires_at = Instant::now() + TICKER_DISPLAY_DURATION;

        if let Some(previous) = self.armed.take() {
            previous.abort();
        }

        let expiry_tx = self.expiry_tx.clone();
        self.armed = Some(tokio::spawn(async move {
            sleep_until(expires_at).await;
            // The controller may already be gone; nothing left to hide then.
            let _ = expiry_tx.send(generation);
        }));

        info!(generation = generation.0, title = %title, "ticker showing");
        self.active = vec![title.clone()];
        self.state = TickerState::Showing {
            title,
            expires_at,
            generation,
        };
        generation
    }

    /// Applies a fired deactivation. Returns the title that was dismissed,
    /// or `None` when the trigger is stale or its deadline has not passed.
    pub fn expire(&mut self, generation: Generation) -> Option<String> {
        if !self.state.due_for(generation, Instant::now()) {
            debug!(
                generation = generation.0,
                current = self.generation,
                "ignoring stale or early ticker expiry"
            );
            return None;
        }

        self.armed = None;
        self.active.clear();
        let title = match std::mem::take(&mut self.state) {
            TickerState::Showing { title, .. } => title,
            TickerState::Idle => return None,
        };
        info!(generation = generation.0, title = %title, "ticker dismissed");
        Some(title)
    }

    /// Waits for the next armed trigger to fire. Cancel safe, so it can sit
    /// in a `select!` next to other event sources.
    pub async fn next_expiry(&mut self) -> Generation {
        match self.expiry_rx.recv().await {
            Some(generation) => generation,
            // Unreachable while `self` holds a sender; park instead of spinning.
            None => std::future::pending().await,
        }
    }

    pub fn state(&self) -> &TickerState {
        &self.state
    }

    pub fn is_showing(&self) -> bool {
        self.state.is_showing()
    }

    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn snapshot(&self) -> TickerSnapshot {
        TickerSnapshot {
            is_showing: self.is_showing(),
            active: self.active.clone(),
        }
    }
}

impl Drop for TickerController {
    fn drop(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/ticker_tests.rs"]
mod tests;
