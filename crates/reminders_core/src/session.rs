//! The reminders screen event loop.
//!
//! User intents and ticker expiries arrive on the same task, so the store
//! and the ticker are owned outright and never locked. Renderers watch
//! [`ScreenSnapshot`]s and listen for [`SessionNotice`]s.

use shared::{
    error::{IntentRejection, ReminderError},
    protocol::{Intent, ScreenSnapshot, SessionNotice},
};
use tokio::{
    sync::{broadcast, mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{error::SessionError, store::ReminderStore, ticker::TickerController};

const INTENT_QUEUE_CAPACITY: usize = 256;
const NOTICE_CAPACITY: usize = 64;

pub struct ReminderSession {
    store: ReminderStore,
    ticker: TickerController,
    intents: mpsc::Receiver<Intent>,
    snapshots: watch::Sender<ScreenSnapshot>,
    notices: broadcast::Sender<SessionNotice>,
}

impl ReminderSession {
    pub fn new(store: ReminderStore) -> (Self, mpsc::Sender<Intent>) {
        let (intent_tx, intents) = mpsc::channel(INTENT_QUEUE_CAPACITY);
        let initial = ScreenSnapshot {
            reminders: store.snapshot(),
            ticker: Default::default(),
        };
        let (snapshots, _) = watch::channel(initial);
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);

        let session = Self {
            store,
            ticker: TickerController::new(),
            intents,
            snapshots,
            notices,
        };
        (session, intent_tx)
    }

    /// Starts the loop on the current runtime.
    pub fn spawn(store: ReminderStore) -> SessionHandle {
        let (session, intents) = Self::new(store);
        let snapshots = session.snapshots.subscribe();
        let notices = session.notices.clone();
        let task = tokio::spawn(session.run());
        SessionHandle {
            intents,
            snapshots,
            notices,
            task,
        }
    }

    /// Runs until every intent sender is dropped and returns the final state.
    pub async fn run(mut self) -> ScreenSnapshot {
        info!(reminders = self.store.len(), "reminder session started");
        loop {
            tokio::select! {
                intent = self.intents.recv() => {
                    let Some(intent) = intent else {
                        break;
                    };
                    self.handle_intent(intent);
                }
                generation = self.ticker.next_expiry() => {
                    if let Some(title) = self.ticker.expire(generation) {
                        self.publish();
                        self.notify(SessionNotice::TickerExpired { title });
                    }
                }
            }
        }
        info!(reminders = self.store.len(), "reminder session stopped");
        self.snapshot()
    }

    pub fn apply(&mut self, intent: Intent) -> Result<(), ReminderError> {
        match intent {
            Intent::RequestAdd { title } => {
                let item = self.store.add(title)?;
                self.notify(SessionNotice::ReminderAdded { item });
            }
            Intent::RequestToggle { id } => {
                self.store.toggle(id)?;
            }
            Intent::RequestDelete { id } => {
                self.store.remove(id)?;
            }
            Intent::RequestDeleteAtOffsets { offsets } => {
                self.store.remove_at_offsets(&offsets)?;
            }
            Intent::RequestShowInTicker { id } => {
                let title = self
                    .store
                    .get(id)
                    .ok_or(ReminderError::NotFound { id })?
                    .title
                    .clone();
                self.ticker.show(title);
            }
        }
        Ok(())
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            reminders: self.store.snapshot(),
            ticker: self.ticker.snapshot(),
        }
    }

    pub fn store(&self) -> &ReminderStore {
        &self.store
    }

    pub fn ticker(&self) -> &TickerController {
        &self.ticker
    }

    fn handle_intent(&mut self, intent: Intent) {
        let name = intent.name();
        match self.apply(intent) {
            Ok(()) => self.publish(),
            Err(err) => {
                if matches!(err, ReminderError::NotFound { .. }) {
                    // Another action already removed the item; treat as a no-op.
                    debug!(intent = name, error = %err, "intent referenced a stale reminder");
                } else {
                    warn!(intent = name, error = %err, "intent rejected");
                }
                self.notify(SessionNotice::IntentRejected {
                    intent: name.to_string(),
                    rejection: IntentRejection::from(&err),
                });
            }
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }

    fn notify(&self, notice: SessionNotice) {
        // No subscribers is fine.
        let _ = self.notices.send(notice);
    }
}

/// Rendering-side handle to a spawned [`ReminderSession`].
pub struct SessionHandle {
    intents: mpsc::Sender<Intent>,
    snapshots: watch::Receiver<ScreenSnapshot>,
    notices: broadcast::Sender<SessionNotice>,
    task: JoinHandle<ScreenSnapshot>,
}

impl SessionHandle {
    pub async fn dispatch(&self, intent: Intent) -> Result<(), SessionError> {
        self.intents
            .send(intent)
            .await
            .map_err(|_| SessionError::Closed)
    }

    pub fn sender(&self) -> mpsc::Sender<Intent> {
        self.intents.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenSnapshot> {
        self.snapshots.clone()
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn notices(&self) -> broadcast::Receiver<SessionNotice> {
        self.notices.subscribe()
    }

    /// Closes this handle's intent queue and waits for the loop to finish.
    /// Senders obtained through [`SessionHandle::sender`] keep it alive.
    pub async fn shutdown(self) -> Result<ScreenSnapshot, SessionError> {
        let Self { intents, task, .. } = self;
        drop(intents);
        Ok(task.await?)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
