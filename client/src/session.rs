#[cfg(test)]
mod tests;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::anyhow;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, trace, warn};

use arena_battle::{
    ArenaEvent, BattleState, CreatureDetail, CreatureSummary, PlayerSlot, ResolutionTicket,
    SelectionTicket, Verdict,
};

use crate::config::SessionConfig;
use crate::errors::{ArenaError, Result};
use crate::provider::RosterProvider;
use crate::receiver::EventReceiver;

/// Result of a selection request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The slot now holds the fetched creature
    Filled(PlayerSlot),

    /// The slot was occupied or already pending, or no slot was free
    Declined,

    /// A reset landed while the fetch was in flight; nothing changed
    Cancelled,
}

/// A battle that is resolving
///
/// Dropping it does not stop the resolution.
pub struct Resolution {
    task: JoinHandle<Option<Verdict>>,
}

impl Resolution {
    /// Wait for the dwell to end
    ///
    /// Returns `None` if a reset cancelled the battle first.
    pub async fn verdict(self) -> Option<Verdict> {
        match self.task.await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(error = %e, "Resolution task failed");
                None
            }
        }
    }
}

struct Inner {
    state: Mutex<BattleState>,
    provider: Arc<dyn RosterProvider>,
    config: SessionConfig,
    events: mpsc::UnboundedSender<ArenaEvent>,
    /// Bumped on every reset; in-flight fetches and dwells watch it
    resets: watch::Sender<u64>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, BattleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Emit while the caller holds the state lock, so event order matches
    /// state order
    fn emit(&self, event: ArenaEvent) {
        if self.events.send(event).is_err() {
            trace!("No event receiver, dropping event");
        }
    }

    fn finish_resolution(&self, ticket: ResolutionTicket) -> Option<Verdict> {
        let mut state = self.lock();
        match state.complete_resolution(ticket) {
            Some(verdict) => {
                self.emit(ArenaEvent::VerdictPublished(verdict));
                info!(verdict = ?verdict, "Verdict published");
                Some(verdict)
            }
            None => {
                trace!("Discarding stale resolution");
                None
            }
        }
    }
}

/// A slot held pending by an in-flight fetch
///
/// If the fetch future is dropped before it settles, the slot goes back to
/// empty so it can be selected again.
struct PendingSelection {
    inner: Arc<Inner>,
    ticket: SelectionTicket,
    settled: bool,
}

impl PendingSelection {
    /// Fill the slot; `None` if the ticket went stale
    fn complete(mut self, creature: CreatureDetail) -> Option<PlayerSlot> {
        self.settled = true;
        let mut state = self.inner.lock();
        let event = state.complete_selection(self.ticket, creature)?;
        self.inner.emit(event);
        Some(self.ticket.slot)
    }

    /// Empty the slot after a failed fetch; false if the ticket went stale
    fn abandon(mut self) -> bool {
        self.settled = true;
        self.inner.lock().abandon_selection(self.ticket)
    }
}

impl Drop for PendingSelection {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if self.inner.lock().abandon_selection(self.ticket) {
            debug!(slot = %self.ticket.slot, "Fetch dropped, slot released");
        }
    }
}

/// Cloneable handle to one arena session.
///
/// All state changes go through a single lock, so intents issued from
/// several tasks are applied one at a time.
#[derive(Clone)]
pub struct ArenaSession {
    inner: Arc<Inner>,
}

impl ArenaSession {
    /// Start a session over a provider
    ///
    /// The returned receiver yields every [`ArenaEvent`] of the session.
    pub fn new<P>(provider: P, config: SessionConfig) -> (Self, EventReceiver)
    where
        P: RosterProvider + 'static,
    {
        Self::with_shared_provider(Arc::new(provider), config)
    }

    pub fn with_shared_provider(
        provider: Arc<dyn RosterProvider>,
        config: SessionConfig,
    ) -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (resets, _) = watch::channel(0);

        let session = Self {
            inner: Arc::new(Inner {
                state: Mutex::new(BattleState::new()),
                provider,
                config,
                events: tx,
                resets,
            }),
        };

        (session, EventReceiver::new(rx))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> BattleState {
        self.inner.lock().clone()
    }

    /// Slot an untargeted selection would go to
    pub fn next_empty_slot(&self) -> Option<PlayerSlot> {
        self.inner.lock().next_empty_slot()
    }

    /// Fetch the selectable roster
    pub async fn list_roster(&self) -> Result<Vec<CreatureSummary>> {
        let timeout = self.inner.config.fetch_timeout;

        match tokio::time::timeout(timeout, self.inner.provider.list_roster()).await {
            Ok(Ok(roster)) => {
                info!(count = roster.len(), "Roster loaded");
                Ok(roster)
            }
            Ok(Err(source)) => {
                warn!(error = %source, "Roster fetch failed");
                Err(ArenaError::RosterFetchFailed { source })
            }
            Err(_) => {
                warn!(timeout = ?timeout, "Roster fetch timed out");
                Err(ArenaError::RosterFetchFailed {
                    source: anyhow!("timed out after {:?}", timeout),
                })
            }
        }
    }

    /// Fetch a creature into a specific slot
    ///
    /// The slot is pending for the duration of the fetch; a second request
    /// for it is declined. On failure the slot is empty again and the error
    /// is returned. A reset during the fetch cancels it, and so does
    /// dropping the returned future.
    pub async fn select_creature(&self, slot: PlayerSlot, id: &str) -> Result<Selection> {
        let (pending, mut resets) = {
            let mut state = self.inner.lock();
            match state.begin_selection(slot) {
                Ok(ticket) => {
                    let pending = PendingSelection {
                        inner: Arc::clone(&self.inner),
                        ticket,
                        settled: false,
                    };
                    (pending, self.inner.resets.subscribe())
                }
                Err(reason) => {
                    debug!(slot = %slot, creature = %id, reason = %reason, "Selection declined");
                    return Ok(Selection::Declined);
                }
            }
        };

        info!(slot = %slot, creature = %id, "Fetching creature");

        let timeout = self.inner.config.fetch_timeout;
        let fetch = tokio::time::timeout(timeout, self.inner.provider.fetch_detail(id));

        let fetched = tokio::select! {
            result = fetch => result,
            _ = resets.changed() => {
                debug!(slot = %slot, creature = %id, "Fetch cancelled by reset");
                return Ok(Selection::Cancelled);
            }
        };

        let source = match fetched {
            Ok(Ok(creature)) => {
                return match pending.complete(creature) {
                    Some(slot) => {
                        info!(slot = %slot, creature = %id, "Slot filled");
                        Ok(Selection::Filled(slot))
                    }
                    None => {
                        trace!(slot = %slot, creature = %id, "Discarding stale fetch");
                        Ok(Selection::Cancelled)
                    }
                };
            }
            Ok(Err(source)) => source,
            Err(_) => anyhow!("timed out after {:?}", timeout),
        };

        if !pending.abandon() {
            trace!(slot = %slot, creature = %id, "Fetch failed after reset");
            return Ok(Selection::Cancelled);
        }

        warn!(slot = %slot, creature = %id, error = %source, "Fetch failed");
        Err(ArenaError::DetailFetchFailed {
            id: id.to_string(),
            source,
        })
    }

    /// Fetch a creature into the first empty slot
    ///
    /// Declined when neither slot is empty.
    pub async fn choose(&self, id: &str) -> Result<Selection> {
        match self.next_empty_slot() {
            Some(slot) => self.select_creature(slot, id).await,
            None => {
                debug!(creature = %id, "No empty slot");
                Ok(Selection::Declined)
            }
        }
    }

    /// Start a battle
    ///
    /// Returns `None` without touching the state unless both slots are
    /// occupied and no battle is resolving. The verdict is published after
    /// the configured dwell. Must be called within a Tokio runtime.
    pub fn battle(&self) -> Option<Resolution> {
        let (ticket, mut resets) = {
            let mut state = self.inner.lock();
            match state.begin_resolution() {
                Ok(ticket) => {
                    self.inner.emit(ArenaEvent::ResolutionStarted);
                    (ticket, self.inner.resets.subscribe())
                }
                Err(reason) => {
                    debug!(reason = %reason, "Battle declined");
                    return None;
                }
            }
        };

        let delay = self.inner.config.resolution_delay;
        info!(delay = ?delay, "Resolution started");

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => inner.finish_resolution(ticket),
                _ = resets.changed() => {
                    debug!("Resolution cancelled by reset");
                    None
                }
            }
        });

        Some(Resolution { task })
    }

    /// Clear both slots and the verdict, cancelling in-flight fetches and
    /// any resolving battle
    pub fn reset(&self) {
        let mut state = self.inner.lock();
        let events = state.reset();
        self.inner.resets.send_modify(|generation| *generation += 1);
        for event in events {
            self.inner.emit(event);
        }
        info!("Arena reset");
    }
}
