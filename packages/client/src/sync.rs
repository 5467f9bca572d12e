//! Refresh cycle: fetch scoreboard and game snapshot together.
//!
//! Refreshes may overlap. Each one carries a ticket; only the result of the
//! most recently issued ticket for the current game may be applied.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use futures_util::future::try_join;

use crate::{
    api::GameApi,
    domain::{GameId, GameSnapshot, PlayerScore},
    error::ApiError,
};

/// What happened to a refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No game exists, nothing was requested
    Skipped,
    /// Both requests succeeded and the display was updated
    Applied,
    /// Both requests succeeded but a newer refresh (or a new game) took over
    Superseded,
    /// At least one request failed; nothing was changed
    Failed,
}

/// Identifies one refresh cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    pub game_id: GameId,
    pub generation: u64,
}

/// Both halves of a refresh, available only together
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub scoreboard: Vec<PlayerScore>,
    pub game: GameSnapshot,
}

pub struct Synchronizer {
    api: Arc<dyn GameApi>,
    latest: AtomicU64,
}

impl Synchronizer {
    pub fn new(api: Arc<dyn GameApi>) -> Self {
        Self {
            api,
            latest: AtomicU64::new(0),
        }
    }

    /// Issue a ticket newer than every ticket issued before
    pub fn issue_ticket(&self, game_id: GameId) -> RefreshTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RefreshTicket {
            game_id,
            generation,
        }
    }

    /// Make every outstanding ticket stale
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    /// `true` if no ticket was issued (or invalidation happened) after this one
    pub fn is_latest(&self, ticket: &RefreshTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.generation
    }

    /// Issue both requests at once and wait for both.
    ///
    /// Fails as a whole when either request fails.
    pub async fn fetch(&self, ticket: &RefreshTicket) -> Result<Snapshot, ApiError> {
        tracing::debug!(
            "Refreshing game {} (generation {})",
            ticket.game_id,
            ticket.generation
        );

        let (scoreboard, game) = try_join(
            self.api.scoreboard(&ticket.game_id),
            self.api.game(&ticket.game_id),
        )
        .await?;

        Ok(Snapshot { scoreboard, game })
    }
}
