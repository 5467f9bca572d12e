//! User actions against the game service and the session state they update.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    api::GameApi,
    domain::{GameId, PinCount, PlayerName},
    error::ClientError,
    render::{GameStatusView, PlayerListView, build_scoreboard},
    state::ClientState,
    surface::{InputField, Surface},
    sync::{RefreshOutcome, Synchronizer},
};

/// Scoreboard client for a single browser-like session.
///
/// All methods take `&self` so a shared client can run overlapping actions.
/// The state lock is never held while a request is in flight.
pub struct GameClient {
    api: Arc<dyn GameApi>,
    surface: Arc<dyn Surface>,
    state: Mutex<ClientState>,
    sync: Synchronizer,
}

impl GameClient {
    /// Create a new GameClient with an empty session
    pub fn new(api: Arc<dyn GameApi>, surface: Arc<dyn Surface>) -> Self {
        Self {
            sync: Synchronizer::new(api.clone()),
            api,
            surface,
            state: Mutex::new(ClientState::new()),
        }
    }

    /// Copy of the current session state
    pub async fn state(&self) -> ClientState {
        self.state.lock().await.clone()
    }

    /// Show the game-status indicator and the player list as they are now
    pub async fn show_status(&self) {
        let (status, players) = {
            let state = self.state.lock().await;
            (
                GameStatusView::from_state(&state),
                PlayerListView::from_state(&state),
            )
        };
        self.surface.show_game_status(&status);
        self.surface.show_player_list(&players);
    }

    /// Report a refused or failed action to the user and hand the error back.
    ///
    /// Refusals carry their own message; failed requests are prefixed with
    /// the action that was attempted.
    fn report<T>(&self, action: &str, error: ClientError) -> Result<T, ClientError> {
        let message = if error.is_precondition() {
            error.to_string()
        } else {
            format!("Error {}: {}", action, error)
        };
        tracing::warn!("{}", message);
        self.surface.alert(&message);
        Err(error)
    }

    async fn require_game(&self) -> Result<GameId, ClientError> {
        match self.state.lock().await.game_id() {
            Some(game_id) => Ok(game_id.clone()),
            None => Err(ClientError::NoGame),
        }
    }

    /// Create a game on the service and make it the session's game.
    ///
    /// On success the roster and the current player are reset. On failure
    /// the session is left untouched.
    pub async fn start_new_game(&self) -> Result<GameId, ClientError> {
        let game_id = match self.api.create_game().await {
            Ok(game_id) => game_id,
            Err(e) => return self.report("creating game", e.into()),
        };

        // Refreshes still in flight belong to the previous game
        self.sync.invalidate();
        self.state.lock().await.replace_game(game_id.clone());
        tracing::info!("Game {} created", game_id);

        self.show_status().await;
        Ok(game_id)
    }

    /// Register a player with the current game.
    ///
    /// The name is shown in the roster as soon as the service accepts it,
    /// without waiting for a refresh.
    pub async fn register_player(&self, raw_name: &str) -> Result<(), ClientError> {
        let name = match PlayerName::new(raw_name) {
            Ok(name) => name,
            Err(e) => return self.report("adding player", e),
        };
        let game_id = match self.require_game().await {
            Ok(game_id) => game_id,
            Err(e) => return self.report("adding player", e),
        };

        if let Err(e) = self.api.add_player(&game_id, &name).await {
            return self.report("adding player", e.into());
        }

        let players = {
            let mut state = self.state.lock().await;
            // The game may have been replaced while the request was in flight
            if state.game_id() == Some(&game_id) && !state.add_player(name.clone()) {
                tracing::debug!("Player '{}' already listed", name);
            }
            PlayerListView::from_state(&state)
        };
        tracing::info!("Player '{}' joined game {}", name, game_id);

        self.surface.clear_input(InputField::PlayerName);
        self.surface.show_player_list(&players);
        Ok(())
    }

    /// Ask the service to start the game, then refresh.
    ///
    /// Who plays first is learned from the refresh, not decided here.
    pub async fn begin_play(&self) -> Result<(), ClientError> {
        let game_id = match self.require_game().await {
            Ok(game_id) => game_id,
            Err(e) => return self.report("starting game", e),
        };

        if let Err(e) = self.api.start_game(&game_id).await {
            return self.report("starting game", e.into());
        }
        tracing::info!("Game {} started", game_id);

        self.refresh().await;
        Ok(())
    }

    /// Send one delivery to the service, then refresh.
    ///
    /// `raw_pins` is the pin count as typed. Anything non-empty is sent as is.
    pub async fn record_throw(&self, raw_pins: &str) -> Result<(), ClientError> {
        let game_id = match self.require_game().await {
            Ok(game_id) => game_id,
            Err(e) => return self.report("making throw", e),
        };
        let pins = match PinCount::parse(raw_pins) {
            Ok(pins) => pins,
            Err(e) => return self.report("making throw", e),
        };

        if let Err(e) = self.api.make_throw(&game_id, &pins).await {
            return self.report("making throw", e.into());
        }
        tracing::info!("Throw of {} recorded for game {}", pins, game_id);

        self.surface.clear_input(InputField::PinCount);
        self.refresh().await;
        Ok(())
    }

    /// Resynchronize the current player and the scoreboard with the service.
    ///
    /// Failures are logged only; a refresh never raises an alert.
    pub async fn refresh(&self) -> RefreshOutcome {
        let ticket = {
            let state = self.state.lock().await;
            match state.game_id() {
                Some(game_id) => self.sync.issue_ticket(game_id.clone()),
                None => return RefreshOutcome::Skipped,
            }
        };

        let snapshot = match self.sync.fetch(&ticket).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!("Error refreshing scoreboard: {}", e);
                return RefreshOutcome::Failed;
            }
        };

        let players = {
            let mut state = self.state.lock().await;
            if !self.sync.is_latest(&ticket) || state.game_id() != Some(&ticket.game_id) {
                tracing::debug!(
                    "Discarding refresh generation {} for game {}",
                    ticket.generation,
                    ticket.game_id
                );
                return RefreshOutcome::Superseded;
            }
            state.set_current_player(snapshot.game.current_player.clone());
            PlayerListView::from_state(&state)
        };

        let scoreboard = build_scoreboard(&snapshot.scoreboard, snapshot.game.game_complete);
        self.surface.show_scoreboard(&scoreboard);
        self.surface.show_player_list(&players);
        RefreshOutcome::Applied
    }
}
