//! Session state of the client: which game, who joined, whose turn it is.

use crate::domain::{GameId, PlayerName};

/// Players in join order, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Append a name unless it is already present.
    ///
    /// Returns `true` if the roster changed.
    pub fn insert(&mut self, name: PlayerName) -> bool {
        if self.contains(name.as_str()) {
            return false;
        }
        self.names.push(name.into_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// What the client knows about the game it is interacting with.
///
/// `game_id` and the roster change only after confirmed user actions.
/// `current_player` is written only by a successful refresh.
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    game_id: Option<GameId>,
    players: Roster,
    current_player: Option<String>,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_id(&self) -> Option<&GameId> {
        self.game_id.as_ref()
    }

    pub fn players(&self) -> &Roster {
        &self.players
    }

    pub fn current_player(&self) -> Option<&str> {
        self.current_player.as_deref()
    }

    /// Switch to a freshly created game, forgetting everything about the previous one
    pub fn replace_game(&mut self, game_id: GameId) {
        self.game_id = Some(game_id);
        self.players = Roster::default();
        self.current_player = None;
    }

    /// Record a player the service accepted
    pub fn add_player(&mut self, name: PlayerName) -> bool {
        self.players.insert(name)
    }

    /// Overwrite the acting player with what the latest game snapshot reports
    pub fn set_current_player(&mut self, name: Option<String>) {
        self.current_player = name;
    }
}
