//! Access to the remote game service.
//!
//! The rest of the client depends on the [`GameApi`] trait only; the HTTP
//! implementation lives in [`http`].

pub mod dto;
pub mod http;

use async_trait::async_trait;

use crate::{
    domain::{GameId, GameSnapshot, PinCount, PlayerName, PlayerScore},
    error::ApiError,
};

pub use http::HttpGameApi;

/// One method per endpoint of the game service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameApi: Send + Sync {
    /// `POST /games`
    async fn create_game(&self) -> Result<GameId, ApiError>;

    /// `POST /games/{gameId}/players?playerName=<name>`
    async fn add_player(&self, game_id: &GameId, name: &PlayerName) -> Result<(), ApiError>;

    /// `POST /games/{gameId}/start`
    async fn start_game(&self, game_id: &GameId) -> Result<(), ApiError>;

    /// `POST /games/{gameId}/throw?pins=<n>`
    async fn make_throw(&self, game_id: &GameId, pins: &PinCount) -> Result<(), ApiError>;

    /// `GET /games/{gameId}/scoreboard`
    async fn scoreboard(&self, game_id: &GameId) -> Result<Vec<PlayerScore>, ApiError>;

    /// `GET /games/{gameId}`
    async fn game(&self, game_id: &GameId) -> Result<GameSnapshot, ApiError>;
}
