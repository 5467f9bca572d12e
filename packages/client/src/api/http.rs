//! HTTP implementation of [`GameApi`] on top of `reqwest`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};

use crate::{
    config::ClientConfig,
    domain::{GameId, GameSnapshot, PinCount, PlayerName, PlayerScore},
    error::ApiError,
};

use super::{
    GameApi,
    dto::{GameDto, PlayerScoreDto, error_message},
};

/// Game service client speaking HTTP
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    http: Client,
    base_url: Url,
}

impl HttpGameApi {
    /// Create a new HttpGameApi from the client configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                path: config.base_url.to_string(),
                source,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Build the URL of an endpoint below the base URL.
    ///
    /// Each segment is percent-encoded, so game IDs cannot escape their slot.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and turn non-success statuses into [`ApiError::Rejected`]
    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        tracing::debug!("Sending request to {}", path);

        let response = request.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                path: path.to_string(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn create_game(&self) -> Result<GameId, ApiError> {
        let url = self.endpoint(&["games"])?;
        let path = url.path().to_string();

        let response = self.send(self.http.post(url), &path).await?;
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Decode { path, source })?;

        GameId::new(body)
    }

    async fn add_player(&self, game_id: &GameId, name: &PlayerName) -> Result<(), ApiError> {
        let url = self.endpoint(&["games", game_id.as_str(), "players"])?;
        let path = url.path().to_string();

        let request = self
            .http
            .post(url)
            .query(&[("playerName", name.as_str())]);
        self.send(request, &path).await?;
        Ok(())
    }

    async fn start_game(&self, game_id: &GameId) -> Result<(), ApiError> {
        let url = self.endpoint(&["games", game_id.as_str(), "start"])?;
        let path = url.path().to_string();

        self.send(self.http.post(url), &path).await?;
        Ok(())
    }

    async fn make_throw(&self, game_id: &GameId, pins: &PinCount) -> Result<(), ApiError> {
        let url = self.endpoint(&["games", game_id.as_str(), "throw"])?;
        let path = url.path().to_string();

        let request = self.http.post(url).query(&[("pins", pins.as_str())]);
        self.send(request, &path).await?;
        Ok(())
    }

    async fn scoreboard(&self, game_id: &GameId) -> Result<Vec<PlayerScore>, ApiError> {
        let url = self.endpoint(&["games", game_id.as_str(), "scoreboard"])?;
        let path = url.path().to_string();

        let response = self.send(self.http.get(url), &path).await?;
        // A `null` body is treated as an empty scoreboard
        let rows: Option<Vec<PlayerScoreDto>> = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { path, source })?;

        Ok(rows
            .unwrap_or_default()
            .into_iter()
            .map(PlayerScore::from)
            .collect())
    }

    async fn game(&self, game_id: &GameId) -> Result<GameSnapshot, ApiError> {
        let url = self.endpoint(&["games", game_id.as_str()])?;
        let path = url.path().to_string();

        let response = self.send(self.http.get(url), &path).await?;
        let game: GameDto = response
            .json()
            .await
            .map_err(|source| ApiError::Decode { path, source })?;

        Ok(game.into())
    }
}
