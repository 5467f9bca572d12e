//! Wire format of the game service and its conversion into the client model.

use serde::Deserialize;

use crate::domain::{Frame, GameSnapshot, PlayerScore};

/// Error body sent with 4xx/5xx responses when the service answers in JSON
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct PlayerScoreDto {
    pub name: String,
    pub score: i64,
    pub player: PlayerDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerDto {
    #[serde(default)]
    pub frames: Vec<FrameDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDto {
    #[serde(default)]
    pub throws: Vec<u32>,
    pub remaining_pins: i32,
    #[serde(default)]
    pub is_current_frame: bool,
}

#[derive(Debug, Deserialize)]
pub struct PlayerRefDto {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    #[serde(default)]
    pub current_player: Option<PlayerRefDto>,
    #[serde(default)]
    pub game_complete: bool,
}

/// Extract a human readable message from an error response body.
///
/// The service answers either with the bare message or with `{"error": ...}`.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

// ========================================
// DTO → Client model
// ========================================

impl From<FrameDto> for Frame {
    fn from(dto: FrameDto) -> Self {
        Self {
            throws: dto.throws,
            remaining_pins: dto.remaining_pins,
            is_current_frame: dto.is_current_frame,
        }
    }
}

impl From<PlayerScoreDto> for PlayerScore {
    fn from(dto: PlayerScoreDto) -> Self {
        Self {
            name: dto.name,
            score: dto.score,
            frames: dto.player.frames.into_iter().map(Frame::from).collect(),
        }
    }
}

impl From<GameDto> for GameSnapshot {
    fn from(dto: GameDto) -> Self {
        Self {
            current_player: dto.current_player.map(|player| player.name),
            game_complete: dto.game_complete,
        }
    }
}
