//! Client-side model of the game: identifiers, validated inputs, and the
//! per-refresh scoreboard data received from the service.

use std::fmt;

use crate::error::{ApiError, ClientError};

/// Opaque game identifier issued by the service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    /// Create a game ID from the raw body returned on game creation.
    ///
    /// Surrounding whitespace is dropped; a blank body is rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApiError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ApiError::EmptyGameId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Player name as typed by the user, trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(raw: &str) -> Result<Self, ClientError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ClientError::EmptyPlayerName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pins knocked down on one delivery, exactly as typed by the user.
///
/// Only presence is checked here. The service decides whether the value is
/// legal (a number from 0 to 15, not more than the pins left standing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinCount(String);

impl PinCount {
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ClientError::MissingPinCount);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One scoreboard row: a player and the total computed by the service
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerScore {
    pub name: String,
    pub score: i64,
    pub frames: Vec<Frame>,
}

/// One scoring unit of a player
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Pins knocked down on each delivery, in order
    pub throws: Vec<u32>,
    /// Pins still standing, displayed verbatim
    pub remaining_pins: i32,
    pub is_current_frame: bool,
}

/// The parts of the full game snapshot the client cares about
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSnapshot {
    pub current_player: Option<String>,
    pub game_complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_is_trimmed() {
        // テスト項目: ゲーム ID の前後の空白が除去される
        // given (前提条件):
        let raw = "  3f2a-11\n";

        // when (操作):
        let game_id = GameId::new(raw).unwrap();

        // then (期待する結果):
        assert_eq!(game_id.as_str(), "3f2a-11");
    }

    #[test]
    fn test_blank_game_id_is_rejected() {
        // テスト項目: 空のゲーム ID はエラーになる
        // given (前提条件):
        let raw = "   ";

        // when (操作):
        let result = GameId::new(raw);

        // then (期待する結果):
        assert!(matches!(result, Err(ApiError::EmptyGameId)));
    }

    #[test]
    fn test_player_name_is_trimmed() {
        // テスト項目: プレイヤー名の前後の空白が除去される
        // given (前提条件):
        let raw = "  Alice ";

        // when (操作):
        let name = PlayerName::new(raw).unwrap();

        // then (期待する結果):
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_whitespace_player_name_is_rejected() {
        // テスト項目: 空白のみのプレイヤー名はエラーになる
        // given (前提条件):
        let raw = " \t ";

        // when (操作):
        let result = PlayerName::new(raw);

        // then (期待する結果):
        assert!(matches!(result, Err(ClientError::EmptyPlayerName)));
    }

    #[test]
    fn test_pin_count_keeps_any_non_empty_input() {
        // テスト項目: 空でない入力はローカルで拒否せずそのまま保持される（サーバーが判定する）
        // given (前提条件):
        let inputs = ["0", " 15 ", "42", "-1", "7.5", "99999999999", "abc"];

        // when (操作):
        let values: Vec<String> = inputs
            .iter()
            .map(|input| PinCount::parse(input).unwrap().as_str().to_string())
            .collect();

        // then (期待する結果):
        assert_eq!(
            values,
            vec!["0", "15", "42", "-1", "7.5", "99999999999", "abc"]
        );
    }

    #[test]
    fn test_pin_count_missing() {
        // テスト項目: ピン数が未入力の場合はエラーになる
        // given (前提条件):
        let inputs = ["", "   "];

        // when (操作) / then (期待する結果):
        for raw in inputs {
            let result = PinCount::parse(raw);
            assert!(matches!(result, Err(ClientError::MissingPinCount)));
        }
    }
}
