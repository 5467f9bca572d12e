//! Error types for the scoreboard client.

use thiserror::Error;

/// Errors raised while talking to the remote game service
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot be used to build endpoint URLs
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("Server rejected {path} ({status}): {message}")]
    Rejected {
        path: String,
        status: u16,
        message: String,
    },

    /// The response body did not have the expected shape
    #[error("Malformed response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Game creation answered with a blank identifier
    #[error("Server returned an empty game ID")]
    EmptyGameId,
}

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The action needs a game and none was created yet
    #[error("Please create a game first")]
    NoGame,

    /// The player name is empty after trimming
    #[error("Please enter a player name")]
    EmptyPlayerName,

    /// No pin count was supplied
    #[error("Please enter number of pins")]
    MissingPinCount,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ClientError {
    /// `true` when the action was refused locally without any request being sent.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, ClientError::Api(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_errors_are_detected() {
        // テスト項目: 事前条件エラーはリクエスト前のエラーとして判定される
        // given (前提条件):
        let errors = [
            ClientError::NoGame,
            ClientError::EmptyPlayerName,
            ClientError::MissingPinCount,
        ];

        // when (操作) / then (期待する結果):
        for error in errors {
            assert!(error.is_precondition(), "{error} should be a precondition error");
        }
    }

    #[test]
    fn test_api_error_is_not_precondition() {
        // テスト項目: API エラーは事前条件エラーではない
        // given (前提条件):
        let error = ClientError::from(ApiError::Rejected {
            path: "/games/g1/start".to_string(),
            status: 400,
            message: "Need at least 2 players to start the game".to_string(),
        });

        // when (操作):
        let result = error.is_precondition();

        // then (期待する結果):
        assert!(!result);
        assert_eq!(
            error.to_string(),
            "Server rejected /games/g1/start (400): Need at least 2 players to start the game"
        );
    }
}
