//! Display models for the roles of the display surface.
//!
//! Everything here is a pure function of its input: the same payload always
//! yields the same view.

use crate::{
    domain::{Frame, PlayerScore},
    state::ClientState,
};

use super::classify::{ThrowMark, classify_throws};

/// Game-status indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatusView {
    pub active: bool,
    /// Game identifier, or `"None"` when no game exists
    pub game_id: String,
}

impl GameStatusView {
    pub fn from_state(state: &ClientState) -> Self {
        match state.game_id() {
            Some(game_id) => Self {
                active: true,
                game_id: game_id.to_string(),
            },
            None => Self {
                active: false,
                game_id: "None".to_string(),
            },
        }
    }
}

/// One entry of the player list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub is_current: bool,
}

/// Player-list container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerListView {
    pub entries: Vec<PlayerEntry>,
}

impl PlayerListView {
    pub fn from_state(state: &ClientState) -> Self {
        let current = state.current_player();
        let entries = state
            .players()
            .iter()
            .map(|name| PlayerEntry {
                name: name.to_string(),
                is_current: current == Some(name),
            })
            .collect();
        Self { entries }
    }
}

/// One frame box on the scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    /// 1-based frame number
    pub number: usize,
    pub marks: Vec<ThrowMark>,
    pub remaining_pins: i32,
    pub is_current: bool,
}

/// One player's row on the scoreboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScoreView {
    pub name: String,
    pub score: i64,
    pub frames: Vec<FrameView>,
}

/// Scoreboard container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardView {
    /// Nothing to show yet
    NoScores,
    Standings {
        rows: Vec<PlayerScoreView>,
        /// The service reported that every player finished
        game_over: bool,
    },
}

fn build_frame(index: usize, frame: &Frame) -> FrameView {
    FrameView {
        number: index + 1,
        marks: classify_throws(&frame.throws),
        remaining_pins: frame.remaining_pins,
        is_current: frame.is_current_frame,
    }
}

fn build_row(score: &PlayerScore) -> PlayerScoreView {
    PlayerScoreView {
        name: score.name.clone(),
        score: score.score,
        frames: score
            .frames
            .iter()
            .enumerate()
            .map(|(index, frame)| build_frame(index, frame))
            .collect(),
    }
}

/// Build the scoreboard view from the service's scoreboard payload.
///
/// Row and frame order is kept exactly as received.
pub fn build_scoreboard(scores: &[PlayerScore], game_complete: bool) -> ScoreboardView {
    if scores.is_empty() {
        return ScoreboardView::NoScores;
    }

    ScoreboardView::Standings {
        rows: scores
            .iter()
            .map(build_row)
            .collect(),
        game_over: game_complete,
    }
}
