//! Turning server data and session state into display content.
//!
//! - `classify`: strike / spare / open classification of a frame's throws
//! - `view`: display models for each role of the display surface
//! - `formatter`: plain-text rendering of the display models

pub mod classify;
pub mod formatter;
pub mod view;

pub use classify::{PINS_PER_FRAME, ThrowMark, classify_throws};
pub use formatter::ScoreboardFormatter;
pub use view::{
    FrameView, GameStatusView, PlayerEntry, PlayerListView, PlayerScoreView, ScoreboardView,
    build_scoreboard,
};
