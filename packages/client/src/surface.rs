//! Display surface abstraction.
//!
//! The client never paints anything itself: it hands display models to a
//! [`Surface`], one method per display role.

use crate::render::{GameStatusView, PlayerListView, ScoreboardFormatter, ScoreboardView};

use super::ui::redisplay_prompt;

/// Input fields the client may reset after a successful action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    PlayerName,
    PinCount,
}

/// Where display content ends up
pub trait Surface: Send + Sync {
    fn show_game_status(&self, view: &GameStatusView);

    fn show_player_list(&self, view: &PlayerListView);

    fn show_scoreboard(&self, view: &ScoreboardView);

    fn clear_input(&self, field: InputField);

    /// Blocking notice for the user (precondition and action failures)
    fn alert(&self, message: &str);
}

/// Surface printing to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSurface;

impl Surface for TerminalSurface {
    fn show_game_status(&self, view: &GameStatusView) {
        print!("\n{}", ScoreboardFormatter::format_game_status(view));
        redisplay_prompt();
    }

    fn show_player_list(&self, view: &PlayerListView) {
        print!("\n{}", ScoreboardFormatter::format_player_list(view));
        redisplay_prompt();
    }

    fn show_scoreboard(&self, view: &ScoreboardView) {
        print!("\n{}", ScoreboardFormatter::format_scoreboard(view));
        redisplay_prompt();
    }

    fn clear_input(&self, field: InputField) {
        // Inputs are command arguments; nothing stays behind to clear
        tracing::debug!("Input {:?} consumed", field);
    }

    fn alert(&self, message: &str) {
        print!("{}", ScoreboardFormatter::format_alert(message));
        redisplay_prompt();
    }
}
