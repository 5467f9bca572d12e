//! Plain-text rendering of the display models for the terminal.

use super::view::{FrameView, GameStatusView, PlayerListView, PlayerScoreView, ScoreboardView};

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

/// Scoreboard formatter for terminal display
pub struct ScoreboardFormatter;

impl ScoreboardFormatter {
    /// Format the game-status indicator
    ///
    /// # Returns
    ///
    /// A single line such as `Game: 3f2a (active)` or `Game: None (inactive)`
    pub fn format_game_status(view: &GameStatusView) -> String {
        let status = if view.active { "active" } else { "inactive" };
        format!("Game: {} ({})\n", view.game_id, status)
    }

    /// Format the player list, marking the player whose turn it is
    pub fn format_player_list(view: &PlayerListView) -> String {
        let mut output = String::from("Players:\n");

        if view.entries.is_empty() {
            output.push_str("(No players)\n");
        } else {
            for entry in &view.entries {
                let badge = if entry.is_current { " [Current]" } else { "" };
                output.push_str(&format!("  {}{}\n", entry.name, badge));
            }
        }

        output
    }

    /// Format a single frame line.
    ///
    /// The current frame is prefixed with `>` and suffixed with `(current)`.
    pub fn format_frame(frame: &FrameView) -> String {
        let marker = if frame.is_current { ">" } else { " " };
        let throws = frame
            .marks
            .iter()
            .map(|mark| mark.symbol())
            .collect::<Vec<_>>()
            .join(" ");
        let current = if frame.is_current { " (current)" } else { "" };
        format!(
            "{} Frame {:<2} | {:<9} | Remaining pins: {}{}\n",
            marker, frame.number, throws, frame.remaining_pins, current
        )
    }

    fn format_row(row: &PlayerScoreView) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", row.name));
        for frame in &row.frames {
            output.push_str(&Self::format_frame(frame));
        }
        output.push_str(&format!("  Total Score: {}\n", row.score));
        output
    }

    /// Format the whole scoreboard
    pub fn format_scoreboard(view: &ScoreboardView) -> String {
        let (rows, game_over) = match view {
            ScoreboardView::NoScores => return "No scores available\n".to_string(),
            ScoreboardView::Standings { rows, game_over } => (rows, *game_over),
        };

        let mut output = String::new();
        output.push_str(RULE);
        output.push_str("\nCurrent Standings\n");
        output.push_str(RULE);
        output.push('\n');

        for (index, row) in rows.iter().enumerate() {
            if index > 0 {
                output.push_str(THIN_RULE);
                output.push('\n');
            }
            output.push_str(&Self::format_row(row));
        }

        if game_over {
            output.push_str(RULE);
            output.push_str("\nGame Over! Final Scores:\n");
            for (index, row) in rows.iter().enumerate() {
                output.push_str(&format!("{}. {}: {} points\n", index + 1, row.name, row.score));
            }
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format a blocking notice
    pub fn format_alert(message: &str) -> String {
        format!("\n! {}\n", message)
    }
}
