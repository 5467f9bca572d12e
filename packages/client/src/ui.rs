//! UI utilities for the terminal client.

use std::io::Write;

pub const PROMPT: &str = "bowling> ";

/// Redisplay the prompt after printing output
pub fn redisplay_prompt() {
    print!("{}", PROMPT);
    std::io::stdout().flush().ok();
}
