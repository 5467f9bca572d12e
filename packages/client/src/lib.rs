//! Terminal scoreboard client for the Ancient Bowling game service.
//!
//! The remote service is authoritative for every score. This library keeps a
//! small session state in sync with it, classifies the throws of each frame
//! (strike, spare, open) for display, and forwards user actions.

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod runner;
pub mod state;
pub mod surface;
pub mod sync;

mod ui;

pub use client::GameClient;
pub use config::ClientConfig;
pub use error::{ApiError, ClientError};
pub use sync::RefreshOutcome;
